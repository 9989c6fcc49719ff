//! Time subsystem.
//!
//! [`ElapsedClock`] gives monotonic seconds since creation. The application
//! owns it and reads it once per frame to drive animation.

mod elapsed;

pub use elapsed::ElapsedClock;
