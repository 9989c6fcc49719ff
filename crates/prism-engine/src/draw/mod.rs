//! Overlay draw stream.
//!
//! Widgets record [`DrawCmd`]s into a [`DrawList`]; the `render::shapes`
//! renderers replay them back-to-front. Ordering is by [`ZIndex`], then by
//! insertion.

mod cmd;
mod list;

pub use cmd::{Border, CircleCmd, DrawCmd, RectCmd, SortKey, TextCmd, ZIndex};
pub use list::{DrawItem, DrawList};
