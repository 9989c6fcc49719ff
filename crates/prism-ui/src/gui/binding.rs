use std::cell::RefCell;
use std::rc::Rc;

/// Two-way accessor for a value owned elsewhere.
pub struct Binding<T> {
    get: Box<dyn Fn() -> T>,
    set: Box<dyn FnMut(T)>,
}

impl<T> Binding<T> {
    pub fn new(get: impl Fn() -> T + 'static, set: impl FnMut(T) + 'static) -> Self {
        Self { get: Box::new(get), set: Box::new(set) }
    }

    #[inline]
    pub fn get(&self) -> T {
        (self.get)()
    }

    #[inline]
    pub fn set(&mut self, value: T) {
        (self.set)(value)
    }
}

impl<T: Clone + 'static> Binding<T> {
    /// Binds directly to a shared cell.
    pub fn cell(cell: Rc<RefCell<T>>) -> Self {
        let reader = cell.clone();
        Self::new(move || reader.borrow().clone(), move |v| *cell.borrow_mut() = v)
    }
}
