//! Logger port — a sink for human readable lifecycle messages.

use std::rc::Rc;

/// Records a line of text somewhere.
///
/// Implementations must never fail observably: a destination that cannot be
/// written to drops the message.
pub trait Logger {
    fn log(&self, message: &str);
}

/// Logger handle shared between the inventory manager and the UI.
pub type SharedLogger = Rc<dyn Logger>;

impl<T: Logger + ?Sized> Logger for Rc<T> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

impl<T: Logger + ?Sized> Logger for Box<T> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

impl<T: Logger + ?Sized> Logger for &T {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}
