//! The [`ViewModel`] trait for the MVVM architecture.

use crate::app::Message;

/// Trait containing methods for `ViewModel` modules in the MVVM architecture.
pub trait ViewModel {
    /// Applies `message` to the model. Returns a follow-up message for the
    /// application to route, if any.
    fn update(&mut self, message: Message) -> Option<Message>;
}
