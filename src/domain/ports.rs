/// Blocking interaction with whoever is filling in the form.
pub trait UserPrompt {
    /// Shows a message the user has to acknowledge.
    fn notify(&mut self, message: &str);
    /// Asks a yes/no question. `true` means the user agreed.
    fn confirm(&mut self, message: &str) -> bool;
}

impl<P: UserPrompt + ?Sized> UserPrompt for &mut P {
    fn notify(&mut self, message: &str) {
        (**self).notify(message)
    }

    fn confirm(&mut self, message: &str) -> bool {
        (**self).confirm(message)
    }
}
