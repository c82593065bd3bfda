pub mod help_modal;
pub mod number_input;
pub mod toast;

pub use help_modal::HelpModal;
pub use number_input::{EditTarget, NumberInput};
pub use toast::{Toast, ToastManager, ToastType};
