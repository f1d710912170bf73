//! UI Components

mod checkout_modal;
mod toaster;

pub use checkout_modal::CheckoutModal;
pub use toaster::{Toast, ToastNotifier, Toaster};
