pub mod toast;

pub use toast::{ToastHost, ToastService};
