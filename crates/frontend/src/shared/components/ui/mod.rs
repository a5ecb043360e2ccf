pub mod badge;
pub mod input;
pub mod select;
pub mod switch;
pub mod textarea;

pub use badge::{Badge, StatusBadge};
pub use input::{Input, MoneyInput};
pub use select::Select;
pub use switch::Switch;
pub use textarea::Textarea;
