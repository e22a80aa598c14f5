pub mod badge;
pub mod button;
pub mod checkbox;
pub mod input;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use checkbox::Checkbox;
pub use input::Input;
