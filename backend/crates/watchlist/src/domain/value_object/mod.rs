//! Value Object Module

pub mod email;
pub mod flash;
pub mod theme;

pub use email::Email;
pub use flash::{FlashLevel, FlashMessage};
pub use theme::Theme;
