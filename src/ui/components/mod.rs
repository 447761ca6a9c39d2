//! Reusable UI components

mod button;
mod spinner;
mod toast;

pub use button::{render_button, BUTTON_HEIGHT};
pub use spinner::spinner_glyph;
pub use toast::render_toasts;
