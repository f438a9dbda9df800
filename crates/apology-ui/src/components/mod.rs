//! Reusable card components
//!
//! - Buttons in the card's variants
//! - The white rounded card frame
//! - Character illustrations
//! - The evasive "no" button and the floating particle background

mod button;
mod character_image;
mod evasive_button;
mod fancy_card;
mod floating_particles;

pub use button::*;
pub use character_image::*;
pub use evasive_button::*;
pub use fancy_card::*;
pub use floating_particles::*;
