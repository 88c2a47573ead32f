//! Reusable UI components.

mod alert;
mod button;
mod card;
mod choice_pills;
mod input;
mod progress;
mod prompt;

pub use alert::*;
pub use button::*;
pub use card::*;
pub use choice_pills::*;
pub use input::*;
pub use progress::*;
pub use prompt::*;
