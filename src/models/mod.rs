//! Core data models for a King of the Hill game.

mod palette;
mod points;
mod roster;
mod transition;

pub use palette::*;
pub use points::*;
pub use roster::*;
pub use transition::*;
