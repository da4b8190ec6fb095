//! The components module contains all shared components for our app.

mod app;
mod binding;
mod drop_zone;
mod icons;
mod library_grid;
mod notices;
mod player;

pub use app::*;
pub use binding::*;
pub use drop_zone::*;
pub use icons::*;
pub use library_grid::*;
pub use notices::*;
pub use player::*;
