//! Geteilte Typen für layer-übergreifende Verträge.

pub mod board_scene;
pub mod options;

pub use board_scene::{BoardScene, PointClass};
pub use options::{GameOptions, GRID_SIZE_DEFAULT, GRID_SIZE_MAX, GRID_SIZE_MIN};
