//! Core-Domänentypen: Gitterpunkte, Kreise, Board, Erkennung, Hints.

pub mod board;
pub mod circle;
pub mod detection;
pub mod geometry;
pub mod hints;
pub mod point;

pub use board::Board;
pub use circle::Circle;
pub use detection::find_new_circles;
pub use geometry::{
    circumcircle, is_cocircular, is_collinear, CircleDescriptor, COCIRCULAR_EPSILON,
};
pub use hints::hint_points;
pub use point::GridPoint;
