//! Kyoen-Puzzle-Engine (共円).
//!
//! Der geometrisch-kombinatorische Kern des Kyoen-Spiels: Spieler
//! selektieren Punkte auf einem N×N-Gitter, die Engine erkennt jede
//! 4-Punkt-Teilmenge auf einem gemeinsamen Kreis, berechnet Hints und
//! macht Züge rückgängig. Rendering und Widget-Verdrahtung sind
//! Aufgabe des einbettenden Frontends, das die `BoardScene`-Snapshots
//! konsumiert.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    build_board_scene, CommandLog, GameCommand, GameController, GameIntent, GameState,
    MoveHistory, MoveRecord,
};
pub use core::{
    circumcircle, find_new_circles, hint_points, is_cocircular, Board, Circle, CircleDescriptor,
    GridPoint,
};
pub use shared::{BoardScene, GameOptions, PointClass, GRID_SIZE_DEFAULT, GRID_SIZE_MAX, GRID_SIZE_MIN};
