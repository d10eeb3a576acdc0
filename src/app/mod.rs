//! Application-Layer: Controller, State, Events und Historie.

pub mod board_scene;
pub mod command_log;
pub mod controller;
pub mod events;
pub mod history;
pub mod state;

pub use board_scene::build as build_board_scene;
pub use command_log::CommandLog;
pub use controller::{map_intent_to_commands, GameController};
pub use events::{GameCommand, GameIntent};
pub use history::{MoveHistory, MoveRecord};
pub use state::GameState;
