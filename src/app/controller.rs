//! Game-Controller für zentrale Event-Verarbeitung.

use anyhow::Result;

use super::{GameCommand, GameIntent, GameState};

/// Orchestriert Eingaben der Interaktionsfläche auf den GameState.
#[derive(Debug, Default)]
pub struct GameController;

impl GameController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut GameState, intent: GameIntent) -> Result<()> {
        for command in map_intent_to_commands(state, intent) {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem GameState aus.
    pub fn handle_command(&mut self, state: &mut GameState, command: GameCommand) -> Result<()> {
        state.command_log.record(&command);

        match command {
            GameCommand::SelectPoint { point } => {
                let completed = state.select_point(point)?;
                if !completed.is_empty() {
                    log::info!(
                        "Kreis komplett! Zug {}, {} neue(r) Kreis(e)",
                        state.moves(),
                        completed.len()
                    );
                }
            }
            GameCommand::ToggleCheck { point } => {
                state.toggle_check(point)?;
            }
            GameCommand::Undo => {
                state.undo();
            }
            GameCommand::Reset { grid_size } => state.reset(grid_size)?,
            GameCommand::SetHintsEnabled { enabled } => state.set_hints_enabled(enabled),
            GameCommand::SetMarkMode { enabled } => state.set_mark_mode(enabled),
            GameCommand::SetDrawCircles { enabled } => state.set_draw_circles(enabled),
        }

        Ok(())
    }
}

/// Übersetzt einen `GameIntent` in ausführbare `GameCommand`s.
///
/// Die Check-Modus-Weiche lebt hier: ein Klick wird je nach Flag zur
/// Selektion oder zum Check-Umschalten — die State-Operationen selbst
/// sind modus-unabhängig.
pub fn map_intent_to_commands(state: &GameState, intent: GameIntent) -> Vec<GameCommand> {
    match intent {
        GameIntent::PointClicked { point } => {
            if state.mark_mode() {
                vec![GameCommand::ToggleCheck { point }]
            } else {
                vec![GameCommand::SelectPoint { point }]
            }
        }
        GameIntent::UndoRequested => vec![GameCommand::Undo],
        GameIntent::RestartRequested => vec![GameCommand::Reset { grid_size: None }],
        GameIntent::GridResizeRequested { size } => vec![GameCommand::Reset {
            grid_size: Some(size),
        }],
        GameIntent::HintsToggled => vec![GameCommand::SetHintsEnabled {
            enabled: !state.hints_enabled(),
        }],
        GameIntent::MarkModeToggled => vec![GameCommand::SetMarkMode {
            enabled: !state.mark_mode(),
        }],
        GameIntent::DrawCirclesToggled => vec![GameCommand::SetDrawCircles {
            enabled: !state.draw_circles(),
        }],
    }
}
