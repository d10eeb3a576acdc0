//! Zentrale Konfiguration für die Kyoen-Engine.
//!
//! `GameOptions` enthält die beim Start wählbaren Werte.
//! Die `const`-Grenzen gelten zusätzlich für jede spätere Größenänderung.

use serde::{Deserialize, Serialize};

// ── Gitter ──────────────────────────────────────────────────────────

/// Minimale Gitter-Kantenlänge.
pub const GRID_SIZE_MIN: u32 = 5;
/// Maximale Gitter-Kantenlänge.
pub const GRID_SIZE_MAX: u32 = 20;
/// Initiale Gitter-Kantenlänge.
pub const GRID_SIZE_DEFAULT: u32 = 10;

/// Startkonfiguration einer Spielsitzung.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    /// Gitter-Kantenlänge, gültig in `[GRID_SIZE_MIN, GRID_SIZE_MAX]`
    pub grid_size: u32,
    /// Hints direkt ab Spielstart anzeigen
    pub hints_enabled: bool,
    /// Gefundene Kreise direkt ab Spielstart zeichnen
    pub draw_circles: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE_DEFAULT,
            hints_enabled: false,
            draw_circles: false,
        }
    }
}
