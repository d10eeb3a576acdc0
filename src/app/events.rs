//! Game-Intent und Game-Command Events.
//!
//! Intents sind Eingaben aus UI/System ohne direkte Mutationslogik;
//! Commands sind mutierende Schritte, die zentral ausgeführt werden.
//! Das Mapping dazwischen (inkl. Check-Modus-Weiche) übernimmt der
//! `GameController`.

use crate::core::GridPoint;

/// Eingaben der Interaktionsfläche, noch ohne Modus-Entscheidung.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameIntent {
    /// Klick auf einen Gitterpunkt (Selektion oder Check, je nach Modus)
    PointClicked { point: GridPoint },
    /// Letzten Zug rückgängig machen
    UndoRequested,
    /// Partie auf aktueller Gittergröße neu starten
    RestartRequested,
    /// Partie mit neuer Gittergröße neu starten
    GridResizeRequested { size: u32 },
    /// Hint-Anzeige umschalten
    HintsToggled,
    /// Check-Modus umschalten
    MarkModeToggled,
    /// Kreis-Zeichnung umschalten
    DrawCirclesToggled,
}

/// Mutierende Schritte auf dem `GameState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Punkt selektieren (löst die Kreis-Erkennung aus)
    SelectPoint { point: GridPoint },
    /// Check-Status eines Punkts umschalten
    ToggleCheck { point: GridPoint },
    /// Letzten Zug rückgängig machen
    Undo,
    /// Partie zurücksetzen, optional mit neuer Gittergröße
    Reset { grid_size: Option<u32> },
    /// Hint-Anzeige setzen
    SetHintsEnabled { enabled: bool },
    /// Check-Modus setzen
    SetMarkMode { enabled: bool },
    /// Kreis-Zeichnung setzen
    SetDrawCircles { enabled: bool },
}
