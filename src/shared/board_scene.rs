//! Board-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und ein UI-Frontend sie
//! konsumiert. Reine Daten — die Engine ruft nie selbst ins Rendering.

use crate::core::{CircleDescriptor, GridPoint};

/// Anzeigeklasse eines Gitterpunkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClass {
    /// Unselektiert, unmarkiert
    Plain,
    /// Selektierter Punkt
    Selected,
    /// Hint-Kandidat (oder gecheckter Punkt bei sichtbaren Hints)
    Hint,
    /// Gecheckter Punkt bei ausgeblendeten Hints
    Checked,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub struct BoardScene {
    /// Gitter-Kantenlänge
    pub grid_size: u32,
    /// Selektierte Punkte in Selektionsreihenfolge
    pub selected: Vec<GridPoint>,
    /// Gecheckte Punkte, sortiert
    pub checked: Vec<GridPoint>,
    /// Aktuelle Hint-Punkte, sortiert (leer bei deaktivierten Hints)
    pub hints: Vec<GridPoint>,
    /// Anzahl aller gefundenen Kreise (inklusive nicht zeichenbarer)
    pub circle_count: usize,
    /// Zeichenbare Kreise; entartete Kreise fehlen hier, zählen aber
    /// in `circle_count` weiter mit
    pub drawable_circles: Vec<CircleDescriptor>,
    /// Aktueller Zugzähler
    pub moves: u32,
    /// Hints sichtbar
    pub hints_enabled: bool,
    /// Kreis-Zeichnung aktiv
    pub draw_circles: bool,
}

impl BoardScene {
    /// Anzeigeklasse eines Punkts.
    ///
    /// Selektion gewinnt immer; bei sichtbaren Hints erscheinen auch
    /// gecheckte Punkte in Hint-Farbe, sonst in Check-Farbe.
    pub fn point_class(&self, point: GridPoint) -> PointClass {
        if self.selected.contains(&point) {
            return PointClass::Selected;
        }
        let is_checked = self.checked.binary_search(&point).is_ok();
        if self.hints_enabled && (self.hints.binary_search(&point).is_ok() || is_checked) {
            return PointClass::Hint;
        }
        if is_checked {
            return PointClass::Checked;
        }
        PointClass::Plain
    }
}
