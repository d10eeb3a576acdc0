//! Gitterpunkt als Wertetyp.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Punkt auf dem ganzzahligen Spielgitter.
///
/// Gleichheit und Hash ausschließlich über die Koordinaten; gültige
/// Punkte liegen in `[0, grid_size)` × `[0, grid_size)` (geprüft vom
/// `Board`, nicht vom Typ selbst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPoint {
    /// Spalte (0 = links)
    pub x: i32,
    /// Zeile (0 = oben)
    pub y: i32,
}

impl GridPoint {
    /// Erstellt einen Gitterpunkt.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Koordinaten als f64-Vektor (für Kreismittelpunkt-Berechnungen).
    pub fn as_dvec2(self) -> DVec2 {
        DVec2::new(f64::from(self.x), f64::from(self.y))
    }
}

impl From<(i32, i32)> for GridPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
