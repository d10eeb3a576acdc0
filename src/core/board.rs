//! Die zentrale Board-Datenstruktur: Gitter, Selektion, Checks, Kreise.

use std::collections::HashSet;

use indexmap::IndexSet;

use super::{Circle, GridPoint};

/// Container für den sichtbaren Spielzustand eines Kyoen-Gitters.
///
/// Die Selektion ist eine geordnete Menge: die Einfügereihenfolge
/// bestimmt, welchem Zug ein gefundener Kreis zugerechnet wird.
/// Check-Markierungen sind davon unabhängig; ein Punkt kann gleichzeitig
/// selektiert und gecheckt sein.
#[derive(Debug, Clone, Default)]
pub struct Board {
    /// Kantenlänge des Gitters (Punkte pro Zeile/Spalte)
    grid_size: u32,
    /// Selektierte Punkte in Selektionsreihenfolge
    selected: IndexSet<GridPoint>,
    /// Vom Spieler markierte (gecheckte) Punkte
    checked: HashSet<GridPoint>,
    /// Gefundene Kreise in Entdeckungsreihenfolge
    circles: Vec<Circle>,
}

impl Board {
    /// Erstellt ein leeres Board. Die Größen-Validierung übernimmt der
    /// Aufrufer (`GameState`), analog zu den Options-Grenzwerten.
    pub fn new(grid_size: u32) -> Self {
        Self {
            grid_size,
            selected: IndexSet::new(),
            checked: HashSet::new(),
            circles: Vec::new(),
        }
    }

    /// Kantenlänge des Gitters.
    pub fn grid_size(&self) -> u32 {
        self.grid_size
    }

    /// Prüft ob der Punkt innerhalb des Gitters liegt.
    pub fn contains(&self, point: GridPoint) -> bool {
        let size = self.grid_size as i32;
        (0..size).contains(&point.x) && (0..size).contains(&point.y)
    }

    /// Prüft ob der Punkt selektiert ist — O(1).
    pub fn is_selected(&self, point: GridPoint) -> bool {
        self.selected.contains(&point)
    }

    /// Prüft ob der Punkt gecheckt ist — O(1).
    pub fn is_checked(&self, point: GridPoint) -> bool {
        self.checked.contains(&point)
    }

    /// Selektiert einen Punkt; `false` wenn er bereits selektiert war.
    pub fn select(&mut self, point: GridPoint) -> bool {
        self.selected.insert(point)
    }

    /// Entfernt einen Punkt aus der Selektion (für Undo).
    ///
    /// `shift_remove`: die Reihenfolge der übrigen Punkte muss erhalten
    /// bleiben, sonst stimmt die Kreis-Zuordnung späterer Undos nicht.
    pub fn deselect(&mut self, point: GridPoint) -> bool {
        self.selected.shift_remove(&point)
    }

    /// Setzt den Check-Status eines Punkts (für Undo).
    pub fn set_checked(&mut self, point: GridPoint, checked: bool) {
        if checked {
            self.checked.insert(point);
        } else {
            self.checked.remove(&point);
        }
    }

    /// Schaltet den Check-Status um; gibt den vorherigen Status zurück.
    pub fn toggle_checked(&mut self, point: GridPoint) -> bool {
        let was_checked = !self.checked.insert(point);
        if was_checked {
            self.checked.remove(&point);
        }
        was_checked
    }

    /// Selektierte Punkte in Selektionsreihenfolge.
    pub fn selection(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.selected.iter().copied()
    }

    /// Geordnete Selektionsmenge (für die Kreis-Erkennung).
    pub fn selection_set(&self) -> &IndexSet<GridPoint> {
        &self.selected
    }

    /// Anzahl selektierter Punkte.
    pub fn selection_len(&self) -> usize {
        self.selected.len()
    }

    /// Gecheckte Punkte (unsortiert).
    pub fn checked_points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        self.checked.iter().copied()
    }

    /// Anzahl gecheckter Punkte.
    pub fn checked_len(&self) -> usize {
        self.checked.len()
    }

    /// Alle gefundenen Kreise in Entdeckungsreihenfolge.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Anzahl gefundener Kreise.
    pub fn circle_count(&self) -> usize {
        self.circles.len()
    }

    /// Hängt neu gefundene Kreise an den Store an.
    pub fn push_circles(&mut self, circles: &[Circle]) {
        self.circles.extend_from_slice(circles);
    }

    /// Entfernt die zuletzt gefundenen `count` Kreise (für Undo).
    pub fn truncate_last_circles(&mut self, count: usize) {
        let keep = self.circles.len().saturating_sub(count);
        self.circles.truncate(keep);
    }

    /// Alle Gitterpunkte zeilenweise (für den Hint-Scan).
    pub fn lattice_points(&self) -> impl Iterator<Item = GridPoint> + '_ {
        let size = self.grid_size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| GridPoint::new(x, y)))
    }
}
