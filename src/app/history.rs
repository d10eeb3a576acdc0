//! Zug-Historie mit LIFO-Undo über Selektions- und Markier-Züge.

use serde::{Deserialize, Serialize};

use crate::core::GridPoint;

/// Ein einzelner rückgängig machbarer Spielzug.
///
/// Invariante: das Anwenden der Umkehrung stellt den Zustand vor dem
/// Zug exakt wieder her — Selektionsmitgliedschaft und -reihenfolge,
/// Check-Mitgliedschaft, Kreisanzahl und Zugzähler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRecord {
    /// Punkt wurde selektiert; dabei kamen `circles_added` Kreise hinzu
    Select {
        point: GridPoint,
        circles_added: usize,
    },
    /// Check-Status eines Punkts wurde umgeschaltet
    Mark { point: GridPoint, was_checked: bool },
}

/// Append-only Zug-Log mit einstufigem LIFO-Undo.
///
/// Kein Redo: ein gepoppter Zug ist verworfen.
#[derive(Debug, Default)]
pub struct MoveHistory {
    entries: Vec<MoveRecord>,
}

impl MoveHistory {
    /// Erstellt eine leere Historie.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Hängt einen ausgeführten Zug an.
    pub fn record(&mut self, record: MoveRecord) {
        self.entries.push(record);
    }

    /// Entnimmt den jüngsten Zug; `None` bei leerer Historie.
    pub fn pop(&mut self) -> Option<MoveRecord> {
        self.entries.pop()
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Gibt die Anzahl der Einträge zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Züge vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[MoveRecord] {
        &self.entries
    }

    /// Verwirft alle Einträge (Restart/Resize).
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(x: i32, y: i32, circles_added: usize) -> MoveRecord {
        MoveRecord::Select {
            point: GridPoint::new(x, y),
            circles_added,
        }
    }

    #[test]
    fn empty_history_cannot_undo() {
        let mut history = MoveHistory::new();
        assert!(!history.can_undo());
        assert!(history.pop().is_none());
    }

    #[test]
    fn pop_returns_moves_in_lifo_order() {
        let mut history = MoveHistory::new();
        history.record(select(0, 0, 0));
        history.record(MoveRecord::Mark {
            point: GridPoint::new(1, 1),
            was_checked: false,
        });

        assert_eq!(history.len(), 2);
        assert!(matches!(history.pop(), Some(MoveRecord::Mark { .. })));
        assert!(matches!(history.pop(), Some(MoveRecord::Select { .. })));
        assert!(history.is_empty());
    }

    #[test]
    fn popped_moves_are_gone() {
        let mut history = MoveHistory::new();
        history.record(select(0, 0, 1));
        let _ = history.pop();
        assert!(!history.can_undo());
    }

    #[test]
    fn clear_discards_everything() {
        let mut history = MoveHistory::new();
        history.record(select(0, 0, 0));
        history.record(select(1, 0, 0));
        history.clear();
        assert!(history.is_empty());
    }
}
