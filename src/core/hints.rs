//! Hint-Berechnung: Punkte, die einen Kreis vervollständigen würden.

use std::collections::HashSet;

use super::geometry::is_cocircular;
use super::{Board, GridPoint};

/// Berechnet alle unselektierten Gitterpunkte, die zusammen mit einem
/// 3-Tupel der aktuellen Selektion ko-zirkulär wären.
///
/// Bewusst nicht auf den neuesten Punkt beschränkt: Hints spiegeln die
/// gesamte Selektion wider und werden bei jeder Selektionsänderung voll
/// neu berechnet. Ebenso bewusst nicht gegen den Kreis-Store
/// dedupliziert — Hints sind beratend, nicht buchhalterisch.
/// Aufwand O(n³ · Gitterfläche); bei wenigen hundert Punkten unkritisch.
pub fn hint_points(board: &Board) -> HashSet<GridPoint> {
    let mut hints = HashSet::new();
    let selected: Vec<GridPoint> = board.selection().collect();
    if selected.len() < 3 {
        return hints;
    }

    for i in 0..selected.len() {
        for j in (i + 1)..selected.len() {
            for k in (j + 1)..selected.len() {
                for candidate in board.lattice_points() {
                    if board.is_selected(candidate) || hints.contains(&candidate) {
                        continue;
                    }
                    if is_cocircular(selected[i], selected[j], selected[k], candidate) {
                        hints.insert(candidate);
                    }
                }
            }
        }
    }

    hints
}
