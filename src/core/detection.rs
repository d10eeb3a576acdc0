//! Inkrementelle Kreis-Erkennung.

use indexmap::IndexSet;

use super::geometry::is_cocircular;
use super::{Circle, GridPoint};

/// Findet alle Kreise, die erst durch den neuesten Punkt entstehen.
///
/// Aufgezählt werden ausschließlich 3-Kombinationen der *vorher*
/// selektierten Punkte (lexikographische Indexreihenfolge), jeweils
/// kombiniert mit `newest`. Das ist korrekt und nicht bloß eine
/// Optimierung: Ko-Zirkularität ist eine statische Eigenschaft der
/// Punktmenge, unabhängig von der Selektionsreihenfolge — jede
/// 4-Teilmenge ohne `newest` war schon beim Zug ihres letzten Mitglieds
/// vollständig vorhanden und wurde dort geprüft und erfasst. Damit
/// sinkt der Aufwand von O(n⁴) auf O(n³) pro Zug bei identischer
/// Ergebnismenge.
///
/// Bereits in `known` erfasste Kreise (Mengengleichheit der vier
/// Punkte) werden übersprungen.
pub fn find_new_circles(
    prior: &IndexSet<GridPoint>,
    newest: GridPoint,
    known: &[Circle],
) -> Vec<Circle> {
    if prior.len() < 3 {
        return Vec::new();
    }

    let points: Vec<GridPoint> = prior.iter().copied().collect();
    let mut found = Vec::new();

    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            for k in (j + 1)..points.len() {
                if !is_cocircular(points[i], points[j], points[k], newest) {
                    continue;
                }
                let circle = Circle::new([points[i], points[j], points[k], newest]);
                if !known.contains(&circle) {
                    found.push(circle);
                }
            }
        }
    }

    found
}
