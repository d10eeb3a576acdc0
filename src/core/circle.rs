//! Gefundene Kreise als ungeordnete Vierpunktmengen.

use serde::{Deserialize, Serialize};

use super::geometry::{self, CircleDescriptor};
use super::GridPoint;

/// Ein erkannter Kreis: vier ko-zirkuläre Gitterpunkte.
///
/// Die Punkte werden kanonisch sortiert gespeichert, damit Gleichheit
/// mengenbasiert und unabhängig von der Entdeckungsreihenfolge ist.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Circle {
    points: [GridPoint; 4],
}

impl Circle {
    /// Erstellt einen Kreis aus vier Punkten (beliebige Reihenfolge).
    pub fn new(points: [GridPoint; 4]) -> Self {
        let mut points = points;
        points.sort_unstable();
        Self { points }
    }

    /// Die vier Punkte in kanonischer Reihenfolge.
    pub fn points(&self) -> &[GridPoint; 4] {
        &self.points
    }

    /// Prüft ob der Punkt zu diesem Kreis gehört.
    pub fn contains(&self, point: GridPoint) -> bool {
        self.points.contains(&point)
    }

    /// Prüft ob der Kreis entartet ist (ein kollineares Tripel enthält).
    ///
    /// Solche "Kreise" entstehen durch den Determinanten-Randfall in
    /// der Erkennung; sie zählen mit, sind aber nicht zeichenbar.
    pub fn is_degenerate(&self) -> bool {
        let [a, b, c, d] = self.points;
        geometry::is_collinear(a, b, c)
            || geometry::is_collinear(a, b, d)
            || geometry::is_collinear(a, c, d)
            || geometry::is_collinear(b, c, d)
    }

    /// Abgeleiteter Mittelpunkt und Radius für das Rendering.
    ///
    /// `None` für entartete Kreise — der Renderer überspringt sie,
    /// ohne sie aus der Zählung zu nehmen.
    pub fn descriptor(&self) -> Option<CircleDescriptor> {
        if self.is_degenerate() {
            return None;
        }
        geometry::circumcircle(self.points[0], self.points[1], self.points[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn equality_is_order_independent() {
        let a = Circle::new([p(0, 0), p(4, 0), p(0, 4), p(4, 4)]);
        let b = Circle::new([p(4, 4), p(0, 4), p(4, 0), p(0, 0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn distinct_point_sets_are_unequal() {
        let a = Circle::new([p(0, 0), p(4, 0), p(0, 4), p(4, 4)]);
        let b = Circle::new([p(0, 0), p(4, 0), p(0, 4), p(1, 1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn descriptor_of_square_circle() {
        let circle = Circle::new([p(0, 0), p(4, 0), p(0, 4), p(4, 4)]);
        let desc = circle.descriptor().expect("zeichenbarer Kreis erwartet");
        assert_eq!(desc.center, glam::DVec2::new(2.0, 2.0));
    }

    #[test]
    fn degenerate_circle_has_no_descriptor() {
        // Tripel (0,0)-(1,1)-(2,2) ist kollinear
        let circle = Circle::new([p(0, 0), p(1, 1), p(2, 2), p(5, 0)]);
        assert!(circle.is_degenerate());
        assert!(circle.descriptor().is_none());
    }

    #[test]
    fn degeneracy_found_in_any_triple_position() {
        // Kollineares Tripel liegt nach der Sortierung nicht vorn
        let circle = Circle::new([p(0, 3), p(2, 0), p(2, 1), p(2, 2)]);
        assert!(circle.is_degenerate());
        assert!(circle.descriptor().is_none());
    }
}
