//! Rein-mathematische Kreisgeometrie auf Gitterpunkten.
//!
//! Die Ko-Zirkularitäts-Prüfung nutzt den klassischen Determinanten-Test
//! über dem "gelifteten" Paraboloid: vier Punkte liegen genau dann auf
//! einem gemeinsamen Kreis (oder einer Geraden), wenn ihre gelifteten
//! Bilder `(x, y, x²+y², 1)` koplanar sind, d.h. die 4×4-Determinante
//! verschwindet. Für Gitterkoordinaten < 21 sind alle Zwischenwerte in
//! f64 exakt darstellbar, der Epsilon-Vergleich ist damit praktisch ein
//! exakter Nulltest.
//!
//! Bekannter Randfall: enthält das Quadrupel ein kollineares Tripel,
//! verschwindet die Determinante unabhängig vom vierten Punkt — der
//! Test meldet "ko-zirkulär", obwohl kein endlicher Kreis existiert.
//! Die Erkennung zählt solche Quadrupel als Kreise, das Rendering
//! überspringt sie (`Circle::descriptor` liefert `None`).

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::GridPoint;

/// Toleranz für den Determinanten-Nulltest.
pub const COCIRCULAR_EPSILON: f64 = 1e-12;

/// Abgeleitete Kreisdaten für das Rendering (nie für die Erkennung).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleDescriptor {
    /// Kreismittelpunkt in Gitterkoordinaten
    pub center: DVec2,
    /// Radius in Gittereinheiten
    pub radius: f64,
}

/// Prüft ob vier Gitterpunkte auf einem gemeinsamen Kreis liegen.
pub fn is_cocircular(p1: GridPoint, p2: GridPoint, p3: GridPoint, p4: GridPoint) -> bool {
    let m = [lift(p1), lift(p2), lift(p3), lift(p4)];
    det4(m).abs() < COCIRCULAR_EPSILON
}

/// Prüft ob drei Gitterpunkte auf einer Geraden liegen (exakt, i64).
pub fn is_collinear(a: GridPoint, b: GridPoint, c: GridPoint) -> bool {
    let abx = i64::from(b.x - a.x);
    let aby = i64::from(b.y - a.y);
    let acx = i64::from(c.x - a.x);
    let acy = i64::from(c.y - a.y);
    abx * acy - aby * acx == 0
}

/// Berechnet den Umkreis dreier Gitterpunkte.
///
/// Gibt `None` zurück wenn die Punkte kollinear sind (Nenner `D = 0`)
/// oder das Ergebnis nicht endlich ist.
pub fn circumcircle(p1: GridPoint, p2: GridPoint, p3: GridPoint) -> Option<CircleDescriptor> {
    let (x1, y1) = (f64::from(p1.x), f64::from(p1.y));
    let (x2, y2) = (f64::from(p2.x), f64::from(p2.y));
    let (x3, y3) = (f64::from(p3.x), f64::from(p3.y));

    let d = 2.0 * (x1 * (y2 - y3) + x2 * (y3 - y1) + x3 * (y1 - y2));
    if d == 0.0 {
        return None;
    }

    let sq1 = x1 * x1 + y1 * y1;
    let sq2 = x2 * x2 + y2 * y2;
    let sq3 = x3 * x3 + y3 * y3;

    let ux = (sq1 * (y2 - y3) + sq2 * (y3 - y1) + sq3 * (y1 - y2)) / d;
    let uy = (sq1 * (x3 - x2) + sq2 * (x1 - x3) + sq3 * (x2 - x1)) / d;

    let center = DVec2::new(ux, uy);
    let radius = center.distance(p1.as_dvec2());

    if !center.x.is_finite() || !center.y.is_finite() || !radius.is_finite() {
        return None;
    }

    Some(CircleDescriptor { center, radius })
}

/// Zeile der gelifteten Matrix: `(x, y, x²+y², 1)`.
fn lift(p: GridPoint) -> [f64; 4] {
    let x = f64::from(p.x);
    let y = f64::from(p.y);
    [x, y, x * x + y * y, 1.0]
}

fn det3(m: [[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Laplace-Entwicklung nach der ersten Zeile.
fn det4(m: [[f64; 4]; 4]) -> f64 {
    let minor = |skip: usize| -> [[f64; 3]; 3] {
        let mut out = [[0.0; 3]; 3];
        for (row_out, row_in) in m[1..].iter().enumerate() {
            let mut col_out = 0;
            for (col_in, &value) in row_in.iter().enumerate() {
                if col_in == skip {
                    continue;
                }
                out[row_out][col_out] = value;
                col_out += 1;
            }
        }
        out
    };

    m[0][0] * det3(minor(0)) - m[0][1] * det3(minor(1)) + m[0][2] * det3(minor(2))
        - m[0][3] * det3(minor(3))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    #[test]
    fn unit_distance_points_are_cocircular() {
        // (1,0), (0,1), (-1,0), (0,-1) liegen auf dem Einheitskreis
        assert!(is_cocircular(p(1, 0), p(0, 1), p(-1, 0), p(0, -1)));
    }

    #[test]
    fn square_corners_are_cocircular() {
        assert!(is_cocircular(p(0, 0), p(4, 0), p(0, 4), p(4, 4)));
    }

    #[test]
    fn generic_quadruple_is_not_cocircular() {
        assert!(!is_cocircular(p(0, 0), p(1, 0), p(0, 1), p(2, 2)));
    }

    #[test]
    fn cocircularity_ignores_argument_order() {
        assert!(is_cocircular(p(4, 4), p(0, 0), p(4, 0), p(0, 4)));
        assert!(is_cocircular(p(0, 4), p(4, 4), p(0, 0), p(4, 0)));
    }

    #[test]
    fn collinear_triple_plus_any_point_reports_cocircular() {
        // Determinante verschwindet identisch — dokumentierter Randfall
        assert!(is_cocircular(p(0, 0), p(1, 1), p(2, 2), p(5, 0)));
    }

    #[test]
    fn is_collinear_detects_diagonal() {
        assert!(is_collinear(p(0, 0), p(1, 1), p(3, 3)));
        assert!(!is_collinear(p(0, 0), p(1, 1), p(3, 4)));
    }

    #[test]
    fn circumcircle_of_square_corners() {
        let desc = circumcircle(p(0, 0), p(4, 0), p(0, 4)).expect("Umkreis erwartet");
        assert_relative_eq!(desc.center.x, 2.0);
        assert_relative_eq!(desc.center.y, 2.0);
        assert_relative_eq!(desc.radius, 8.0_f64.sqrt());
    }

    #[test]
    fn circumcircle_rejects_collinear_points() {
        assert!(circumcircle(p(0, 0), p(2, 2), p(4, 4)).is_none());
    }

    #[test]
    fn circumcircle_radius_reaches_all_three_points() {
        let (a, b, c) = (p(1, 0), p(0, 3), p(5, 2));
        let desc = circumcircle(a, b, c).expect("Umkreis erwartet");
        for q in [a, b, c] {
            assert_relative_eq!(
                desc.center.distance(q.as_dvec2()),
                desc.radius,
                epsilon = 1e-12
            );
        }
    }
}
