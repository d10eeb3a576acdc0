//! Builder für Board-Szenen aus dem GameState.

use crate::app::GameState;
use crate::core::{Circle, GridPoint};
use crate::shared::BoardScene;

/// Baut eine BoardScene aus dem aktuellen GameState.
///
/// Zeichenbare Kreise werden nur bei aktiver Kreis-Zeichnung berechnet;
/// entartete Kreise (kein Umkreis) fallen dabei heraus, bleiben aber in
/// `circle_count` enthalten.
pub fn build(state: &GameState) -> BoardScene {
    let board = state.board();

    let mut checked: Vec<GridPoint> = board.checked_points().collect();
    checked.sort_unstable();

    let mut hints: Vec<GridPoint> = state.hints().iter().copied().collect();
    hints.sort_unstable();

    let drawable_circles = if state.draw_circles() {
        board
            .circles()
            .iter()
            .filter_map(Circle::descriptor)
            .collect()
    } else {
        Vec::new()
    };

    BoardScene {
        grid_size: board.grid_size(),
        selected: board.selection().collect(),
        checked,
        hints,
        circle_count: board.circle_count(),
        drawable_circles,
        moves: state.moves(),
        hints_enabled: state.hints_enabled(),
        draw_circles: state.draw_circles(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn state_with_square_circle() -> GameState {
        let mut state = GameState::with_grid_size(5).expect("gültige Gittergröße");
        for corner in [p(0, 0), p(4, 0), p(0, 4), p(4, 4)] {
            state.select_point(corner).expect("Selektion erwartet");
        }
        state
    }

    #[test]
    fn scene_mirrors_counts_and_order() {
        let state = state_with_square_circle();
        let scene = build(&state);

        assert_eq!(scene.grid_size, 5);
        assert_eq!(scene.moves, 4);
        assert_eq!(scene.circle_count, 1);
        assert_eq!(
            scene.selected,
            vec![p(0, 0), p(4, 0), p(0, 4), p(4, 4)],
            "Selektionsreihenfolge bleibt erhalten"
        );
    }

    #[test]
    fn circles_are_only_drawn_when_enabled() {
        let mut state = state_with_square_circle();
        let scene = build(&state);
        assert!(scene.drawable_circles.is_empty());

        state.set_draw_circles(true);
        let scene = build(&state);
        assert_eq!(scene.drawable_circles.len(), 1);
        assert_eq!(scene.drawable_circles[0].center, glam::DVec2::new(2.0, 2.0));
    }

    #[test]
    fn degenerate_circles_are_counted_but_not_drawn() {
        let mut state = GameState::with_grid_size(6).expect("gültige Gittergröße");
        state.set_draw_circles(true);
        // Kollineares Tripel + beliebiger Punkt: zählt als Kreis,
        // hat aber keinen Umkreis
        for point in [p(0, 0), p(1, 1), p(2, 2), p(5, 0)] {
            state.select_point(point).expect("Selektion erwartet");
        }

        let scene = build(&state);
        assert_eq!(scene.circle_count, 1);
        assert!(scene.drawable_circles.is_empty());
    }
}
