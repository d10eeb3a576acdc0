//! Spielzustand und seine mutierenden Operationen.

use std::collections::HashSet;

use anyhow::{bail, Result};

use super::history::{MoveHistory, MoveRecord};
use super::CommandLog;
use crate::core::{detection, hints, Board, Circle, GridPoint};
use crate::shared::{GameOptions, GRID_SIZE_MAX, GRID_SIZE_MIN};

/// Hauptzustand einer Spielsitzung.
///
/// Einziger Mutator von Board, Historie und Hint-Cache: alle Änderungen
/// laufen über die Methoden dieses Typs, synchron und ohne Hintergrund-
/// Arbeit. Ein `GameState` pro Sitzung; ein nebenläufiger Host muss die
/// Aufrufe selbst serialisieren.
#[derive(Debug)]
pub struct GameState {
    /// Gitter, Selektion, Checks und Kreis-Store
    board: Board,
    /// Zug-Historie für Undo
    history: MoveHistory,
    /// Verlauf ausgeführter Commands (Diagnose)
    pub command_log: CommandLog,
    /// Zugzähler (= Anzahl selektierter Punkte)
    moves: u32,
    /// Hint-Anzeige aktiv
    hints_enabled: bool,
    /// Check-Modus aktiv (steuert nur das Intent-Mapping)
    mark_mode: bool,
    /// Kreis-Zeichnung aktiv (steuert nur die Szene)
    draw_circles: bool,
    /// Zwischengespeicherte Hint-Punkte (leer bei deaktivierten Hints)
    hints: HashSet<GridPoint>,
}

impl GameState {
    /// Erstellt eine Sitzung mit Default-Optionen.
    pub fn new() -> Self {
        Self::from_options(&GameOptions::default())
    }

    /// Erstellt eine Sitzung aus expliziten Optionen.
    pub fn with_options(options: &GameOptions) -> Result<Self> {
        validate_grid_size(options.grid_size)?;
        Ok(Self::from_options(options))
    }

    fn from_options(options: &GameOptions) -> Self {
        Self {
            board: Board::new(options.grid_size),
            history: MoveHistory::new(),
            command_log: CommandLog::new(),
            moves: 0,
            hints_enabled: options.hints_enabled,
            mark_mode: false,
            draw_circles: options.draw_circles,
            hints: HashSet::new(),
        }
    }

    /// Erstellt eine Sitzung mit gegebener Gittergröße.
    pub fn with_grid_size(grid_size: u32) -> Result<Self> {
        Self::with_options(&GameOptions {
            grid_size,
            ..GameOptions::default()
        })
    }

    // ── Mutierende Operationen ──────────────────────────────────────

    /// Selektiert einen Punkt und meldet die dabei vervollständigten
    /// Kreise.
    ///
    /// Ein bereits selektierter Punkt ist ein No-op: kein Zug, kein
    /// Historien-Eintrag, leeres Ergebnis. Punkte außerhalb des Gitters
    /// werden als Fehler zurückgewiesen.
    pub fn select_point(&mut self, point: GridPoint) -> Result<Vec<Circle>> {
        self.ensure_in_bounds(point)?;

        if self.board.is_selected(point) {
            log::debug!("Punkt ({}, {}) ist bereits selektiert", point.x, point.y);
            return Ok(Vec::new());
        }

        // Erkennung läuft gegen die Selektion VOR dem neuen Punkt
        let new_circles =
            detection::find_new_circles(self.board.selection_set(), point, self.board.circles());

        self.board.select(point);
        self.moves += 1;
        self.board.push_circles(&new_circles);
        self.history.record(MoveRecord::Select {
            point,
            circles_added: new_circles.len(),
        });

        if self.hints_enabled {
            self.recompute_hints();
        }

        if new_circles.is_empty() {
            log::debug!("Zug {}: Punkt ({}, {}) selektiert", self.moves, point.x, point.y);
        } else {
            log::info!(
                "Zug {}: Punkt ({}, {}) vervollständigt {} Kreis(e), insgesamt {}",
                self.moves,
                point.x,
                point.y,
                new_circles.len(),
                self.board.circle_count()
            );
        }

        Ok(new_circles)
    }

    /// Schaltet den Check-Status eines Punkts um und gibt den neuen
    /// Status zurück.
    ///
    /// Unabhängig vom Check-Modus-Flag aufrufbar; Zugzähler, Selektion
    /// und Kreis-Store bleiben unberührt.
    pub fn toggle_check(&mut self, point: GridPoint) -> Result<bool> {
        self.ensure_in_bounds(point)?;

        let was_checked = self.board.toggle_checked(point);
        self.history.record(MoveRecord::Mark { point, was_checked });

        log::debug!(
            "Punkt ({}, {}) {}",
            point.x,
            point.y,
            if was_checked { "ent-checkt" } else { "gecheckt" }
        );
        Ok(!was_checked)
    }

    /// Macht den jüngsten Zug rückgängig.
    ///
    /// Bei leerer Historie ein No-op (`None`), kein Fehler. Einstufiges
    /// LIFO ohne Redo: der zurückgegebene Zug ist verworfen.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        let record = self.history.pop()?;

        match record {
            MoveRecord::Select {
                point,
                circles_added,
            } => {
                self.board.deselect(point);
                self.board.truncate_last_circles(circles_added);
                self.moves = self.moves.saturating_sub(1);
                if self.hints_enabled {
                    self.recompute_hints();
                }
                log::info!(
                    "Undo: Selektion ({}, {}) samt {} Kreis(en) zurückgenommen",
                    point.x,
                    point.y,
                    circles_added
                );
            }
            MoveRecord::Mark { point, was_checked } => {
                self.board.set_checked(point, was_checked);
                log::info!("Undo: Check-Status ({}, {}) wiederhergestellt", point.x, point.y);
            }
        }

        Some(record)
    }

    /// Setzt die Partie zurück, optional mit neuer Gittergröße.
    ///
    /// Eine ungültige Größe weist den gesamten Reset ab; der Zustand
    /// bleibt dann unverändert. Die Interaktions-Flags (Hints,
    /// Check-Modus, Kreis-Zeichnung) überleben den Reset.
    pub fn reset(&mut self, new_grid_size: Option<u32>) -> Result<()> {
        let grid_size = match new_grid_size {
            Some(size) => {
                validate_grid_size(size)?;
                size
            }
            None => self.board.grid_size(),
        };

        self.board = Board::new(grid_size);
        self.history.clear();
        self.hints.clear();
        self.moves = 0;

        log::info!("Partie zurückgesetzt, Gittergröße {}", grid_size);
        Ok(())
    }

    /// Schaltet die Hint-Anzeige; Einschalten berechnet die Hints neu,
    /// Ausschalten leert nur den Hint-Cache (nicht die Checks).
    pub fn set_hints_enabled(&mut self, enabled: bool) {
        self.hints_enabled = enabled;
        if enabled {
            self.recompute_hints();
        } else {
            self.hints.clear();
        }
    }

    /// Setzt den Check-Modus (reine Intent-Weiche, keine Zustandslogik).
    pub fn set_mark_mode(&mut self, enabled: bool) {
        self.mark_mode = enabled;
    }

    /// Setzt die Kreis-Zeichnung (konsumiert nur die Board-Szene).
    pub fn set_draw_circles(&mut self, enabled: bool) {
        self.draw_circles = enabled;
    }

    // ── Read-only Sichten ───────────────────────────────────────────

    /// Das Board (read-only).
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Aktueller Zugzähler.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Aktuelle Gittergröße.
    pub fn grid_size(&self) -> u32 {
        self.board.grid_size()
    }

    /// Aktueller Hint-Cache (leer bei deaktivierten Hints).
    pub fn hints(&self) -> &HashSet<GridPoint> {
        &self.hints
    }

    /// Hint-Anzeige aktiv?
    pub fn hints_enabled(&self) -> bool {
        self.hints_enabled
    }

    /// Check-Modus aktiv?
    pub fn mark_mode(&self) -> bool {
        self.mark_mode
    }

    /// Kreis-Zeichnung aktiv?
    pub fn draw_circles(&self) -> bool {
        self.draw_circles
    }

    /// Zug-Historie (read-only).
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Prüft ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    // ── Intern ──────────────────────────────────────────────────────

    fn recompute_hints(&mut self) {
        self.hints = hints::hint_points(&self.board);
    }

    fn ensure_in_bounds(&self, point: GridPoint) -> Result<()> {
        if !self.board.contains(point) {
            bail!(
                "Punkt ({}, {}) liegt außerhalb des {}×{}-Gitters",
                point.x,
                point.y,
                self.board.grid_size(),
                self.board.grid_size()
            );
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_grid_size(size: u32) -> Result<()> {
    if !(GRID_SIZE_MIN..=GRID_SIZE_MAX).contains(&size) {
        bail!(
            "Gittergröße {} außerhalb des gültigen Bereichs [{}, {}]",
            size,
            GRID_SIZE_MIN,
            GRID_SIZE_MAX
        );
    }
    Ok(())
}
