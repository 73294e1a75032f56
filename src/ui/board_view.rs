//! Board rendering and click mapping
//!
//! The board is split into 15x15 square cells. Lines run through the cell
//! centers, marks are drawn centered in their cell, and a click anywhere
//! inside a cell selects that cell.

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use crate::{Board, Pos, Stone, BOARD_SIZE};

use super::theme::*;

/// Screen geometry of the board for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    origin: Pos2,
    cell: f32,
}

impl Layout {
    /// Largest square board that fits in `area`, top-left aligned
    pub fn fit(area: Rect) -> Self {
        let side = (area.width().min(area.height()) - 2.0 * BOARD_PADDING).max(0.0);
        Self {
            origin: area.min + Vec2::splat(BOARD_PADDING),
            cell: side / BOARD_SIZE as f32,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.origin, Vec2::splat(self.cell * BOARD_SIZE as f32))
    }

    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.origin + Vec2::new(pos.col as f32, pos.row as f32) * self.cell;
        Rect::from_min_size(min, Vec2::splat(self.cell))
    }

    pub fn center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Cell under a screen point, `None` outside the board
    pub fn cell_at(&self, point: Pos2) -> Option<Pos> {
        if self.cell <= 0.0 {
            return None;
        }
        let rel = (point - self.origin) / self.cell;
        Pos::try_new(rel.y.floor() as i32, rel.x.floor() as i32)
    }
}

/// What the board shows besides the marks
pub struct Overlay {
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; 5]>,
    /// Side whose click is awaited; no hover feedback when `None`
    pub human_to_move: Option<Stone>,
}

#[derive(Default)]
pub struct BoardView;

impl BoardView {
    /// Draw the board and return the cell clicked this frame, if `accepts` it
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        overlay: &Overlay,
        accepts: impl Fn(Pos) -> bool,
    ) -> Option<Pos> {
        let area = Rect::from_min_size(ui.cursor().min, ui.available_size());
        let layout = Layout::fit(area);

        let response = ui.allocate_rect(layout.rect(), Sense::click());
        let painter = ui.painter_at(layout.rect());

        painter.rect_filled(layout.rect(), CornerRadius::ZERO, FELT);
        paint_grid(&painter, &layout);

        for stone in [Stone::Black, Stone::White] {
            if let Some(bits) = board.stones(stone) {
                for pos in bits.iter_ones() {
                    paint_mark(&painter, layout.center(pos), layout.cell, stone, MARK);
                }
            }
        }

        if let Some(pos) = overlay.last_move {
            let frame = layout.cell_rect(pos).shrink(2.0);
            painter.rect_stroke(frame, CornerRadius::ZERO, Stroke::new(2.0, LAST_MOVE), StrokeKind::Inside);
        }

        if let Some(line) = overlay.winning_line {
            let stroke = Stroke::new(layout.cell * 0.15, WIN_LINE);
            painter.line_segment([layout.center(line[0]), layout.center(line[4])], stroke);
        }

        let side = overlay.human_to_move?;
        let hovered = response.hover_pos().and_then(|p| layout.cell_at(p))?;
        let legal = accepts(hovered);
        if legal {
            paint_mark(&painter, layout.center(hovered), layout.cell, side, ghost_mark());
        } else {
            painter.rect_filled(layout.cell_rect(hovered), CornerRadius::ZERO, refused_cell());
        }

        (response.clicked() && legal).then_some(hovered)
    }
}

fn paint_grid(painter: &Painter, layout: &Layout) {
    let stroke = Stroke::new(GRID_WIDTH, GRID);
    let last = BOARD_SIZE as u8 - 1;
    for i in 0..BOARD_SIZE as u8 {
        painter.line_segment([layout.center(Pos::new(i, 0)), layout.center(Pos::new(i, last))], stroke);
        painter.line_segment([layout.center(Pos::new(0, i)), layout.center(Pos::new(last, i))], stroke);
    }
}

/// An X for Black, an O for White
pub fn paint_mark(painter: &Painter, center: Pos2, cell: f32, stone: Stone, color: Color32) {
    let reach = cell * MARK_REACH;
    let stroke = Stroke::new(MARK_WIDTH, color);
    match stone {
        Stone::Black => {
            painter.line_segment([center - Vec2::splat(reach), center + Vec2::splat(reach)], stroke);
            painter.line_segment(
                [center + Vec2::new(-reach, reach), center + Vec2::new(reach, -reach)],
                stroke,
            );
        }
        Stone::White => {
            painter.circle_stroke(center, reach, stroke);
        }
        Stone::Empty => {}
    }
}

/// Letter used for a side in labels
pub fn mark_symbol(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "X",
        Stone::White => "O",
        Stone::Empty => "-",
    }
}
