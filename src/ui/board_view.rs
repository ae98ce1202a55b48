//! Board rendering for the Tic-Tac-Toe GUI

use crate::{Board, Player, Pos, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Everything the view needs from the game, borrowed per frame
pub struct BoardSnapshot<'a> {
    pub board: &'a Board,
    pub current_player: Player,
    pub last_move: Option<Pos>,
    pub winning_line: Option<[Pos; 3]>,
    pub accepts_input: bool,
}

/// Board view handles rendering and input for the game board.
/// It keeps only layout; marks always come from the snapshot.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(&mut self, ui: &mut egui::Ui, snapshot: &BoardSnapshot<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = available_size.x.min(available_size.y).max(0.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.set_layout(response.rect);

        painter.rect_filled(self.board_rect, CornerRadius::same(6), BOARD_BG);

        if let Some(pos) = snapshot.last_move {
            painter.rect_filled(
                self.cell_rect(pos).shrink(GRID_LINE_WIDTH),
                CornerRadius::ZERO,
                last_move_fill(),
            );
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, snapshot.board);

        if let Some(line) = snapshot.winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked_pos = None;

        if snapshot.accepts_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(pos) = self.screen_to_board(pointer_pos) {
                    if snapshot.board.is_empty(pos) {
                        self.draw_mark(&painter, pos, snapshot.current_player, true);
                    }

                    // Occupied cells are still forwarded; the game rejects them
                    if response.clicked() {
                        clicked_pos = Some(pos);
                    }
                }
            }
        }

        clicked_pos
    }

    fn set_layout(&mut self, rect: Rect) {
        self.board_rect = rect;
        self.cell_size = ((rect.width() - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32).max(1.0);
    }

    fn grid_origin(&self) -> Pos2 {
        self.board_rect.min + Vec2::splat(BOARD_MARGIN)
    }

    /// Draw the two inner lines in each direction
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.grid_origin();
        let extent = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [origin + Vec2::new(offset, 0.0), origin + Vec2::new(offset, extent)],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [origin + Vec2::new(0.0, offset), origin + Vec2::new(extent, offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for (pos, cell) in board.iter() {
            if let Some(player) = cell.player() {
                self.draw_mark(painter, pos, player, false);
            }
        }
    }

    /// Draw an X or an O; `preview` draws it translucent
    fn draw_mark(&self, painter: &Painter, pos: Pos, player: Player, preview: bool) {
        let rect = self.cell_rect(pos).shrink(self.cell_size * MARK_INSET_RATIO);
        let base = match player {
            Player::X => X_MARK,
            Player::O => O_MARK,
        };
        let color: Color32 = if preview { hover_preview(base) } else { base };
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match player {
            Player::X => {
                painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
                painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
            }
            Player::O => {
                painter.circle_stroke(rect.center(), rect.width() * 0.5, stroke);
            }
        }
    }

    /// Stroke through the centers of the winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; 3]) {
        let stroke = Stroke::new(WIN_LINE_WIDTH, WIN_HIGHLIGHT);
        let start = self.cell_rect(line[0]).center();
        let end = self.cell_rect(line[2]).center();
        painter.line_segment([start, end], stroke);
    }

    /// Screen rectangle of one cell
    pub fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_origin()
            + Vec2::new(pos.col as f32 * self.cell_size, pos.row as f32 * self.cell_size);
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.grid_origin();
        if relative.x < 0.0 || relative.y < 0.0 {
            return None;
        }

        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;

        Pos::try_new(row, col)
    }
}
