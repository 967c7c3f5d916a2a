use tictactoe_common::games::tictactoe::{BOARD_SIZE, Board, Mark, Position, WinningLine};

pub struct BoardView {
    hovered: Option<Position>,
}

impl BoardView {
    const BOARD_PADDING: f32 = 20.0;
    const MIN_CELL_SIZE: f32 = 40.0;
    const LINE_WIDTH: f32 = 3.0;
    const MARK_WIDTH: f32 = 8.0;

    pub fn new() -> Self {
        Self { hovered: None }
    }

    fn calculate_cell_size(available_width: f32, available_height: f32) -> f32 {
        let side = available_width.min(available_height) - Self::BOARD_PADDING * 2.0;
        (side / BOARD_SIZE as f32).max(Self::MIN_CELL_SIZE)
    }

    /// Cell under `pointer` for a board whose top-left corner is `origin`.
    fn cell_at(origin: egui::Pos2, cell_size: f32, pointer: egui::Pos2) -> Option<Position> {
        let dx = pointer.x - origin.x;
        let dy = pointer.y - origin.y;
        if dx < 0.0 || dy < 0.0 {
            return None;
        }
        let pos = Position::new((dy / cell_size) as usize, (dx / cell_size) as usize);
        pos.is_on_board().then_some(pos)
    }

    fn cell_rect(origin: egui::Pos2, cell_size: f32, pos: Position) -> egui::Rect {
        egui::Rect::from_min_size(
            egui::pos2(
                origin.x + pos.col as f32 * cell_size,
                origin.y + pos.row as f32 * cell_size,
            ),
            egui::vec2(cell_size, cell_size),
        )
    }

    /// Draws the board and returns the empty cell the player clicked, if any.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        accepts_input: bool,
        winning_line: Option<WinningLine>,
    ) -> Option<Position> {
        let cell_size = Self::calculate_cell_size(ui.available_width(), ui.available_height());
        let side = cell_size * BOARD_SIZE as f32;
        let mut clicked = None;

        ui.vertical_centered(|ui| {
            ui.add_space(Self::BOARD_PADDING);
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(side, side), egui::Sense::click());
            let painter = ui.painter();
            let origin = rect.min;

            painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(245, 245, 245));

            for i in 1..BOARD_SIZE {
                let offset = i as f32 * cell_size;
                let stroke = egui::Stroke::new(Self::LINE_WIDTH, egui::Color32::DARK_GRAY);
                painter.line_segment(
                    [egui::pos2(rect.left() + offset, rect.top()), egui::pos2(rect.left() + offset, rect.bottom())],
                    stroke,
                );
                painter.line_segment(
                    [egui::pos2(rect.left(), rect.top() + offset), egui::pos2(rect.right(), rect.top() + offset)],
                    stroke,
                );
            }

            self.hovered = None;
            if accepts_input
                && let Some(hover_pos) = response.hover_pos()
                && let Some(pos) = Self::cell_at(origin, cell_size, hover_pos)
                && board.is_valid_move(pos)
            {
                painter.rect_filled(
                    Self::cell_rect(origin, cell_size, pos),
                    0.0,
                    egui::Color32::from_rgba_unmultiplied(100, 150, 255, 50),
                );
                self.hovered = Some(pos);
            }

            for (row, line) in board.rows().iter().enumerate() {
                for (col, &mark) in line.iter().enumerate() {
                    let cell_rect = Self::cell_rect(origin, cell_size, Position::new(row, col));
                    match mark {
                        Mark::X => self.draw_x(painter, cell_rect),
                        Mark::O => self.draw_o(painter, cell_rect),
                        Mark::Empty => {}
                    }
                }
            }

            if let Some(line) = winning_line {
                let start = Self::cell_rect(origin, cell_size, line.start).center();
                let end = Self::cell_rect(origin, cell_size, line.end).center();
                painter.line_segment(
                    [start, end],
                    egui::Stroke::new(6.0, egui::Color32::from_rgba_unmultiplied(50, 200, 50, 200)),
                );
            }

            if accepts_input && response.clicked() {
                clicked = self.hovered;
            }
        });

        clicked
    }

    fn draw_x(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(220, 50, 50));

        painter.line_segment(
            [
                egui::pos2(rect.left() + padding, rect.top() + padding),
                egui::pos2(rect.right() - padding, rect.bottom() - padding),
            ],
            stroke,
        );
        painter.line_segment(
            [
                egui::pos2(rect.right() - padding, rect.top() + padding),
                egui::pos2(rect.left() + padding, rect.bottom() - padding),
            ],
            stroke,
        );
    }

    fn draw_o(&self, painter: &egui::Painter, rect: egui::Rect) {
        let padding = rect.width() * 0.2;
        let radius = rect.width() / 2.0 - padding;
        let stroke = egui::Stroke::new(Self::MARK_WIDTH, egui::Color32::from_rgb(50, 50, 220));

        painter.circle_stroke(rect.center(), radius, stroke);
    }
}
