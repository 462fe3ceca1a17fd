//! Stateless UI rendering and board geometry.
//!
//! The hit-test and the renderer derive cell rectangles from the same
//! functions, keyed off the full frame area, so a mouse click always
//! lands on the cell that was drawn there.

use ocean_tictactoe::{Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

// Ocean palette: blue primary, amber accent.
const PRIMARY: Color = Color::Rgb(0x25, 0x63, 0xEB);
const SECONDARY: Color = Color::Rgb(0xF5, 0x9E, 0x0B);
const DIM: Color = Color::DarkGray;

const BOARD_WIDTH: u16 = 38; // 3 cells of 12 + 2 separators
const BOARD_HEIGHT: u16 = 11; // 3 cells of 3 + 2 separators

/// Renders the whole frame: title, board, status line, help footer.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let chunks = layout(area);

    let title = Paragraph::new("Ocean Tic Tac Toe")
        .style(Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, area, app);

    let status = Paragraph::new(app.game().status_text())
        .style(Style::default().fg(SECONDARY))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("Click a cell, 1-9, or arrows+Enter to place. r restarts, q quits.")
        .style(Style::default().fg(DIM))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board = board_rect(area);

    let rows = row_rects(board);
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
    for row in [rows[0], rows[2], rows[4]] {
        let cols = col_rects(row);
        draw_vertical_separator(frame, cols[1]);
        draw_vertical_separator(frame, cols[3]);
    }

    for pos in Position::ALL {
        draw_cell(frame, cell_rect(area, pos), app, pos);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let square = app.game().board().get(pos);
    let (symbol, base_style) = cell_appearance(square, app.ascii());

    let style = if pos == app.cursor() && !app.game().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Empty pad line centers the mark on the middle row of the cell
    let lines = vec![Line::default(), Line::from(Span::styled(symbol, style))];
    let cell = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn cell_appearance(square: Square, ascii: bool) -> (String, Style) {
    match square {
        Square::Empty => ("   ".to_string(), Style::default().fg(DIM)),
        Square::Occupied(mark) => {
            let shown = if ascii {
                mark.to_string()
            } else {
                mark.glyph().to_string()
            };
            (format!(" {shown} "), mark_style(mark))
        }
    }
}

fn mark_style(mark: Mark) -> Style {
    match mark {
        Mark::X => Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        Mark::O => Style::default().fg(SECONDARY).add_modifier(Modifier::BOLD),
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(DIM));
    frame.render_widget(sep, area);
}

fn draw_vertical_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(DIM));
    frame.render_widget(sep, area);
}

// ─────────────────────────────────────────────────────────────
//  Geometry
// ─────────────────────────────────────────────────────────────

fn layout(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),              // Title
            Constraint::Min(BOARD_HEIGHT + 1),  // Board
            Constraint::Length(3),              // Status
            Constraint::Length(1),              // Help
        ])
        .split(area)
}

fn board_rect(area: Rect) -> Rect {
    center_rect(layout(area)[1], BOARD_WIDTH, BOARD_HEIGHT)
}

fn row_rects(board: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board)
}

fn col_rects(row: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(row)
}

/// Rectangle a given cell is drawn into, derived from the frame area.
fn cell_rect(area: Rect, pos: Position) -> Rect {
    let rows = row_rects(board_rect(area));
    let row = [rows[0], rows[2], rows[4]][pos.row()];
    let cols = col_rects(row);
    [cols[0], cols[2], cols[4]][pos.col()]
}

/// Maps a terminal coordinate to the board cell drawn there.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<Position> {
    Position::ALL
        .into_iter()
        .find(|&pos| contains(cell_rect(area, pos), column, row))
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.left() && column < rect.right() && row >= rect.top() && row < rect.bottom()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
