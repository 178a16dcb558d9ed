//! Stateless UI rendering for the grid game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};
use crate::games::grid::{GameEngine, Square};

/// Colours handed out to marks in turn order.
const MARK_COLORS: [Color; 5] = [
    Color::Blue,
    Color::Red,
    Color::Magenta,
    Color::Yellow,
    Color::Cyan,
];

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(5),    // Board and history
            Constraint::Length(3), // Settings
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Strictly Triples")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(24)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_history(frame, body[1], app);
    draw_settings(frame, chunks[2], app);

    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();
    let board = engine.current_board();
    let width = board.dimensions().width();
    let winning = engine.winning_line();
    let show_cursor = app.focus() == Focus::Board;

    let rows: Vec<Line> = board
        .squares()
        .chunks(width)
        .enumerate()
        .map(|(row, squares)| {
            let spans = squares.iter().enumerate().map(|(col, square)| {
                let index = row * width + col;
                let mut style = square_style(engine, *square);
                if winning.is_some_and(|line| line.contains(index)) {
                    style = style.bg(Color::Green).fg(Color::Black);
                }
                if show_cursor && index == app.cursor() {
                    style = style.bg(Color::White).fg(Color::Black);
                }
                Span::styled(square_symbol(*square), style)
            });
            Line::from(spans.collect::<Vec<_>>())
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Board {} ", board.dimensions()));
    let paragraph = Paragraph::new(rows)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, area);
}

fn square_symbol(square: Square) -> String {
    match square {
        Square::Empty => " · ".to_string(),
        Square::Occupied(mark) => format!(" {} ", mark),
    }
}

fn square_style(engine: &GameEngine, square: Square) -> Style {
    match square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(mark) => {
            let slot = engine
                .marks()
                .as_slice()
                .iter()
                .position(|m| *m == mark)
                .unwrap_or(0);
            Style::default()
                .fg(MARK_COLORS[slot % MARK_COLORS.len()])
                .add_modifier(Modifier::BOLD)
        }
    }
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.engine().current_move();
    let show_selection = app.focus() == Focus::History;

    let lines: Vec<Line> = app
        .history_labels()
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let mut style = Style::default();
            if index == current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if show_selection && index == app.selected() {
                style = style.bg(Color::White).fg(Color::Black);
            }
            Line::from(Span::styled(label, style))
        })
        .collect();

    let scroll = history_scroll(app.selected(), area.height.saturating_sub(2));

    let paragraph = Paragraph::new(lines)
        .scroll((scroll, 0))
        .block(Block::default().borders(Borders::ALL).title(" History "));
    frame.render_widget(paragraph, area);
}

/// Rows to scroll so the selected entry stays inside `visible` rows.
fn history_scroll(selected: usize, visible: u16) -> u16 {
    let hidden = selected.saturating_add(1).saturating_sub(usize::from(visible));
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

fn draw_settings(frame: &mut Frame, area: Rect, app: &App) {
    let (height, width) = app.pending_dimensions();
    let text = format!(
        "Height: {}  Width: {}   [h/H] [w/W] resize  [r] restart  [Tab] history  [q] quit",
        height, width
    );
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}
