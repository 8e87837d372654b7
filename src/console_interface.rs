use crate::core::Board;
use crate::session::{Mode, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, Box<dyn std::error::Error>>
{
    crossterm::terminal::enable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

pub fn cleanup_terminal() -> Result<(), Box<dyn std::error::Error>> {
    crossterm::terminal::disable_raw_mode()?;
    crossterm::execute!(io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Wait up to 50ms for a keypress; `None` on timeout so the caller keeps
/// polling.
pub fn poll_key() -> Result<Option<KeyCode>, Box<dyn std::error::Error>> {
    if event::poll(std::time::Duration::from_millis(50))? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(Some(code));
        }
    }
    Ok(None)
}

pub fn render_session(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &Session,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(3)])
            .split(f.area());

        // Board area
        let board_text = render_board_to_string(&session.board, session.zoom);
        let title = format!(
            "{} | moves: {} | zoom: {}",
            session.level_name(),
            session.move_count(),
            session.zoom
        );
        let board_paragraph = Paragraph::new(board_text)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(board_paragraph, chunks[0]);

        // Move trail under the board
        let trail_paragraph = Paragraph::new(session.history.serialize())
            .block(Block::default().borders(Borders::ALL).title("Moves"))
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Left);
        f.render_widget(trail_paragraph, chunks[1]);

        // Instructions / prompts
        let instructions = prompt_line(session);
        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[2]);
    })?;
    Ok(())
}

fn prompt_line(session: &Session) -> String {
    let line = match &session.mode {
        Mode::Playing => {
            "WASD or arrows to move | u undo | r restart | +/- zoom | q abandon".to_string()
        }
        Mode::ConfirmRestart => "Restart from the beginning? (y/n)".to_string(),
        Mode::ConfirmSave => "Save the game before quitting? (y/n)".to_string(),
        Mode::EnterFilename { input } => {
            format!("Save as: {}_ (Enter to save, Esc to skip)", input)
        }
        Mode::Won => "You win! Press any key to quit.".to_string(),
    };
    match &session.status {
        Some(status) => format!("{} | {}", line, status),
        None => line,
    }
}

/// Render the grid for the screen: combined cells collapse to their
/// occupant, and each cell is repeated `zoom` times in both axes.
pub fn render_board_to_string(board: &Board, zoom: u16) -> String {
    let mut result = String::new();
    for i in 0..board.rows() {
        for _ in 0..zoom {
            for j in 0..board.cols() {
                let pos = crate::core::Vec2 {
                    i: i as i32,
                    j: j as i32,
                };
                let ch = board
                    .cell(pos)
                    .map(|c| c.display_char())
                    .unwrap_or(' ');
                for _ in 0..zoom {
                    result.push(ch);
                }
            }
            result.push('\n');
        }
    }
    result
}
