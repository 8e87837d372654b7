use crate::config::GameConfig;
use crate::core::{Board, Command, Direction, History, LevelError, MoveOutcome, level};
use crossterm::event::KeyCode;
use std::path::{Path, PathBuf};

pub const MIN_ZOOM: u16 = 1;
pub const MAX_ZOOM: u16 = 3;

/// Where the board was loaded from; restart reloads from here.
#[derive(Debug, Clone)]
pub enum LevelSource {
    File(PathBuf),
    Builtin(&'static str),
}

impl LevelSource {
    pub fn load(&self, config: &GameConfig) -> Result<Board, LevelError> {
        match self {
            LevelSource::File(path) => level::load(path, config.rows, config.cols),
            // Built-in levels are raw strings with blank edge lines.
            LevelSource::Builtin(text) => {
                level::parse_sized(text.trim_matches('\n'), config.rows, config.cols)
            }
        }
    }

    pub fn name(&self) -> String {
        match self {
            LevelSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            LevelSource::Builtin(_) => "built-in".to_string(),
        }
    }
}

/// The turn loop is a small state machine: normal play, the two yes/no
/// prompts, filename entry for the save-on-abandon path, and the win
/// screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Playing,
    ConfirmRestart,
    ConfirmSave,
    EnterFilename { input: String },
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndState {
    Won,
    Abandoned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Continue,
    Quit(EndState),
}

/// Everything a running game owns: board, move history, zoom level and
/// the level source for restarts. No globals; the turn loop borrows this.
pub struct Session {
    pub board: Board,
    pub history: History,
    pub zoom: u16,
    pub mode: Mode,
    pub status: Option<String>,
    source: LevelSource,
    config: GameConfig,
}

impl Session {
    pub fn new(board: Board, source: LevelSource, config: GameConfig) -> Session {
        let history = History::with_capacity(config.history_capacity);
        Session {
            board,
            history,
            zoom: MIN_ZOOM,
            mode: Mode::Playing,
            status: None,
            source,
            config,
        }
    }

    pub fn level_name(&self) -> String {
        self.source.name()
    }

    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Apply one in-game command. Blocked moves change nothing and record
    /// nothing; an undo with empty history is a no-op.
    pub fn apply_command(&mut self, command: Command) {
        match command {
            Command::Move(direction) => {
                if let MoveOutcome::Moved { pushed } = self.board.apply_move(direction) {
                    self.history.record(direction, pushed);
                    if self.board.is_won() {
                        self.mode = Mode::Won;
                    }
                }
            }
            Command::Undo => {
                if let Some(record) = self.history.last() {
                    if let MoveOutcome::Moved { .. } = self.board.apply_inverse(record) {
                        self.history.pop();
                    }
                }
            }
            Command::Restart => self.mode = Mode::ConfirmRestart,
            Command::Abandon => self.mode = Mode::ConfirmSave,
            Command::ZoomIn => self.zoom = (self.zoom + 1).min(MAX_ZOOM),
            Command::ZoomOut => self.zoom = (self.zoom - 1).max(MIN_ZOOM),
        }
    }

    /// Reload the board from its original source and clear the history.
    pub fn restart(&mut self) -> Result<(), LevelError> {
        self.board = self.source.load(&self.config)?;
        self.history.reset();
        Ok(())
    }

    /// Write the board and the move log next to each other.
    pub fn save(&self, name: &str) -> std::io::Result<()> {
        level::save(&self.board, Path::new(name))?;
        std::fs::write(format!("{}.moves", name), self.history.serialize())
    }

    /// One keypress, interpreted according to the current mode.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<SessionEvent, Box<dyn std::error::Error>> {
        self.status = None;
        match &mut self.mode {
            Mode::Playing => {
                if let Some(command) = command_for_key(code) {
                    self.apply_command(command);
                }
            }
            Mode::ConfirmRestart => match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.restart()?;
                    self.mode = Mode::Playing;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.mode = Mode::Playing;
                }
                _ => {}
            },
            Mode::ConfirmSave => match code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.mode = Mode::EnterFilename {
                        input: String::new(),
                    };
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    return Ok(SessionEvent::Quit(EndState::Abandoned));
                }
                _ => {}
            },
            Mode::EnterFilename { input } => match code {
                KeyCode::Char(c) => input.push(c),
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Enter => {
                    if !input.is_empty() {
                        let name = input.clone();
                        match self.save(&name) {
                            Ok(()) => return Ok(SessionEvent::Quit(EndState::Abandoned)),
                            Err(err) => {
                                self.status = Some(format!("save failed: {}", err));
                            }
                        }
                    }
                }
                KeyCode::Esc => return Ok(SessionEvent::Quit(EndState::Abandoned)),
                _ => {}
            },
            Mode::Won => return Ok(SessionEvent::Quit(EndState::Won)),
        }
        Ok(SessionEvent::Continue)
    }
}

/// Key bindings for normal play.
pub fn command_for_key(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            Some(Command::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            Some(Command::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            Some(Command::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            Some(Command::Move(Direction::Right))
        }
        KeyCode::Char('u') | KeyCode::Char('U') => Some(Command::Undo),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Command::ZoomIn),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Command::ZoomOut),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Abandon),
        _ => None,
    }
}
