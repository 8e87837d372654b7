// Terminal Sokoban with ratatui
// Controls: WASD or arrow keys to move, u to undo, r to restart,
// +/- to zoom, q to abandon (with an optional save).
// Tiles: '#' wall, '@' player, '$' box, '.' target, '*' box on target,
// '+' player on target, ' ' floor.

use sokoterm::config::GameConfig;
use sokoterm::console_interface::{
    cleanup_terminal, poll_key, render_session, setup_terminal,
};
use sokoterm::session::{EndState, LevelSource, Session, SessionEvent};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io;
use std::path::{Path, PathBuf};

// A 12x12 level for when no file is given on the command line.
const DEFAULT_LEVEL: &str = r#"
############
#          #
#  . $ @   #
#          #
#  ###     #
#  . $     #
#      ##  #
#  .$      #
#      $.  #
#          #
#          #
############
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level_arg = std::env::args().nth(1);
    let config_arg = std::env::args().nth(2);

    let config = GameConfig::load_or_default(config_arg.as_deref().map(Path::new))?;
    let source = match level_arg {
        Some(path) => LevelSource::File(PathBuf::from(path)),
        None => LevelSource::Builtin(DEFAULT_LEVEL),
    };

    // A missing or unreadable level is fatal; nothing to play.
    let board = source.load(&config)?;
    let mut session = Session::new(board, source, config);

    let mut terminal = setup_terminal()?;
    let end = run(&mut terminal, &mut session);
    cleanup_terminal()?;

    match end? {
        EndState::Won => println!("You win!"),
        EndState::Abandoned => println!("Game abandoned"),
    }
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut Session,
) -> Result<EndState, Box<dyn std::error::Error>> {
    render_session(terminal, session)?;
    loop {
        let Some(code) = poll_key()? else {
            continue;
        };
        match session.handle_key(code)? {
            SessionEvent::Quit(end) => return Ok(end),
            SessionEvent::Continue => render_session(terminal, session)?,
        }
    }
}
