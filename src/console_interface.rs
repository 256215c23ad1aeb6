use crate::core::{Direction, Grid, UserAction};
use crate::models::GameRenderState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::Duration;

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

pub fn render_game(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &GameRenderState,
) -> Result<(), Box<dyn std::error::Error>> {
    terminal.draw(|f| {
        let chunks = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        // Game area
        let game_text = render_grid_to_string(&state.game.grid, state.tile_width);
        let game_paragraph = Paragraph::new(game_text)
            .block(Block::default().borders(Borders::ALL).title("Tilefall"))
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Center);
        f.render_widget(game_paragraph, chunks[0]);

        // Instructions
        let instructions = format!(
            "Controls: WASD or Arrow keys to move, R to reset, Q to quit | Wins: {}",
            state.wins
        );

        let instructions = if let Some(outcome) = &state.last_outcome {
            format!("{} | Last: {:?}", instructions, outcome)
        } else {
            instructions
        };

        let instruction_paragraph = Paragraph::new(instructions)
            .block(Block::default().borders(Borders::ALL).title("Instructions"))
            .style(Style::default().fg(Color::Cyan))
            .alignment(Alignment::Center);
        f.render_widget(instruction_paragraph, chunks[1]);
    })?;
    Ok(())
}

/// Draws each cell as `tile_width` copies of its glyph.
pub fn render_grid_to_string(grid: &Grid, tile_width: u16) -> String {
    let mut result = String::new();
    for row in grid.rows() {
        for tile in row {
            for _ in 0..tile_width.max(1) {
                result.push(tile.symbol());
            }
        }
        result.push('\n');
    }
    result
}

pub enum ConsoleInput {
    UserAction(UserAction),
    Quit,
    Timeout,
    Unknown,
}

pub fn handle_input(timeout: Duration) -> Result<ConsoleInput, Box<dyn std::error::Error>> {
    if event::poll(timeout)? {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(input_from_key(code));
        }
        return Ok(ConsoleInput::Unknown);
    }
    Ok(ConsoleInput::Timeout)
}

pub fn input_from_key(code: KeyCode) -> ConsoleInput {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ConsoleInput::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => ConsoleInput::UserAction(UserAction::Reset),
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Up))
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Down))
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Left))
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            ConsoleInput::UserAction(UserAction::Move(Direction::Right))
        }
        _ => ConsoleInput::Unknown,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::LevelDescriptor;

    #[test]
    fn renders_one_block_per_cell() {
        let grid = LevelDescriptor::sample().build().unwrap().grid;
        let text = render_grid_to_string(&grid, 2);
        let first_rows: Vec<&str> = text.lines().take(2).collect();
        assert_eq!(first_rows, vec!["################", "##@@  ::::::  ##"]);
        assert_eq!(text.lines().count(), 6);
    }

    #[test]
    fn keys_map_to_commands() {
        assert!(matches!(input_from_key(KeyCode::Left), ConsoleInput::UserAction(UserAction::Move(Direction::Left))));
        assert!(matches!(input_from_key(KeyCode::Char('d')), ConsoleInput::UserAction(UserAction::Move(Direction::Right))));
        assert!(matches!(input_from_key(KeyCode::Char('r')), ConsoleInput::UserAction(UserAction::Reset)));
        assert!(matches!(input_from_key(KeyCode::Esc), ConsoleInput::Quit));
        assert!(matches!(input_from_key(KeyCode::Char('x')), ConsoleInput::Unknown));
    }
}
