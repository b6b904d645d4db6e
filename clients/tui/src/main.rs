use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::{error::Error, io};

use pontoon::{Card, Engine, RoundObserver, RoundState, RoundStatus, Suit};

mod log_buffer;
use log_buffer::BufferLogger;

/// Logs each engine notification so the log panel tells the story of the
/// round as it happened.
struct RoundLogger;

impl RoundObserver for RoundLogger {
    fn round_updated(&mut self, state: &RoundState) {
        log::info!(
            "player {} | dealer {}",
            state.player().value(),
            state.house().value()
        );
        match state.status() {
            RoundStatus::PlayerWins => log::info!("You Win!"),
            RoundStatus::HouseWins => log::info!("Dealer Wins!"),
            RoundStatus::InProgress => {}
        }
    }
}

struct App {
    engine: Engine<rand::rngs::ThreadRng>,
    logs: Vec<String>,
    log_buffer: Arc<Mutex<VecDeque<String>>>,
}

impl App {
    fn new(log_buffer: Arc<Mutex<VecDeque<String>>>) -> App {
        let mut engine = Engine::new();
        engine.set_observer(Box::new(RoundLogger));
        App {
            engine,
            logs: vec!["Welcome to Pontoon!".to_string()],
            log_buffer,
        }
    }

    fn sync_logs(&mut self) {
        let messages: Vec<String> = if let Ok(mut buffer) = self.log_buffer.lock() {
            buffer.drain(..).collect()
        } else {
            Vec::new()
        };

        for msg in messages {
            self.logs.push(msg);
            // Keep only the last 20 entries
            if self.logs.len() > 20 {
                self.logs.remove(0);
            }
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let (logger, log_buffer) = BufferLogger::new();
    log::set_boxed_logger(Box::new(logger))
        .map(|()| log::set_max_level(log::LevelFilter::Info))?;

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // create app, deal the first round and run
    let mut app = App::new(log_buffer);
    app.engine.start_round();
    let res = run_app(&mut terminal, app);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}")
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        app.sync_logs();
        terminal.draw(|f| ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                KeyCode::Char('h') | KeyCode::Char('H') => app.engine.hit(),
                KeyCode::Char('s') | KeyCode::Char('S') => app.engine.stand(),
                KeyCode::Char('n') | KeyCode::Char('N') => app.engine.start_round(),
                _ => {}
            }
        }
    }
}

fn suit_color(suit: Suit) -> Color {
    match suit {
        Suit::Hearts => Color::Red,
        Suit::Diamonds => Color::from_u32(0x00FF_A500), // Orange
        Suit::Clubs => Color::Magenta,
        Suit::Spades => Color::Black,
    }
}

fn hand_spans(cards: &[Card]) -> Vec<Span<'static>> {
    if cards.is_empty() {
        return vec![Span::raw("No cards dealt")];
    }
    cards
        .iter()
        .map(|card| {
            Span::styled(
                format!("{} ", card.to_display()),
                Style::default().fg(suit_color(card.suit)).bg(Color::Gray),
            )
        })
        .collect()
}

fn ui(f: &mut Frame, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints(
            [
                Constraint::Length(3), // Title bar
                Constraint::Min(10),   // Table
                Constraint::Length(3), // Status bar
            ]
            .as_ref(),
        )
        .split(f.area());

    let title = Paragraph::new("Pontoon - Player vs. Dealer")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, main_chunks[0]);

    // Table on the left, running log on the right
    let main_horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)].as_ref())
        .split(main_chunks[1]);

    let table_area = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(main_horizontal[0]);

    let state = app.engine.state();

    let dealer = Paragraph::new(Line::from(hand_spans(state.house().cards()))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Dealer ({})", state.house().value())),
    );
    f.render_widget(dealer, table_area[0]);

    let player = Paragraph::new(Line::from(hand_spans(state.player().cards()))).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("Player ({})", state.player().value())),
    );
    f.render_widget(player, table_area[1]);

    let log_lines: Vec<Line> = app.logs.iter().map(|l| Line::from(l.as_str())).collect();
    let log_panel =
        Paragraph::new(log_lines).block(Block::default().borders(Borders::ALL).title("Log"));
    f.render_widget(log_panel, main_horizontal[1]);

    let (message, message_style) = match state.status() {
        RoundStatus::InProgress => (
            "Game in Progress...",
            Style::default().fg(Color::Yellow),
        ),
        RoundStatus::PlayerWins => (
            "You Win!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        RoundStatus::HouseWins => (
            "Dealer Wins!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(message, message_style),
        Span::raw("   [H]it  [S]tand  [N]ew game  [Q]uit"),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, main_chunks[2]);
}
