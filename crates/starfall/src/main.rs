//! starfall - shooting star styles for page backgrounds, with a terminal preview.

mod styles;

use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use color_eyre::eyre::bail;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
};
use starfall_background::{Palette, StarField};
use starfall_config::Config;
use starfall_core::AnimationSpeed;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "starfall")]
#[command(about = "Generate shooting star animation styles and preview them in the terminal")]
#[command(version)]
struct Cli {
    /// Stars per batch (overrides config.toml)
    #[arg(short, long, global = true)]
    count: Option<usize>,

    /// Seed for reproducible batches (overrides config.toml)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate a batch of stars in the terminal (default)
    Preview,

    /// Print the inline style of every star in a batch
    Styles {
        /// Print a JSON array with each star's parameters
        #[arg(long)]
        json: bool,
    },

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location
    Path,

    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load_or_default();
    let count = cli.count.unwrap_or(config.count);
    let seed = cli.seed.or(config.seed);
    let palette = Palette::with_overrides(config.palette.clone());

    match cli.command.unwrap_or(Commands::Preview) {
        Commands::Preview => {
            let field = StarField::new(count, seed)?;
            let terminal = ratatui::init();
            let result = App::new(field, palette, config.speed).run(terminal);
            ratatui::restore();
            result
        }
        Commands::Styles { json } => {
            let field = StarField::new(count, seed)?;
            let mut out = std::io::stdout().lock();
            styles::write_styles(&mut out, &field, &palette, json)
        }
        Commands::Config { action } => run_config(action),
    }
}

fn run_config(action: ConfigAction) -> color_eyre::Result<()> {
    match action {
        ConfigAction::Path => println!("{}", Config::path()?.display()),
        ConfigAction::Init { force } => {
            let path = Config::path()?;
            if path.exists() && !force {
                bail!(
                    "config file already exists at {} (use --force to overwrite)",
                    path.display()
                );
            }
            Config::default().save_to(&path)?;
            println!("wrote {}", path.display());
        }
    }
    Ok(())
}

/// The terminal preview which holds the state and logic of the application.
#[derive(Debug)]
pub struct App {
    /// Is the application running?
    running: bool,
    /// Stars being animated.
    field: StarField,
    /// Colors used for star bodies and glows.
    palette: Palette,
    /// Current playback speed.
    speed: AnimationSpeed,
    /// When the current batch started animating.
    started: Instant,
}

impl App {
    /// Construct a new instance of [`App`].
    pub fn new(field: StarField, palette: Palette, speed: AnimationSpeed) -> Self {
        Self {
            running: false,
            field,
            palette,
            speed,
            started: Instant::now(),
        }
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        Ok(())
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let elapsed_ms = self.started.elapsed().as_millis() as u64;

        let chunks = Layout::vertical([
            Constraint::Fill(1),   // Sky
            Constraint::Length(1), // Help text
        ])
        .split(frame.area());

        self.field
            .render(frame, chunks[0], elapsed_ms, self.speed, &self.palette);

        let accent = Color::Rgb(255, 255, 150);
        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "r".bold().fg(accent),
            " new batch  ".dark_gray(),
            "s".bold().fg(accent),
            format!(" speed: {}  ", self.speed.name()).dark_gray(),
            format!("seed {}", self.field.seed()).dark_gray(),
        ])
        .centered();
        frame.render_widget(help, chunks[1]);
    }

    /// Reads the crossterm events and updates the state of [`App`].
    /// Polls with a short timeout to keep the animation smooth.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(_) => {}
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Esc | KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Char('r')) => self.new_batch(),
            (_, KeyCode::Char('s')) => self.cycle_speed(),
            _ => {}
        }
    }

    /// Replace the stars and restart the animation clock.
    fn new_batch(&mut self) {
        match self.field.regenerate() {
            Ok(()) => self.started = Instant::now(),
            Err(e) => warn!(error = %e, "keeping current batch"),
        }
    }

    /// Cycle through playback speeds.
    fn cycle_speed(&mut self) {
        self.speed = self.speed.next();
        debug!(speed = self.speed.name(), "changed preview speed");
    }

    /// Set running to false to quit the application.
    fn quit(&mut self) {
        self.running = false;
    }
}
