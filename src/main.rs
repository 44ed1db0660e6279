use std::fs::{self, OpenOptions};
use std::io;
use std::process;
use std::sync::Arc;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use taskcraft::cli::{self, Cli, Commands};
use taskcraft::config::{default_config_path, Config};
use taskcraft::{App, Error, JsonFileMirror, Result};

/// Logs go to a file; the board owns the terminal.
fn init_logging(config: &Config) -> Result<()> {
    fs::create_dir_all(&config.data_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(config.log_path())?;

    let filter = EnvFilter::try_from_env("TASKCRAFT_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(Arc::new(file)).with_ansi(false))
        .try_init()
        .map_err(|e| Error::config(format!("failed to initialize logging: {e}")))
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match cli.config.clone().or_else(default_config_path) {
        Some(path) => Config::load_or_init(&path)?,
        None => Config::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    Ok(config)
}

fn run_board(app: &mut App<JsonFileMirror>) -> io::Result<()> {
    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = taskcraft::ui::run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_logging(&config)?;
    info!(data_dir = %config.data_dir.display(), "starting");

    let mut app = App::open(&config);

    match cli.command.unwrap_or(Commands::Board) {
        Commands::Board => {
            if let Err(err) = run_board(&mut app) {
                error!(error = %err, "board exited with error");
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
        command => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = cli::execute(command, &mut app, &mut stdout) {
                error!(error = %err, "command failed");
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
    }
    Ok(())
}
