use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use chrono::Utc;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use waypoint::app::App;
use waypoint::config::{self, Config};
use waypoint::store::{self, LocationStore};
use waypoint::ui;

#[derive(Debug, Parser)]
#[command(
    name = "waypoint",
    version,
    about = "Waypoint: browse saved map locations in the terminal"
)]
struct Args {
    /// Config file (defaults to ~/.config/waypoint/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON file with categories and locations; overrides `data_file`
    #[arg(long)]
    data: Option<PathBuf>,

    /// Route to open on start, e.g. /favorites
    #[arg(long)]
    route: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let config_path = args.config.clone().or_else(config::config_path);
    let mut config = match config_path.as_deref() {
        Some(path) => config::load_from(path),
        None => Config::default(),
    };
    if let Some(route) = args.route.clone() {
        config.start_route = route;
    }

    let data_file = args.data.clone().or_else(|| config.data_file.clone());
    let (store, data_source) = open_store(data_file, &config)?;

    let mut app = App::new(store, &config);
    app.config_path = config_path;
    app.data_source = data_source;

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("{err:?}");
        eprintln!("{err:?}");
    }

    Ok(())
}

fn open_store(data_file: Option<PathBuf>, config: &Config) -> Result<(LocationStore, String)> {
    let (store, source) = match data_file {
        Some(path) => {
            let store = store::seed::load(&path)?;
            (store, path.display().to_string())
        }
        None => {
            let store = store::mock::seed(Utc::now()).context("build demo data")?;
            (store, "built-in demo data".to_string())
        }
    };
    Ok((store.with_recent_limit(config.recent_limit), source))
}

/// The terminal belongs to the UI, so log lines go to a file
fn init_logging() {
    let Some(path) = config::log_path() else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();
    log::info!("waypoint {} starting", env!("CARGO_PKG_VERSION"));
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let tick_rate = Duration::from_millis(200);
    let mut last_tick = Instant::now();

    loop {
        app.sync_context();
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            log::info!("waypoint exiting");
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
