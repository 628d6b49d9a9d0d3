use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use wilt::app::AppState;
use wilt::domain::{format_remaining, time_remaining, TimeBucket, Task};
use wilt::persistence::{
    ensure_data_dir, init_local_data_dir, load_settings, persist_on_publish, save_settings,
    settings_file, tasks_file, JsonFileRepository, Settings, TaskRepository,
};
use wilt::store::TaskStore;
use wilt::{input, logging, ticker, ui};

#[derive(Parser)]
#[command(name = "wilt")]
#[command(about = "A terminal to-do list where tasks fade as their time budget runs out", long_about = None)]
struct Cli {
    /// Seconds between decay checks (overrides settings.json)
    #[arg(long, global = true)]
    tick_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .wilt directory in the current directory
    Init,
    /// Add a task
    Add {
        /// Task text
        text: String,
        /// Time limit: minutes (1, 15, 60, 1440) or a label like "15 min"
        #[arg(short, long)]
        limit: Option<String>,
    },
    /// List tasks that are still alive in a bucket
    List {
        /// Bucket to show. Defaults to the last selected one.
        #[arg(short, long)]
        limit: Option<String>,
        /// Show every stored task, including abandoned ones
        #[arg(short, long)]
        all: bool,
    },
    /// Run one decay check and save the result
    Sweep,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            logging::init_stderr_logging();
            let current_dir = std::env::current_dir().context("Could not determine current directory")?;
            let dir = init_local_data_dir(&current_dir)?;
            println!("Initialized wilt directory: {}", dir.display());
            Ok(())
        }
        Some(Commands::Add { text, limit }) => {
            logging::init_stderr_logging();
            let dir = ensure_data_dir()?;
            let settings = load_settings(settings_file(&dir))?;
            let bucket = limit
                .as_deref()
                .map(TimeBucket::from_label)
                .unwrap_or_else(|| settings.bucket());

            let mut store = open_store(&dir)?;
            match store.add_task(&text, bucket, Utc::now()) {
                Some(_) => {
                    println!("Added to {}: {}", bucket.label(), text.trim());
                    Ok(())
                }
                None => anyhow::bail!("Task text cannot be empty"),
            }
        }
        Some(Commands::List { limit, all }) => {
            logging::init_stderr_logging();
            let dir = ensure_data_dir()?;
            let settings = load_settings(settings_file(&dir))?;
            let bucket = limit
                .as_deref()
                .map(TimeBucket::from_label)
                .unwrap_or_else(|| settings.bucket());

            let mut store = open_store(&dir)?;
            let now = Utc::now();
            // No ticker here, so expire what is due before printing
            let rows = store.decayed_rows(bucket, now);
            if all {
                for task in store.snapshot().iter() {
                    println!("{}", describe_task(task, now));
                }
            } else {
                for row in rows {
                    let mark = if row.completed { "x" } else { " " };
                    println!("[{}] {:>3.0}%  {}", mark, row.progress * 100.0, row.text);
                }
            }
            Ok(())
        }
        Some(Commands::Sweep) => {
            logging::init_stderr_logging();
            let dir = ensure_data_dir()?;
            let mut store = open_store(&dir)?;
            let report = store.decay(Utc::now());
            println!(
                "Checked {} tasks, {} abandoned, {} skipped",
                report.evaluated,
                report.abandoned.len(),
                report.skipped.len()
            );
            Ok(())
        }
        None => run_tui(cli.tick_secs),
    }
}

/// Load the stored collection and save it back on every change
fn open_store(dir: &Path) -> Result<TaskStore> {
    let repo = JsonFileRepository::new(tasks_file(dir));
    let tasks = repo.load()?;
    let mut store = TaskStore::new(tasks);
    persist_on_publish(&mut store, repo);
    Ok(store)
}

/// One line per task for `list --all`
fn describe_task(task: &Task, now: chrono::DateTime<Utc>) -> String {
    let mark = if task.completed { "x" } else { " " };
    let state = if task.abandoned {
        "abandoned".to_string()
    } else {
        match (task.bucket(), time_remaining(task, now)) {
            (Some(bucket), Some(left)) => format!("{}, {} left", bucket.label(), format_remaining(left)),
            (None, Some(left)) => format!("{} left", format_remaining(left)),
            _ => "no limit".to_string(),
        }
    };
    format!("[{}] {}  ({})", mark, task.text, state)
}

fn run_tui(tick_override: Option<u64>) -> Result<()> {
    let dir = ensure_data_dir()?;
    let _log_guard = logging::init_file_logging(&dir)?;
    eprintln!("Using wilt directory: {}", dir.display());

    let settings_path = settings_file(&dir);
    let mut settings = load_settings(&settings_path)?;
    if let Some(secs) = tick_override {
        settings.tick_secs = secs;
    }

    let store = open_store(&dir)?;
    tracing::info!(tasks = store.len(), tick_secs = settings.tick_secs, "starting");
    let mut app = AppState::new(store, settings.bucket(), settings.tick_interval())
        .with_source(Box::new(JsonFileRepository::new(tasks_file(&dir))));
    app.use_emoji = settings.use_emoji;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    // Stop decay before anything else, whatever run_app returned
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let updated = Settings {
        selected_bucket: app.selected_bucket.minutes(),
        ..settings
    };
    if let Err(e) = save_settings(&settings_path, &updated) {
        tracing::warn!(error = %e, "failed to save settings");
        eprintln!("Error saving settings: {}", e);
    }

    if let Err(err) = &result {
        tracing::error!(error = %err, "exited with error");
    }
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let frame = ticker::frame_duration();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        let timeout = app
            .ticker
            .time_until_due(Instant::now())
            .map_or(frame, |due| due.min(frame))
            .max(Duration::from_millis(1));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press && input::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.on_frame(Instant::now());
    }
}
