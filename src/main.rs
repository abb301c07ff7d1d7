mod app;
mod domain;
mod input;
mod notifications;
mod persistence;
mod ticker;
mod ui;

use anyhow::Result;
use app::AppState;
use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use domain::{Filter, IdGenerator};
use persistence::{ensure_tick_dir, init_local_tick, load_tasks, tasks_file};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

#[derive(Parser)]
#[command(name = "tick")]
#[command(about = "A tiny terminal task list with filters and local persistence", long_about = None)]
struct Cli {
    /// Use ASCII glyphs instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Initial filter: all, pending or completed (unknown names are rejected)
    #[arg(long, value_parser = Filter::from_name, default_value = "all")]
    filter: Filter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a local .tick directory in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            // Initialize local .tick directory
            let tick_dir = init_local_tick()?;
            println!("Initialized tick directory: {}", tick_dir.display());
            println!();
            println!("Tick will now use this local directory for task storage.");
            println!("Run 'tick' to start managing tasks.");
            Ok(())
        }
        None => {
            // Run the normal TUI application
            run_tui(!cli.ascii, cli.filter)
        }
    }
}

fn run_tui(use_emoji: bool, filter: Filter) -> Result<()> {
    // Ensure tick directory exists
    let tick_dir = ensure_tick_dir()?;
    eprintln!("Using tick directory: {}", tick_dir.display());

    // Load tasks once; a missing or corrupt store loads as an empty list
    let store_path = tasks_file()?;
    let tasks = load_tasks(&store_path);

    // Create app state with the id generator seeded past any stored id
    let ids = IdGenerator::seeded_from(&tasks);
    let mut app = AppState::new(tasks, ids, store_path, filter, use_emoji);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Save on exit
    if app.needs_save {
        if let Err(e) = app.save() {
            eprintln!("Error saving state: {}", e);
        }
    }

    // Print any errors
    if let Err(err) = result {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut AppState) -> Result<()> {
    let tick_rate = ticker::tick_duration();

    loop {
        // Render
        terminal.draw(|f| ui::render(f, app))?;

        // Handle events with timeout for ticking
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    let should_quit = input::handle_key(app, key)?;

                    // Persist before the next event is processed
                    if app.needs_save {
                        app.save()?;
                    }

                    if should_quit {
                        return Ok(());
                    }
                }
            }
        }

        // Expire transient flash messages (never touches task state)
        app.tick();
    }
}
