// sortviz: step-by-step sorting algorithm visualizer

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::LevelFilter;
use ratatui::{backend::CrosstermBackend, Terminal};

use sortviz::config::Config;
use sortviz::session::Session;
use sortviz::snapshot::NullRenderer;
use sortviz::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Warnings only by default; RUST_LOG overrides (redirect stderr when using the TUI)
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortviz");

    let config = match Config::from_args(args.iter().skip(1).cloned()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("{}", Config::usage(program_name));
            std::process::exit(2);
        }
    };

    if config.show_help {
        println!("{}", Config::usage(program_name));
        return Ok(());
    }

    let headless = config.headless;
    let mut session = Session::new(config);

    if headless {
        run_headless(&mut session);
        return Ok(());
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(session);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// Sort without drawing and print the result
fn run_headless(session: &mut Session) {
    let before = session.data().to_vec();
    let stats = session.sort(&mut NullRenderer);

    println!("Algorithm: {}", session.algorithm());
    println!("Input:     {}", join(&before));
    println!("Output:    {}", join(session.data()));
    println!("Stats:     {}", stats);
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
