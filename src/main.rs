//! jt-compare - side-by-side JSON/Text comparison
//!
//! Binary entry point: the interactive TUI by default, or a text/HTML
//! report when `--output` asks for one.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use jt_compare::app::App;
use jt_compare::cli::{self, Cli, Inputs, OutputMode};
use jt_compare::logging;
use jt_compare::model;

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Cli::parse();
    let _log_guard = logging::init_logging(&args.logging_config());

    let inputs = cli::load_inputs(args.left.as_deref(), args.right.as_deref())?;

    match args.output {
        OutputMode::Tui => {
            let app = App::with_inputs(&inputs.unwrap_or_else(Inputs::sample), args.theme.into());
            let terminal = ratatui::init();
            let _restore = scopeguard::guard((), |_| ratatui::restore());
            run(terminal, app)?;
            Ok(ExitCode::SUCCESS)
        }
        mode => {
            let inputs = inputs.unwrap_or_else(Inputs::sample);
            let comparison = model::compare(&inputs.left, &inputs.right);
            print!("{}", cli::render_report(&comparison, mode));
            Ok(if comparison.is_identical() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }
    tracing::info!("exiting");
    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so expired notifications disappear
/// without a key press.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    } else {
        app.clear_expired_notification();
    }
    Ok(())
}
