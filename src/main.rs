mod tui;

use std::io::{stdout, Stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use tokio::time::MissedTickBehavior;

use uiloop::{log, script, Config, DispatchError, Dispatcher, TerminalInput};

use tui::screens::{CounterScreen, SharedState};

/// Command line arguments
#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    tick_ms: Option<u64>,
    replay: Option<PathBuf>,
    log_events: Option<bool>,
}

impl Args {
    fn parse(args: &[String]) -> Self {
        let mut parsed = Args::default();

        let mut i = 0;
        while i < args.len() {
            match args[i].as_str() {
                "--config" | "-c" => {
                    if let Some(path) = args.get(i + 1) {
                        parsed.config = Some(PathBuf::from(path));
                        i += 1;
                    } else {
                        eprintln!("Warning: --config requires a path argument");
                    }
                }
                "--tick-ms" | "-t" => match args.get(i + 1).map(|v| v.parse::<u64>()) {
                    Some(Ok(ms)) => {
                        parsed.tick_ms = Some(ms);
                        i += 1;
                    }
                    _ => eprintln!("Warning: --tick-ms requires a number of milliseconds"),
                },
                "--replay" | "-r" => {
                    if let Some(path) = args.get(i + 1) {
                        parsed.replay = Some(PathBuf::from(path));
                        i += 1;
                    } else {
                        eprintln!("Warning: --replay requires a script path");
                    }
                }
                "--log-events" => parsed.log_events = Some(true),
                other => eprintln!("Warning: ignoring unknown argument '{}'", other),
            }
            i += 1;
        }

        parsed
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = Args::parse(&args);

    // Load config with precedence: CLI > env var > file > default
    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading {}", path.display()))?
            .with_env(),
        None => Config::load(),
    }
    .with_overrides(args.tick_ms, args.log_events);

    // Initialize logging and panic hook
    if let Ok(log_path) = log::init(&config.log_dir()) {
        log::log(&format!("Log file: {}", log_path.display()));
        log::log(&format!("Config: {:?}", config));
        log::install_panic_hook();
    }

    if let Some(script_path) = &args.replay {
        return replay(&config, script_path);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &config).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Play a recorded script against the demo screens without a terminal.
fn replay(config: &Config, script_path: &std::path::Path) -> Result<()> {
    let state = SharedState::default();
    let mut dispatcher = Dispatcher::new(config);
    let transitions = dispatcher.transitions();
    dispatcher.register(CounterScreen::boxed(&state, &transitions));

    let played = script::play_file(script_path, &mut dispatcher)
        .with_context(|| format!("replaying {}", script_path.display()))?;
    log::log(&format!("Replayed {} events from {}", played, script_path.display()));

    println!("Replayed {} events", played);
    println!("{}", state.borrow());
    Ok(())
}

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            key.code == KeyCode::Char('q')
                || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        _ => false,
    }
}

async fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &Config) -> Result<()> {
    let state = SharedState::default();
    let mut dispatcher = Dispatcher::new(config);
    let transitions = dispatcher.transitions();
    dispatcher.register(CounterScreen::boxed(&state, &transitions));

    let mut input = TerminalInput::new(config.swipe_velocity);
    let mut event_stream = EventStream::new();

    let mut ticker = tokio::time::interval(config.tick_period());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            // Terminal events are queued and delivered at the next tick
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => {
                        if is_quit(&event) {
                            break;
                        }
                        if let Some(ui_event) = input.translate(&event) {
                            match dispatcher.enqueue(ui_event) {
                                Ok(()) => {}
                                Err(DispatchError::QueueFull { capacity }) => {
                                    log::warn(&format!("Dropped {} (queue full at {})", ui_event, capacity));
                                }
                                Err(e) => return Err(e.into()),
                            }
                        }
                    }
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                }
            }

            _ = ticker.tick() => {
                dispatcher.drain()?;
                dispatcher.tick()?;
                terminal.draw(|frame| {
                    tui::ui::render(frame, &state.borrow(), dispatcher.tick_monitor())
                })?;
            }
        }
    }

    log::log(&format!("Exiting: {}", state.borrow()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        let args = Args::parse(&strings(&[
            "--tick-ms",
            "20",
            "--replay",
            "demo.toml",
            "--log-events",
        ]));
        assert_eq!(args.tick_ms, Some(20));
        assert_eq!(args.replay, Some(PathBuf::from("demo.toml")));
        assert_eq!(args.log_events, Some(true));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_args_bad_tick() {
        let args = Args::parse(&strings(&["--tick-ms", "soon"]));
        assert!(args.tick_ms.is_none());
    }

    #[test]
    fn test_quit_keys() {
        use crossterm::event::KeyEvent;

        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));

        assert!(is_quit(&q));
        assert!(is_quit(&ctrl_c));
        assert!(!is_quit(&c));
    }
}
