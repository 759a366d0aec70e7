use clap::Parser;
use color_eyre::Result;
use ratatui::crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::DefaultTerminal;
use std::io::stdout;

mod ai;
mod app;
mod clipboard;
mod config;
mod debounce;
mod history;
mod notification;
mod scroll;
mod storage;
mod theme;
mod widgets;

use app::App;

/// Terminal ML learning assistant powered by Gemini
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Terminal ML learning assistant: explanations, code examples, and audio lesson scripts"
)]
struct Args {
    /// Initial topic to prefill (e.g. "gradient descent")
    topic: Vec<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/gyanguru-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_logging();

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let terminal = init_terminal()?;

    let mut app = App::new(&config_result.config);
    if !args.topic.is_empty() {
        app.input.set_topic(&args.topic.join(" "));
    }

    let result = run(terminal, app, config_result);

    restore_terminal()?;
    result?;

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let log_file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/gyanguru-debug.log")
    {
        Ok(f) => f,
        Err(_) => return,
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== GYANGURU DEBUG SESSION STARTED ===");
}

/// Initialize terminal with raw mode, alternate screen, mouse capture,
/// and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            LeaveAlternateScreen
        );
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(
        stdout(),
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    ) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(
                stdout(),
                DisableMouseCapture,
                DisableBracketedPaste,
                LeaveAlternateScreen
            );
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    );
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_result: config::ConfigResult,
) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.warning(&warning);
    }

    setup_ai_worker(&mut app, &config_result.config);

    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the AI worker thread and channels
fn setup_ai_worker(app: &mut App, config: &config::Config) {
    if !config.ai.enabled {
        return;
    }

    if !app.ai.configured {
        app.notification.warning(
            "AI enabled but no API key found. Set GEMINI_API_KEY or add 'api_key' in [ai.gemini].",
        );
    }

    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.ai.set_channels(request_tx, response_rx);

    ai::worker::spawn_worker(&config.ai, request_rx, response_tx);
}
