mod config;
mod controller;
mod error;
mod logging;
mod model;
mod view;

use std::io;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use controller::AppController;
use model::{AppModel, SpotifyCatalogClient};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Mood Ring Starting ===");

    let config = Config::from_env()?;
    tracing::info!(
        accounts_url = %config.accounts_url,
        api_url = %config.api_url,
        market = %config.market,
        "Configuration loaded"
    );

    let catalog = SpotifyCatalogClient::new(
        config.accounts_url.clone(),
        config.api_url.clone(),
        config.market.clone(),
        config.http_timeout,
    )?;

    let model = AppModel::new();
    let controller = AppController::new(model.clone(), Arc::new(catalog));

    // Without a token no search can succeed, so this is fatal
    if let Err(e) = controller.startup(&config.credentials).await {
        tracing::error!(error = %e, "Startup failed");
        return Err(e.into());
    }

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model, controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableBracketedPaste, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Mood Ring shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: AppModel,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let ui_state = model.get_ui_state().await;

        terminal.draw(|f| {
            AppView::render(f, &ui_state);
        })?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => controller.handle_key_event(key).await,
                Event::Paste(text) => controller.handle_paste(&text).await,
                _ => {}
            }
        }

        if model.should_quit().await {
            break;
        }
    }

    Ok(())
}
