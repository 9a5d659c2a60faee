mod input;
mod render;
mod runtime;
mod ui;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use bookstand_core::{logging, CoreConfig, CoreRuntime, SessionStore};

use crate::ui::notifications::Notification;
use crate::ui::App;

/// Terminal back office for the bookstore.
#[derive(Parser, Debug)]
#[command(name = "bookstand", version, about)]
struct Cli {
    /// Base URL of the bookstore API server.
    #[arg(long)]
    api_url: Option<String>,

    /// Directory for the session marker and other local state.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Append logs to this file instead of discarding them.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CoreConfig::from_env();
    if let Some(api_url) = cli.api_url.as_deref() {
        config.set_api_url(api_url);
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(log_file) = cli.log_file {
        config.log_file = Some(log_file);
    }

    logging::init(config.log_file.as_deref())?;
    tracing::info!(api_url = %config.api_url, "starting bookstand");

    // Put the terminal back together before any panic message prints.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ui::restore_terminal();
        default_hook(panic_info);
    }));

    let mut core = CoreRuntime::new(&config).context("could not build the API client")?;
    let api_events = core
        .take_event_rx()
        .ok_or_else(|| anyhow!("core runtime already handed out its event stream"))?;

    let session = SessionStore::load(&config.data_dir);
    let mut app = App::new(core.handle(), session, config.credentials.clone());
    if let Some(warning) = app.session.take_error() {
        app.notify(Notification::warning(warning));
    }
    if app.session.is_authenticated() {
        app.enter_books();
    }

    let mut terminal = ui::init_terminal()?;
    let result = runtime::run_app(&mut terminal, &mut app, api_events).await;

    core.shutdown().await;
    ui::restore_terminal()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }
    Ok(())
}
