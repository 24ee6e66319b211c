mod app;
mod app_log;
mod args;
mod command;
mod event;

use std::io;

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use curator_core::AdminClient;

use crate::app::App;
use crate::args::Args;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(app_log::ActivityMakeWriter::default())
        .with_ansi(false)
        .init();

    let mut config = curator_config::Config::load();
    if let Some(path) = &args.config {
        config.merge(curator_config::Config::load_from(path)?);
    }
    if let Some(base_url) = args.base_url {
        config.api.base_url = Some(base_url);
    }

    let client = AdminClient::new(config.base_url(), config.request_timeout())?;

    install_panic_hook();

    terminal::enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(client, &config);
    let result = app.run(&mut terminal).await;

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;

    result
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}
