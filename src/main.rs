use std::sync::Mutex;

use jugaad_guru::{App, AppConfig};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let config_path = std::env::var("JUGAAD_CONFIG").unwrap_or_else(|_| "config.yml".to_string());
    let config = AppConfig::load(&config_path)?;

    // Keep tracing output off the terminal the TUI is drawing on
    std::fs::create_dir_all(&config.log_dir)?;
    let trace_file = std::fs::File::create(config.log_dir.join("trace.log"))?;
    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(Mutex::new(trace_file))
        .init();

    let app = App::new(config).await?;
    let terminal = ratatui::init();
    let result = app.run(terminal).await;
    ratatui::restore();
    result
}
