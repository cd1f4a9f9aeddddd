use ruffo_chat::config::WidgetConfig;
use tracing::Level;

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing(level: Level) {
    // Launch installs its own logger when none is set yet.
    let _ = tracing_subscriber::fmt().with_max_level(level).try_init();
}

#[cfg(target_arch = "wasm32")]
fn init_tracing(level: Level) {
    let _ = dioxus::logger::init(level);
}

fn main() -> anyhow::Result<()> {
    let config = WidgetConfig::load()?;
    init_tracing(config.log_level);
    tracing::info!(api_base = %config.api_base, "Starting Ruffo chat");

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(ruffo_chat::ui::App);
    Ok(())
}
