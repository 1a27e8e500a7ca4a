use keepsake_core::{AppConfig, ContentPack};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Init logging; RUST_LOG overrides the default level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Keepsake starting");
    if let Err(e) = run() {
        eprintln!("Keepsake error: {e}");
        std::process::exit(1);
    }
}

fn run() -> keepsake_platform::Result<()> {
    let (config, source) = AppConfig::discover()?;
    info!("config source: {source}");
    let content = match config.content_pack() {
        Ok(content) => content,
        Err(err) => {
            warn!("content pack unusable, falling back to built-in content: {err}");
            ContentPack::default()
        }
    };
    keepsake_ui::run(config, content)
}
