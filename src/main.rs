use sitewatch::commands::Cli;
use sitewatch::libs::messages::macros::is_debug_mode;
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive(Level::DEBUG.into()))
            .init();
    }

    Cli::menu()
}
