use todo::commands::Cli;
use todo::libs::messages::macros::is_debug_mode;
use tracing_subscriber::EnvFilter;

fn install_tracing() {
    // RUST_LOG when set and valid, otherwise everything at DEBUG.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init();
}

fn main() -> anyhow::Result<()> {
    if is_debug_mode() {
        install_tracing();
    }

    Cli::menu()
}
