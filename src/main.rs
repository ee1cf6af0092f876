//! stake-reth CLI entry point

use clap::Parser;
use reth_tracing::{RethTracer, Tracer};
use stake_reth::{cli::Cli, registry::BackendRegistry, version::client_version_string};
use tracing::info;

fn main() {
    // Enable backtraces by default
    if std::env::var_os("RUST_BACKTRACE").is_none() {
        unsafe { std::env::set_var("RUST_BACKTRACE", "1") };
    }

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> eyre::Result<()> {
    let _guard = RethTracer::new().init()?;
    info!(target: "stake_reth::cli", "Version: {}", client_version_string());

    // Backends are resolved through this registry only; nothing is global.
    let registry = BackendRegistry::builtin();
    cli.run(&registry)
}
