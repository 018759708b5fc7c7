use tracing_subscriber::EnvFilter;

/// Compact logs on stderr. `RUST_LOG` overrides the `info` default, e.g.
/// `RUST_LOG=coin_alert=debug` to see why each entry was skipped.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .ok();
}
