use tracing_subscriber::EnvFilter;

pub const DEFAULT_DIRECTIVE: &str = "seindb=info";
pub const VERBOSE_DIRECTIVE: &str = "seindb=debug";

/// `RUST_LOG` wins over the defaults; `verbose` adds debug output for this crate.
pub fn init_tracing(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_target(false)
        .init();
}

fn env_filter(verbose: bool) -> EnvFilter {
    let directive = if verbose { VERBOSE_DIRECTIVE } else { DEFAULT_DIRECTIVE };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}
