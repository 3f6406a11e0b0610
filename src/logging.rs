//! Diagnostic logging setup
//!
//! User-facing narration goes through [`crate::ui`]; tracing carries the
//! debug detail behind it (process spawns, exit statuses, resolved IDs).

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "conan_pin=warn";
const VERBOSE_FILTER: &str = "conan_pin=debug";

/// Install the global subscriber writing to stderr.
///
/// `RUST_LOG` wins over `verbose` when set. Calling this twice is harmless.
pub fn init(verbose: bool) {
    let fallback = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .compact()
        .try_init();

    if let Err(e) = installed {
        tracing::debug!(error = %e, "Keeping the already installed subscriber");
    }
}
