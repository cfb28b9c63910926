use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CRATE_TARGETS: [&str; 2] = ["gdaqrec_core", "gdaqrec_status"];

/// Initialize logging with optional verbose mode.
///
/// When `verbose` is false, only error-level events are emitted (default).
/// When `verbose` is true, info-level and above events are emitted.
/// `RUST_LOG` directives are honored on top of either level.
pub fn init_logging(verbose: bool) {
    let mut filter = EnvFilter::from_default_env();
    for directive in directives(verbose) {
        match directive.parse() {
            Ok(directive) => filter = filter.add_directive(directive),
            Err(e) => eprintln!("Warning: ignoring log directive: {}", e),
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .init();
}

fn directives(verbose: bool) -> Vec<String> {
    let level = if verbose { "info" } else { "error" };
    CRATE_TARGETS
        .iter()
        .map(|target| format!("{}={}", target, level))
        .collect()
}
