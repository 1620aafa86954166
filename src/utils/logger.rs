use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber on stderr, leaving stdout for the report.
///
/// `RUST_LOG` wins over the verbosity flag when set.
pub fn init_logger(verbose: bool, json: bool) {
    let default_directive = if verbose {
        "discount_facets=debug,info"
    } else {
        "discount_facets=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // Each layer is built separately because they sit at different depths
    // of the subscriber stack and thus have different type parameters.
    let (json_layer, compact_layer) = if json {
        let layer = fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .json();
        (Some(layer), None)
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_writer(std::io::stderr)
            .compact();
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(compact_layer)
        .init();
}
