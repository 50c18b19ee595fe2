//! Logging integration for the databrowser-rs toolkit.
//!
//! Provides a helper for configuring [`tracing`]-based logging and for
//! creating per-conversion spans so that all diagnostics emitted while a
//! form is being generated carry the model name.

/// Sets up the global tracing subscriber.
///
/// The log level is given as an `EnvFilter` directive (e.g. "debug", "info",
/// "databrowser_rs_forms=trace"). In debug mode a pretty, human-readable
/// format is used; in production a structured JSON format is used.
///
/// Installation is best-effort: if a subscriber is already installed the
/// call is a no-op.
pub fn setup_logging(log_level: &str, debug: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one form-generation pass.
///
/// # Examples
///
/// ```
/// use databrowser_rs_core::logging::conversion_span;
///
/// let span = conversion_span("User");
/// let _guard = span.enter();
/// tracing::debug!("converting properties");
/// ```
pub fn conversion_span(model: &str) -> tracing::Span {
    tracing::debug_span!("convert", model = model)
}
