use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;
use voxlink_core::GeneralConfig;

/// Install the global tracing subscriber from `[general] log_level`.
///
/// An unparseable directive falls back to `info`. Calling more than once is
/// harmless; later calls leave the installed subscriber in place, so
/// embedding tests can initialise freely.
pub fn init(general: &GeneralConfig) {
    let filter =
        EnvFilter::try_new(&general.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false),
    );

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let general = GeneralConfig::default();
        init(&general);
        init(&general);
    }

    #[test]
    fn test_init_with_garbage_filter_falls_back() {
        let general = GeneralConfig {
            log_level: "[[[not a directive".to_string(),
        };
        init(&general);
    }
}
