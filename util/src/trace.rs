use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_DIRECTIVES: &str = "info";

fn env_filter() -> EnvFilter { EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES)) }

/// Installs the global fmt subscriber, filtered by `RUST_LOG`.
///
/// `log` records (e.g. actix access logs) are forwarded to the same subscriber.
pub fn init_tracing_env_subscriber(json: bool) -> Result<(), TryInitError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    if json {
        builder.json().finish().try_init()
    } else {
        builder.finish().try_init()
    }
}

#[cfg(test)]
mod test {
    use super::init_tracing_env_subscriber;

    #[test]
    fn test_second_init_fails() {
        let first = init_tracing_env_subscriber(false);
        assert!(first.is_ok(), "{:?}", first);
        assert!(init_tracing_env_subscriber(true).is_err());
    }
}
