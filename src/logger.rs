//! Process-wide logger setup

use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Initialize the `env_logger` backend once per process
///
/// Defaults to `Info` for this crate; `RUST_LOG` overrides it.
pub fn initialize_logger() {
    INIT.call_once_force(|_| {
        let mut builder = Builder::new();

        builder
            .filter_level(LevelFilter::Info)
            .filter_module("hashbench", LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();

        // Another logger may already be installed, e.g. by a test harness
        let _ = builder.try_init();
    });
}


#[cfg(test)]
mod tests {
    use log::{debug, info, Level};

    use super::*;

    #[test]
    fn test_initialize_logger_twice() {
        // Tests share one process-wide logger; the capture logger claims it first
        capture::install();
        initialize_logger();
        initialize_logger();
        assert!(log::log_enabled!(Level::Info));

        debug!("Debug message in test");
        info!("Info message in test");
        assert!(capture::records_for("logger::tests")
            .iter()
            .any(|r| r.level == Level::Info && r.message == "Info message in test"));
    }
}
