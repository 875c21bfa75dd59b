use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter,
    fmt::{format::Writer, time::FormatTime},
};

/// Timestamps as "DD Month - HH:MM:SS.micros" in local time.
struct CustomTimer;

impl FormatTime for CustomTimer {
    fn format_time(&self, writer: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(writer, "{} - {}", now.format("%d %B"), now.format("%H:%M:%S%.6f"))
    }
}

/// Installs the global subscriber. Logs go to stderr so command output stays pipeable.
///
/// `RUST_LOG` directives are honoured on top of `log_level`. Does nothing if a
/// subscriber is already installed.
pub fn setup_logger(log_level: LevelFilter) {
    let filter = EnvFilter::builder().with_default_directive(log_level.into()).from_env_lossy();

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_timer(CustomTimer)
        .with_level(true)
        .with_target(false)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn cli_log_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::DEBUG } else { LevelFilter::INFO }
}

pub fn setup_cli_logger(verbose: bool) {
    setup_logger(cli_log_level(verbose));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_log_level() {
        assert_eq!(cli_log_level(false), LevelFilter::INFO);
        assert_eq!(cli_log_level(true), LevelFilter::DEBUG);
    }
}
