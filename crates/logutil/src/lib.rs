//! Global logger setup for binaries.
use tracing::Level;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install the global tracing subscriber.
///
/// `default_level` applies when `RUST_LOG` isn't set. Calling this more than
/// once keeps the first subscriber.
pub fn configure_global_logger(default_level: Level, format: LogFormat) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let builder = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true);

    let result = match format {
        LogFormat::Text => tracing::subscriber::set_global_default(builder.finish()),
        LogFormat::Json => tracing::subscriber::set_global_default(builder.json().finish()),
    };

    if result.is_err() {
        tracing::debug!("global logger already configured");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configure_twice() {
        configure_global_logger(Level::DEBUG, LogFormat::Text);
        configure_global_logger(Level::INFO, LogFormat::Json);
        tracing::info!("still logging");
    }
}
