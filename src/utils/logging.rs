//! File logging
//!
//! `log` macros are bridged into a `tracing` subscriber that writes to
//! `courseboard.log` under the data directory. The terminal itself is owned
//! by the UI, so nothing is printed to stderr.

use std::{env, fs};

use color_eyre::eyre::Result;
use lazy_static::lazy_static;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt,
    Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase();
}

/// Our own crate at info, HTTP internals only when they warn
pub fn default_directives() -> String {
    format!(
        "{}=info,reqwest=warn,hyper=warn,hyper_util=warn",
        env!("CARGO_CRATE_NAME")
    )
}

/// `RUST_LOG` first, then `COURSEBOARD_LOGLEVEL`, then the defaults
pub fn log_directives(rust_log: Option<String>, app_level: Option<String>) -> String {
    rust_log
        .or(app_level)
        .filter(|directives| !directives.trim().is_empty())
        .unwrap_or_else(default_directives)
}

pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    fs::create_dir_all(&directory)?;
    let log_file = fs::File::create(directory.join(LOG_FILE.as_str()))?;

    let directives = log_directives(env::var("RUST_LOG").ok(), env::var(LOG_ENV.as_str()).ok());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| {
        EnvFilter::new(default_directives())
    });

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(filter);
    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Similar to the `std::dbg!` macro, but generates `tracing` events rather
/// than printing to stdout.
///
/// By default, the verbosity level for the generated events is `DEBUG`, but
/// this can be customized.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some("debug"), Some("warn"), "debug")]
    #[case(None, Some("courseboard=trace"), "courseboard=trace")]
    #[case(Some(" "), None, "courseboard=info,reqwest=warn,hyper=warn,hyper_util=warn")]
    #[case(None, None, "courseboard=info,reqwest=warn,hyper=warn,hyper_util=warn")]
    fn test_log_directives(
        #[case] rust_log: Option<&str>,
        #[case] app_level: Option<&str>,
        #[case] expected: &str,
    ) {
        assert_eq!(
            log_directives(rust_log.map(String::from), app_level.map(String::from)),
            expected
        );
    }

    #[test]
    fn test_project_name() {
        assert_eq!(PROJECT_NAME.as_str(), "COURSEBOARD");
        assert_eq!(LOG_FILE.as_str(), "courseboard.log");
        assert_eq!(LOG_ENV.as_str(), "COURSEBOARD_LOGLEVEL");
    }
}
