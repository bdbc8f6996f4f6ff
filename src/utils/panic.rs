use std::{panic, process};

#[cfg(debug_assertions)]
use better_panic::Settings;
use color_eyre::{config::HookBuilder, eyre::Result};

use crate::infrastructure::tui::{real::RealTui, TuiLike};

/// Installs color-eyre hooks and a panic hook that first gives the terminal
/// back, then reports. Release builds write a human-panic dump; debug builds
/// print a full better-panic backtrace.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Please report it at {}/issues",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |panic_info| {
        match RealTui::new() {
            Ok(mut tui) => {
                if let Err(e) = tui.exit() {
                    log::error!("Unable to restore terminal: {e:?}");
                }
            }
            Err(e) => log::error!("Unable to open terminal for restore: {e:?}"),
        }

        let report = panic_hook.panic_report(panic_info).to_string();
        log::error!("Panic: {}", strip_ansi_escapes::strip_str(&report));

        #[cfg(not(debug_assertions))]
        {
            use human_panic::{handle_dump, print_msg, Metadata};
            let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
                .homepage(env!("CARGO_PKG_HOMEPAGE"));

            let file_path = handle_dump(&meta, panic_info);
            if print_msg(file_path, &meta).is_err() {
                eprintln!("{} crashed", env!("CARGO_PKG_NAME"));
            }
            eprintln!("{report}");
        }

        #[cfg(debug_assertions)]
        {
            Settings::auto()
                .most_recent_first(false)
                .lineno_suffix(true)
                .verbosity(better_panic::Verbosity::Full)
                .create_panic_handler()(panic_info);
        }

        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}
