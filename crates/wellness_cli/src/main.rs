//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `wellness_core` linkage and store bootstrap outside the UI host.
//! - Keep output deterministic `key=value` lines for quick sanity checks.

use std::process::ExitCode;
use wellness_core::db::migrations::latest_version;
use wellness_core::{CoreConfig, WellnessFacade, WellnessStore};

fn main() -> ExitCode {
    println!("wellness_core ping={}", wellness_core::ping());
    println!("wellness_core version={}", wellness_core::core_version());

    let config = CoreConfig::from_env();
    if let Some(log_dir) = config.log_dir.as_ref() {
        if let Err(err) = wellness_core::init_logging(&config.log_level, &log_dir.to_string_lossy())
        {
            eprintln!("logging=error message={err}");
            return ExitCode::FAILURE;
        }
    }

    let store = match WellnessStore::open(&config.db_path) {
        Ok(store) => store,
        Err(err) => {
            eprintln!(
                "store=error path={} message={err}",
                config.db_path.display()
            );
            return ExitCode::FAILURE;
        }
    };
    let schema_version = match store.schema_version() {
        Ok(version) => version,
        Err(err) => {
            eprintln!("store=error path={} message={err}", config.db_path.display());
            return ExitCode::FAILURE;
        }
    };
    println!(
        "store=ok path={} schema_version={schema_version} supported_version={}",
        config.db_path.display(),
        latest_version()
    );

    // `wellness_cli <principal>` prints that user's log sizes.
    if let Some(caller) = std::env::args().nth(1) {
        let facade = WellnessFacade::new(store);
        let summary = facade.get_activities(&caller).and_then(|activities| {
            let meetings = facade.get_meetings(&caller)?;
            let focus_blocks = facade.get_focus_blocks(&caller)?;
            let has_profile = facade.get_user_profile(&caller)?.is_some();
            Ok((has_profile, activities.len(), focus_blocks.len(), meetings.len()))
        });
        match summary {
            Ok((has_profile, activities, focus_blocks, meetings)) => println!(
                "user=ok profile={has_profile} activities={activities} focus_blocks={focus_blocks} meetings={meetings}"
            ),
            Err(err) => {
                eprintln!("user=error code={} message={err}", err.code());
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
