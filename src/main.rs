//! path-sanitizer - Entry Point
//!
//! Checks every path given on the command line and prints the usable path
//! (or why there is none), one line per argument.

use log::{error, info};
use std::process;
use std::sync::Arc;

use path_sanitizer::error::handlers::{error_exit_code, exit_code, handle_error};
use path_sanitizer::utils::logging::setup_logging;
use path_sanitizer::{RepairPolicy, SanitizerError, SanitizerSettings, check_path};

fn load_policy() -> Result<RepairPolicy, SanitizerError> {
    let settings = SanitizerSettings::load()?;
    Ok(settings.policy()?)
}

#[tokio::main]
async fn main() {
    setup_logging();

    let policy = match load_policy() {
        Ok(policy) => Arc::new(policy),
        Err(e) => {
            handle_error(&e);
            process::exit(error_exit_code(&e));
        }
    };

    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: path-sanitizer <path>...");
        process::exit(64);
    }

    info!("Checking {} path(s) with {:?}", paths.len(), policy);

    // Paths may share directory prefixes, so provisioning races are expected here
    let handles: Vec<_> = paths
        .into_iter()
        .map(|path| {
            let policy = Arc::clone(&policy);
            tokio::task::spawn_blocking(move || {
                let outcome = check_path(&path, &policy);
                (path, outcome)
            })
        })
        .collect();

    let mut status = 0;
    for handle in handles {
        match handle.await {
            Ok((path, Ok(outcome))) => {
                println!("{}\t{}", path, outcome);
                status = status.max(exit_code(&outcome));
            }
            Ok((path, Err(e))) => {
                let err = SanitizerError::from(e);
                handle_error(&err);
                println!("{}\terror: {}", path, err);
                status = status.max(error_exit_code(&err));
            }
            Err(e) => {
                error!("Path check task failed: {}", e);
                status = status.max(70);
            }
        }
    }

    process::exit(status);
}
