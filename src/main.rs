//! deplock CLI - lock and verify resolved dependencies
//!
//! Usage: deplock <COMMAND>
//!
//! Commands:
//!   lock      Resolve dependencies and write the lock file
//!   verify    Check resolved dependencies against the lock file
//!   profiles  List profiles and whether they are active here
//!
//! Exit codes: 0 success, 1 drift or failure, 2 configuration error.

mod commands;

use anyhow::Result;
use clap::Parser;

use deplock::presentation::{Cli, Commands, OutputFormat};
use deplock::DeplockError;

use commands::ProjectContext;

fn main() {
    let cli = Cli::parse();
    deplock::logging::init(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            let (label, code) = if is_configuration(&err) {
                ("Configuration error", 2)
            } else {
                ("Error", 1)
            };
            eprintln!("{}: {:#}", label, err);
            std::process::exit(code);
        }
    }
}

/// Run one command; `Ok(false)` means verification found drift
fn run(cli: Cli) -> Result<bool> {
    let format = OutputFormat::from_json_flag(cli.json);
    let context = ProjectContext::load(&cli.project_dir, &cli.properties)?;

    match cli.command {
        Commands::Lock {
            file,
            lock_build,
            mark_ignored,
        } => commands::cmd_lock(&context, file, lock_build, mark_ignored, format).map(|()| true),
        Commands::Verify { file } => commands::cmd_verify(&context, file, format),
        Commands::Profiles => commands::cmd_profiles(&context, format).map(|()| true),
    }
}

fn is_configuration(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<DeplockError>())
        .any(DeplockError::is_configuration)
}
