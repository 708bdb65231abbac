//! Lock command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use deplock::application::LockResult;
use deplock::presentation::factory::create_lock_use_case;
use deplock::presentation::output::{render_lock, OutputFormat};

use super::ProjectContext;

/// Execute the lock command
pub fn cmd_lock(
    context: &ProjectContext,
    file: Option<PathBuf>,
    lock_build: bool,
    mark_ignored: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut options = context.options(file)?;
    options.lock_build |= lock_build;
    options.mark_ignored |= mark_ignored;

    if options.skip {
        tracing::info!("Skipping lock");
        println!("{}", render_lock(&LockResult::Skipped, format));
        return Ok(());
    }

    let descriptor = context.descriptor();
    let use_case = create_lock_use_case(&descriptor)
        .with_context(|| format!("failed to read descriptor {}", descriptor.display()))?;
    let result = use_case.execute(&options)?;

    println!("{}", render_lock(&result, format));
    Ok(())
}
