//! Verify command handler

use std::path::PathBuf;

use anyhow::{Context, Result};

use deplock::application::VerifyResult;
use deplock::presentation::factory::create_verify_use_case;
use deplock::presentation::output::{render_verify, OutputFormat};

use super::ProjectContext;

/// Execute the verify command; `Ok(false)` means drift was found
pub fn cmd_verify(
    context: &ProjectContext,
    file: Option<PathBuf>,
    format: OutputFormat,
) -> Result<bool> {
    let options = context.options(file)?;

    let result = if options.skip {
        tracing::info!("Skipping verify");
        VerifyResult::Skipped
    } else {
        let descriptor = context.descriptor();
        let use_case = create_verify_use_case(&descriptor)
            .with_context(|| format!("failed to read descriptor {}", descriptor.display()))?;
        use_case.execute(&options)?
    };

    println!("{}", render_verify(&result, format));
    Ok(result.is_success())
}
