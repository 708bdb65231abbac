//! Profiles command handler

use anyhow::{Context, Result};

use deplock::presentation::factory::create_profiles_use_case;
use deplock::presentation::output::{render_profiles, OutputFormat};

use super::ProjectContext;

/// Execute the profiles command
pub fn cmd_profiles(context: &ProjectContext, format: OutputFormat) -> Result<()> {
    let options = context.options(None)?;
    let descriptor = context.descriptor();
    let use_case = create_profiles_use_case(&descriptor)
        .with_context(|| format!("failed to read descriptor {}", descriptor.display()))?;

    let profiles = use_case.execute(&options)?;
    println!("{}", render_profiles(&profiles, format));
    Ok(())
}
