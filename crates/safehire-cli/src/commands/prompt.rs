//! Instruction template command.

use anyhow::Result;
use safehire_core::{PromptBuilder, Settings};

pub fn execute(settings: &Settings) -> Result<()> {
    let template = PromptBuilder::new(settings.prompt.clone()).build_now();
    print!("{}", template);
    Ok(())
}
