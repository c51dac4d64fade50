use anyhow::Result;
use orthos_core::Normalizer;
use serde::Serialize;
use std::io::{self, Write};

pub mod completions;
pub mod convert;
pub mod fields;
pub mod record;

pub struct Context<'a> {
    pub normalizer: &'a Normalizer,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Shared output shape for the single-value conversion commands.
pub fn print_conversion(ctx: &Context<'_>, input: &str, output: &str) -> Result<()> {
    if ctx.json {
        print_json(&serde_json::json!({ "input": input, "output": output }))?;
    } else {
        println!("{}", output);
    }
    Ok(())
}
