use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Args;
use tracing::debug;

use crate::commands::{print_json, Context};
use crate::error::invalid_input;

#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Read the record from this file instead of stdin.
    #[arg(long)]
    pub input: Option<PathBuf>,
}

/// The authoritative pass: normalizes a whole record (a flat JSON object
/// of field name to string value) before it is persisted. Unclassified
/// fields pass through untouched.
pub fn normalize(ctx: &Context<'_>, args: RecordArgs) -> Result<()> {
    let raw = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read record {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .with_context(|| "read record from stdin")?;
            buf
        }
    };

    let mut record: BTreeMap<String, String> = serde_json::from_str(&raw).map_err(|err| {
        invalid_input(format!("record must be a flat JSON object of strings: {err}"))
    })?;

    let changed = ctx.normalizer.normalize_record(&mut record);
    debug!(fields = record.len(), changed, "record normalized");

    print_json(&record)
}
