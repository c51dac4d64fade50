use anyhow::Result;
use clap::Args;
use orthos_core::FieldKind;
use serde::Serialize;

use crate::commands::{print_json, Context};

#[derive(Debug, Args)]
pub struct FieldsArgs {}

#[derive(Debug, Serialize)]
struct FieldDto {
    name: String,
    kind: FieldKind,
}

pub fn list(ctx: &Context<'_>, _args: FieldsArgs) -> Result<()> {
    let fields = ctx.normalizer.fields();

    if ctx.json {
        let items: Vec<FieldDto> = fields
            .iter()
            .map(|(name, kind)| FieldDto {
                name: name.to_string(),
                kind,
            })
            .collect();
        print_json(&items)?;
        return Ok(());
    }

    if fields.is_empty() {
        println!("no classified fields");
        return Ok(());
    }

    for (name, kind) in fields.iter() {
        println!("{} ({})", name, kind_label(kind));
    }
    Ok(())
}

fn kind_label(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Uppercase => "uppercase",
        FieldKind::Lowercase => "lowercase",
        FieldKind::Phone => "phone",
    }
}
