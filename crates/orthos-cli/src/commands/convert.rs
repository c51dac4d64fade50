use anyhow::Result;
use clap::Args;
use orthos_core::{normalize_phone, CaseConverter};
use tracing::debug;

use crate::commands::{print_conversion, Context};

#[derive(Debug, Args)]
pub struct UpperArgs {
    pub text: String,
    /// Keep Greek accents instead of stripping them.
    #[arg(long)]
    pub keep_accents: bool,
}

#[derive(Debug, Args)]
pub struct LowerArgs {
    pub text: String,
}

#[derive(Debug, Args)]
pub struct PhoneArgs {
    pub number: String,
}

pub fn upper(ctx: &Context<'_>, args: UpperArgs) -> Result<()> {
    let output = if args.keep_accents {
        let converter = CaseConverter::new(false);
        debug!(transform = converter.transform_name(), "accents kept for this call");
        converter.to_uppercase(args.text.trim())
    } else {
        ctx.normalizer.case().to_uppercase(args.text.trim())
    };
    print_conversion(ctx, &args.text, &output)
}

pub fn lower(ctx: &Context<'_>, args: LowerArgs) -> Result<()> {
    let output = CaseConverter::to_lowercase(&args.text);
    print_conversion(ctx, &args.text, &output)
}

pub fn phone(ctx: &Context<'_>, args: PhoneArgs) -> Result<()> {
    let output = normalize_phone(args.number.trim(), ctx.normalizer.phone_config());
    print_conversion(ctx, &args.number, &output)
}
