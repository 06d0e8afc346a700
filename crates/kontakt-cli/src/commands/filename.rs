use crate::commands::record::{RecordArgs, Session};
use crate::commands::{print_json, Context};
use crate::util::VCF_EXTENSION;
use anyhow::Result;
use clap::Args;
use kontakt_core::build_safe_file_name;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct FilenameArgs {
    #[command(flatten)]
    pub input: RecordArgs,
}

#[derive(Debug, Serialize)]
struct FilenameReport {
    base: String,
    file_name: String,
}

pub fn filename(ctx: &Context<'_>, args: FilenameArgs) -> Result<()> {
    let session = Session::load(ctx, args.input)?;
    let base = build_safe_file_name(&session.record);
    let file_name = format!("{base}.{VCF_EXTENSION}");

    if ctx.json {
        print_json(&FilenameReport { base, file_name })
    } else {
        println!("{file_name}");
        Ok(())
    }
}
