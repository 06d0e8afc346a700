use crate::commands::record::{vcf_options, RecordArgs, Session};
use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{resolve_output_path, write_file};
use anyhow::Result;
use clap::{ArgAction, Args};
use kontakt_core::build_safe_file_name;
use kontakt_vcf::{create_vcf_string_with, qr_payload, render_svg};
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub input: RecordArgs,
    /// Output file, or a directory to place `<name>.vcf` in
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Print the card instead of writing a file
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "out")]
    pub stdout: bool,
    /// Also write the QR code as SVG
    #[arg(long, value_name = "SVG")]
    pub qr: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct GenerateReport {
    file_name: String,
    output: String,
    bytes: usize,
    qr_output: Option<String>,
}

pub fn generate(ctx: &Context<'_>, args: GenerateArgs) -> Result<()> {
    if ctx.json && args.stdout {
        return Err(invalid_input("--json cannot be combined with --stdout"));
    }

    let session = Session::load(ctx, args.input)?;
    session.ensure_exportable()?;

    let options = vcf_options(ctx);
    let card = create_vcf_string_with(&session.record, &options);

    let qr_output = match &args.qr {
        Some(path) => {
            let payload = qr_payload(&session.record, &options, ctx.config.qr.include_photo);
            let svg = render_svg(&payload, ctx.config.qr.size)?;
            write_file(path, &svg)?;
            debug!(path = %path.display(), bytes = payload.len(), "qr written");
            Some(path.display().to_string())
        }
        None => None,
    };

    if args.stdout {
        print!("{card}");
        return Ok(());
    }

    let base_name = build_safe_file_name(&session.record);
    let path = resolve_output_path(
        args.out.as_deref(),
        ctx.config.output_dir.as_deref(),
        &base_name,
    );
    write_file(&path, &card)?;

    let report = GenerateReport {
        file_name: path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default(),
        output: path.display().to_string(),
        bytes: card.len(),
        qr_output,
    };
    if ctx.json {
        print_json(&report)?;
    } else {
        println!("wrote {}", report.output);
        if let Some(qr) = &report.qr_output {
            println!("wrote {qr}");
        }
    }
    Ok(())
}
