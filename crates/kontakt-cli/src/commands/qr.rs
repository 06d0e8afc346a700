use crate::commands::record::{vcf_options, RecordArgs, Session};
use crate::commands::{print_json, Context};
use crate::util::write_file;
use anyhow::Result;
use clap::{ArgAction, Args};
use kontakt_vcf::{qr_payload, render_svg, render_terminal, svg_data_url};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct QrArgs {
    #[command(flatten)]
    pub input: RecordArgs,
    /// Write the QR code as SVG
    #[arg(long, value_name = "SVG")]
    pub out: Option<PathBuf>,
    /// Print the SVG as a `data:` URL
    #[arg(long, action = ArgAction::SetTrue)]
    pub data_url: bool,
}

#[derive(Debug, Serialize)]
struct QrReport {
    payload_bytes: usize,
    include_photo: bool,
    output: Option<String>,
    data_url: Option<String>,
}

pub fn qr(ctx: &Context<'_>, args: QrArgs) -> Result<()> {
    let session = Session::load(ctx, args.input)?;
    session.ensure_exportable()?;

    let include_photo = ctx.config.qr.include_photo;
    let payload = qr_payload(&session.record, &vcf_options(ctx), include_photo);

    let needs_svg = args.out.is_some() || args.data_url || ctx.json;
    let svg = if needs_svg {
        Some(render_svg(&payload, ctx.config.qr.size)?)
    } else {
        None
    };

    if let (Some(path), Some(svg)) = (&args.out, &svg) {
        write_file(path, svg)?;
    }
    let data_url = match &svg {
        Some(svg) if args.data_url => Some(svg_data_url(svg)),
        _ => None,
    };

    if ctx.json {
        return print_json(&QrReport {
            payload_bytes: payload.len(),
            include_photo,
            output: args.out.as_ref().map(|path| path.display().to_string()),
            data_url,
        });
    }

    if let Some(url) = data_url {
        println!("{url}");
    } else if let Some(path) = &args.out {
        println!("wrote {}", path.display());
    } else {
        print!("{}", render_terminal(&payload)?);
        println!();
    }
    Ok(())
}
