use crate::commands::record::{vcf_options, RecordArgs, Session};
use crate::commands::{print_json, Context};
use anyhow::Result;
use clap::Args;
use kontakt_core::{
    build_preview_model, build_vcf_preview, ErrorSet, FieldError, PreviewModel, VcfPreview,
};
use kontakt_vcf::create_vcf_string_with;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub input: RecordArgs,
}

#[derive(Debug, Serialize)]
struct PreviewReport<'a> {
    card: PreviewModel,
    vcf: VcfPreview,
    errors: &'a ErrorSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_notice: Option<&'a FieldError>,
}

pub fn preview(ctx: &Context<'_>, args: PreviewArgs) -> Result<()> {
    let session = Session::load(ctx, args.input)?;
    let options = vcf_options(ctx);

    let card = build_preview_model(&session.record);
    let vcf = build_vcf_preview(&session.record, &session.errors, || {
        create_vcf_string_with(&session.record, &options)
    });

    if ctx.json {
        return print_json(&PreviewReport {
            card,
            vcf,
            errors: &session.errors,
            photo_notice: session.photo_notice.as_ref(),
        });
    }

    print_card(&card);
    println!();
    println!("{}", vcf.text().replace("\r\n", "\n"));
    Ok(())
}

fn print_card(card: &PreviewModel) {
    println!("{}", card.name);
    let headline = [card.role.as_str(), card.company.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" · ");
    if !headline.is_empty() {
        println!("{headline}");
    }

    if !card.contact_items.is_empty() {
        println!();
        for item in &card.contact_items {
            println!("  {}: {}", item.label, item.value);
        }
    }

    for address in &card.address_items {
        println!();
        println!("  Address ({})", address.kind.as_str().to_ascii_lowercase());
        for line in &address.lines {
            println!("    {line}");
        }
    }

    if !card.social_items.is_empty() {
        println!();
        for item in &card.social_items {
            println!("  {}: {}", item.label, item.value);
        }
    }

    if card.show_notes {
        println!();
        for line in card.notes.lines() {
            println!("  {line}");
        }
    }
}
