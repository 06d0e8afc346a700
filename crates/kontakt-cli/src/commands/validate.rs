use crate::commands::record::{RecordArgs, Session};
use crate::commands::{print_json, Context};
use crate::error::validation_failed;
use anyhow::Result;
use clap::Args;
use kontakt_core::{ErrorSet, FieldError};
use serde::Serialize;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: RecordArgs,
}

#[derive(Debug, Serialize)]
struct ValidateReport<'a> {
    valid: bool,
    name: String,
    errors: &'a ErrorSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_notice: Option<&'a FieldError>,
}

pub fn validate(ctx: &Context<'_>, args: ValidateArgs) -> Result<()> {
    let session = Session::load(ctx, args.input)?;
    let valid = session.can_serialize();

    if ctx.json {
        print_json(&ValidateReport {
            valid,
            name: session.record.formatted_name(),
            errors: &session.errors,
            photo_notice: session.photo_notice.as_ref(),
        })?;
    } else if valid {
        println!("ok: {}", session.record.formatted_name());
    } else {
        for (id, error) in session.errors.iter() {
            println!("{id}: {error}");
        }
    }

    if !valid {
        let count = session.errors.len();
        return Err(validation_failed(format!(
            "{count} validation error{}",
            if count == 1 { "" } else { "s" }
        )));
    }
    Ok(())
}
