use crate::commands::Context;
use crate::error::validation_failed;
use crate::util::{parse_assignment, read_record};
use anyhow::Result;
use clap::Args;
use kontakt_core::{
    can_serialize, compute_errors, default_descriptors, ContactRecord, ErrorSet, FieldError,
};
use kontakt_vcf::{load_photo, VcfOptions};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Record input shared by every command that works on a contact.
#[derive(Debug, Args)]
pub struct RecordArgs {
    /// Record file (`.toml` or `.json`)
    pub record: Option<PathBuf>,
    /// Override one field, e.g. `--set firstName=Ada`
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub set: Vec<String>,
    /// JPEG or PNG image to embed
    #[arg(long, value_name = "PATH")]
    pub photo: Option<PathBuf>,
}

/// The current record snapshot and the errors computed for it.
#[derive(Debug)]
pub struct Session {
    pub record: ContactRecord,
    pub errors: ErrorSet,
    /// Set when a photo could not be read and was left out.
    pub photo_notice: Option<FieldError>,
    json: bool,
}

impl Session {
    pub fn load(ctx: &Context<'_>, args: RecordArgs) -> Result<Self> {
        let mut record = match &args.record {
            Some(path) => {
                debug!(path = %path.display(), "reading record");
                read_record(path)?
            }
            None => ContactRecord::default(),
        };

        for raw in &args.set {
            let (id, value) = parse_assignment(raw)?;
            record.set(id, value)?;
        }

        let mut record = record.trimmed();
        let mut photo_error = None;
        let mut photo_notice = None;
        if let Some(path) = &args.photo {
            match load_photo(path, ctx.config.photo_max_bytes) {
                Ok(photo) => {
                    debug!(path = %path.display(), subtype = %photo.mime_subtype, "photo loaded");
                    record.photo = Some(photo);
                }
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "photo dropped");
                    record.photo = None;
                    photo_error = err.field_error();
                    if photo_error.is_none() {
                        photo_notice = Some(err.notice());
                    }
                }
            }
        }

        if let (Some(notice), false) = (&photo_notice, ctx.json) {
            eprintln!("photo: {notice}");
        }

        let errors = compute_errors(&default_descriptors(), &record, photo_error);
        debug!(errors = errors.len(), "record validated");
        Ok(Self {
            record,
            errors,
            photo_notice,
            json: ctx.json,
        })
    }

    pub fn can_serialize(&self) -> bool {
        can_serialize(&self.record, &self.errors)
    }

    /// Fails with exit code 3 unless the record may be exported.
    pub fn ensure_exportable(&self) -> Result<()> {
        if self.can_serialize() {
            return Ok(());
        }
        if !self.json {
            for (id, error) in self.errors.iter() {
                eprintln!("{id}: {error}");
            }
        }
        Err(validation_failed(gate_message(&self.record, &self.errors)))
    }
}

pub fn vcf_options(ctx: &Context<'_>) -> VcfOptions {
    VcfOptions {
        product_id: ctx.config.product_id.clone(),
        ..VcfOptions::default()
    }
}

fn gate_message(record: &ContactRecord, errors: &ErrorSet) -> String {
    if !record.has_required_names() && errors.is_empty() {
        return FieldError::Required.to_string();
    }
    match errors.len() {
        1 => "1 field needs fixing".to_string(),
        count => format!("{count} fields need fixing"),
    }
}
