use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use kontakt_core::{ContactRecord, FieldId};
use std::fs;
use std::path::{Path, PathBuf};

pub const VCF_EXTENSION: &str = "vcf";

/// Parses a `fieldId=value` override. The value may be empty and may itself
/// contain `=`.
pub fn parse_assignment(raw: &str) -> Result<(FieldId, String)> {
    let (field, value) = raw
        .split_once('=')
        .ok_or_else(|| invalid_input(format!("expected FIELD=VALUE, got {raw:?}")))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(invalid_input("field name cannot be empty"));
    }
    let id = field.parse::<FieldId>()?;
    Ok((id, unescape_newlines(value)))
}

// Shells make literal newlines awkward; `\n` in an override means a line break.
fn unescape_newlines(value: &str) -> String {
    value.replace("\\n", "\n")
}

pub fn read_record(path: &Path) -> Result<ContactRecord> {
    if !path.exists() {
        return Err(not_found(format!("record file {}", path.display())));
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("read record file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        serde_json::from_str(&data).map_err(|err| {
            invalid_input(format!("parse record file {}: {err}", path.display()))
        })
    } else {
        toml::from_str(&data).map_err(|err| {
            invalid_input(format!("parse record file {}: {err}", path.display()))
        })
    }
}

/// Where a generated card is written: an explicit file, a file inside an
/// explicit or configured directory, or the working directory.
pub fn resolve_output_path(
    out: Option<&Path>,
    configured_dir: Option<&Path>,
    base_name: &str,
) -> PathBuf {
    let file_name = format!("{base_name}.{VCF_EXTENSION}");
    match out {
        Some(path) if path.is_dir() || ends_with_separator(path) => path.join(file_name),
        Some(path) => path.to_path_buf(),
        None => match configured_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        },
    }
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}

pub fn write_file(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create output directory {}", parent.display()))?;
        }
    }
    fs::write(path, data).with_context(|| format!("write file {}", path.display()))
}
