use crate::domain::{AddressKind, ContactRecord};
use crate::rules::{can_serialize, ErrorSet};
use serde::Serialize;

pub const PLACEHOLDER_NAME: &str = "Name appears here";
pub const MISSING_NAME_TEXT: &str = "Fill in at least first and last name to see the vCard preview.";
pub const NEEDS_FIXES_TEXT: &str = "Please fix the highlighted errors to generate the vCard.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewItem {
    pub label: String,
    pub value: String,
    pub href: Option<String>,
}

impl PreviewItem {
    fn new(label: &str, value: &str, href: Option<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            href,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewAddress {
    pub kind: AddressKind,
    pub lines: Vec<String>,
}

/// Business-card style summary of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewModel {
    pub name: String,
    pub role: String,
    pub company: String,
    pub contact_items: Vec<PreviewItem>,
    pub address_items: Vec<PreviewAddress>,
    pub social_items: Vec<PreviewItem>,
    pub notes: String,
    pub show_notes: bool,
}

pub fn build_preview_model(record: &ContactRecord) -> PreviewModel {
    let name = record.formatted_name();
    let name = if name.is_empty() {
        PLACEHOLDER_NAME.to_string()
    } else {
        name
    };

    let mut contact_items = Vec::new();
    let mut push = |label: &str, value: &str, href: Option<String>| {
        if !value.is_empty() {
            contact_items.push(PreviewItem::new(label, value, href));
        }
    };
    push("Email (home)", &record.email_home, Some(mailto(&record.email_home)));
    push("Email (work)", &record.email_work, Some(mailto(&record.email_work)));
    push("Mobile", &record.phone_mobile, Some(tel(&record.phone_mobile)));
    push("Phone (home)", &record.phone_home, Some(tel(&record.phone_home)));
    push("Phone (work)", &record.phone_work, Some(tel(&record.phone_work)));
    push("Fax (home)", &record.fax_home, None);
    push("Fax (work)", &record.fax_work, None);
    push("Website", &record.website, Some(record.website.clone()));
    push("Calendar", &record.calendar, Some(record.calendar.clone()));
    push("Birthday", &record.birthday, None);

    let address_items = AddressKind::ALL
        .into_iter()
        .filter(|kind| !record.address(*kind).is_empty())
        .map(|kind| PreviewAddress {
            kind,
            lines: record.address(kind).label_lines(),
        })
        .collect();

    let social_items = record
        .social
        .present()
        .map(|(platform, value)| {
            let url = platform.profile_url(value);
            PreviewItem::new(platform.label(), &url, Some(url.clone()))
        })
        .collect();

    PreviewModel {
        name,
        role: record.title.clone(),
        company: record.company.clone(),
        contact_items,
        address_items,
        social_items,
        notes: record.notes.clone(),
        show_notes: !record.notes.trim().is_empty(),
    }
}

fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

fn tel(number: &str) -> String {
    let dialable: String = number
        .chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '+')
        .collect();
    format!("tel:{dialable}")
}

/// The three states of the vCard text preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "text", rename_all = "snake_case")]
pub enum VcfPreview {
    /// First or last name is still missing.
    MissingName,
    /// Names are present but validation failed.
    NeedsFixes,
    Ready(String),
}

impl VcfPreview {
    pub fn text(&self) -> &str {
        match self {
            VcfPreview::MissingName => MISSING_NAME_TEXT,
            VcfPreview::NeedsFixes => NEEDS_FIXES_TEXT,
            VcfPreview::Ready(text) => text,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        !matches!(self, VcfPreview::Ready(_))
    }
}

/// Picks the preview state; `render` only runs when the record passes the
/// same gate used for export and QR rendering.
pub fn build_vcf_preview(
    record: &ContactRecord,
    errors: &ErrorSet,
    render: impl FnOnce() -> String,
) -> VcfPreview {
    if !record.has_required_names() {
        return VcfPreview::MissingName;
    }
    if !can_serialize(record, errors) {
        return VcfPreview::NeedsFixes;
    }
    VcfPreview::Ready(render())
}
