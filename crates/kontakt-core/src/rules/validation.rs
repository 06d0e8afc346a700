use crate::domain::{
    is_profile_link, is_valid_email, is_valid_phone, ContactRecord, FieldDescriptor, FieldId,
    FieldKind,
};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

/// A user-facing validation problem. `Display` is the message shown next to
/// the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("This field is required.")]
    Required,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please enter a valid link.")]
    InvalidUrl,
    #[error("Only http or https links are allowed.")]
    UnsupportedScheme,
    #[error("The calendar link should be reachable via https.")]
    InsecureCalendar,
    #[error("Only digits, spaces, parentheses, +, - and / are allowed.")]
    InvalidPhone,
    #[error("Please enter the username without spaces.")]
    HandleWhitespace,
    #[error("Please enter your company when you provide work details.")]
    CompanyRequired,
    #[error("Only JPG or PNG images are supported.")]
    UnsupportedPhotoType,
    #[error("The image is too large (maximum {max_kib} KB).")]
    PhotoTooLarge { max_kib: u64 },
    /// Shown when a photo is dropped; never stored in an [`ErrorSet`].
    #[error("The photo could not be read.")]
    PhotoUnreadable,
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Field id to error. Rebuilt from scratch on every validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet(BTreeMap<FieldId, FieldError>);

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: FieldId, error: FieldError) {
        self.0.insert(id, error);
    }

    pub fn get(&self, id: FieldId) -> Option<&FieldError> {
        self.0.get(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &FieldError)> + '_ {
        self.0.iter().map(|(id, error)| (*id, error))
    }
}

pub fn compute_field_error(descriptor: &FieldDescriptor, value: &str) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        return descriptor.required.then_some(FieldError::Required);
    }

    match descriptor.kind {
        FieldKind::Email => (!is_valid_email(value)).then_some(FieldError::InvalidEmail),
        FieldKind::Url => check_url(descriptor.id, value),
        FieldKind::Tel => (!is_valid_phone(value)).then_some(FieldError::InvalidPhone),
        FieldKind::Text | FieldKind::Date if descriptor.social_handle => {
            check_social_handle(descriptor.id, value)
        }
        FieldKind::Text | FieldKind::Date => None,
    }
}

fn check_url(id: FieldId, value: &str) -> Option<FieldError> {
    let Ok(url) = Url::parse(value) else {
        return Some(FieldError::InvalidUrl);
    };

    match url.scheme() {
        "https" => None,
        "http" if id == FieldId::Calendar => Some(FieldError::InsecureCalendar),
        "http" => None,
        _ => Some(FieldError::UnsupportedScheme),
    }
}

fn check_social_handle(id: FieldId, value: &str) -> Option<FieldError> {
    if is_profile_link(value) {
        return check_url(id, value);
    }
    value
        .chars()
        .any(char::is_whitespace)
        .then_some(FieldError::HandleWhitespace)
}

/// Applies every per-field rule, the company cross-field rule and the
/// photo loader's error (stored under [`FieldId::Photo`]).
pub fn compute_errors(
    descriptors: &[FieldDescriptor],
    record: &ContactRecord,
    photo_error: Option<FieldError>,
) -> ErrorSet {
    let mut errors = ErrorSet::new();

    for descriptor in descriptors {
        if descriptor.id == FieldId::Photo {
            continue;
        }
        if let Some(error) = compute_field_error(descriptor, record.value(descriptor.id)) {
            errors.insert(descriptor.id, error);
        }
    }

    if record.has_work_details() && record.company.trim().is_empty() {
        errors.insert(FieldId::Company, FieldError::CompanyRequired);
    }

    if let Some(error) = photo_error {
        errors.insert(FieldId::Photo, error);
    }

    errors
}

/// Gate for both file export and QR rendering.
pub fn can_serialize(record: &ContactRecord, errors: &ErrorSet) -> bool {
    record.has_required_names() && errors.is_empty()
}
