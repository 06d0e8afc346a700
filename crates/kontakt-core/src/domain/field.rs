use crate::domain::ids::FieldId;
use serde::{Deserialize, Serialize};

/// Semantic type of a form field; decides which format rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Url,
    Tel,
    Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub kind: FieldKind,
    pub required: bool,
    pub social_handle: bool,
}

impl FieldDescriptor {
    pub const fn new(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            required: false,
            social_handle: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub const fn social_handle(mut self) -> Self {
        self.social_handle = true;
        self
    }
}

/// Fields whose presence means the contact has professional context.
pub const WORK_FIELDS: [FieldId; 11] = [
    FieldId::Title,
    FieldId::Website,
    FieldId::EmailWork,
    FieldId::PhoneWork,
    FieldId::FaxWork,
    FieldId::Calendar,
    FieldId::AdrWorkStreet,
    FieldId::AdrWorkCity,
    FieldId::AdrWorkState,
    FieldId::AdrWorkZip,
    FieldId::AdrWorkCountry,
];

pub fn descriptor_for(id: FieldId) -> FieldDescriptor {
    use FieldId::*;

    match id {
        FirstName | LastName => FieldDescriptor::new(id, FieldKind::Text).required(),
        Birthday => FieldDescriptor::new(id, FieldKind::Date),
        Website | Calendar => FieldDescriptor::new(id, FieldKind::Url),
        EmailHome | EmailWork => FieldDescriptor::new(id, FieldKind::Email),
        PhoneMobile | PhoneHome | PhoneWork | FaxHome | FaxWork => {
            FieldDescriptor::new(id, FieldKind::Tel)
        }
        SocialFacebook | SocialTwitter | SocialLinkedIn | SocialInstagram | SocialYoutube
        | SocialTikTok => FieldDescriptor::new(id, FieldKind::Text).social_handle(),
        _ => FieldDescriptor::new(id, FieldKind::Text),
    }
}

/// The descriptor table for the full contact form, built once at startup.
pub fn default_descriptors() -> Vec<FieldDescriptor> {
    FieldId::TEXT_FIELDS
        .iter()
        .copied()
        .map(descriptor_for)
        .collect()
}
