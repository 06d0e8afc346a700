use crate::domain::address::{Address, AddressKind};
use crate::domain::field::WORK_FIELDS;
use crate::domain::ids::FieldId;
use crate::domain::photo::Photo;
use crate::domain::social::{SocialHandles, SocialPlatform};
use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// One contact as entered in the form. Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContactRecord {
    pub prefix: String,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub suffix: String,
    pub nickname: String,
    /// `YYYY-MM-DD`, or any other shape which is passed through.
    pub birthday: String,
    pub company: String,
    pub title: String,
    pub website: String,
    pub calendar: String,
    pub notes: String,
    pub email_home: String,
    pub email_work: String,
    pub phone_mobile: String,
    pub phone_home: String,
    pub phone_work: String,
    pub fax_home: String,
    pub fax_work: String,
    pub home: Address,
    pub work: Address,
    pub social: SocialHandles,
    pub photo: Option<Photo>,
}

impl ContactRecord {
    /// Text value of a field; the photo slot reads as empty.
    pub fn value(&self, id: FieldId) -> &str {
        match id {
            FieldId::Prefix => &self.prefix,
            FieldId::FirstName => &self.first_name,
            FieldId::MiddleName => &self.middle_name,
            FieldId::LastName => &self.last_name,
            FieldId::Suffix => &self.suffix,
            FieldId::Nickname => &self.nickname,
            FieldId::Birthday => &self.birthday,
            FieldId::Company => &self.company,
            FieldId::Title => &self.title,
            FieldId::Website => &self.website,
            FieldId::Calendar => &self.calendar,
            FieldId::Notes => &self.notes,
            FieldId::EmailHome => &self.email_home,
            FieldId::EmailWork => &self.email_work,
            FieldId::PhoneMobile => &self.phone_mobile,
            FieldId::PhoneHome => &self.phone_home,
            FieldId::PhoneWork => &self.phone_work,
            FieldId::FaxHome => &self.fax_home,
            FieldId::FaxWork => &self.fax_work,
            FieldId::AdrHomeStreet => &self.home.street,
            FieldId::AdrHomeCity => &self.home.city,
            FieldId::AdrHomeState => &self.home.state,
            FieldId::AdrHomeZip => &self.home.zip,
            FieldId::AdrHomeCountry => &self.home.country,
            FieldId::AdrWorkStreet => &self.work.street,
            FieldId::AdrWorkCity => &self.work.city,
            FieldId::AdrWorkState => &self.work.state,
            FieldId::AdrWorkZip => &self.work.zip,
            FieldId::AdrWorkCountry => &self.work.country,
            FieldId::SocialFacebook => self.social.get(SocialPlatform::Facebook),
            FieldId::SocialTwitter => self.social.get(SocialPlatform::Twitter),
            FieldId::SocialLinkedIn => self.social.get(SocialPlatform::LinkedIn),
            FieldId::SocialInstagram => self.social.get(SocialPlatform::Instagram),
            FieldId::SocialYoutube => self.social.get(SocialPlatform::YouTube),
            FieldId::SocialTikTok => self.social.get(SocialPlatform::TikTok),
            FieldId::Photo => "",
        }
    }

    pub fn set(&mut self, id: FieldId, value: impl Into<String>) -> Result<(), CoreError> {
        let slot = self.slot_mut(id).ok_or(CoreError::NotATextField(id))?;
        *slot = value.into();
        Ok(())
    }

    fn slot_mut(&mut self, id: FieldId) -> Option<&mut String> {
        let slot = match id {
            FieldId::Prefix => &mut self.prefix,
            FieldId::FirstName => &mut self.first_name,
            FieldId::MiddleName => &mut self.middle_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Suffix => &mut self.suffix,
            FieldId::Nickname => &mut self.nickname,
            FieldId::Birthday => &mut self.birthday,
            FieldId::Company => &mut self.company,
            FieldId::Title => &mut self.title,
            FieldId::Website => &mut self.website,
            FieldId::Calendar => &mut self.calendar,
            FieldId::Notes => &mut self.notes,
            FieldId::EmailHome => &mut self.email_home,
            FieldId::EmailWork => &mut self.email_work,
            FieldId::PhoneMobile => &mut self.phone_mobile,
            FieldId::PhoneHome => &mut self.phone_home,
            FieldId::PhoneWork => &mut self.phone_work,
            FieldId::FaxHome => &mut self.fax_home,
            FieldId::FaxWork => &mut self.fax_work,
            FieldId::AdrHomeStreet => &mut self.home.street,
            FieldId::AdrHomeCity => &mut self.home.city,
            FieldId::AdrHomeState => &mut self.home.state,
            FieldId::AdrHomeZip => &mut self.home.zip,
            FieldId::AdrHomeCountry => &mut self.home.country,
            FieldId::AdrWorkStreet => &mut self.work.street,
            FieldId::AdrWorkCity => &mut self.work.city,
            FieldId::AdrWorkState => &mut self.work.state,
            FieldId::AdrWorkZip => &mut self.work.zip,
            FieldId::AdrWorkCountry => &mut self.work.country,
            FieldId::SocialFacebook => self.social.get_mut(SocialPlatform::Facebook),
            FieldId::SocialTwitter => self.social.get_mut(SocialPlatform::Twitter),
            FieldId::SocialLinkedIn => self.social.get_mut(SocialPlatform::LinkedIn),
            FieldId::SocialInstagram => self.social.get_mut(SocialPlatform::Instagram),
            FieldId::SocialYoutube => self.social.get_mut(SocialPlatform::YouTube),
            FieldId::SocialTikTok => self.social.get_mut(SocialPlatform::TikTok),
            FieldId::Photo => return None,
        };
        Some(slot)
    }

    /// Copy with every text field trimmed, the way the form collects input.
    pub fn trimmed(&self) -> Self {
        let mut out = self.clone();
        for &id in FieldId::TEXT_FIELDS {
            let trimmed = self.value(id).trim();
            if trimmed.len() != self.value(id).len() {
                if let Some(slot) = out.slot_mut(id) {
                    *slot = trimmed.to_string();
                }
            }
        }
        out
    }

    pub fn address(&self, kind: AddressKind) -> &Address {
        match kind {
            AddressKind::Home => &self.home,
            AddressKind::Work => &self.work,
        }
    }

    pub fn has_required_names(&self) -> bool {
        !self.first_name.trim().is_empty() && !self.last_name.trim().is_empty()
    }

    pub fn has_work_details(&self) -> bool {
        WORK_FIELDS
            .iter()
            .any(|&id| !self.value(id).trim().is_empty())
    }

    /// Display name: prefix, first, middle, last and suffix joined by single
    /// spaces, falling back to "first last".
    pub fn formatted_name(&self) -> String {
        let joined = [
            &self.prefix,
            &self.first_name,
            &self.middle_name,
            &self.last_name,
            &self.suffix,
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| part.as_str())
        .collect::<Vec<_>>()
        .join(" ");

        let trimmed = joined.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn photo(&self) -> Option<&Photo> {
        self.photo.as_ref().filter(|photo| photo.is_present())
    }
}
