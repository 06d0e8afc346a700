use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! field_ids {
    ($($variant:ident => $id:literal),+ $(,)?) => {
        /// Stable identifier of a form field. The camelCase ids double as
        /// error-set keys and `--set` names.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum FieldId {
            $(
                #[serde(rename = $id)]
                $variant,
            )+
            /// Reserved key for the photo collaborator's error.
            #[serde(rename = "photo")]
            Photo,
        }

        impl FieldId {
            /// Every field that carries a text value, in form order.
            pub const TEXT_FIELDS: &'static [FieldId] = &[$(FieldId::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(FieldId::$variant => $id,)+
                    FieldId::Photo => "photo",
                }
            }
        }
    };
}

field_ids! {
    Prefix => "prefix",
    FirstName => "firstName",
    MiddleName => "middleName",
    LastName => "lastName",
    Suffix => "suffix",
    Nickname => "nickname",
    Birthday => "birthday",
    Company => "company",
    Title => "title",
    Website => "website",
    Calendar => "calendar",
    EmailHome => "emailHome",
    EmailWork => "emailWork",
    PhoneMobile => "phoneMobile",
    PhoneHome => "phoneHome",
    PhoneWork => "phoneWork",
    FaxHome => "faxHome",
    FaxWork => "faxWork",
    AdrHomeStreet => "adrHomeStreet",
    AdrHomeCity => "adrHomeCity",
    AdrHomeState => "adrHomeState",
    AdrHomeZip => "adrHomeZip",
    AdrHomeCountry => "adrHomeCountry",
    AdrWorkStreet => "adrWorkStreet",
    AdrWorkCity => "adrWorkCity",
    AdrWorkState => "adrWorkState",
    AdrWorkZip => "adrWorkZip",
    AdrWorkCountry => "adrWorkCountry",
    SocialFacebook => "socialFacebook",
    SocialTwitter => "socialTwitter",
    SocialLinkedIn => "socialLinkedIn",
    SocialInstagram => "socialInstagram",
    SocialYoutube => "socialYoutube",
    SocialTikTok => "socialTikTok",
    Notes => "notes",
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(FieldId::Photo.as_str()) {
            return Ok(FieldId::Photo);
        }
        FieldId::TEXT_FIELDS
            .iter()
            .copied()
            .find(|field| field.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CoreError::UnknownField(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::FieldId;
    use std::str::FromStr;

    #[test]
    fn field_id_parses_case_insensitively() {
        assert_eq!(FieldId::from_str("firstname").unwrap(), FieldId::FirstName);
        assert_eq!(FieldId::from_str(" adrWorkZip ").unwrap(), FieldId::AdrWorkZip);
        assert_eq!(FieldId::from_str("PHOTO").unwrap(), FieldId::Photo);
    }

    #[test]
    fn field_id_rejects_unknown_names() {
        assert!(FieldId::from_str("favoriteColor").is_err());
    }

    #[test]
    fn text_fields_exclude_photo() {
        assert_eq!(FieldId::TEXT_FIELDS.len(), 35);
        assert!(!FieldId::TEXT_FIELDS.contains(&FieldId::Photo));
    }

    #[test]
    fn field_id_serializes_as_camel_case_id() {
        let json = serde_json::to_string(&FieldId::SocialTikTok).unwrap();
        assert_eq!(json, "\"socialTikTok\"");
    }
}
