use crate::text::{escape_value, fold_line, format_date_for_vcf};
use chrono::{DateTime, Utc};
use kontakt_core::{AddressKind, ContactRecord};

pub const DEFAULT_PRODUCT_ID: &str = "-//kontakt//vCard Generator//EN";
const REV_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Debug, Clone)]
pub struct VcfOptions {
    pub product_id: String,
    /// Emit the `PHOTO` line when the record carries a photo.
    pub include_photo: bool,
    /// Value of the `REV` line.
    pub rev: DateTime<Utc>,
}

impl Default for VcfOptions {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            include_photo: true,
            rev: Utc::now(),
        }
    }
}

/// Renders a record as vCard 3.0 text stamped with the current time.
pub fn create_vcf_string(record: &ContactRecord) -> String {
    create_vcf_string_with(record, &VcfOptions::default())
}

/// Deterministic for a given record and options. Lines are folded and joined
/// with CRLF; there is no trailing line break after `END:VCARD`.
pub fn create_vcf_string_with(record: &ContactRecord, options: &VcfOptions) -> String {
    let mut card = CardWriter::default();

    card.raw("BEGIN:VCARD");
    card.raw("VERSION:3.0");
    card.text("PRODID", &options.product_id);
    card.raw(&format!("REV:{}", options.rev.format(REV_FORMAT)));

    card.structured(
        "N",
        &[
            record.last_name.as_str(),
            record.first_name.as_str(),
            record.middle_name.as_str(),
            record.prefix.as_str(),
            record.suffix.as_str(),
        ],
    );
    card.text("FN", &record.formatted_name());

    card.optional("NICKNAME", &record.nickname);
    card.optional("BDAY", &format_date_for_vcf(&record.birthday));
    card.optional("ORG", &record.company);
    card.optional("TITLE", &record.title);
    card.optional("URL", &record.website);
    card.optional("CALURI", &record.calendar);
    card.optional("NOTE", &record.notes);

    card.optional("EMAIL;TYPE=HOME", &record.email_home);
    card.optional("EMAIL;TYPE=WORK", &record.email_work);
    card.optional("TEL;TYPE=CELL", &record.phone_mobile);
    card.optional("TEL;TYPE=HOME", &record.phone_home);
    card.optional("TEL;TYPE=WORK", &record.phone_work);
    card.optional("TEL;TYPE=FAX,HOME", &record.fax_home);
    card.optional("TEL;TYPE=FAX,WORK", &record.fax_work);

    for kind in AddressKind::ALL {
        let address = record.address(kind);
        if address.is_empty() {
            continue;
        }
        // Post office box and extended address stay empty.
        card.structured(
            &format!("ADR;TYPE={}", kind.as_str()),
            &[
                "",
                "",
                address.street.as_str(),
                address.city.as_str(),
                address.state.as_str(),
                address.zip.as_str(),
                address.country.as_str(),
            ],
        );
        let label = address.label_lines();
        if !label.is_empty() {
            card.text(&format!("LABEL;TYPE={}", kind.as_str()), &label.join("\n"));
        }
    }

    for (platform, value) in record.social.present() {
        card.text(
            &format!("X-SOCIALPROFILE;TYPE={}", platform.as_str()),
            &platform.profile_url(value),
        );
    }

    if options.include_photo {
        if let Some(photo) = record.photo() {
            card.raw(&format!(
                "PHOTO;ENCODING=b64;TYPE={}:{}",
                photo.mime_subtype.trim().to_ascii_uppercase(),
                photo.base64
            ));
        }
    }

    card.raw("END:VCARD");
    card.finish()
}

/// The text handed to the QR renderer. Identical to the file output except
/// that the photo is kept only when `include_photo` is set.
pub fn qr_payload(record: &ContactRecord, options: &VcfOptions, include_photo: bool) -> String {
    let options = VcfOptions {
        include_photo: options.include_photo && include_photo,
        ..options.clone()
    };
    create_vcf_string_with(record, &options)
}

#[derive(Default)]
struct CardWriter {
    lines: Vec<String>,
}

impl CardWriter {
    fn raw(&mut self, line: &str) {
        self.lines.push(fold_line(line));
    }

    fn text(&mut self, key: &str, value: &str) {
        self.raw(&format!("{key}:{}", escape_value(value)));
    }

    fn optional(&mut self, key: &str, value: &str) {
        if !value.is_empty() {
            self.text(key, value);
        }
    }

    /// Each component is escaped on its own before the `;` delimiters go in.
    fn structured(&mut self, key: &str, components: &[&str]) {
        let value = components
            .iter()
            .map(|component| escape_value(component))
            .collect::<Vec<_>>()
            .join(";");
        self.raw(&format!("{key}:{value}"));
    }

    fn finish(self) -> String {
        self.lines.join("\r\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{unescape_value, unfold_lines};
    use chrono::TimeZone;
    use kontakt_core::{Address, Photo, SocialHandles};

    fn fixed_options() -> VcfOptions {
        VcfOptions {
            rev: Utc.with_ymd_and_hms(2024, 1, 10, 12, 30, 0).unwrap(),
            ..VcfOptions::default()
        }
    }

    fn named(first: &str, last: &str) -> ContactRecord {
        ContactRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            ..ContactRecord::default()
        }
    }

    fn without_rev(vcf: &str) -> String {
        vcf.split("\r\n")
            .filter(|line| !line.starts_with("REV:"))
            .collect::<Vec<_>>()
            .join("\r\n")
    }

    fn full_record() -> ContactRecord {
        ContactRecord {
            prefix: "Dr.".to_string(),
            middle_name: "Alexander".to_string(),
            suffix: "MBA".to_string(),
            nickname: "Maxi".to_string(),
            birthday: "1985-07-01".to_string(),
            company: "Beispiel GmbH".to_string(),
            title: "Marketing Manager".to_string(),
            website: "https://example.com".to_string(),
            calendar: "https://calendar.example.com".to_string(),
            notes: "Multi-line\nnote".to_string(),
            email_home: "max@example.com".to_string(),
            email_work: "max@firma.de".to_string(),
            phone_mobile: "+49 170 9876543".to_string(),
            phone_home: "+49 30 1234567".to_string(),
            phone_work: "+49 40 1234567".to_string(),
            fax_home: "+49 30 7654321".to_string(),
            fax_work: "+49 40 7654321".to_string(),
            home: Address {
                street: "Privatstraße 1".to_string(),
                city: "Berlin".to_string(),
                state: "Berlin".to_string(),
                zip: "10115".to_string(),
                country: "Deutschland".to_string(),
            },
            work: Address {
                street: "Arbeitsweg 5".to_string(),
                city: "Hamburg".to_string(),
                state: "Hamburg".to_string(),
                zip: "20095".to_string(),
                country: "Deutschland".to_string(),
            },
            social: SocialHandles {
                facebook: "beispiel".to_string(),
                twitter: "@beispiel".to_string(),
                linkedin: "https://www.linkedin.com/in/beispiel".to_string(),
                instagram: "insta_handle".to_string(),
                youtube: "kanal".to_string(),
                tiktok: "tiktokuser".to_string(),
            },
            photo: Some(Photo::new("abcd", "PNG")),
            ..named("Max", "Mustermann")
        }
    }

    #[test]
    fn header_and_footer() {
        let vcf = create_vcf_string(&named("Ada", "Lovelace"));
        let stable = without_rev(&vcf);
        assert!(stable.starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
        assert!(stable.ends_with("END:VCARD"));
        assert!(!vcf.ends_with("\r\n"));
    }

    #[test]
    fn rev_uses_basic_iso_format() {
        let vcf = create_vcf_string_with(&named("Ada", "Lovelace"), &fixed_options());
        assert!(vcf.contains("\r\nREV:20240110T123000Z\r\n"));
        assert!(vcf.contains("\r\nPRODID:-//kontakt//vCard Generator//EN\r\n"));
    }

    #[test]
    fn output_is_stable_apart_from_rev() {
        let record = full_record();
        let first = create_vcf_string(&record);
        let second = create_vcf_string(&record);
        assert_eq!(without_rev(&first), without_rev(&second));
    }

    #[test]
    fn lines_end_with_crlf_only() {
        let vcf = create_vcf_string_with(&full_record(), &fixed_options());
        assert!(!vcf.replace("\r\n", "").contains('\n'));
        assert!(!vcf.replace("\r\n", "").contains('\r'));
    }

    #[test]
    fn full_record_lines() {
        let vcf = create_vcf_string_with(&full_record(), &fixed_options());
        let lines = unfold_lines(&vcf);
        let expected = [
            "N:Mustermann;Max;Alexander;Dr.;MBA",
            "FN:Dr. Max Alexander Mustermann MBA",
            "NICKNAME:Maxi",
            "BDAY:19850701",
            "ORG:Beispiel GmbH",
            "TITLE:Marketing Manager",
            "URL:https://example.com",
            "CALURI:https://calendar.example.com",
            "NOTE:Multi-line\\nnote",
            "EMAIL;TYPE=HOME:max@example.com",
            "EMAIL;TYPE=WORK:max@firma.de",
            "TEL;TYPE=CELL:+49 170 9876543",
            "TEL;TYPE=HOME:+49 30 1234567",
            "TEL;TYPE=WORK:+49 40 1234567",
            "TEL;TYPE=FAX,HOME:+49 30 7654321",
            "TEL;TYPE=FAX,WORK:+49 40 7654321",
            "ADR;TYPE=HOME:;;Privatstraße 1;Berlin;Berlin;10115;Deutschland",
            "LABEL;TYPE=HOME:Privatstraße 1\\n10115 Berlin\\nBerlin\\, Deutschland",
            "ADR;TYPE=WORK:;;Arbeitsweg 5;Hamburg;Hamburg;20095;Deutschland",
            "LABEL;TYPE=WORK:Arbeitsweg 5\\n20095 Hamburg\\nHamburg\\, Deutschland",
            "X-SOCIALPROFILE;TYPE=facebook:https://facebook.com/beispiel",
            "X-SOCIALPROFILE;TYPE=twitter:https://x.com/beispiel",
            "X-SOCIALPROFILE;TYPE=linkedin:https://www.linkedin.com/in/beispiel",
            "X-SOCIALPROFILE;TYPE=instagram:https://instagram.com/insta_handle",
            "X-SOCIALPROFILE;TYPE=youtube:https://youtube.com/@kanal",
            "X-SOCIALPROFILE;TYPE=tiktok:https://tiktok.com/@tiktokuser",
            "PHOTO;ENCODING=b64;TYPE=PNG:abcd",
            "END:VCARD",
        ];
        assert_eq!(&lines[4..], &expected[..]);
    }

    #[test]
    fn empty_optional_fields_are_skipped() {
        let vcf = create_vcf_string_with(&named("Ada", "Lovelace"), &fixed_options());
        let lines = unfold_lines(&vcf);
        assert_eq!(
            lines,
            vec![
                "BEGIN:VCARD",
                "VERSION:3.0",
                "PRODID:-//kontakt//vCard Generator//EN",
                "REV:20240110T123000Z",
                "N:Lovelace;Ada;;;",
                "FN:Ada Lovelace",
                "END:VCARD",
            ]
        );
    }

    #[test]
    fn missing_names_still_produce_valid_structure() {
        let vcf = create_vcf_string_with(&ContactRecord::default(), &fixed_options());
        assert!(vcf.contains("\r\nN:;;;;\r\nFN:\r\n"));
        assert!(vcf.ends_with("END:VCARD"));
    }

    #[test]
    fn name_components_are_escaped_individually() {
        let record = named("Jean;Paul", "Smith, Jr.");
        let vcf = create_vcf_string_with(&record, &fixed_options());
        assert!(vcf.contains("\r\nN:Smith\\, Jr.;Jean\\;Paul;;;\r\n"));
    }

    #[test]
    fn escaped_note_decodes_to_original() {
        let note = "a;b,c\\d\nsecond line";
        let record = ContactRecord {
            notes: note.to_string(),
            ..named("Ada", "Lovelace")
        };
        let vcf = create_vcf_string_with(&record, &fixed_options());
        let line = unfold_lines(&vcf)
            .into_iter()
            .find(|line| line.starts_with("NOTE:"))
            .expect("note line");
        assert_eq!(unescape_value(&line["NOTE:".len()..]), note);
    }

    #[test]
    fn address_without_parts_is_omitted() {
        let record = ContactRecord {
            work: Address::default(),
            home: Address {
                city: "Berlin".to_string(),
                ..Address::default()
            },
            ..named("Ada", "Lovelace")
        };
        let vcf = create_vcf_string_with(&record, &fixed_options());
        assert!(vcf.contains("\r\nADR;TYPE=HOME:;;;Berlin;;;\r\n"));
        assert!(vcf.contains("\r\nLABEL;TYPE=HOME:Berlin\r\n"));
        assert!(!vcf.contains("ADR;TYPE=WORK"));
        assert!(!vcf.contains("LABEL;TYPE=WORK"));
    }

    #[test]
    fn social_handle_and_url() {
        let record = ContactRecord {
            social: SocialHandles {
                twitter: "@handle".to_string(),
                facebook: "https://facebook.com/some,page".to_string(),
                ..SocialHandles::default()
            },
            ..named("Ada", "Lovelace")
        };
        let vcf = create_vcf_string_with(&record, &fixed_options());
        assert!(vcf.contains("X-SOCIALPROFILE;TYPE=twitter:https://x.com/handle\r\n"));
        assert!(vcf.contains("X-SOCIALPROFILE;TYPE=facebook:https://facebook.com/some\\,page\r\n"));
        assert!(!vcf.contains("x.com/@"));
    }

    #[test]
    fn photo_line_is_folded() {
        let payload = "QUJD".repeat(100);
        let record = ContactRecord {
            photo: Some(Photo::new(payload.clone(), "jpeg")),
            ..named("Ada", "Lovelace")
        };
        let vcf = create_vcf_string_with(&record, &fixed_options());
        let physical: Vec<&str> = vcf.split("\r\n").collect();
        assert!(physical.iter().all(|line| line.len() <= 75));
        assert!(physical.iter().any(|line| line.starts_with(' ')));

        let photo_line = unfold_lines(&vcf)
            .into_iter()
            .find(|line| line.starts_with("PHOTO"))
            .expect("photo line");
        assert_eq!(photo_line, format!("PHOTO;ENCODING=b64;TYPE=JPEG:{payload}"));
    }

    #[test]
    fn photo_type_is_uppercased_for_records_read_from_files() {
        let record = ContactRecord {
            photo: Some(Photo {
                base64: "abcd".to_string(),
                mime_subtype: "png".to_string(),
            }),
            ..named("Ada", "Lovelace")
        };
        let vcf = create_vcf_string_with(&record, &fixed_options());
        assert!(vcf.contains("\r\nPHOTO;ENCODING=b64;TYPE=PNG:abcd\r\n"));
    }

    #[test]
    fn incomplete_photo_is_ignored() {
        let record = ContactRecord {
            photo: Some(Photo::new("", "PNG")),
            ..named("Ada", "Lovelace")
        };
        let vcf = create_vcf_string_with(&record, &fixed_options());
        assert!(!vcf.contains("PHOTO"));
    }

    #[test]
    fn qr_payload_drops_photo_unless_requested() {
        let record = full_record();
        let options = fixed_options();
        let without = qr_payload(&record, &options, false);
        assert!(!without.contains("PHOTO"));
        assert!(without.contains("FN:Dr. Max Alexander Mustermann MBA"));

        let with = qr_payload(&record, &options, true);
        assert_eq!(with, create_vcf_string_with(&record, &options));
    }

    #[test]
    fn non_iso_birthday_passes_through() {
        let record = ContactRecord {
            birthday: "--0701".to_string(),
            ..named("Ada", "Lovelace")
        };
        let vcf = create_vcf_string_with(&record, &fixed_options());
        assert!(vcf.contains("\r\nBDAY:--0701\r\n"));
    }
}
