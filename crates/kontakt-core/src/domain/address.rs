use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressKind {
    Home,
    Work,
}

impl AddressKind {
    pub const ALL: [AddressKind; 2] = [AddressKind::Home, AddressKind::Work];

    /// The `TYPE=` parameter value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressKind::Home => "HOME",
            AddressKind::Work => "WORK",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.parts().iter().all(|part| part.is_empty())
    }

    pub fn parts(&self) -> [&str; 5] {
        [
            &self.street,
            &self.city,
            &self.state,
            &self.zip,
            &self.country,
        ]
    }

    /// Human-readable lines: street, "zip city", "state, country".
    /// Blank lines are dropped.
    pub fn label_lines(&self) -> Vec<String> {
        let locality = join_non_empty(&[&self.zip, &self.city], " ");
        let region = join_non_empty(&[&self.state, &self.country], ", ");
        [self.street.clone(), locality, region]
            .into_iter()
            .filter(|line| !line.is_empty())
            .collect()
    }
}

fn join_non_empty(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(separator)
}
