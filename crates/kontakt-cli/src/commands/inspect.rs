use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use clap::Args;
use kontakt_vcf::{unescape_value, unfold_lines};
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

/// Properties whose value is a `;`-separated list of components.
const STRUCTURED: [&str; 2] = ["N", "ADR"];

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Existing `.vcf` file
    pub file: PathBuf,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
struct Property {
    name: String,
    params: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    components: Vec<String>,
}

pub fn inspect(ctx: &Context<'_>, args: InspectArgs) -> Result<()> {
    if !args.file.exists() {
        return Err(not_found(format!("vcf file {}", args.file.display())));
    }
    let data = fs::read_to_string(&args.file)
        .with_context(|| format!("read vcf file {}", args.file.display()))?;

    let properties = unfold_lines(&data)
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_property(line))
        .collect::<Result<Vec<_>>>()?;

    if ctx.json {
        return print_json(&properties);
    }

    for property in &properties {
        let mut key = property.name.clone();
        for param in &property.params {
            key.push(';');
            key.push_str(param);
        }
        match &property.value {
            Some(value) => {
                let mut lines = value.lines();
                println!("{key}: {}", lines.next().unwrap_or_default());
                for line in lines {
                    println!("{:width$}  {line}", "", width = key.len());
                }
            }
            None => println!("{key}: [{}]", property.components.join(" | ")),
        }
    }
    Ok(())
}

fn parse_property(line: &str) -> Result<Property> {
    let (key, raw) = line
        .split_once(':')
        .ok_or_else(|| invalid_input(format!("not a content line: {line:?}")))?;
    let mut parts = key.split(';');
    let name = parts.next().unwrap_or_default().to_ascii_uppercase();
    let params = parts.map(str::to_string).collect();

    if STRUCTURED.contains(&name.as_str()) {
        return Ok(Property {
            name,
            params,
            value: None,
            components: split_components(raw)
                .into_iter()
                .map(|component| unescape_value(&component))
                .collect(),
        });
    }
    Ok(Property {
        name,
        params,
        value: Some(unescape_value(raw)),
        components: Vec::new(),
    })
}

/// Splits on `;` that is not escaped; components stay escaped.
fn split_components(raw: &str) -> Vec<String> {
    let mut components = vec![String::new()];
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(current) = components.last_mut() {
                    current.push('\\');
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                }
            }
            ';' => components.push(String::new()),
            _ => {
                if let Some(current) = components.last_mut() {
                    current.push(ch);
                }
            }
        }
    }
    components
}

#[cfg(test)]
mod tests {
    use super::{parse_property, split_components};

    #[test]
    fn structured_values_split_on_unescaped_semicolons() {
        assert_eq!(
            split_components("Smith\\, Jr.;Jean\\;Paul;;;"),
            vec!["Smith\\, Jr.", "Jean\\;Paul", "", "", ""]
        );

        let property = parse_property("N:Smith\\, Jr.;Jean\\;Paul;;;").expect("parse");
        assert_eq!(property.name, "N");
        assert_eq!(property.components[0], "Smith, Jr.");
        assert_eq!(property.components[1], "Jean;Paul");
    }

    #[test]
    fn text_values_are_unescaped() {
        let property = parse_property("NOTE:line one\\nline two\\, done").expect("parse");
        assert_eq!(property.value.as_deref(), Some("line one\nline two, done"));
        assert!(property.components.is_empty());

        let property = parse_property("TEL;TYPE=FAX,HOME:+49 30 1").expect("parse");
        assert_eq!(property.name, "TEL");
        assert_eq!(property.params, vec!["TYPE=FAX,HOME"]);
    }

    #[test]
    fn lines_without_colon_are_rejected() {
        assert!(parse_property("garbage").is_err());
    }
}
