use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use kontakt_core::{KIB, MAX_PHOTO_SIZE};
use kontakt_vcf::{DEFAULT_PRODUCT_ID, DEFAULT_QR_SIZE};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "kontakt";
const CONFIG_FILENAME: &str = "config.toml";

pub const MAX_PHOTO_KIB: u64 = 4096;
pub const QR_SIZE_RANGE: (u32, u32) = (64, 2048);

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Value of the `PRODID` line.
    pub product_id: String,
    pub photo_max_bytes: u64,
    pub qr: QrConfig,
    /// Where generated `.vcf` files go when no `--out` is given.
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct QrConfig {
    pub include_photo: bool,
    pub size: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            product_id: DEFAULT_PRODUCT_ID.to_string(),
            photo_max_bytes: MAX_PHOTO_SIZE,
            qr: QrConfig {
                include_photo: false,
                size: DEFAULT_QR_SIZE,
            },
            output_dir: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid product_id value: {0:?}")]
    InvalidProductId(String),
    #[error("invalid photo.max_kib value: {0} (expected 1..={max})", max = MAX_PHOTO_KIB)]
    InvalidPhotoSize(u64),
    #[error("invalid qr.size value: {0} (expected {min}..={max})", min = QR_SIZE_RANGE.0, max = QR_SIZE_RANGE.1)]
    InvalidQrSize(u32),
    #[error("invalid output.dir value: {0}")]
    InvalidOutputDir(PathBuf),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    product_id: Option<String>,
    photo: Option<PhotoFile>,
    qr: Option<QrFile>,
    output: Option<OutputFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhotoFile {
    max_kib: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct QrFile {
    include_photo: Option<bool>,
    size: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    dir: Option<PathBuf>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(product_id) = parsed.product_id {
        let trimmed = product_id.trim();
        if trimmed.is_empty() || trimmed.contains(['\r', '\n']) {
            return Err(ConfigError::InvalidProductId(product_id));
        }
        config.product_id = trimmed.to_string();
    }

    if let Some(max_kib) = parsed.photo.and_then(|photo| photo.max_kib) {
        if max_kib == 0 || max_kib > MAX_PHOTO_KIB {
            return Err(ConfigError::InvalidPhotoSize(max_kib));
        }
        config.photo_max_bytes = max_kib * KIB;
    }

    if let Some(qr) = parsed.qr {
        if let Some(include_photo) = qr.include_photo {
            config.qr.include_photo = include_photo;
        }
        if let Some(size) = qr.size {
            if size < QR_SIZE_RANGE.0 || size > QR_SIZE_RANGE.1 {
                return Err(ConfigError::InvalidQrSize(size));
            }
            config.qr.size = size;
        }
    }

    if let Some(dir) = parsed.output.and_then(|output| output.dir) {
        if dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidOutputDir(dir));
        }
        config.output_dir = Some(dir);
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, PhotoFile, QrFile};
    use kontakt_core::MAX_PHOTO_SIZE;
    use kontakt_vcf::{VcfOptions, DEFAULT_QR_SIZE};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_empty() {
        let merged = merge_config(ConfigFile::default()).expect("merge");
        assert_eq!(merged.product_id, VcfOptions::default().product_id);
        assert_eq!(merged.photo_max_bytes, MAX_PHOTO_SIZE);
        assert!(!merged.qr.include_photo);
        assert_eq!(merged.qr.size, DEFAULT_QR_SIZE);
        assert!(merged.output_dir.is_none());
    }

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            product_id: Some(" -//acme//cards//EN ".to_string()),
            photo: Some(PhotoFile { max_kib: Some(224) }),
            qr: Some(QrFile {
                include_photo: Some(true),
                size: Some(512),
            }),
            output: None,
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.product_id, "-//acme//cards//EN");
        assert_eq!(merged.photo_max_bytes, 224 * 1024);
        assert!(merged.qr.include_photo);
        assert_eq!(merged.qr.size, 512);
    }

    #[test]
    fn merge_config_rejects_out_of_range_values() {
        let parsed = ConfigFile {
            photo: Some(PhotoFile { max_kib: Some(0) }),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidPhotoSize(0))
        ));

        let parsed = ConfigFile {
            qr: Some(QrFile {
                include_photo: None,
                size: Some(10),
            }),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidQrSize(10))
        ));

        let parsed = ConfigFile {
            product_id: Some("bad\nid".to_string()),
            ..ConfigFile::default()
        };
        assert!(matches!(
            merge_config(parsed),
            Err(ConfigError::InvalidProductId(_))
        ));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("config file not found"));

        assert!(load_at_path(&missing, false).expect("optional").is_none());
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "product_id = \"-//acme//cards//EN\"\n\n[photo]\nmax_kib = 100\n\n[qr]\ninclude_photo = true\n\n[output]\ndir = \"cards\"\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.product_id, "-//acme//cards//EN");
        assert_eq!(config.photo_max_bytes, 100 * 1024);
        assert!(config.qr.include_photo);
        assert_eq!(config.output_dir, Some(PathBuf::from("cards")));
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "due_soon_days = 5\n").expect("write config");

        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
