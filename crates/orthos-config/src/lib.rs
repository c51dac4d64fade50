use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use orthos_core::{CoreError, FieldClassification, PhoneConfig};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "orthos";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_UPPERCASE_FIELDS: &[&str] = &[
    "billing_first_name",
    "billing_last_name",
    "billing_address_1",
    "billing_city",
    "billing_state",
    "billing_country",
    "shipping_first_name",
    "shipping_last_name",
    "shipping_address_1",
    "shipping_city",
    "shipping_state",
    "shipping_country",
    "order_comments",
];

const DEFAULT_LOWERCASE_FIELDS: &[&str] = &["billing_email"];

const DEFAULT_PHONE_FIELDS: &[&str] = &["billing_phone", "shipping_phone"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub remove_greek_accents: bool,
    pub phone: PhoneConfig,
    pub fields: FieldClassification,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            remove_greek_accents: true,
            phone: PhoneConfig::default(),
            fields: default_fields(),
        }
    }
}

fn default_fields() -> FieldClassification {
    FieldClassification::from_groups(
        &owned(DEFAULT_UPPERCASE_FIELDS),
        &owned(DEFAULT_LOWERCASE_FIELDS),
        &owned(DEFAULT_PHONE_FIELDS),
    )
    .expect("default field classification is disjoint")
}

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid subscriber marker: {0:?}")]
    InvalidMarker(String),
    #[error("invalid phone settings: {0}")]
    InvalidPhoneSettings(#[source] CoreError),
    #[error("invalid field classification: {0}")]
    InvalidFieldClassification(#[source] CoreError),
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

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    remove_greek_accents: Option<bool>,
    phone: Option<PhoneFile>,
    fields: Option<FieldsFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhoneFile {
    enabled: Option<bool>,
    country_prefixes: Option<Vec<String>>,
    country_code: Option<String>,
    mobile_marker: Option<String>,
    landline_marker: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FieldsFile {
    uppercase: Option<Vec<String>>,
    lowercase: Option<Vec<String>>,
    phone: Option<Vec<String>>,
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

    if let Some(remove) = parsed.remove_greek_accents {
        config.remove_greek_accents = remove;
    }

    if let Some(phone) = parsed.phone {
        if let Some(enabled) = phone.enabled {
            config.phone.enabled = enabled;
        }
        if let Some(prefixes) = phone.country_prefixes {
            config.phone.country_prefixes = prefixes;
        }
        if let Some(code) = phone.country_code {
            config.phone.dial_plan.country_code = code;
        }
        if let Some(marker) = phone.mobile_marker {
            config.phone.dial_plan.mobile_marker = parse_marker(marker)?;
        }
        if let Some(marker) = phone.landline_marker {
            config.phone.dial_plan.landline_marker = parse_marker(marker)?;
        }
        config
            .phone
            .validate()
            .map_err(ConfigError::InvalidPhoneSettings)?;
    }

    if let Some(fields) = parsed.fields {
        let uppercase = fields.uppercase.unwrap_or_else(|| owned(DEFAULT_UPPERCASE_FIELDS));
        let lowercase = fields.lowercase.unwrap_or_else(|| owned(DEFAULT_LOWERCASE_FIELDS));
        let phone = fields.phone.unwrap_or_else(|| owned(DEFAULT_PHONE_FIELDS));
        config.fields = FieldClassification::from_groups(&uppercase, &lowercase, &phone)
            .map_err(ConfigError::InvalidFieldClassification)?;
    }

    Ok(config)
}

fn parse_marker(raw: String) -> Result<char> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(ConfigError::InvalidMarker(raw)),
    }
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, ConfigError, ConfigFile, FieldsFile, PhoneFile};
    use orthos_core::FieldKind;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn merge_config_applies_values() {
        let parsed = ConfigFile {
            remove_greek_accents: Some(false),
            phone: Some(PhoneFile {
                enabled: Some(true),
                country_prefixes: Some(vec!["+357".to_string(), "00357".to_string()]),
                country_code: Some("357".to_string()),
                mobile_marker: Some("9".to_string()),
                landline_marker: Some("2".to_string()),
            }),
            fields: Some(FieldsFile {
                uppercase: Some(vec!["billing_city".to_string()]),
                lowercase: Some(vec!["billing_email".to_string()]),
                phone: Some(vec!["billing_phone".to_string()]),
            }),
        };
        let merged = merge_config(parsed).expect("merge");
        assert!(!merged.remove_greek_accents);
        assert_eq!(merged.phone.dial_plan.country_code, "357");
        assert_eq!(merged.phone.dial_plan.mobile_marker, '9');
        assert_eq!(
            merged.fields.kind_of("billing_city"),
            Some(FieldKind::Uppercase)
        );
        assert_eq!(merged.fields.kind_of("shipping_city"), None);
    }

    #[test]
    fn merge_config_rejects_overlapping_fields() {
        let parsed = ConfigFile {
            remove_greek_accents: None,
            phone: None,
            fields: Some(FieldsFile {
                uppercase: Some(vec!["billing_phone".to_string()]),
                lowercase: None,
                phone: Some(vec!["billing_phone".to_string()]),
            }),
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidFieldClassification(_)));
    }

    #[test]
    fn merge_config_rejects_multi_char_marker() {
        let parsed = ConfigFile {
            remove_greek_accents: None,
            phone: Some(PhoneFile {
                enabled: None,
                country_prefixes: None,
                country_code: None,
                mobile_marker: Some("69".to_string()),
                landline_marker: None,
            }),
            fields: None,
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMarker(_)));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            "remove_greek_accents = true\n\n[phone]\nenabled = true\ncountry_prefixes = [\"+30\", \"0030\"]\n\n[fields]\nphone = [\"billing_phone\"]\n",
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert!(config.remove_greek_accents);
        assert_eq!(
            config.phone.country_prefixes,
            vec!["+30".to_string(), "0030".to_string()]
        );
        assert_eq!(
            config.fields.kind_of("billing_phone"),
            Some(FieldKind::Phone)
        );
        // Unset groups keep their defaults.
        assert_eq!(
            config.fields.kind_of("billing_city"),
            Some(FieldKind::Uppercase)
        );
    }

    #[test]
    fn load_at_path_rejects_unknown_keys() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(&path, "uppercase_everything = true\n").expect("write config");
        let err = load_at_path(&path, true).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
