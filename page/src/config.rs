//! Page configuration: the six fields a host design tool can edit.
//!
//! Every field has a documented default, so an empty configuration renders
//! the stock VisioCorp page. Overrides arrive from a JSON/TOML file, from
//! `key=value` pairs on the command line, or from the browser's query string.
//!
//! Keys are the host's camelCase names (`heroTitle`, `product2Image`, ...).
//!
//! # Example
//!
//! ```rust
//! use visiocorp_page::config::LandingConfig;
//!
//! let config = LandingConfig::from_json_str(r#"{ "heroTitle": "Seek insight." }"#).unwrap();
//! assert_eq!(config.hero_title, "Seek insight.");
//! assert_eq!(config.hero_subtitle, LandingConfig::default().hero_subtitle);
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Host key for [`LandingConfig::hero_title`].
pub const HERO_TITLE: &str = "heroTitle";
/// Host key for [`LandingConfig::hero_subtitle`].
pub const HERO_SUBTITLE: &str = "heroSubtitle";
/// Host key for [`LandingConfig::hero_image`].
pub const HERO_IMAGE: &str = "heroImage";
/// Host key for [`LandingConfig::product1_image`].
pub const PRODUCT1_IMAGE: &str = "product1Image";
/// Host key for [`LandingConfig::product2_image`].
pub const PRODUCT2_IMAGE: &str = "product2Image";
/// Host key for [`LandingConfig::product3_image`].
pub const PRODUCT3_IMAGE: &str = "product3Image";

/// All recognised keys, in property panel order.
pub const KEYS: [&str; 6] = [
    HERO_TITLE,
    HERO_SUBTITLE,
    HERO_IMAGE,
    PRODUCT1_IMAGE,
    PRODUCT2_IMAGE,
    PRODUCT3_IMAGE,
];

/// Two sentences, so the hero renders two lines.
pub const DEFAULT_HERO_TITLE: &str = "Think Ahead. See Ahead.";
/// Also used as the page's meta description.
pub const DEFAULT_HERO_SUBTITLE: &str = "VisioCorp builds AI systems, creative tools, and culture products for the next era of African excellence.";
/// Abstract architecture shot.
pub const DEFAULT_HERO_IMAGE: &str = "https://images.unsplash.com/photo-1525770473232-8ad750e600ee?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxhYnN0cmFjdCUyMGZ1dHVyaXN0aWMlMjBjb3Jwb3JhdGUlMjBhcmNoaXRlY3R1cmUlMjBzaWx2ZXIlMjB3aGl0ZXxlbnwxfHx8fDE3NzA1MTM5OTB8MA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral";
/// Card image for VisioCorp AI Suite.
pub const DEFAULT_PRODUCT1_IMAGE: &str = "https://images.unsplash.com/photo-1634836023845-eddbfe9937da?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxtb2Rlcm4lMjBzb2Z0d2FyZSUyMGRhc2hib2FyZCUyMHVpJTIwZGFyayUyMG1vZGV8ZW58MXx8fHwxNzcwNTE1MjIxfDA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral";
/// Card image for the second shipping product.
pub const DEFAULT_PRODUCT2_IMAGE: &str = "https://images.unsplash.com/photo-1733670752261-1cfaf1c84f3b?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxhYnN0cmFjdCUyMDNkJTIwZ2VvbWV0cmljJTIwc2hhcGUlMjByb2JvdHxlbnwxfHx8fDE3NzA1MTUyMjF8MA&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral";
/// Card image for the third shipping product.
pub const DEFAULT_PRODUCT3_IMAGE: &str = "https://images.unsplash.com/photo-1759912804199-a104b710a308?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxhYnN0cmFjdCUyMHNvdW5kJTIwd2F2ZSUyMHZpc3VhbGl6YXRpb24lMjBmdXR1cmlzdGljfGVufDF8fHx8MTc3MDUxNTIyMXww&ixlib=rb-4.1.0&q=80&w=1080&utm_source=figma&utm_medium=referral";

/// Errors raised while loading or overriding a [`LandingConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Not a JSON object of strings.
    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
    /// Not a TOML table of strings.
    #[error("invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),
    /// Key outside [`KEYS`].
    #[error("unknown property `{0}` (expected one of: {keys})", keys = KEYS.join(", "))]
    UnknownProperty(String),
    /// A `--set` argument without `=` or with an empty key.
    #[error("malformed override `{0}`, expected key=value")]
    MalformedOverride(String),
}

/// Content supplied by the host. Absent fields fall back to the defaults.
///
/// Serializes with the host keys. Decoding goes through [`LandingConfig::set`]
/// (see [`LandingConfig::from_json_str`]) so unknown keys always surface as
/// [`ConfigError::UnknownProperty`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingConfig {
    /// Hero headline; each `.`-terminated sentence is rendered on its own line
    pub hero_title: String,
    /// Paragraph under the headline
    pub hero_subtitle: String,
    /// Large hero artwork URL
    pub hero_image: String,
    /// Image for the first "Now Shipping" card
    pub product1_image: String,
    /// Image for the second card
    pub product2_image: String,
    /// Image for the third card
    pub product3_image: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            hero_title: DEFAULT_HERO_TITLE.into(),
            hero_subtitle: DEFAULT_HERO_SUBTITLE.into(),
            hero_image: DEFAULT_HERO_IMAGE.into(),
            product1_image: DEFAULT_PRODUCT1_IMAGE.into(),
            product2_image: DEFAULT_PRODUCT2_IMAGE.into(),
            product3_image: DEFAULT_PRODUCT3_IMAGE.into(),
        }
    }
}

impl LandingConfig {
    fn field_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            HERO_TITLE => Some(&mut self.hero_title),
            HERO_SUBTITLE => Some(&mut self.hero_subtitle),
            HERO_IMAGE => Some(&mut self.hero_image),
            PRODUCT1_IMAGE => Some(&mut self.product1_image),
            PRODUCT2_IMAGE => Some(&mut self.product2_image),
            PRODUCT3_IMAGE => Some(&mut self.product3_image),
            _ => None,
        }
    }

    /// Read a field by its host key.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            HERO_TITLE => &self.hero_title,
            HERO_SUBTITLE => &self.hero_subtitle,
            HERO_IMAGE => &self.hero_image,
            PRODUCT1_IMAGE => &self.product1_image,
            PRODUCT2_IMAGE => &self.product2_image,
            PRODUCT3_IMAGE => &self.product3_image,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Override a single field by its host key.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Result<(), ConfigError> {
        let field = self
            .field_mut(key)
            .ok_or_else(|| ConfigError::UnknownProperty(key.to_string()))?;
        *field = value.into();
        debug!(key, "config override applied");
        Ok(())
    }

    /// Apply overrides in order, stopping at the first unknown key.
    pub fn with_overrides<I, K, V>(mut self, overrides: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in overrides {
            self.set(key.as_ref(), value)?;
        }
        Ok(self)
    }

    /// Parse a partial JSON object of string fields.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let fields: BTreeMap<String, String> = serde_json::from_str(content)?;
        Self::default().with_overrides(fields)
    }

    /// Parse a partial TOML table of string fields.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let fields: BTreeMap<String, String> = toml::from_str(content)?;
        Self::default().with_overrides(fields)
    }

    /// Load from a file: `.toml` is parsed as TOML, anything else as JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let is_toml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if is_toml {
            Self::from_toml_str(&content)
        } else {
            Self::from_json_str(&content)
        }
    }

    /// Build from a URL query string such as `?heroTitle=Hello&utm_source=x`.
    ///
    /// Unrecognised parameters (tracking tags and the like) are skipped with a
    /// warning instead of failing.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut config = Self::default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            if config.set(&key, value.into_owned()).is_err() {
                warn!(key = %key, "ignoring unknown query parameter");
            }
        }
        config
    }
}

/// Split a `key=value` override. The value may itself contain `=`.
pub fn parse_override(raw: &str) -> Result<(String, String), ConfigError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::MalformedOverride(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_documented_values() {
        let config = LandingConfig::default();
        assert_eq!(config.hero_title, "Think Ahead. See Ahead.");
        assert!(config.hero_subtitle.starts_with("VisioCorp builds AI systems"));
        assert!(config.hero_image.contains("photo-1525770473232"));
        assert!(config.product1_image.contains("photo-1634836023845"));
        assert!(config.product2_image.contains("photo-1733670752261"));
        assert!(config.product3_image.contains("photo-1759912804199"));
    }

    #[test]
    fn get_and_set_by_host_key() {
        let mut config = LandingConfig::default();
        config.set(PRODUCT2_IMAGE, "https://cdn.example/robot.png").unwrap();
        assert_eq!(config.get(PRODUCT2_IMAGE), Some("https://cdn.example/robot.png"));
        assert_eq!(config.product2_image, "https://cdn.example/robot.png");
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut config = LandingConfig::default();
        let err = config.set("heroTagline", "x").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProperty(ref k) if k == "heroTagline"));
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn json_partial_keeps_defaults() {
        let config =
            LandingConfig::from_json_str(r#"{"heroSubtitle": "Built in Lagos."}"#).unwrap();
        assert_eq!(config.hero_subtitle, "Built in Lagos.");
        assert_eq!(config.hero_title, DEFAULT_HERO_TITLE);
        assert_eq!(config.product3_image, DEFAULT_PRODUCT3_IMAGE);
    }

    #[test]
    fn json_unknown_key_is_rejected() {
        let err = LandingConfig::from_json_str(r#"{"hero_title": "snake"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownProperty(_)));
    }

    #[test]
    fn json_non_string_value_is_a_parse_error() {
        let err = LandingConfig::from_json_str(r#"{"heroTitle": 42}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn toml_partial_keeps_defaults() {
        let config = LandingConfig::from_toml_str(
            "heroTitle = \"See Ahead.\"\nproduct1Image = \"https://cdn.example/suite.jpg\"\n",
        )
        .unwrap();
        assert_eq!(config.hero_title, "See Ahead.");
        assert_eq!(config.product1_image, "https://cdn.example/suite.jpg");
        assert_eq!(config.hero_image, DEFAULT_HERO_IMAGE);
    }

    #[test]
    fn serializes_with_host_keys() {
        let json = serde_json::to_value(LandingConfig::default()).unwrap();
        for key in KEYS {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        let parsed = LandingConfig::from_json_str(&json.to_string()).unwrap();
        assert_eq!(parsed, LandingConfig::default());
    }

    #[test]
    fn json_and_toml_reject_unknown_keys_the_same_way() {
        let json = LandingConfig::from_json_str(r#"{"heroImage": "", "extra": "x"}"#);
        let toml = LandingConfig::from_toml_str("heroImage = \"\"\nextra = \"x\"\n");
        for result in [json, toml] {
            assert!(matches!(result, Err(ConfigError::UnknownProperty(ref k)) if k == "extra"));
        }
    }

    #[test]
    fn empty_image_value_is_kept() {
        let parsed = LandingConfig::from_json_str(r#"{"heroImage": ""}"#).unwrap();
        assert_eq!(parsed.hero_image, "");
        assert_eq!(parsed.hero_title, DEFAULT_HERO_TITLE);
    }

    #[test]
    fn query_string_decodes_and_skips_unknown() {
        let config = LandingConfig::from_query(
            "?heroTitle=Seek+insight.&utm_source=figma&heroSubtitle=A%26B",
        );
        assert_eq!(config.hero_title, "Seek insight.");
        assert_eq!(config.hero_subtitle, "A&B");
        assert_eq!(config.hero_image, DEFAULT_HERO_IMAGE);
    }

    #[test]
    fn empty_query_is_default() {
        assert_eq!(LandingConfig::from_query(""), LandingConfig::default());
        assert_eq!(LandingConfig::from_query("?"), LandingConfig::default());
    }

    #[test]
    fn parse_override_splits_on_first_equals() {
        assert_eq!(
            parse_override("heroImage=https://x.example/a.png?w=10").unwrap(),
            ("heroImage".to_string(), "https://x.example/a.png?w=10".to_string())
        );
        assert!(matches!(
            parse_override("heroTitle"),
            Err(ConfigError::MalformedOverride(_))
        ));
        assert!(matches!(
            parse_override("=value"),
            Err(ConfigError::MalformedOverride(_))
        ));
    }
}
