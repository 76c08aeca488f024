//! Property panel declaration for the host design tool.
//!
//! The host shows one editor per [`PropertyDefinition`]: a text field for
//! [`PropertyKind::String`], an image picker for [`PropertyKind::Image`].
//! Defaults are read from [`LandingConfig::default`].

use crate::config::{
    HERO_IMAGE, HERO_SUBTITLE, HERO_TITLE, KEYS, LandingConfig, PRODUCT1_IMAGE, PRODUCT2_IMAGE,
    PRODUCT3_IMAGE,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// Editor type shown in the host panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    /// Free text field
    String,
    /// Image picker; the value is a URL
    Image,
}

/// One configurable field as declared to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDefinition {
    /// Host key, used as the object key in [`properties_json`]
    #[serde(skip)]
    pub key: &'static str,
    /// Panel label
    pub label: &'static str,
    /// Editor type
    #[serde(rename = "type")]
    pub kind: PropertyKind,
    /// Value from [`LandingConfig::default`]
    pub default_value: String,
}

/// Key, label and editor for every property, in the same order as [`KEYS`].
const PROPERTY_TABLE: [(&str, &str, PropertyKind); KEYS.len()] = [
    (HERO_TITLE, "Hero Title", PropertyKind::String),
    (HERO_SUBTITLE, "Hero Subtitle", PropertyKind::String),
    (HERO_IMAGE, "Hero Image", PropertyKind::Image),
    (PRODUCT1_IMAGE, "Product 1 Image", PropertyKind::Image),
    (PRODUCT2_IMAGE, "Product 2 Image", PropertyKind::Image),
    (PRODUCT3_IMAGE, "Product 3 Image", PropertyKind::Image),
];

/// All six definitions in panel order.
pub fn property_definitions() -> Vec<PropertyDefinition> {
    let defaults = LandingConfig::default();
    PROPERTY_TABLE
        .iter()
        .map(|&(key, label, kind)| PropertyDefinition {
            key,
            label,
            kind,
            default_value: defaults.get(key).unwrap_or_default().to_string(),
        })
        .collect()
}

/// The schema in the host's shape: `{ "<key>": { label, type, defaultValue } }`.
pub fn properties_json() -> Value {
    let mut schema = Map::new();
    for def in property_definitions() {
        let entry = serde_json::json!({
            "label": def.label,
            "type": def.kind,
            "defaultValue": def.default_value,
        });
        schema.insert(def.key.to_string(), entry);
    }
    Value::Object(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn definitions_follow_panel_order() {
        let keys: Vec<&str> = property_definitions().iter().map(|d| d.key).collect();
        assert_eq!(keys, KEYS.to_vec());
    }

    #[test]
    fn table_covers_every_config_key() {
        let keys: Vec<&str> = PROPERTY_TABLE.iter().map(|&(key, _, _)| key).collect();
        assert_eq!(keys, KEYS.to_vec());
        let config = LandingConfig::default();
        for (key, label, _) in PROPERTY_TABLE {
            assert!(config.get(key).is_some(), "{key} is not a config field");
            assert!(!label.is_empty(), "{key} has no label");
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let config = LandingConfig::default();
        for def in property_definitions() {
            assert_eq!(Some(def.default_value.as_str()), config.get(def.key));
            assert!(!def.label.is_empty(), "{} has no label", def.key);
        }
    }

    #[test]
    fn image_slots_are_image_kind() {
        let defs = property_definitions();
        let images: Vec<&str> = defs
            .iter()
            .filter(|d| d.kind == PropertyKind::Image)
            .map(|d| d.key)
            .collect();
        assert_eq!(images, vec![HERO_IMAGE, PRODUCT1_IMAGE, PRODUCT2_IMAGE, PRODUCT3_IMAGE]);
    }

    #[test]
    fn json_schema_uses_host_field_names() {
        let json = properties_json();
        let title = &json[HERO_TITLE];
        assert_eq!(title["label"], "Hero Title");
        assert_eq!(title["type"], "string");
        assert_eq!(title["defaultValue"], "Think Ahead. See Ahead.");
        assert_eq!(json[PRODUCT3_IMAGE]["type"], "image");
        assert_eq!(json.as_object().map(|o| o.len()), Some(6));
    }

    #[test]
    fn definition_serializes_without_key() {
        let def = &property_definitions()[0];
        let json = serde_json::to_value(def).unwrap();
        assert!(json.get("key").is_none());
        assert_eq!(json["type"], "string");
        assert!(json.get("defaultValue").is_some());
    }
}
