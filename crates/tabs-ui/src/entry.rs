//! Tab descriptors: the declarative `TabOptions` accepted through the
//! `list` prop, and the flat `TabEntry` projection the nav consumes.

use serde::{Deserialize, Serialize};

use crate::types::TabValue;

/// Declarative descriptor of one tab, as supplied through the `list` prop.
///
/// Serde-enabled so hosts can ship whole tab lists as data (JSON config,
/// backend responses).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabOptions {
    pub value: TabValue,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub removable: bool,
    #[serde(default)]
    pub icon: Option<String>,
    /// Inline text content for the pane. Markup content goes through
    /// `TabPanel` children instead.
    #[serde(default)]
    pub panel: Option<String>,
    /// Unmount the pane content while the tab is inactive.
    #[serde(default = "default_destroy_on_hide")]
    pub destroy_on_hide: bool,
    /// Defer mounting the pane content until the tab is first activated.
    #[serde(default)]
    pub lazy: bool,
}

fn default_destroy_on_hide() -> bool {
    true
}

impl TabOptions {
    pub fn new(value: impl Into<TabValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            removable: false,
            icon: None,
            panel: None,
            destroy_on_hide: true,
            lazy: false,
        }
    }
}

/// What the nav needs to know about one resolved tab, flattened into a
/// single immutable struct so list-sourced and child-sourced tabs read
/// identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TabEntry {
    pub value: TabValue,
    pub label: String,
    pub disabled: bool,
    pub removable: bool,
    pub icon: Option<String>,
}

impl TabEntry {
    pub fn from_options(options: &TabOptions) -> Self {
        Self {
            value: options.value.clone(),
            label: options.label.clone(),
            disabled: options.disabled,
            removable: options.removable,
            icon: options.icon.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_defaults() {
        let options = TabOptions::new("general", "General");
        assert!(!options.disabled);
        assert!(!options.removable);
        assert!(options.destroy_on_hide);
        assert!(!options.lazy);
        assert_eq!(options.icon, None);
        assert_eq!(options.panel, None);
    }

    #[test]
    fn projection_carries_fields_through() {
        let options = TabOptions {
            disabled: true,
            removable: true,
            icon: Some("code".to_string()),
            ..TabOptions::new(7i64, "JSON")
        };
        let entry = TabEntry::from_options(&options);
        assert_eq!(entry.value, TabValue::from(7i64));
        assert_eq!(entry.label, "JSON");
        assert!(entry.disabled);
        assert!(entry.removable);
        assert_eq!(entry.icon.as_deref(), Some("code"));
    }

    #[test]
    fn list_deserializes_from_json() {
        let json = r#"[
            { "value": "general", "label": "General" },
            { "value": 2, "label": "Lines", "removable": true, "lazy": true }
        ]"#;
        let list: Vec<TabOptions> = serde_json::from_str(json).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].value, TabValue::from("general"));
        assert!(list[0].destroy_on_hide);
        assert_eq!(list[1].value, TabValue::from(2i64));
        assert!(list[1].removable);
        assert!(list[1].lazy);
    }
}
