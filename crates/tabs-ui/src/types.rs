//! Plain data types shared by the tab components: tab identity, visual
//! enums and the event payloads reported to the host.

use std::fmt;

use leptos::ev;
use serde::{Deserialize, Serialize};

/// Identity of one tab. Either a string key or a number, matching what
/// hosts typically carry in their own state (entity keys, indexes).
///
/// Values must be unique within one `Tabs` instance; duplicates are not
/// validated and make selection and removal ambiguous.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TabValue {
    Str(String),
    Num(i64),
}

impl fmt::Display for TabValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TabValue::Str(value) => f.write_str(value),
            TabValue::Num(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for TabValue {
    fn from(value: &str) -> Self {
        TabValue::Str(value.to_string())
    }
}

impl From<String> for TabValue {
    fn from(value: String) -> Self {
        TabValue::Str(value)
    }
}

impl From<i64> for TabValue {
    fn from(value: i64) -> Self {
        TabValue::Num(value)
    }
}

/// Where the header strip renders relative to the content block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabPlacement {
    #[default]
    Top,
    Bottom,
}

impl TabPlacement {
    /// The one structural decision point of the render path: header before
    /// content for every placement except `Bottom`.
    pub fn header_first(self) -> bool {
        !matches!(self, TabPlacement::Bottom)
    }

    pub fn css_suffix(self) -> &'static str {
        match self {
            TabPlacement::Top => "top",
            TabPlacement::Bottom => "bottom",
        }
    }
}

/// Visual theme of the tab strip. Forwarded to the nav as a CSS modifier,
/// no behavioral branching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabTheme {
    #[default]
    Normal,
    Card,
}

impl TabTheme {
    pub fn css_suffix(self) -> &'static str {
        match self {
            TabTheme::Normal => "normal",
            TabTheme::Card => "card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabSize {
    #[default]
    Medium,
    Large,
}

impl TabSize {
    pub fn css_suffix(self) -> &'static str {
        match self {
            TabSize::Medium => "medium",
            TabSize::Large => "large",
        }
    }
}

/// Payload of the `add` callback: the click on the add affordance.
#[derive(Debug, Clone)]
pub struct TabAdd {
    pub e: ev::MouseEvent,
}

/// Payload of the `remove` callback. All three fields are mandatory and
/// pass through from the raw nav signal unchanged.
#[derive(Debug, Clone)]
pub struct TabRemove {
    pub e: ev::MouseEvent,
    pub value: TabValue,
    pub index: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_renders_first_unless_bottom() {
        assert!(TabPlacement::Top.header_first());
        assert!(!TabPlacement::Bottom.header_first());
        assert!(TabPlacement::default().header_first());
    }

    #[test]
    fn tab_value_display() {
        assert_eq!(TabValue::from("general").to_string(), "general");
        assert_eq!(TabValue::from(42i64).to_string(), "42");
    }

    #[test]
    fn tab_value_is_not_equal_across_kinds() {
        assert_ne!(TabValue::from("1"), TabValue::from(1i64));
        assert_eq!(TabValue::from("a"), TabValue::from("a".to_string()));
    }

    #[test]
    fn tab_value_serde_untagged() {
        let values: Vec<TabValue> = serde_json::from_str(r#"["general", 3]"#).unwrap();
        assert_eq!(
            values,
            vec![TabValue::from("general"), TabValue::from(3i64)]
        );
        assert_eq!(serde_json::to_string(&values).unwrap(), r#"["general",3]"#);
    }
}
