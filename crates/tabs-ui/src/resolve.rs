//! Panel source resolution: which ordered set of tabs is active, and where
//! it came from. Pure so it can be tested without a DOM.

use crate::entry::{TabEntry, TabOptions};

/// Which of the two panel sources produced the resolved set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSource {
    /// The declarative `list` prop.
    List,
    /// `TabPanel` children registered through context.
    Children,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        source: PanelSource,
        entries: Vec<TabEntry>,
    },
    /// Neither a populated list nor any registered child panel. The caller
    /// logs one diagnostic line and renders nothing for this pass.
    Missing,
}

impl Resolution {
    pub fn source(&self) -> Option<PanelSource> {
        match self {
            Resolution::Resolved { source, .. } => Some(*source),
            Resolution::Missing => None,
        }
    }

    pub fn entries(&self) -> Vec<TabEntry> {
        match self {
            Resolution::Resolved { entries, .. } => entries.clone(),
            Resolution::Missing => Vec::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Resolution::Missing)
    }
}

/// A non-empty `list` is authoritative; otherwise the registered child
/// panels are used in mount order. Values are not deduplicated or
/// validated here.
pub fn resolve_panels(list: &[TabOptions], registered: &[TabEntry]) -> Resolution {
    if !list.is_empty() {
        return Resolution::Resolved {
            source: PanelSource::List,
            entries: list.iter().map(TabEntry::from_options).collect(),
        };
    }
    if !registered.is_empty() {
        return Resolution::Resolved {
            source: PanelSource::Children,
            entries: registered.to_vec(),
        };
    }
    Resolution::Missing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(values: &[&str]) -> Vec<TabOptions> {
        values
            .iter()
            .map(|value| TabOptions::new(*value, value.to_uppercase()))
            .collect()
    }

    fn registered(values: &[&str]) -> Vec<TabEntry> {
        listed(values)
            .iter()
            .map(TabEntry::from_options)
            .collect()
    }

    #[test]
    fn list_wins_over_registered_children() {
        let resolution = resolve_panels(&listed(&["a", "b"]), &registered(&["x"]));
        assert_eq!(resolution.source(), Some(PanelSource::List));
        let values: Vec<String> = resolution
            .entries()
            .iter()
            .map(|entry| entry.value.to_string())
            .collect();
        assert_eq!(values, vec!["a", "b"]);
    }

    #[test]
    fn list_order_is_preserved() {
        let resolution = resolve_panels(&listed(&["c", "a", "b"]), &[]);
        let values: Vec<String> = resolution
            .entries()
            .iter()
            .map(|entry| entry.value.to_string())
            .collect();
        assert_eq!(values, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_list_falls_back_to_children() {
        let resolution = resolve_panels(&[], &registered(&["first", "second"]));
        assert_eq!(resolution.source(), Some(PanelSource::Children));
        let values: Vec<String> = resolution
            .entries()
            .iter()
            .map(|entry| entry.value.to_string())
            .collect();
        assert_eq!(values, vec!["first", "second"]);
    }

    #[test]
    fn no_source_resolves_to_missing() {
        let resolution = resolve_panels(&[], &[]);
        assert!(resolution.is_missing());
        assert_eq!(resolution.source(), None);
        assert!(resolution.entries().is_empty());
    }
}
