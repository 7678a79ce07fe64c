//! Tabbed-navigation widget for Leptos (CSR).
//!
//! `Tabs` composes a header strip (`TabNav`) and a content area of
//! `TabPanel`s. Panels come either from the declarative `list` prop or
//! from `TabPanel` children; selection is a caller-owned signal.

pub mod context;
pub mod entry;
pub mod icons;
pub mod nav;
pub mod panel;
pub mod resolve;
pub mod tabs;
pub mod types;

pub use context::TabsContext;
pub use entry::{TabEntry, TabOptions};
pub use nav::TabNav;
pub use panel::TabPanel;
pub use resolve::{resolve_panels, PanelSource, Resolution};
pub use tabs::Tabs;
pub use types::{TabAdd, TabPlacement, TabRemove, TabSize, TabTheme, TabValue};
