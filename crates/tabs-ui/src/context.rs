//! Reactive state shared between `Tabs` and its collaborators, provided
//! via Leptos context.

use leptos::prelude::*;

use crate::entry::TabEntry;
use crate::types::{TabRemove, TabValue};

/// Provided by `Tabs` to everything rendered under it.
///
/// Carries the caller-owned selection signal, the registry of child
/// `TabPanel`s (mount order = display order) and the outward callbacks.
/// Child panels registering here replaces vnode-type inspection: only real
/// `TabPanel` components contribute nav entries, however deep the host
/// nests them.
#[derive(Clone, Copy)]
pub struct TabsContext {
    selection: RwSignal<TabValue>,
    registry: RwSignal<Vec<TabEntry>>,
    on_change: Option<Callback<TabValue>>,
    on_remove: Option<Callback<TabRemove>>,
}

impl TabsContext {
    pub fn new(
        selection: RwSignal<TabValue>,
        on_change: Option<Callback<TabValue>>,
        on_remove: Option<Callback<TabRemove>>,
    ) -> Self {
        Self {
            selection,
            registry: RwSignal::new(Vec::new()),
            on_change,
            on_remove,
        }
    }

    /// The caller-owned current selection.
    pub fn selection(&self) -> RwSignal<TabValue> {
        self.selection
    }

    /// Entries registered by child panels, in mount order.
    pub fn registered(&self) -> RwSignal<Vec<TabEntry>> {
        self.registry
    }

    /// Called by `TabPanel` on mount. A panel re-created for the same value
    /// (keyed list updates) replaces its entry in place, keeping order.
    pub fn register(&self, entry: TabEntry) {
        self.registry.update(|entries| {
            if let Some(slot) = entries.iter_mut().find(|e| e.value == entry.value) {
                *slot = entry;
            } else {
                entries.push(entry);
            }
        });
    }

    /// Called by `TabPanel` on cleanup.
    pub fn deregister(&self, value: &TabValue) {
        self.registry.update(|entries| {
            if let Some(position) = entries.iter().position(|entry| &entry.value == value) {
                entries.remove(position);
            }
        });
    }

    /// The single selection API: writes the caller-owned signal and runs
    /// the `change` callback exactly once. The signal write is what keeps a
    /// host using only the signal in sync, with no extra wiring.
    pub fn set_selection(&self, value: TabValue) {
        self.selection.set(value.clone());
        if let Some(on_change) = self.on_change {
            on_change.run(value);
        }
    }

    /// Relays a raw remove signal outward, payload unchanged.
    pub fn remove(&self, event: TabRemove) {
        if let Some(on_remove) = self.on_remove {
            on_remove.run(event);
        }
    }
}
