//! Tabs — the root widget. Decides which panel source is active, projects
//! it into the nav prop bundle, orders header and content by placement and
//! normalizes the raw nav signals into the public callback contract.

use leptos::prelude::*;

use crate::context::TabsContext;
use crate::entry::TabOptions;
use crate::nav::TabNav;
use crate::panel::TabPanel;
use crate::resolve::resolve_panels;
use crate::types::{TabAdd, TabPlacement, TabRemove, TabSize, TabTheme, TabValue};

/// Tabbed navigation: a header strip of selectable items plus the content
/// pane matching the current selection.
///
/// Panels come from exactly one of two sources: the declarative `list`
/// prop (authoritative when non-empty) or `TabPanel` children. The
/// selection lives in the caller-owned `value` signal; the widget writes
/// it only when the user picks a different tab, pairing the write with one
/// `on_change` run.
#[component]
pub fn Tabs(
    /// Visual theme of the tab strip.
    #[prop(optional)]
    theme: TabTheme,
    /// Size of the tab strip.
    #[prop(optional)]
    size: TabSize,
    /// Disables the whole widget.
    #[prop(optional)]
    disabled: bool,
    /// Where the header strip renders relative to the content block.
    #[prop(optional)]
    placement: TabPlacement,
    /// Shows the add affordance in the header.
    #[prop(optional)]
    addable: bool,
    /// Caller-owned current selection.
    #[prop(into)]
    value: RwSignal<TabValue>,
    /// Declarative panel source; wins over children when non-empty.
    #[prop(optional, into)]
    list: Option<Signal<Vec<TabOptions>>>,
    /// Runs with the newly selected value after the selection signal is
    /// updated.
    #[prop(optional, into)]
    on_change: Option<Callback<TabValue>>,
    /// Runs when the add affordance is clicked.
    #[prop(optional, into)]
    on_add: Option<Callback<TabAdd>>,
    /// Runs when a removal affordance is clicked; the widget itself does
    /// not mutate the panel set.
    #[prop(optional, into)]
    on_remove: Option<Callback<TabRemove>>,
    /// Markup panel source (`TabPanel`s, arbitrarily wrapped).
    #[prop(optional)]
    children: Option<ChildrenFn>,
) -> impl IntoView {
    let ctx = TabsContext::new(value, on_change, on_remove);
    provide_context(ctx);

    // Recomputed synchronously whenever the list signal or the child
    // registry changes, so the nav never reads a stale panel set.
    let resolution = Memo::new(move |_| {
        let listed = list.map(|list| list.get()).unwrap_or_default();
        ctx.registered()
            .with(|registered| resolve_panels(&listed, registered))
    });

    let entries = Signal::derive(move || resolution.get().entries());

    // Raw nav signals, renamed into the public contract.
    let handle_change = Callback::new(move |selected: TabValue| ctx.set_selection(selected));
    let handle_add = Callback::new(move |add: TabAdd| {
        if let Some(on_add) = on_add {
            on_add.run(add);
        }
    });
    let handle_remove = Callback::new(move |removed: TabRemove| ctx.remove(removed));

    let list_populated = Memo::new(move |_| {
        list.map(|list| list.with(|list| !list.is_empty()))
            .unwrap_or(false)
    });

    let header = view! {
        <div class=format!("tabs__header tabs__header--{}", placement.css_suffix())>
            <TabNav
                theme=theme
                size=size
                disabled=disabled
                placement=placement
                addable=addable
                value=Signal::from(value)
                entries=entries
                on_change=handle_change
                on_add=handle_add
                on_remove=handle_remove
            />
        </div>
    }
    .into_any();

    let content = view! {
        <div class="tabs__content">
            {move || {
                if list_populated.get() {
                    match list {
                        Some(list) => view! {
                            // Keyed by the whole options struct so a field
                            // change rebuilds that panel.
                            <For
                                each=move || list.get()
                                key=|options| options.clone()
                                children=move |options: TabOptions| {
                                    view! {
                                        <TabPanel
                                            value=options.value.clone()
                                            label=options.label.clone()
                                            disabled=options.disabled
                                            removable=options.removable
                                            icon=options.icon.clone().unwrap_or_default()
                                            panel=options.panel.clone()
                                            destroy_on_hide=options.destroy_on_hide
                                            lazy=options.lazy
                                        />
                                    }
                                }
                            />
                        }
                        .into_any(),
                        None => ().into_any(),
                    }
                } else if let Some(children) = children.as_ref() {
                    // Children mount before any of them has registered:
                    // registration happens on mount, and the nav entries
                    // follow through the registry.
                    children().into_any()
                } else {
                    log::warn!(
                        "tabs: no panel source, supply a non-empty `list` or `TabPanel` children"
                    );
                    ().into_any()
                }
            }}
        </div>
    }
    .into_any();

    let (first, second) = if placement.header_first() {
        (header, content)
    } else {
        (content, header)
    };

    view! { <div class="tabs">{first}{second}</div> }
}
