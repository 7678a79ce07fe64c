//! TabPanel — one content pane. Registers itself with the surrounding
//! `Tabs` on mount and renders its content when its value is selected.

use leptos::prelude::*;

use crate::context::TabsContext;
use crate::entry::TabEntry;
use crate::types::TabValue;

/// One tab's pane. Used directly as a child of `Tabs`, or instantiated by
/// `Tabs` itself for every item of the declarative `list`.
///
/// Mount order is display order; the registration is dropped again on
/// cleanup so dynamic child sets stay consistent.
#[component]
pub fn TabPanel(
    /// Unique identity of this tab within the surrounding `Tabs`.
    #[prop(into)]
    value: TabValue,
    #[prop(optional, into)] label: String,
    #[prop(optional)] disabled: bool,
    #[prop(optional)] removable: bool,
    /// Icon name for the nav item; empty means no icon.
    #[prop(optional, into)]
    icon: String,
    /// Inline text content, used when no children are given.
    #[prop(optional_no_strip)]
    panel: Option<String>,
    /// Unmount the content while inactive (default), or keep it mounted
    /// and hidden.
    #[prop(default = true)]
    destroy_on_hide: bool,
    /// Defer the first mount of the content until first activation.
    #[prop(optional)]
    lazy: bool,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let Some(ctx) = use_context::<TabsContext>() else {
        log::warn!("tab-panel: used outside of <Tabs>, nothing will render");
        return ().into_any();
    };

    ctx.register(TabEntry {
        value: value.clone(),
        label,
        disabled,
        removable,
        icon: (!icon.is_empty()).then_some(icon),
    });
    let cleanup_value = value.clone();
    on_cleanup(move || ctx.deregister(&cleanup_value));

    let is_active = Memo::new({
        let value = value.clone();
        move |_| ctx.selection().get() == value
    });

    // Tracks whether the pane has ever been active; this is what `lazy`
    // gates the first mount on.
    let was_activated = RwSignal::new(!lazy);
    Effect::new(move || {
        if is_active.get() && !was_activated.get_untracked() {
            was_activated.set(true);
        }
    });

    let mounted = Signal::derive(move || {
        if destroy_on_hide {
            is_active.get()
        } else {
            was_activated.get()
        }
    });

    let body = move || -> AnyView {
        if let Some(children) = &children {
            children().into_any()
        } else if let Some(text) = &panel {
            text.clone().into_any()
        } else {
            ().into_any()
        }
    };

    view! {
        <div
            class="tab-panel"
            class:tab-panel--hidden=move || !is_active.get()
            data-value=value.to_string()
        >
            <Show when=move || mounted.get()>{body()}</Show>
        </div>
    }
    .into_any()
}
