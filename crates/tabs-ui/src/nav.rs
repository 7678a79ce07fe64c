//! TabNav — the header strip. Renders one button per resolved entry plus
//! the optional add affordance, and reports raw change/add/remove signals
//! up to `Tabs` for normalization.

use leptos::ev;
use leptos::prelude::*;

use crate::entry::TabEntry;
use crate::icons::icon;
use crate::types::{TabAdd, TabPlacement, TabRemove, TabSize, TabTheme, TabValue};

fn nav_class(theme: TabTheme, size: TabSize, placement: TabPlacement) -> String {
    format!(
        "tab-nav tab-nav--{} tab-nav--{} tab-nav--{}",
        theme.css_suffix(),
        size.css_suffix(),
        placement.css_suffix()
    )
}

#[component]
pub fn TabNav(
    theme: TabTheme,
    size: TabSize,
    /// Disables the whole strip: select, remove and add clicks are ignored.
    disabled: bool,
    placement: TabPlacement,
    addable: bool,
    /// Current selection, read-only here.
    #[prop(into)]
    value: Signal<TabValue>,
    /// The resolved entries, uniform for both panel sources.
    #[prop(into)]
    entries: Signal<Vec<TabEntry>>,
    #[prop(into)] on_change: Callback<TabValue>,
    #[prop(into)] on_add: Callback<TabAdd>,
    #[prop(into)] on_remove: Callback<TabRemove>,
) -> impl IntoView {
    view! {
        <div class=nav_class(theme, size, placement) class:tab-nav--disabled=disabled>
            // Keyed by the whole entry: a field change re-creates the item,
            // so deep list mutations show up without extra wiring.
            <For
                each=move || entries.get()
                key=|entry| entry.clone()
                children=move |entry: TabEntry| {
                    let TabEntry {
                        value: item_value,
                        label,
                        disabled: item_disabled,
                        removable,
                        icon: item_icon,
                    } = entry;

                    let is_active = Memo::new({
                        let item_value = item_value.clone();
                        move |_| value.get() == item_value
                    });

                    let on_select = {
                        let item_value = item_value.clone();
                        move |_: ev::MouseEvent| {
                            if disabled || item_disabled {
                                return;
                            }
                            // Only a *different* tab produces a change signal.
                            if value.get_untracked() == item_value {
                                return;
                            }
                            on_change.run(item_value.clone());
                        }
                    };

                    let close = (removable && !disabled && !item_disabled).then(|| {
                        let item_value = item_value.clone();
                        view! {
                            <button
                                class="tab-nav__close"
                                on:click=move |ev: ev::MouseEvent| {
                                    ev.stop_propagation();
                                    // Index is looked up at click time; a cached
                                    // one would go stale after earlier removals.
                                    let index = entries
                                        .with_untracked(|entries| {
                                            entries.iter().position(|e| e.value == item_value)
                                        })
                                        .unwrap_or(0);
                                    on_remove.run(TabRemove {
                                        e: ev,
                                        value: item_value.clone(),
                                        index,
                                    });
                                }
                            >
                                {icon("x")}
                            </button>
                        }
                    });

                    view! {
                        <div
                            class="tab-nav__item"
                            class:tab-nav__item--active=is_active
                            class:tab-nav__item--disabled=item_disabled
                            on:click=on_select
                        >
                            {item_icon.as_deref().map(icon)}
                            <span class="tab-nav__label">{label}</span>
                            {close}
                        </div>
                    }
                }
            />
            {addable.then(|| view! {
                <button
                    class="tab-nav__add"
                    on:click=move |ev: ev::MouseEvent| {
                        if !disabled {
                            on_add.run(TabAdd { e: ev });
                        }
                    }
                >
                    {icon("plus")}
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_class_carries_all_modifiers() {
        assert_eq!(
            nav_class(TabTheme::Normal, TabSize::Medium, TabPlacement::Top),
            "tab-nav tab-nav--normal tab-nav--medium tab-nav--top"
        );
        assert_eq!(
            nav_class(TabTheme::Card, TabSize::Large, TabPlacement::Bottom),
            "tab-nav tab-nav--card tab-nav--large tab-nav--bottom"
        );
    }
}
