//! Demo page exercising both panel sources of the tabs widget.

use leptos::prelude::*;
use tabs_ui::{TabAdd, TabOptions, TabPanel, TabPlacement, TabRemove, TabTheme, TabValue, Tabs};
use uuid::Uuid;

// Initial tab list shipped as data, the way a host would store it in
// config or receive it from a backend.
const INITIAL_TABS: &str = r#"[
    { "value": "general", "label": "Общие", "icon": "file-text" },
    { "value": "lines", "label": "Строки", "icon": "list", "removable": true },
    { "value": "json", "label": "JSON", "icon": "code", "removable": true,
      "panel": "Сырой ответ загружается по требованию", "lazy": true }
]"#;

fn initial_tabs() -> Vec<TabOptions> {
    serde_json::from_str(INITIAL_TABS).unwrap_or_else(|err| {
        log::error!("failed to parse the initial tab list: {err}");
        Vec::new()
    })
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="demo">
            <h1>"tabs-ui"</h1>
            <ListDrivenSection />
            <MarkupDrivenSection />
        </main>
    }
}

// ── Declarative list source ───────────────────────────────────────────────────

#[component]
fn ListDrivenSection() -> impl IntoView {
    let list = RwSignal::new(initial_tabs());
    let value = RwSignal::new(TabValue::from("general"));
    let last_event = RwSignal::new(String::new());

    let on_change = Callback::new(move |selected: TabValue| {
        last_event.set(format!("change: {selected}"));
    });

    let on_add = Callback::new(move |_add: TabAdd| {
        let id = Uuid::new_v4().simple().to_string();
        let tab_value = TabValue::from(format!("tab-{}", &id[..8]));
        list.update(|tabs| {
            tabs.push(TabOptions {
                removable: true,
                panel: Some("Пустая вкладка".to_string()),
                ..TabOptions::new(tab_value.clone(), format!("Новая {}", tabs.len() + 1))
            });
        });
        value.set(tab_value);
        last_event.set("add".to_string());
    });

    let on_remove = Callback::new(move |removed: TabRemove| {
        list.update(|tabs| tabs.retain(|tab| tab.value != removed.value));
        // Removing the active tab falls back to the first remaining one.
        if value.get_untracked() == removed.value {
            if let Some(next) = list.with_untracked(|tabs| tabs.first().map(|tab| tab.value.clone()))
            {
                value.set(next);
            }
        }
        last_event.set(format!("remove: {} (index {})", removed.value, removed.index));
    });

    view! {
        <section class="demo__section">
            <h2>"Вкладки из списка"</h2>
            <Tabs
                theme=TabTheme::Card
                addable=true
                value=value
                list=Signal::from(list)
                on_change=on_change
                on_add=on_add
                on_remove=on_remove
            />
            <p class="demo__status">
                "Активна: " {move || value.get().to_string()}
                {move || {
                    let event = last_event.get();
                    if event.is_empty() { String::new() } else { format!(" · {event}") }
                }}
            </p>
        </section>
    }
}

// ── Markup source ─────────────────────────────────────────────────────────────

#[component]
fn MarkupDrivenSection() -> impl IntoView {
    let value = RwSignal::new(TabValue::from("overview"));

    view! {
        <section class="demo__section">
            <h2>"Вкладки из разметки, заголовок снизу"</h2>
            <Tabs value=value placement=TabPlacement::Bottom>
                <TabPanel value="overview" label="Обзор" icon="file-text">
                    <p>"Контент приходит дочерними панелями, список не нужен."</p>
                </TabPanel>
                <TabPanel value="journal" label="Журнал" lazy=true destroy_on_hide=false>
                    <p>"Смонтирован при первом открытии и больше не размонтируется."</p>
                </TabPanel>
                <TabPanel value="settings" label="Настройки" icon="settings" disabled=true>
                    <p>"Недоступно"</p>
                </TabPanel>
            </Tabs>
        </section>
    }
}
