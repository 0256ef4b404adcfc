use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка-счётчик на дашборде
#[component]
pub fn StatCard(
    label: &'static str,
    /// Имя иконки для icon()
    icon_name: &'static str,
    #[prop(into)]
    value: Signal<usize>,
    /// Модификатор: "", "success", "warning", "error"
    #[prop(optional)]
    variant: &'static str,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
    /// Клик по карточке (например, применить фильтр)
    #[prop(optional)]
    on_click: Option<Callback<()>>,
) -> impl IntoView {
    let class = if variant.is_empty() {
        "stat-card".to_string()
    } else {
        format!("stat-card stat-card--{variant}")
    };

    view! {
        <div
            class=class
            class:stat-card--clickable={on_click.is_some()}
            on:click=move |_| {
                if let Some(cb) = on_click {
                    cb.run(());
                }
            }
        >
            <div class="stat-card__header">
                <span class="stat-card__icon">{icon(icon_name)}</span>
                <span class="stat-card__label">{label}</span>
            </div>
            <div class="stat-card__value">{move || value.get()}</div>
            {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
        </div>
    }
}
