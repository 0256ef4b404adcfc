use contracts::domain::common::RecordStatus;
use leptos::prelude::*;
use thaw::*;

/// Бейдж Activo/Inactivo; при наличии `on_toggle` — кнопка смены статуса
#[component]
pub fn StatusBadge(
    #[prop(into)]
    status: Signal<RecordStatus>,
    #[prop(optional)]
    on_toggle: Option<Callback<()>>,
) -> impl IntoView {
    let badge = move || {
        let status = status.get();
        let color = if status.is_active() {
            BadgeColor::Success
        } else {
            BadgeColor::Subtle
        };
        view! {
            <Badge appearance=BadgeAppearance::Tint color=color>
                {status.as_str()}
            </Badge>
        }
    };

    match on_toggle {
        Some(cb) => view! {
            <span
                class="status-badge status-badge--toggle"
                title={move || if status.get().is_active() { "Desactivar" } else { "Activar" }}
                on:click=move |e| {
                    e.stop_propagation();
                    cb.run(());
                }
            >
                {badge}
            </span>
        }
        .into_any(),
        None => view! { <span class="status-badge">{badge}</span> }.into_any(),
    }
}
