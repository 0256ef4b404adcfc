use contracts::shared::wizard::WizardStep;
use leptos::prelude::*;

/// Шаги мастера; вернуться можно только на уже пройденный шаг
#[component]
pub fn StepIndicator<S>(
    #[prop(into)]
    current: Signal<S>,
    is_visited: Callback<S, bool>,
    on_select: Callback<S>,
) -> impl IntoView
where
    S: WizardStep + Send + Sync,
{
    view! {
        <div class="wizard-steps">
            {S::all().iter().copied().enumerate().map(|(i, step)| {
                view! {
                    <button
                        class="wizard-steps__item"
                        class:wizard-steps__item--active={move || current.get() == step}
                        class:wizard-steps__item--visited={move || is_visited.run(step)}
                        disabled={move || !is_visited.run(step)}
                        on:click={move |_| on_select.run(step)}
                    >
                        <span class="wizard-steps__number">{i + 1}</span>
                        <span class="wizard-steps__label">{step.label()}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
