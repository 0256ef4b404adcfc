use contracts::shared::submission::SubmitState;
use leptos::prelude::*;
use thaw::*;

/// Spinner во время отправки и итоговое сообщение
#[component]
pub fn SubmitMessage(#[prop(into)] state: Signal<SubmitState>) -> impl IntoView {
    move || match state.get() {
        SubmitState::Idle => view! { <></> }.into_any(),
        SubmitState::Submitting => view! {
            <div class="submit-message submit-message--pending">
                <Spinner size=SpinnerSize::Tiny />
                <span>"Enviando..."</span>
            </div>
        }
        .into_any(),
        SubmitState::Succeeded(message) => view! {
            <MessageBar intent=MessageBarIntent::Success>{message}</MessageBar>
        }
        .into_any(),
        SubmitState::Failed(message) => view! {
            <MessageBar intent=MessageBarIntent::Error>{message}</MessageBar>
        }
        .into_any(),
    }
}
