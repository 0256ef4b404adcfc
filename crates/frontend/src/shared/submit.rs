//! Имитация отправки формы на сервер.
//!
//! Сервера нет: «запрос» — это пауза длиной `submission.delay_ms`, после
//! которой действие выполняется над in-memory хранилищем.

use contracts::shared::submission::SubmitState;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Submitting → задержка → Succeeded/Failed по результату `action`.
///
/// Повторный вызов во время ожидания игнорируется.
pub fn simulate_submit<F>(state: RwSignal<SubmitState>, delay_ms: u32, action: F)
where
    F: FnOnce() -> Result<String, String> + 'static,
{
    if state.with_untracked(|s| s.is_submitting()) {
        log::debug!("submit ignored: already submitting");
        return;
    }
    state.set(SubmitState::Submitting);

    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        let next = match action() {
            Ok(message) => {
                log::info!("submit ok: {}", message);
                SubmitState::Succeeded(message)
            }
            Err(message) => {
                log::warn!("submit failed: {}", message);
                SubmitState::Failed(message)
            }
        };
        state.set(next);
    });
}

/// Текущие дата и время браузера
pub fn now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn today() -> chrono::NaiveDate {
    now().date()
}
