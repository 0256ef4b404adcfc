//! Состояние страницы-мастера: сам мастер из contracts, ошибки текущего шага
//! и результат отправки. Поля формы связываются через `field`/`input`.

use contracts::shared::location::LocationSelection;
use contracts::shared::submission::SubmitState;
use contracts::shared::validation::FieldErrors;
use contracts::shared::wizard::{WizardError, WizardStep};
use leptos::prelude::*;

pub struct WizardForm<W: Send + Sync + 'static> {
    pub state: RwSignal<W>,
    pub errors: RwSignal<FieldErrors>,
    /// Почему не удалось перейти на другой шаг
    pub nav_error: RwSignal<Option<String>>,
    pub submit: RwSignal<SubmitState>,
}

impl<W: Send + Sync + 'static> Clone for WizardForm<W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: Send + Sync + 'static> Copy for WizardForm<W> {}

/// Короткое сообщение для панели навигации; подробности показаны под полями
pub fn navigation_message(error: &WizardError) -> String {
    match error {
        WizardError::InvalidStep { step, .. } => format!("Revise los datos del paso {}", step),
        other => other.to_string(),
    }
}

impl<W: Send + Sync + 'static> WizardForm<W> {
    pub fn new(initial: W) -> Self {
        Self {
            state: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::new()),
            nav_error: RwSignal::new(None),
            submit: RwSignal::new(SubmitState::Idle),
        }
    }

    pub fn field(&self, get: fn(&W) -> String) -> Signal<String> {
        let state = self.state;
        Signal::derive(move || state.with(get))
    }

    pub fn input(&self, key: &'static str, put: fn(&mut W, String)) -> Callback<String> {
        let form = *self;
        Callback::new(move |value: String| {
            form.state.update(|w| put(w, value));
            form.clear_error(key);
        })
    }

    pub fn location(&self, get: fn(&W) -> LocationSelection) -> Signal<LocationSelection> {
        let state = self.state;
        Signal::derive(move || state.with(get))
    }

    /// `prefix` как у ключей ошибок ("origin" → "origin.country")
    pub fn on_location(
        &self,
        prefix: &'static str,
        put: fn(&mut W, LocationSelection),
    ) -> Callback<LocationSelection> {
        let form = *self;
        Callback::new(move |location: LocationSelection| {
            form.state.update(|w| put(w, location));
            for field in ["country", "province", "city"] {
                if prefix.is_empty() {
                    form.clear_error(field);
                } else {
                    form.clear_error(&format!("{}.{}", prefix, field));
                }
            }
        })
    }

    pub fn clear_error(&self, key: &str) {
        if self.errors.with_untracked(|e| e.contains(key)) {
            self.errors.update(|e| e.remove(key));
        }
    }

    /// next/back/go_to: при ошибке шаг не меняется, ошибки шага показываются под полями
    pub fn navigate<S: WizardStep>(&self, action: impl FnOnce(&mut W) -> Result<S, WizardError>) {
        match self.state.try_update(action) {
            Some(Ok(step)) => {
                log::debug!("wizard step -> {}", step.label());
                self.errors.set(FieldErrors::new());
                self.nav_error.set(None);
            }
            Some(Err(e)) => {
                log::debug!("wizard navigation rejected: {}", e);
                self.errors.set(e.field_errors());
                self.nav_error.set(Some(navigation_message(&e)));
            }
            None => {}
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.with(SubmitState::is_submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_message_hides_field_details() {
        let mut errors = FieldErrors::new();
        errors.insert("reference", "La referencia es obligatoria");
        let err = WizardError::InvalidStep { step: "General", errors };
        assert_eq!(navigation_message(&err), "Revise los datos del paso General");
        assert_eq!(
            navigation_message(&WizardError::AtFirstStep),
            "Ya se encuentra en el primer paso"
        );
    }
}
