use crate::shared::components::submit_message::SubmitMessage;
use crate::shared::config::use_app_config;
use crate::shared::data_stores::{DataStores, StoreAccess};
use crate::shared::icons::icon;
use crate::shared::submit::simulate_submit;
use contracts::domain::common::{AggregateId, AggregateRoot, MemoryStore, StoreError};
use contracts::shared::location::LocationSelection;
use contracts::shared::submission::SubmitState;
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;
use thaw::*;

/// ViewModel карточки справочника (создание и редактирование)
pub struct DetailsViewModel<T: StoreAccess> {
    pub form: RwSignal<T::Form>,
    pub errors: RwSignal<FieldErrors>,
    pub submit: RwSignal<SubmitState>,
    store: RwSignal<MemoryStore<T>>,
    editing: Option<T::Id>,
}

impl<T: StoreAccess> Clone for DetailsViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: StoreAccess> Copy for DetailsViewModel<T> {}

impl<T: StoreAccess> DetailsViewModel<T> {
    /// `id` = None — новая запись; неизвестный id тоже открывает пустую форму
    pub fn new(id: Option<String>) -> Self {
        let store = T::store(&DataStores::use_context());
        let editing = id.and_then(|raw| match T::Id::from_string(&raw) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("{}: {}", T::full_name(), e);
                None
            }
        });
        let form = editing
            .and_then(|id| store.with_untracked(|s| s.get(id).map(T::to_form)))
            .unwrap_or_default();

        Self {
            form: RwSignal::new(form),
            errors: RwSignal::new(FieldErrors::new()),
            submit: RwSignal::new(SubmitState::Idle),
            store,
            editing,
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn title(&self) -> String {
        match self.editing {
            Some(id) => format!("{} #{}", T::element_name(), id.as_string()),
            None => format!("Agregar {}", T::element_name()),
        }
    }

    /// Изменение поля снимает его ошибку до следующей проверки
    pub fn set(&self, key: &str, apply: impl FnOnce(&mut T::Form)) {
        self.form.update(apply);
        if self.errors.with_untracked(|e| e.contains(key)) {
            self.errors.update(|e| e.remove(key));
        }
    }

    /// Значение текстового поля формы
    pub fn field(&self, get: fn(&T::Form) -> String) -> Signal<String> {
        let form = self.form;
        Signal::derive(move || form.with(get))
    }

    /// Обработчик ввода для поля `key`
    pub fn input(&self, key: &'static str, put: fn(&mut T::Form, String)) -> Callback<String> {
        let vm = *self;
        Callback::new(move |value: String| vm.set(key, |f| put(f, value)))
    }

    pub fn location(&self, get: fn(&T::Form) -> LocationSelection) -> Signal<LocationSelection> {
        let form = self.form;
        Signal::derive(move || form.with(get))
    }

    /// Новый выбор места снимает ошибки всех трёх уровней
    pub fn on_location(&self, put: fn(&mut T::Form, LocationSelection)) -> Callback<LocationSelection> {
        let vm = *self;
        Callback::new(move |location: LocationSelection| {
            vm.form.update(|f| put(f, location));
            vm.errors.update(|e| {
                for key in ["country", "province", "city"] {
                    e.remove(key);
                }
            });
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.submit.with(SubmitState::is_submitting)
    }

    /// Проверка полей и дубликатов, затем имитация запроса и запись в хранилище.
    /// `on_saved` получает текст результата.
    pub fn save_command(&self, on_saved: Callback<String>) {
        let form = self.form.get_untracked();
        let editing = self.editing;
        let store = self.store;

        let errors = store.with_untracked(|s| s.check(&form, editing));
        if !errors.is_empty() {
            log::debug!("{}: {} field errors", T::full_name(), errors.len());
            self.errors.set(errors);
            self.submit
                .set(SubmitState::Failed("Revise los campos marcados".to_string()));
            return;
        }
        self.errors.set(FieldErrors::new());

        let errors = self.errors;
        let delay_ms = use_app_config().submission.delay_ms;
        simulate_submit(self.submit, delay_ms, move || {
            // хранилище могло измениться за время ожидания: проверка повторяется внутри create/update
            let result = store
                .try_update(|s| save(s, editing, &form))
                .unwrap_or_else(|| Err(StoreError::NotFound(T::full_name())));
            match result {
                Ok(message) => {
                    on_saved.run(message.clone());
                    Ok(message)
                }
                Err(e) => {
                    errors.set(e.field_errors());
                    Err(e.to_string())
                }
            }
        });
    }
}

/// Заголовок, поля и кнопки карточки внутри диалога
#[component]
pub fn DetailsBody<T>(
    vm: DetailsViewModel<T>,
    on_saved: Callback<String>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView
where
    T: StoreAccess,
{
    let busy = Signal::derive(move || vm.is_submitting());

    view! {
        <DialogBody>
            <DialogTitle>{vm.title()}</DialogTitle>
            <DialogContent>
                <div class="details-form">{children()}</div>
                <SubmitMessage state={vm.submit} />
            </DialogContent>
            <DialogActions>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click={move |_| on_cancel.run(())}
                    disabled=busy
                >
                    {icon("x")}
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click={move |_| vm.save_command(on_saved)}
                    disabled=busy
                >
                    {icon("save")}
                    {move || if busy.get() { "Guardando..." } else { "Guardar" }}
                </Button>
            </DialogActions>
        </DialogBody>
    }
}

fn save<T: AggregateRoot>(
    store: &mut MemoryStore<T>,
    editing: Option<T::Id>,
    form: &T::Form,
) -> Result<String, StoreError> {
    match editing {
        Some(id) => {
            store.update(id, form)?;
            Ok(format!("{} #{} actualizado", T::element_name(), id.as_string()))
        }
        None => {
            let id = store.create(form)?;
            Ok(format!("{} creado con ID {}", T::element_name(), id.as_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_depot::aggregate::{Depot, DepotDto};
    use contracts::domain::common::RecordStatus;
    use contracts::shared::location::LocationSelection;

    fn test_depot() -> DepotDto {
        DepotDto {
            id: None,
            description: "Test Depot".into(),
            location: LocationSelection::new("Argentina", "Buenos Aires", "Buenos Aires"),
            address: "Calle 1".into(),
            latitude: "-34.0".into(),
            longitude: "-58.0".into(),
        }
    }

    #[test]
    fn test_save_assigns_next_id_and_active_status() {
        let mut store = MemoryStore::with_records(Depot::demo_records());
        let before = store.len();
        let message = save(&mut store, None, &test_depot()).unwrap();

        assert_eq!(store.len(), before + 1);
        let created = store.list().last().unwrap();
        assert_eq!(created.base.id.as_string(), (before as i64 + 1).to_string());
        assert_eq!(created.base.status, RecordStatus::Activo);
        assert_eq!(message, format!("Depósito creado con ID {}", before + 1));
    }

    #[test]
    fn test_save_rejects_duplicate_description() {
        let mut store = MemoryStore::with_records(Depot::demo_records());
        let mut dto = test_depot();
        dto.description = store.list()[0].base.description.to_uppercase();

        let err = save(&mut store, None, &dto).unwrap_err();
        assert!(err.field_errors().contains("description"));
    }
}
