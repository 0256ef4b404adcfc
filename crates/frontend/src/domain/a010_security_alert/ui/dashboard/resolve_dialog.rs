use contracts::domain::a010_security_alert::aggregate::SecurityAlertId;
use leptos::prelude::*;
use thaw::*;

/// Диалог закрытия тревоги: нота обязательна
#[component]
pub fn ResolveDialog(
    resolving: RwSignal<Option<SecurityAlertId>>,
    on_confirm: Callback<(SecurityAlertId, String), Result<(), String>>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let note = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let target = resolving.get();
        open.set(target.is_some());
        if target.is_some() {
            note.set(String::new());
            error.set(None);
        }
    });
    Effect::new(move || {
        if !open.get() {
            resolving.set(None);
        }
    });

    let confirm = move || {
        let Some(id) = resolving.get_untracked() else {
            return;
        };
        if let Err(message) = on_confirm.run((id, note.get_untracked())) {
            error.set(Some(message));
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || resolving.get().map(|id| format!("Resolver alerta {}", id)).unwrap_or_default()}
                    </DialogTitle>
                    <DialogContent>
                        <label class="form__label" for="resolve-note">"Nota de resolución"</label>
                        <textarea
                            id="resolve-note"
                            class="form__textarea"
                            rows="4"
                            prop:value={move || note.get()}
                            on:input=move |ev| {
                                note.set(event_target_value(&ev));
                                error.set(None);
                            }
                        />
                        {move || error.get().map(|e| view! { <span class="form__error">{e}</span> })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click={move |_| resolving.set(None)}>
                            "Cancelar"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click={move |_| confirm()}>
                            "Resolver"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
