//! Страница мастера «Nueva carga»

mod documents;
mod steps;
mod trips;

use crate::shared::blob_preview::PreviewUrls;
use crate::shared::components::step_indicator::StepIndicator;
use crate::shared::components::submit_message::SubmitMessage;
use crate::shared::config::use_app_config;
use crate::shared::data_stores::DataStores;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_WIZARD;
use crate::shared::submit::{now, simulate_submit};
use crate::shared::wizard_form::{navigation_message, WizardForm};
use contracts::domain::a008_cargo::aggregate::Cargo;
use contracts::domain::a008_cargo::wizard::{CargoStep, CargoWizard};
use contracts::shared::wizard::WizardStep;
use leptos::prelude::*;
use thaw::*;

pub type CargoForm = WizardForm<CargoWizard>;

fn created_message(cargo: &Cargo) -> String {
    format!(
        "Carga {} creada con {} viaje(s) (ID {})",
        cargo.reference,
        cargo.trips.len(),
        cargo.id
    )
}

#[component]
pub fn CargoWizardPage() -> impl IntoView {
    let config = use_app_config();
    let stores = DataStores::use_context();
    let uploads = StoredValue::new(config.uploads.clone());
    let delay_ms = config.submission.delay_ms;

    let form: CargoForm = WizardForm::new(CargoWizard::new(config.uploads.clone()));
    let previews = PreviewUrls::new();
    let step = Memo::new(move |_| form.state.with(|w| w.step()));

    let create = move || {
        match form.state.with_untracked(|w| w.finish(now())) {
            Err(e) => {
                form.state.update(|w| {
                    w.open_first_invalid();
                });
                form.errors.set(e.field_errors());
                form.nav_error.set(Some(navigation_message(&e)));
            }
            Ok(mut cargo) => {
                form.nav_error.set(None);
                simulate_submit(form.submit, delay_ms, move || {
                    cargo.id = stores
                        .cargos
                        .with_untracked(|cargos| cargo.id.clone().unique_among(cargos));
                    let message = created_message(&cargo);
                    stores.cargos.update(|cargos| cargos.push(cargo));
                    form.state.set(CargoWizard::new(uploads.get_value()));
                    previews.clear();
                    Ok(message)
                });
            }
        }
    };

    view! {
        <PageFrame page_id="a008_cargo--wizard" category=PAGE_CAT_WIZARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("package")}
                    <h1 class="page__title">"Nueva carga"</h1>
                </div>
            </div>

            <div class="page__content wizard">
                <StepIndicator
                    current=step
                    is_visited={Callback::new(move |s: CargoStep| form.state.with(|w| w.is_visited(s)))}
                    on_select={Callback::new(move |s: CargoStep| form.navigate(|w: &mut CargoWizard| w.go_to(s)))}
                />

                <SubmitMessage state={form.submit} />
                {move || form.nav_error.get().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Warning>{message}</MessageBar>
                })}

                <div class="wizard__body">
                    {move || match step.get() {
                        CargoStep::General => view! { <steps::GeneralStep form=form /> }.into_any(),
                        CargoStep::Route => view! { <steps::RouteStep form=form /> }.into_any(),
                        CargoStep::Goods => view! { <steps::GoodsStep form=form /> }.into_any(),
                        CargoStep::Trips => view! { <trips::TripsStep form=form /> }.into_any(),
                        CargoStep::Documents => view! {
                            <documents::DocumentsStep form=form previews=previews />
                        }
                        .into_any(),
                        CargoStep::Review => view! { <steps::ReviewStep form=form /> }.into_any(),
                    }}
                </div>

                <div class="wizard__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled={Signal::derive(move || step.get() == CargoStep::General || form.is_submitting())}
                        on_click={move |_| form.navigate(|w: &mut CargoWizard| w.back())}
                    >
                        {icon("chevron-left")}
                        "Atrás"
                    </Button>
                    {move || if step.get().is_last() {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                disabled={Signal::derive(move || form.is_submitting())}
                                on_click={move |_| create()}
                            >
                                {icon("save")}
                                {move || if form.is_submitting() { "Creando..." } else { "Crear carga" }}
                            </Button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click={move |_| form.navigate(|w: &mut CargoWizard| w.next())}
                            >
                                "Siguiente"
                                {icon("chevron-right")}
                            </Button>
                        }
                        .into_any()
                    }}
                </div>
            </div>
        </PageFrame>
    }
}
