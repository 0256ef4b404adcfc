//! Мастер транспортной компании: Empresa → Permisos → Flota → Revisión

mod fleet;
mod steps;

use crate::shared::components::step_indicator::StepIndicator;
use crate::shared::components::submit_message::SubmitMessage;
use crate::shared::config::use_app_config;
use crate::shared::data_stores::DataStores;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_WIZARD;
use crate::shared::submit::{simulate_submit, today};
use crate::shared::wizard_form::{navigation_message, WizardForm};
use contracts::domain::a009_transport_company::aggregate::TransportCompany;
use contracts::domain::a009_transport_company::wizard::{CompanyStep, TransportCompanyWizard};
use contracts::domain::common::AggregateRoot;
use contracts::shared::wizard::WizardStep;
use leptos::prelude::*;
use thaw::*;

pub type CompanyForm = WizardForm<TransportCompanyWizard>;

#[component]
pub fn TransportCompanyWizardPage() -> impl IntoView {
    let config = use_app_config();
    let stores = DataStores::use_context();
    let delay_ms = config.submission.delay_ms;

    let form: CompanyForm = WizardForm::new(TransportCompanyWizard::new(today()));
    let step = Memo::new(move |_| form.state.with(|w| w.step()));

    let create = move || match form.state.with_untracked(|w| w.finish()) {
        Err(e) => {
            form.state.update(|w| {
                w.open_first_invalid();
            });
            form.errors.set(e.field_errors());
            form.nav_error.set(Some(navigation_message(&e)));
        }
        Ok(dto) => {
            form.nav_error.set(None);
            simulate_submit(form.submit, delay_ms, move || {
                let created = stores
                    .transport_companies
                    .try_update(|s| s.create(&dto))
                    .ok_or_else(|| "Almacén no disponible".to_string())?;
                match created {
                    Ok(id) => {
                        form.state.set(TransportCompanyWizard::new(today()));
                        Ok(format!("{} creada con ID {}", TransportCompany::element_name(), id))
                    }
                    Err(e) => {
                        // дубликат CUIT/razón social: вернуть на первый шаг
                        form.errors.set(e.field_errors());
                        form.state.update(|w| {
                            let _ = w.go_to(CompanyStep::Company);
                        });
                        Err(e.to_string())
                    }
                }
            });
        }
    };

    view! {
        <PageFrame page_id="a009_transport_company--wizard" category=PAGE_CAT_WIZARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("building")}
                    <h1 class="page__title">"Alta de empresa de transporte"</h1>
                </div>
            </div>

            <div class="page__content wizard">
                <StepIndicator
                    current=step
                    is_visited={Callback::new(move |s: CompanyStep| form.state.with(|w| w.is_visited(s)))}
                    on_select=Callback::new(move |s: CompanyStep| {
                        form.navigate(|w: &mut TransportCompanyWizard| w.go_to(s))
                    })
                />

                <SubmitMessage state={form.submit} />
                {move || form.nav_error.get().map(|message| view! {
                    <MessageBar intent=MessageBarIntent::Warning>{message}</MessageBar>
                })}

                <div class="wizard__body">
                    {move || match step.get() {
                        CompanyStep::Company => view! { <steps::CompanyDataStep form=form /> }.into_any(),
                        CompanyStep::Permit => view! { <steps::PermitStep form=form /> }.into_any(),
                        CompanyStep::Fleet => view! { <fleet::FleetStep form=form /> }.into_any(),
                        CompanyStep::Review => view! { <steps::ReviewStep form=form /> }.into_any(),
                    }}
                </div>

                <div class="wizard__actions">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled={Signal::derive(move || step.get() == CompanyStep::Company || form.is_submitting())}
                        on_click={move |_| form.navigate(|w: &mut TransportCompanyWizard| w.back())}
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
                                {move || if form.is_submitting() { "Registrando..." } else { "Registrar empresa" }}
                            </Button>
                        }
                        .into_any()
                    } else {
                        view! {
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click={move |_| form.navigate(|w: &mut TransportCompanyWizard| w.next())}
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
