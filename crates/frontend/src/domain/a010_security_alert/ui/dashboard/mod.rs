mod resolve_dialog;

use crate::shared::components::stat_card::StatCard;
use crate::shared::data_stores::DataStores;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::domain::a010_security_alert::aggregate::{
    AlertStatus, SecurityAlert, SecurityAlertId, Severity,
};
use contracts::domain::a010_security_alert::board::{AlertError, AlertFilter, AlertSummary};
use leptos::prelude::*;
use resolve_dialog::ResolveDialog;
use thaw::*;

fn severity_color(severity: Severity) -> BadgeColor {
    match severity {
        Severity::Alta => BadgeColor::Danger,
        Severity::Media => BadgeColor::Warning,
        Severity::Baja => BadgeColor::Informative,
    }
}

fn status_color(status: AlertStatus) -> BadgeColor {
    match status {
        AlertStatus::Nueva => BadgeColor::Brand,
        AlertStatus::EnRevision => BadgeColor::Warning,
        AlertStatus::Resuelta => BadgeColor::Success,
    }
}

/// Результат действия над тревогой для панели сообщений
fn outcome(action: &str, id: SecurityAlertId, result: Result<(), AlertError>) -> Result<String, String> {
    match result {
        Ok(()) => {
            log::info!("alert {} {}", id, action);
            Ok(format!("Alerta {} {}", id, action))
        }
        Err(e) => {
            log::warn!("alert {}: {}", id, e);
            Err(e.to_string())
        }
    }
}

#[component]
pub fn AlertsDashboard() -> impl IntoView {
    let stores = DataStores::use_context();
    let filter = RwSignal::new(AlertFilter::default());
    let message = RwSignal::new(None::<Result<String, String>>);
    let resolving = RwSignal::new(None::<SecurityAlertId>);

    let summary = Memo::new(move |_| stores.alerts.with(|b| b.summary()));
    let rows = Memo::new(move |_| {
        let f = filter.get();
        stores.alerts.with(|b| b.filtered(&f))
    });

    let text = RwSignal::new(String::new());
    Effect::new(move || {
        let v = text.get();
        untrack(move || filter.update(|f| f.text = v));
    });

    let set_severity = move |severity: Option<Severity>| filter.update(|f| f.severity = severity);
    let set_status = move |status: Option<AlertStatus>| filter.update(|f| f.status = status);

    let acknowledge = move |id: SecurityAlertId| {
        let result = stores
            .alerts
            .try_update(|b| b.acknowledge(id))
            .unwrap_or(Err(AlertError::NotFound(id)));
        message.set(Some(outcome("en revisión", id, result)));
    };

    let on_resolve = Callback::new(move |(id, note): (SecurityAlertId, String)| {
        let result = stores
            .alerts
            .try_update(|b| b.resolve(id, &note))
            .unwrap_or(Err(AlertError::NotFound(id)));
        let failed = result.is_err();
        message.set(Some(outcome("resuelta", id, result.clone())));
        if !failed {
            resolving.set(None);
        }
        result.map_err(|e| e.to_string())
    });

    let card = move |get: fn(&AlertSummary) -> usize| {
        Signal::derive(move || summary.with(get))
    };

    view! {
        <PageFrame page_id="a010_security_alert--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("alert-triangle")}
                    <h1 class="page__title">"Alertas de seguridad"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>
                        {move || format!("{} abiertas", summary.with(|s| s.open))}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard label="Total" icon_name="bell" value={card(|s| s.total)}
                        on_click={Callback::new(move |_| filter.set(AlertFilter::default()))} />
                    <StatCard label="Severidad alta" icon_name="alert-triangle" variant="error" value={card(|s| s.high)}
                        on_click={Callback::new(move |_| set_severity(Some(Severity::Alta)))} />
                    <StatCard label="Severidad media" icon_name="alert-triangle" variant="warning" value={card(|s| s.medium)}
                        on_click={Callback::new(move |_| set_severity(Some(Severity::Media)))} />
                    <StatCard label="Severidad baja" icon_name="shield" value={card(|s| s.low)}
                        on_click={Callback::new(move |_| set_severity(Some(Severity::Baja)))} />
                    <StatCard label="Nuevas" icon_name="bell" value={card(|s| s.new)}
                        on_click={Callback::new(move |_| set_status(Some(AlertStatus::Nueva)))} />
                    <StatCard label="En revisión" icon_name="shield" variant="warning" value={card(|s| s.in_review)}
                        on_click={Callback::new(move |_| set_status(Some(AlertStatus::EnRevision)))} />
                    <StatCard label="Resueltas" icon_name="check" variant="success" value={card(|s| s.resolved)}
                        on_click={Callback::new(move |_| set_status(Some(AlertStatus::Resuelta)))} />
                </div>

                <div class="filter-panel">
                    <Flex gap=FlexGap::Small align=FlexAlign::Center>
                        <Input value=text placeholder="Carga, chofer, lugar, tipo..." />
                        <select
                            class="form__select"
                            prop:value={move || filter.with(|f| f.severity.map(|s| s.label()).unwrap_or_default())}
                            on:change={move |ev| set_severity(Severity::from_label(&event_target_value(&ev)))}
                        >
                            <option value="">"Todas las severidades"</option>
                            {Severity::all().iter().map(|s| view! { <option value=s.label()>{s.label()}</option> }).collect_view()}
                        </select>
                        <select
                            class="form__select"
                            prop:value={move || filter.with(|f| f.status.map(|s| s.label()).unwrap_or_default())}
                            on:change={move |ev| set_status(AlertStatus::from_label(&event_target_value(&ev)))}
                        >
                            <option value="">"Todos los estados"</option>
                            {AlertStatus::all().iter().map(|s| view! { <option value=s.label()>{s.label()}</option> }).collect_view()}
                        </select>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| {
                                text.set(String::new());
                                filter.set(AlertFilter::default());
                            }
                        >
                            "Limpiar"
                        </Button>
                    </Flex>
                </div>

                {move || message.get().map(|m| match m {
                    Ok(text) => view! { <MessageBar intent=MessageBarIntent::Success>{text}</MessageBar> }.into_any(),
                    Err(text) => view! { <MessageBar intent=MessageBarIntent::Error>{text}</MessageBar> }.into_any(),
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=130.0>"Fecha"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Tipo"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>"Severidad"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=150.0>"Carga / viaje"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Chofer"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>"Lugar"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=100.0>"Estado"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || rows.get().into_iter().map(|alert| view! {
                                <AlertRow alert=alert on_acknowledge={Callback::new(acknowledge)}
                                    on_resolve={Callback::new(move |id| resolving.set(Some(id)))} />
                            }).collect_view()}
                        </TableBody>
                    </Table>
                    <Show when={move || rows.with(Vec::is_empty)}>
                        <div class="table__empty">"No hay alertas para los filtros seleccionados"</div>
                    </Show>
                </div>
            </div>

            <ResolveDialog resolving=resolving on_confirm=on_resolve />
        </PageFrame>
    }
}

#[component]
fn AlertRow(
    alert: SecurityAlert,
    on_acknowledge: Callback<SecurityAlertId>,
    on_resolve: Callback<SecurityAlertId>,
) -> impl IntoView {
    let id = alert.id;
    let can_acknowledge = alert.status == AlertStatus::Nueva;
    let can_resolve = alert.status.is_open();
    let last_note = alert.notes.last().cloned();

    view! {
        <TableRow>
            <TableCell>{alert.raised_at.format("%d/%m/%Y %H:%M").to_string()}</TableCell>
            <TableCell><TableCellLayout truncate=true>{alert.kind.label()}</TableCellLayout></TableCell>
            <TableCell>
                <Badge appearance=BadgeAppearance::Filled color={severity_color(alert.severity)}>
                    {alert.severity.label()}
                </Badge>
            </TableCell>
            <TableCell>{format!("{} / {}", alert.cargo_ref, alert.trip_number)}</TableCell>
            <TableCell><TableCellLayout truncate=true>{alert.driver.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout truncate=true>{alert.place.clone()}</TableCellLayout></TableCell>
            <TableCell>
                <Badge appearance=BadgeAppearance::Tint color={status_color(alert.status)}>
                    {alert.status.label()}
                </Badge>
            </TableCell>
            <TableCell>
                <Flex gap=FlexGap::Small>
                    <Show when={move || can_acknowledge}>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Secondary
                            on_click={move |_| on_acknowledge.run(id)}>
                            "Revisar"
                        </Button>
                    </Show>
                    <Show when={move || can_resolve}>
                        <Button size=ButtonSize::Small appearance=ButtonAppearance::Primary
                            on_click={move |_| on_resolve.run(id)}>
                            {icon("check")}
                            "Resolver"
                        </Button>
                    </Show>
                    {last_note.map(|note| view! { <span class="text-muted" title=note.clone()>{icon("file-text")}</span> })}
                </Flex>
            </TableCell>
        </TableRow>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_messages() {
        let id = SecurityAlertId(3);
        assert_eq!(outcome("resuelta", id, Ok(())), Ok("Alerta 3 resuelta".to_string()));
        assert_eq!(
            outcome("resuelta", id, Err(AlertError::MissingNote)),
            Err("Ingrese una nota de resolución".to_string())
        );
    }
}
