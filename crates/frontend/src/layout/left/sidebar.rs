//! Боковое меню со сворачиваемыми группами

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, подпись, иконка)
}

fn menu_item(id: &'static str, icon: &'static str) -> (&'static str, &'static str, &'static str) {
    (id, tab_label_for_key(id), icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "master_data",
            label: "Datos maestros",
            icon: "database",
            items: vec![
                menu_item("a001_ata", "briefcase"),
                menu_item("a002_customs_office", "landmark"),
                menu_item("a003_depot", "warehouse"),
                menu_item("a004_dispatcher", "user-check"),
                menu_item("a005_shipper", "package"),
                menu_item("a006_consignee", "inbox"),
                menu_item("a007_interest_point", "map-pin"),
            ],
        },
        MenuGroup {
            id: "operations",
            label: "Operaciones",
            icon: "truck",
            items: vec![
                menu_item("a008_cargo", "truck"),
                menu_item("a008_cargo_wizard", "plus"),
                menu_item("a009_transport_company", "building"),
                menu_item("a009_transport_company_wizard", "plus"),
            ],
        },
        MenuGroup {
            id: "security",
            label: "Seguridad",
            icon: "shield",
            items: vec![menu_item("a010_security_alert", "alert-triangle")],
        },
        MenuGroup {
            id: "registration",
            label: "Registro",
            icon: "users",
            items: vec![
                menu_item("sys_user_registration", "user-plus"),
                menu_item("sys_driver_registration", "id-card"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let expanded_groups = RwSignal::new(vec!["master_data".to_string()]);

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups().into_iter().map(|group| {
                let group_id = group.id.to_string();
                let group_id_for_exp = group_id.clone();
                let group_id_for_click = group_id.clone();
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        // Группа
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                let gid = group_id_for_click.clone();
                                expanded_groups.update(move |items| {
                                    if let Some(pos) = items.iter().position(|x| x == &gid) {
                                        items.remove(pos);
                                    } else {
                                        items.push(gid);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded={move || expanded_groups.get().contains(&group_id_for_exp)}
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        // Пункты группы
                        <Show when={move || expanded_groups.get().contains(&group_id)}>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click={move |_| ctx.open_tab(id, label)}
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
