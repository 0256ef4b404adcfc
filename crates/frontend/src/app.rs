use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use crate::shared::data_stores::DataStores;
use contracts::shared::config::AppConfig;
use leptos::prelude::*;

/// Основной макет приложения: боковая панель + вкладки
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store =
        use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <Shell
            left={|| view! { <Sidebar /> }.into_any()}
            center=move || {
                view! {
                    <For
                        each={move || tabs_store.opened.get()}
                        key={|tab| tab.key.clone()}
                        children=move |tab: TabData| {
                            view! { <TabPage tab=tab tabs_store=tabs_store /> }
                        }
                    />
                }
                .into_any()
            }
        />
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // AppGlobalContext доступен всему приложению через контекст
    provide_context(AppGlobalContext::new());

    // Конфигурация читается один раз при старте
    provide_context(config);

    // Хранилища в памяти, по одному на таблицу; теряются при перезагрузке
    provide_context(DataStores::seeded());

    view! {
        <thaw::ConfigProvider>
            <MainLayout />
        </thaw::ConfigProvider>
    }
}
