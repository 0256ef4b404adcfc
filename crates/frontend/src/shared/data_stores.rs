//! Хранилища в памяти, общие для всех страниц через контекст.
//!
//! Один сигнал на таблицу; после перезагрузки данные теряются.

use contracts::domain::a001_ata::aggregate::Ata;
use contracts::domain::a002_customs_office::aggregate::CustomsOffice;
use contracts::domain::a003_depot::aggregate::Depot;
use contracts::domain::a004_dispatcher::aggregate::Dispatcher;
use contracts::domain::a005_shipper::aggregate::Shipper;
use contracts::domain::a006_consignee::aggregate::Consignee;
use contracts::domain::a007_interest_point::aggregate::InterestPoint;
use contracts::domain::a008_cargo::aggregate::{demo_cargos, Cargo};
use contracts::domain::a009_transport_company::aggregate::TransportCompany;
use contracts::domain::a010_security_alert::aggregate::demo_alerts;
use contracts::domain::a010_security_alert::board::AlertBoard;
use contracts::domain::common::{AggregateRoot, MemoryStore};
use contracts::shared::list_query::{HasStatus, Searchable, Sortable};
use contracts::system::registration::{DriverDirectory, UserDirectory};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct DataStores {
    pub atas: RwSignal<MemoryStore<Ata>>,
    pub customs_offices: RwSignal<MemoryStore<CustomsOffice>>,
    pub depots: RwSignal<MemoryStore<Depot>>,
    pub dispatchers: RwSignal<MemoryStore<Dispatcher>>,
    pub shippers: RwSignal<MemoryStore<Shipper>>,
    pub consignees: RwSignal<MemoryStore<Consignee>>,
    pub interest_points: RwSignal<MemoryStore<InterestPoint>>,
    pub transport_companies: RwSignal<MemoryStore<TransportCompany>>,
    pub cargos: RwSignal<Vec<Cargo>>,
    pub alerts: RwSignal<AlertBoard>,
    pub users: RwSignal<UserDirectory>,
    pub drivers: RwSignal<DriverDirectory>,
}

impl DataStores {
    /// Хранилища с демонстрационными записями
    pub fn seeded() -> Self {
        Self {
            atas: RwSignal::new(MemoryStore::with_records(Ata::demo_records())),
            customs_offices: RwSignal::new(MemoryStore::with_records(
                CustomsOffice::demo_records(),
            )),
            depots: RwSignal::new(MemoryStore::with_records(Depot::demo_records())),
            dispatchers: RwSignal::new(MemoryStore::with_records(Dispatcher::demo_records())),
            shippers: RwSignal::new(MemoryStore::with_records(Shipper::demo_records())),
            consignees: RwSignal::new(MemoryStore::with_records(Consignee::demo_records())),
            interest_points: RwSignal::new(MemoryStore::with_records(
                InterestPoint::demo_records(),
            )),
            transport_companies: RwSignal::new(MemoryStore::with_records(
                TransportCompany::demo_records(),
            )),
            cargos: RwSignal::new(demo_cargos()),
            alerts: RwSignal::new(AlertBoard::new(demo_alerts())),
            users: RwSignal::new(UserDirectory::new()),
            drivers: RwSignal::new(DriverDirectory::new()),
        }
    }

    pub fn use_context() -> Self {
        use_context::<DataStores>().expect("DataStores not found in context")
    }
}

/// Справочник, который можно показать на общей странице списка
pub trait StoreAccess:
    AggregateRoot<Id: Send + Sync + 'static, Form: Send + Sync + 'static>
    + Searchable
    + Sortable
    + HasStatus
    + Send
    + Sync
    + 'static
{
    fn store(stores: &DataStores) -> RwSignal<MemoryStore<Self>>;
}

macro_rules! store_access {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            impl StoreAccess for $ty {
                fn store(stores: &DataStores) -> RwSignal<MemoryStore<Self>> {
                    stores.$field
                }
            }
        )*
    };
}

store_access! {
    Ata => atas,
    CustomsOffice => customs_offices,
    Depot => depots,
    Dispatcher => dispatchers,
    Shipper => shippers,
    Consignee => consignees,
    InterestPoint => interest_points,
    TransportCompany => transport_companies,
}

/// Активные записи справочника как варианты выпадающего списка (значение = название)
pub fn active_options<T: StoreAccess>(stores: &DataStores) -> Signal<Vec<(String, String)>> {
    let store = T::store(stores);
    Signal::derive(move || {
        store.with(|s| {
            s.list()
                .iter()
                .filter(|r| r.status().is_active())
                .map(|r| (r.description().to_string(), r.description().to_string()))
                .collect()
        })
    })
}
