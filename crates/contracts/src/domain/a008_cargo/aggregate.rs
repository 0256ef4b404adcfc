use crate::shared::documents::DocumentAttachment;
use crate::shared::list_query::{any_field_contains, cmp_text, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Идентификатор груза по времени создания: `CRG-YYYYMMDDHHMMSS`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CargoId(pub String);

impl CargoId {
    pub fn from_timestamp(at: NaiveDateTime) -> Self {
        Self(format!("CRG-{}", at.format("%Y%m%d%H%M%S")))
    }

    /// Два груза в одну секунду: к повторному id добавляется суффикс -2, -3...
    pub fn unique_among(self, cargos: &[Cargo]) -> Self {
        let mut candidate = self.clone();
        let mut n = 1;
        while cargos.iter().any(|c| c.id == candidate) {
            n += 1;
            candidate = Self(format!("{}-{}", self.0, n));
        }
        candidate
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CargoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum TripStatus {
    #[default]
    Programado,
    EnTransito,
    EnAduana,
    Entregado,
}

impl TripStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TripStatus::Programado => "Programado",
            TripStatus::EnTransito => "En tránsito",
            TripStatus::EnAduana => "En aduana",
            TripStatus::Entregado => "Entregado",
        }
    }

    /// Следующий статус в жизненном цикле рейса
    pub fn next(&self) -> Option<TripStatus> {
        match self {
            TripStatus::Programado => Some(TripStatus::EnTransito),
            TripStatus::EnTransito => Some(TripStatus::EnAduana),
            TripStatus::EnAduana => Some(TripStatus::Entregado),
            TripStatus::Entregado => None,
        }
    }

    pub fn has_departed(&self) -> bool {
        *self != TripStatus::Programado
    }
}

/// Статус груза, вычисляется по рейсам
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CargoStatus {
    Pendiente,
    EnCurso,
    Finalizada,
}

impl CargoStatus {
    pub fn all() -> &'static [CargoStatus] {
        &[CargoStatus::Pendiente, CargoStatus::EnCurso, CargoStatus::Finalizada]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().iter().copied().find(|s| s.label() == label)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CargoStatus::Pendiente => "Pendiente",
            CargoStatus::EnCurso => "En curso",
            CargoStatus::Finalizada => "Finalizada",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoodsInfo {
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "bultos")]
    pub packages: u32,
    #[serde(rename = "pesoBrutoKg")]
    pub gross_weight_kg: f64,
    #[serde(rename = "valorDeclaradoUsd")]
    pub declared_value_usd: f64,
}

/// Рейс (плечо) груза. Водитель и контейнер хранятся как текст.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    #[serde(rename = "numero")]
    pub number: u32,
    #[serde(rename = "chofer")]
    pub driver: String,
    #[serde(rename = "patenteTractor")]
    pub tractor_plate: String,
    #[serde(rename = "patenteSemi")]
    pub trailer_plate: String,
    #[serde(rename = "contenedor")]
    pub container: String,
    #[serde(rename = "origen")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "salida")]
    pub departure: NaiveDate,
    pub eta: NaiveDate,
    #[serde(rename = "estado")]
    pub status: TripStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cargo {
    pub id: CargoId,
    #[serde(rename = "referencia")]
    pub reference: String,
    #[serde(rename = "remitente")]
    pub shipper: String,
    #[serde(rename = "destinatario")]
    pub consignee: String,
    #[serde(rename = "aduanaOrigen")]
    pub origin_customs: String,
    #[serde(rename = "aduanaDestino")]
    pub destination_customs: String,
    #[serde(rename = "origen")]
    pub origin: LocationSelection,
    #[serde(rename = "destino")]
    pub destination: LocationSelection,
    #[serde(rename = "mercaderia")]
    pub goods: GoodsInfo,
    #[serde(rename = "viajes")]
    pub trips: Vec<Trip>,
    #[serde(rename = "adjuntos")]
    pub attachments: Vec<DocumentAttachment>,
    pub created_at: NaiveDateTime,
}

/// Прогресс доставки по рейсам
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CargoProgress {
    pub delivered: usize,
    pub total: usize,
    pub percent: u8,
}

impl Cargo {
    pub fn trip(&self, number: u32) -> Option<&Trip> {
        self.trips.iter().find(|t| t.number == number)
    }

    pub fn trip_mut(&mut self, number: u32) -> Option<&mut Trip> {
        self.trips.iter_mut().find(|t| t.number == number)
    }

    pub fn progress(&self) -> CargoProgress {
        let total = self.trips.len();
        let delivered = self
            .trips
            .iter()
            .filter(|t| t.status == TripStatus::Entregado)
            .count();
        let percent = if total == 0 {
            0
        } else {
            (delivered * 100 / total) as u8
        };
        CargoProgress {
            delivered,
            total,
            percent,
        }
    }

    pub fn total_weight_kg(&self) -> f64 {
        self.goods.gross_weight_kg
    }

    pub fn status(&self) -> CargoStatus {
        if self.trips.is_empty() || !self.trips.iter().any(|t| t.status.has_departed()) {
            CargoStatus::Pendiente
        } else if self.trips.iter().all(|t| t.status == TripStatus::Entregado) {
            CargoStatus::Finalizada
        } else {
            CargoStatus::EnCurso
        }
    }

    /// Перевести рейс в следующий статус (для просмотра груза)
    pub fn advance_trip(&mut self, number: u32) -> Option<TripStatus> {
        let trip = self.trip_mut(number)?;
        let next = trip.status.next()?;
        trip.status = next;
        log::debug!("cargo {}: trip {} -> {}", self.id, number, next.label());
        Some(next)
    }

    pub fn route(&self) -> String {
        format!("{} → {}", self.origin.display(), self.destination.display())
    }
}

impl Searchable for Cargo {
    fn matches_filter(&self, needle: &str) -> bool {
        let trip_hit = self.trips.iter().any(|t| {
            any_field_contains(&[t.driver.as_str(), t.container.as_str(), t.tractor_plate.as_str()], needle)
        });
        trip_hit
            || any_field_contains(
                &[
                    self.id.as_str(),
                    self.reference.as_str(),
                    self.shipper.as_str(),
                    self.consignee.as_str(),
                    self.route().as_str(),
                ],
                needle,
            )
    }
}

impl Sortable for Cargo {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "reference" => cmp_text(&self.reference, &other.reference),
            "shipper" => cmp_text(&self.shipper, &other.shipper),
            "consignee" => cmp_text(&self.consignee, &other.consignee),
            "status" => self.status().cmp(&other.status()),
            "created_at" => self.created_at.cmp(&other.created_at),
            _ => self.id.cmp(&other.id),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn trip(
    number: u32,
    driver: &str,
    plates: (&str, &str),
    container: &str,
    legs: (&str, &str),
    departure: NaiveDate,
    eta: NaiveDate,
    status: TripStatus,
) -> Trip {
    Trip {
        number,
        driver: driver.to_string(),
        tractor_plate: plates.0.to_string(),
        trailer_plate: plates.1.to_string(),
        container: container.to_string(),
        origin: legs.0.to_string(),
        destination: legs.1.to_string(),
        departure,
        eta,
        status,
    }
}

/// Демонстрационные грузы для просмотра
pub fn demo_cargos() -> Vec<Cargo> {
    let created = |d: NaiveDate| d.and_hms_opt(9, 30, 0).unwrap_or_default();

    vec![
        Cargo {
            id: CargoId::from_timestamp(created(date(2024, 3, 4))),
            reference: "EXP-2024-0113".into(),
            shipper: "Bodegas Andinas SA".into(),
            consignee: "Distribuidora Pacífico Ltda".into(),
            origin_customs: "Aduana de Mendoza".into(),
            destination_customs: "Aduana Los Andes".into(),
            origin: LocationSelection::new("Argentina", "Mendoza", "Mendoza"),
            destination: LocationSelection::new("Chile", "Región Metropolitana", "Santiago"),
            goods: GoodsInfo {
                description: "Vino fraccionado en cajas".into(),
                packages: 1800,
                gross_weight_kg: 21_600.0,
                declared_value_usd: 84_000.0,
            },
            trips: vec![
                trip(1, "Juan Pérez", ("AB 123 CD", "AC 456 EF"), "MSCU1234567", ("Mendoza", "Uspallata"), date(2024, 3, 5), date(2024, 3, 5), TripStatus::Entregado),
                trip(2, "Juan Pérez", ("AB 123 CD", "AC 456 EF"), "MSCU1234567", ("Uspallata", "Los Andes"), date(2024, 3, 6), date(2024, 3, 6), TripStatus::EnAduana),
                trip(3, "Carlos Rojas", ("AF 111 KL", "AC 456 EF"), "MSCU1234567", ("Los Andes", "Santiago"), date(2024, 3, 7), date(2024, 3, 7), TripStatus::Programado),
            ],
            attachments: Vec::new(),
            created_at: created(date(2024, 3, 4)),
        },
        Cargo {
            id: CargoId::from_timestamp(created(date(2024, 3, 10))),
            reference: "EXP-2024-0127".into(),
            shipper: "Agroexport Pampa SRL".into(),
            consignee: "Comercial Gaúcha Ltda".into(),
            origin_customs: "Aduana de Paso de los Libres".into(),
            destination_customs: "Receita Federal Uruguaiana".into(),
            origin: LocationSelection::new("Argentina", "Corrientes", "Paso de los Libres"),
            destination: LocationSelection::new("Brasil", "Rio Grande do Sul", "Porto Alegre"),
            goods: GoodsInfo {
                description: "Maíz en bolsas de 50 kg".into(),
                packages: 560,
                gross_weight_kg: 28_000.0,
                declared_value_usd: 9_800.0,
            },
            trips: vec![trip(1, "Marcelo Gómez", ("AD 789 GH", "AE 012 IJ"), "TGHU7654321", ("Paso de los Libres", "Porto Alegre"), date(2024, 3, 12), date(2024, 3, 14), TripStatus::Programado)],
            attachments: Vec::new(),
            created_at: created(date(2024, 3, 10)),
        },
        Cargo {
            id: CargoId::from_timestamp(created(date(2024, 2, 20))),
            reference: "EXP-2024-0098".into(),
            shipper: "Metalúrgica Rosario SA".into(),
            consignee: "Importadora Oriental SA".into(),
            origin_customs: "Aduana de Rosario".into(),
            destination_customs: "Aduana de Montevideo".into(),
            origin: LocationSelection::new("Argentina", "Santa Fe", "Rosario"),
            destination: LocationSelection::new("Uruguay", "Montevideo", "Montevideo"),
            goods: GoodsInfo {
                description: "Perfiles de acero".into(),
                packages: 40,
                gross_weight_kg: 24_500.0,
                declared_value_usd: 61_250.0,
            },
            trips: vec![trip(1, "Luis Fernández", ("AA 321 BB", "AB 654 CC"), "CMAU3456789", ("Rosario", "Montevideo"), date(2024, 2, 21), date(2024, 2, 23), TripStatus::Entregado)],
            attachments: Vec::new(),
            created_at: created(date(2024, 2, 20)),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cargo_id_format() {
        let at = date(2024, 3, 4).and_hms_opt(9, 5, 7).unwrap();
        assert_eq!(CargoId::from_timestamp(at).as_str(), "CRG-20240304090507");
    }

    #[test]
    fn test_same_second_ids_get_suffix() {
        let mut cargos = demo_cargos();
        let taken = cargos[0].id.clone();
        let second = taken.clone().unique_among(&cargos);
        assert_eq!(second.as_str(), format!("{}-2", taken));

        let mut copy = cargos[0].clone();
        copy.id = second;
        cargos.push(copy);
        let third = taken.clone().unique_among(&cargos);
        assert_eq!(third.as_str(), format!("{}-3", taken));

        let fresh = CargoId("CRG-20991231235959".into());
        assert_eq!(fresh.clone().unique_among(&cargos), fresh);
    }

    #[test]
    fn test_progress_and_status() {
        let cargos = demo_cargos();
        let progress = cargos[0].progress();
        assert_eq!((progress.delivered, progress.total, progress.percent), (1, 3, 33));
        assert_eq!(cargos[0].status(), CargoStatus::EnCurso);
        assert_eq!(cargos[1].status(), CargoStatus::Pendiente);
        assert_eq!(cargos[2].status(), CargoStatus::Finalizada);
        assert_eq!(cargos[2].progress().percent, 100);
    }

    #[test]
    fn test_advance_trip_stops_at_delivered() {
        let mut cargo = demo_cargos().remove(0);
        assert_eq!(cargo.advance_trip(2), Some(TripStatus::Entregado));
        assert_eq!(cargo.advance_trip(2), None);
        assert_eq!(cargo.advance_trip(99), None);
        assert_eq!(cargo.trip(2).unwrap().status, TripStatus::Entregado);
    }

    #[test]
    fn test_search_matches_driver_and_container() {
        let cargos = demo_cargos();
        assert!(cargos[0].matches_filter("carlos"));
        assert!(cargos[1].matches_filter("tghu"));
        assert!(!cargos[2].matches_filter("tghu"));
    }
}
