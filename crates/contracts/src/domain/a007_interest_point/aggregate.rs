use crate::domain::common::{AggregateRoot, BaseAggregate, RecordStatus};
use crate::shared::list_query::{any_field_contains, cmp_text, HasStatus, Searchable, Sortable};
use crate::shared::location::LocationSelection;
use crate::shared::validation::{parse_number, FieldErrors, FormValidator};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

crate::sequential_id!(
    /// Последовательный идентификатор точки интереса
    InterestPointId
);

/// Тип точки интереса на маршруте
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum InterestPointKind {
    #[default]
    Aduana,
    Deposito,
    Frontera,
    EstacionDeServicio,
    AreaDeDescanso,
    Puerto,
}

impl InterestPointKind {
    pub fn all() -> &'static [InterestPointKind] {
        &[
            InterestPointKind::Aduana,
            InterestPointKind::Deposito,
            InterestPointKind::Frontera,
            InterestPointKind::EstacionDeServicio,
            InterestPointKind::AreaDeDescanso,
            InterestPointKind::Puerto,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            InterestPointKind::Aduana => "Aduana",
            InterestPointKind::Deposito => "Depósito",
            InterestPointKind::Frontera => "Paso fronterizo",
            InterestPointKind::EstacionDeServicio => "Estación de servicio",
            InterestPointKind::AreaDeDescanso => "Área de descanso",
            InterestPointKind::Puerto => "Puerto",
        }
    }

    /// Ключ для <select>
    pub fn key(&self) -> &'static str {
        match self {
            InterestPointKind::Aduana => "aduana",
            InterestPointKind::Deposito => "deposito",
            InterestPointKind::Frontera => "frontera",
            InterestPointKind::EstacionDeServicio => "estacion",
            InterestPointKind::AreaDeDescanso => "descanso",
            InterestPointKind::Puerto => "puerto",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.key() == key)
    }
}

/// Точка интереса (геозона) для мониторинга рейсов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestPoint {
    #[serde(flatten)]
    pub base: BaseAggregate<InterestPointId>,

    #[serde(rename = "tipo")]
    pub kind: InterestPointKind,

    #[serde(flatten)]
    pub location: LocationSelection,

    #[serde(rename = "latitud")]
    pub latitude: f64,

    #[serde(rename = "longitud")]
    pub longitude: f64,

    /// Радиус геозоны в метрах
    #[serde(rename = "radio")]
    pub radius_m: u32,
}

impl InterestPoint {
    pub fn validate(dto: &InterestPointDto) -> FieldErrors {
        let mut v = FormValidator::new();
        v.required("description", "El nombre", &dto.description)
            .location(&dto.location)
            .required("latitude", "La latitud", &dto.latitude)
            .latitude("latitude", &dto.latitude)
            .required("longitude", "La longitud", &dto.longitude)
            .longitude("longitude", &dto.longitude)
            .required("radius_m", "El radio", &dto.radius_m)
            .integer_between("radius_m", "El radio", &dto.radius_m, 1, 50_000);
        v.finish()
    }

    pub fn demo_records() -> Vec<InterestPoint> {
        let rows = [
            ("Paso Cristo Redentor", InterestPointKind::Frontera, ("Argentina", "Mendoza", "Uspallata"), "-32.8222", "-70.0900", "1500"),
            ("Puerto de Buenos Aires - Terminal 4", InterestPointKind::Puerto, ("Argentina", "Buenos Aires", "Buenos Aires"), "-34.5850", "-58.3720", "800"),
            ("Parador YPF Ruta 7 km 1040", InterestPointKind::EstacionDeServicio, ("Argentina", "Mendoza", "Mendoza"), "-32.9500", "-68.7900", "300"),
            ("Puente Paso de los Libres - Uruguaiana", InterestPointKind::Frontera, ("Argentina", "Corrientes", "Paso de los Libres"), "-29.7389", "-57.0958", "1000"),
        ];
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, kind, (country, province, city), lat, lng, radius))| {
                let dto = InterestPointDto {
                    id: None,
                    description: name.to_string(),
                    kind,
                    location: LocationSelection::new(country, province, city),
                    latitude: lat.to_string(),
                    longitude: lng.to_string(),
                    radius_m: radius.to_string(),
                };
                InterestPoint::from_form(InterestPointId(i as i64 + 1), &dto)
            })
            .collect()
    }
}

impl AggregateRoot for InterestPoint {
    type Id = InterestPointId;
    type Form = InterestPointDto;

    crate::base_aggregate_accessors!(InterestPointId);

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "interest_point"
    }

    fn element_name() -> &'static str {
        "Punto de interés"
    }

    fn list_name() -> &'static str {
        "Puntos de interés"
    }

    fn description_label() -> &'static str {
        "ese nombre"
    }

    fn validate_form(form: &InterestPointDto) -> FieldErrors {
        InterestPoint::validate(form)
    }

    fn form_code(_form: &InterestPointDto) -> String {
        String::new()
    }

    fn form_description(form: &InterestPointDto) -> String {
        form.description.clone()
    }

    fn from_form(id: InterestPointId, form: &InterestPointDto) -> Self {
        let mut point = Self {
            base: BaseAggregate::new(id, "", ""),
            kind: InterestPointKind::default(),
            location: LocationSelection::default(),
            latitude: 0.0,
            longitude: 0.0,
            radius_m: 0,
        };
        point.apply_form(form);
        point
    }

    fn to_form(&self) -> InterestPointDto {
        InterestPointDto {
            id: Some(self.base.id.to_string()),
            description: self.base.description.clone(),
            kind: self.kind,
            location: self.location.clone(),
            latitude: self.latitude.to_string(),
            longitude: self.longitude.to_string(),
            radius_m: self.radius_m.to_string(),
        }
    }

    fn apply_form(&mut self, form: &InterestPointDto) {
        self.base.rename("", &form.description);
        self.kind = form.kind;
        self.location = form.location.clone();
        self.latitude = parse_number(&form.latitude).unwrap_or_default();
        self.longitude = parse_number(&form.longitude).unwrap_or_default();
        self.radius_m = form.radius_m.trim().parse().unwrap_or_default();
    }
}

impl HasStatus for InterestPoint {
    fn record_status(&self) -> RecordStatus {
        self.base.status
    }
}

impl Searchable for InterestPoint {
    fn matches_filter(&self, needle: &str) -> bool {
        any_field_contains(
            &[
                self.base.description.as_str(),
                self.kind.label(),
                self.location.display().as_str(),
            ],
            needle,
        )
    }
}

impl Sortable for InterestPoint {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "id" => self.base.id.cmp(&other.base.id),
            "kind" => self.kind.label().cmp(other.kind.label()),
            "location" => cmp_text(&self.location.display(), &other.location.display()),
            "radius_m" => self.radius_m.cmp(&other.radius_m),
            "status" => self.base.status.cmp(&other.base.status),
            _ => cmp_text(&self.base.description, &other.base.description),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterestPointDto {
    pub id: Option<String>,
    #[serde(rename = "nombre")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub kind: InterestPointKind,
    #[serde(flatten)]
    pub location: LocationSelection,
    #[serde(rename = "latitud")]
    pub latitude: String,
    #[serde(rename = "longitud")]
    pub longitude: String,
    #[serde(rename = "radio")]
    pub radius_m: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_bounds() {
        let mut dto = InterestPoint::demo_records()[0].to_form();
        dto.radius_m = "0".into();
        assert_eq!(
            InterestPoint::validate(&dto).get("radius_m"),
            Some("El radio debe ser un número entre 1 y 50000")
        );
        dto.radius_m = "250".into();
        assert!(InterestPoint::validate(&dto).is_empty());
    }

    #[test]
    fn test_kind_keys_round_trip() {
        for kind in InterestPointKind::all() {
            assert_eq!(InterestPointKind::from_key(kind.key()), Some(*kind));
        }
        assert_eq!(InterestPointKind::from_key("nope"), None);
    }

    #[test]
    fn test_search_matches_kind_label() {
        let points = InterestPoint::demo_records();
        let hits: Vec<_> = points.iter().filter(|p| p.matches_filter("paso fronterizo")).collect();
        assert_eq!(hits.len(), 2);
    }
}
