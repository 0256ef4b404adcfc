//! Статический справочник страна → провинция → город и каскадный выбор
//! для всех форм с адресом.

use serde::{Deserialize, Serialize};

type CityList = &'static [&'static str];
type ProvinceList = &'static [(&'static str, CityList)];

static CATALOG: &[(&str, ProvinceList)] = &[
    (
        "Argentina",
        &[
            ("Buenos Aires", &["Buenos Aires", "La Plata", "Mar del Plata", "Bahía Blanca", "Campana"]),
            ("Córdoba", &["Córdoba", "Villa María", "Río Cuarto"]),
            ("Santa Fe", &["Rosario", "Santa Fe", "Rafaela"]),
            ("Mendoza", &["Mendoza", "San Rafael", "Uspallata"]),
            ("Salta", &["Salta", "Orán", "Tartagal"]),
            ("Corrientes", &["Corrientes", "Paso de los Libres", "Santo Tomé"]),
            ("Misiones", &["Posadas", "Puerto Iguazú", "Oberá"]),
        ],
    ),
    (
        "Bolivia",
        &[
            ("La Paz", &["La Paz", "El Alto"]),
            ("Santa Cruz", &["Santa Cruz de la Sierra", "Puerto Quijarro"]),
            ("Tarija", &["Tarija", "Yacuiba", "Bermejo"]),
        ],
    ),
    (
        "Brasil",
        &[
            ("São Paulo", &["São Paulo", "Campinas", "Santos"]),
            ("Paraná", &["Curitiba", "Foz do Iguaçu", "Paranaguá"]),
            ("Rio Grande do Sul", &["Porto Alegre", "Uruguaiana", "Rio Grande"]),
        ],
    ),
    (
        "Chile",
        &[
            ("Región Metropolitana", &["Santiago", "Puente Alto", "Quilicura"]),
            ("Valparaíso", &["Valparaíso", "Viña del Mar", "Los Andes", "San Antonio"]),
            ("Antofagasta", &["Antofagasta", "Calama", "Mejillones"]),
        ],
    ),
    (
        "Paraguay",
        &[
            ("Central", &["Luque", "San Lorenzo", "Villa Elisa"]),
            ("Alto Paraná", &["Ciudad del Este", "Hernandarias"]),
            ("Itapúa", &["Encarnación"]),
        ],
    ),
    (
        "Uruguay",
        &[
            ("Montevideo", &["Montevideo"]),
            ("Colonia", &["Colonia del Sacramento", "Nueva Palmira"]),
            ("Paysandú", &["Paysandú"]),
            ("Rivera", &["Rivera"]),
        ],
    ),
];

fn provinces_of(country: &str) -> Option<ProvinceList> {
    CATALOG
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, provinces)| *provinces)
}

/// Все страны каталога
pub fn countries() -> Vec<&'static str> {
    CATALOG.iter().map(|(name, _)| *name).collect()
}

/// Провинции страны; пусто для неизвестной страны
pub fn provinces(country: &str) -> Vec<&'static str> {
    provinces_of(country)
        .map(|list| list.iter().map(|(name, _)| *name).collect())
        .unwrap_or_default()
}

/// Города провинции; пусто, если пары страна/провинция нет в каталоге
pub fn cities(country: &str, province: &str) -> Vec<&'static str> {
    provinces_of(country)
        .and_then(|list| list.iter().find(|(name, _)| *name == province))
        .map(|(_, cities)| cities.to_vec())
        .unwrap_or_default()
}

pub fn is_known_country(country: &str) -> bool {
    provinces_of(country).is_some()
}

pub fn is_known_province(country: &str, province: &str) -> bool {
    provinces(country).iter().any(|p| *p == province)
}

pub fn is_known_city(country: &str, province: &str, city: &str) -> bool {
    cities(country, province).iter().any(|c| *c == city)
}

/// Выбор страна → провинция → город.
///
/// Смена верхнего уровня сбрасывает нижние.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationSelection {
    #[serde(rename = "pais")]
    pub country: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "ciudad")]
    pub city: String,
}

impl LocationSelection {
    pub fn new(country: &str, province: &str, city: &str) -> Self {
        Self {
            country: country.to_string(),
            province: province.to_string(),
            city: city.to_string(),
        }
    }

    pub fn select_country(&mut self, country: &str) {
        if self.country != country {
            self.country = country.to_string();
            self.province.clear();
            self.city.clear();
        }
    }

    pub fn select_province(&mut self, province: &str) {
        if self.province != province {
            self.province = province.to_string();
            self.city.clear();
        }
    }

    pub fn select_city(&mut self, city: &str) {
        self.city = city.to_string();
    }

    pub fn province_options(&self) -> Vec<&'static str> {
        provinces(&self.country)
    }

    pub fn city_options(&self) -> Vec<&'static str> {
        cities(&self.country, &self.province)
    }

    pub fn is_complete(&self) -> bool {
        is_known_city(&self.country, &self.province, &self.city)
    }

    /// "Ciudad, Provincia, País" без пустых частей
    pub fn display(&self) -> String {
        [&self.city, &self.province, &self.country]
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_options_are_exactly_the_province_cities() {
        let mut sel = LocationSelection::default();
        sel.select_country("Chile");
        sel.select_province("Valparaíso");
        assert_eq!(
            sel.city_options(),
            vec!["Valparaíso", "Viña del Mar", "Los Andes", "San Antonio"]
        );
    }

    #[test]
    fn test_changing_country_clears_province_and_city() {
        let mut sel = LocationSelection::new("Argentina", "Mendoza", "Uspallata");
        sel.select_country("Chile");
        assert_eq!(sel.country, "Chile");
        assert!(sel.province.is_empty());
        assert!(sel.city.is_empty());
        assert!(sel.city_options().is_empty());
    }

    #[test]
    fn test_reselecting_same_value_keeps_children() {
        let mut sel = LocationSelection::new("Argentina", "Mendoza", "Uspallata");
        sel.select_country("Argentina");
        sel.select_province("Mendoza");
        assert_eq!(sel.city, "Uspallata");
        assert!(sel.is_complete());
    }

    #[test]
    fn test_changing_province_clears_city_only() {
        let mut sel = LocationSelection::new("Argentina", "Mendoza", "Uspallata");
        sel.select_province("Salta");
        assert_eq!(sel.country, "Argentina");
        assert!(sel.city.is_empty());
        assert_eq!(sel.city_options(), vec!["Salta", "Orán", "Tartagal"]);
    }

    #[test]
    fn test_unknown_keys_yield_no_options() {
        assert!(provinces("Atlantis").is_empty());
        assert!(cities("Argentina", "Atlantis").is_empty());
        assert!(!is_known_province("Chile", "Mendoza"));
    }

    #[test]
    fn test_display_skips_blank_parts() {
        assert_eq!(
            LocationSelection::new("Uruguay", "Montevideo", "").display(),
            "Montevideo, Uruguay"
        );
    }
}
