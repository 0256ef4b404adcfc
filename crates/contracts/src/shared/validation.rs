//! Валидация форм: ключ поля → сообщение об ошибке (на испанском).
//!
//! Проверка не останавливается на первой ошибке: каждое поле хранит свою
//! первую ошибку, и форма показывает их все сразу.

use crate::shared::location::{self, LocationSelection};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static DIGITS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").expect("digits regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9][0-9\s-]{5,19}$").expect("phone regex"));
static PLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2,3}\s?[0-9]{3}\s?[A-Z]{0,3}$").expect("plate regex"));
static CONTAINER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}[0-9]{7}$").expect("container regex"));

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Ошибки формы по ключу поля. Для каждого поля хранится только первая ошибка.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Добавить ошибку, если для поля её ещё нет
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.0.entry(key.into()).or_insert_with(|| message.into());
    }

    /// Поле исправлено пользователем: убрать его ошибку
    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (key, message) in other.0 {
            self.insert(key, message);
        }
    }

    /// Ошибки с префиксом ключа, например `trips.0.driver`
    pub fn prefixed(self, prefix: &str) -> FieldErrors {
        FieldErrors(
            self.0
                .into_iter()
                .map(|(k, v)| (format!("{}.{}", prefix, k), v))
                .collect(),
        )
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn messages(&self) -> Vec<String> {
        self.0.values().cloned().collect()
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.messages().join("; "))
    }
}

/// Ключ для поиска дубликатов: без пробелов по краям и без учёта регистра
pub fn normalize_key(value: &str) -> String {
    value.trim().to_lowercase()
}

pub fn duplicate_message(label_with_article: &str) -> String {
    format!("Ya existe un registro con {}", label_with_article)
}

/// Название налогового идентификатора по стране
pub fn tax_id_label(country: &str) -> &'static str {
    match country {
        "Argentina" => "CUIT",
        "Chile" | "Uruguay" => "RUT",
        "Paraguay" => "RUC",
        "Brasil" => "CNPJ",
        "Bolivia" => "NIT",
        _ => "Identificador fiscal",
    }
}

/// Подлежащее для сообщений: "El CUIT", "El identificador fiscal"
pub fn tax_id_subject(country: &str) -> String {
    match tax_id_label(country) {
        "Identificador fiscal" => "El identificador fiscal".to_string(),
        label => format!("El {}", label),
    }
}

pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn is_valid_plate(value: &str) -> bool {
    PLATE_RE.is_match(&value.trim().to_uppercase())
}

pub fn is_valid_container(value: &str) -> bool {
    CONTAINER_RE.is_match(&value.trim().to_uppercase())
}

/// Накопитель ошибок формы.
///
/// Все правила, кроме `required`, пропускают пустые значения: обязательность
/// проверяется отдельно.
#[derive(Debug, Default)]
pub struct FormValidator {
    errors: FieldErrors,
}

impl FormValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, key: &str, message: impl Into<String>) -> &mut Self {
        self.errors.insert(key, message);
        self
    }

    pub fn required(&mut self, key: &str, label: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            let suffix = if label.starts_with("La ") || label.starts_with("Las ") {
                "obligatoria"
            } else {
                "obligatorio"
            };
            self.errors.insert(key, format!("{} es {}", label, suffix));
        }
        self
    }

    pub fn digits_only(&mut self, key: &str, label: &str, value: &str) -> &mut Self {
        let message = format!("{} debe contener solo números", label);
        self.pattern(key, value, &DIGITS_RE, &message)
    }

    pub fn length_between(
        &mut self,
        key: &str,
        label: &str,
        value: &str,
        min: usize,
        max: usize,
    ) -> &mut Self {
        let len = value.trim().chars().count();
        if len > 0 && (len < min || len > max) {
            self.errors.insert(
                key,
                format!("{} debe tener entre {} y {} caracteres", label, min, max),
            );
        }
        self
    }

    pub fn min_length(&mut self, key: &str, label: &str, value: &str, min: usize) -> &mut Self {
        let len = value.trim().chars().count();
        if len > 0 && len < min {
            self.errors.insert(
                key,
                format!("{} debe tener al menos {} caracteres", label, min),
            );
        }
        self
    }

    pub fn email(&mut self, key: &str, value: &str) -> &mut Self {
        self.pattern(key, value, &EMAIL_RE, "Ingrese un email válido")
    }

    pub fn phone(&mut self, key: &str, value: &str) -> &mut Self {
        self.pattern(key, value, &PHONE_RE, "Ingrese un teléfono válido")
    }

    pub fn pattern(&mut self, key: &str, value: &str, re: &Regex, message: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() && !re.is_match(value) {
            self.errors.insert(key, message);
        }
        self
    }

    pub fn plate(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() && !is_valid_plate(value) {
            self.errors
                .insert(key, "La patente no tiene un formato válido (ej. AB123CD)");
        }
        self
    }

    pub fn container(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() && !is_valid_container(value) {
            self.errors.insert(
                key,
                "El contenedor debe tener 4 letras y 7 números (ej. MSCU1234567)",
            );
        }
        self
    }

    pub fn latitude(&mut self, key: &str, value: &str) -> &mut Self {
        self.coordinate(key, value, 90.0, "La latitud debe ser un número entre -90 y 90")
    }

    pub fn longitude(&mut self, key: &str, value: &str) -> &mut Self {
        self.coordinate(
            key,
            value,
            180.0,
            "La longitud debe ser un número entre -180 y 180",
        )
    }

    fn coordinate(&mut self, key: &str, value: &str, limit: f64, message: &str) -> &mut Self {
        if value.trim().is_empty() {
            return self;
        }
        match parse_number(value) {
            Some(v) if (-limit..=limit).contains(&v) => {}
            _ => self.errors.insert(key, message),
        }
        self
    }

    pub fn positive_number(&mut self, key: &str, label: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            return self;
        }
        match parse_number(value) {
            Some(v) if v > 0.0 => {}
            _ => self
                .errors
                .insert(key, format!("{} debe ser un número mayor a 0", label)),
        }
        self
    }

    pub fn integer_between(
        &mut self,
        key: &str,
        label: &str,
        value: &str,
        min: i64,
        max: i64,
    ) -> &mut Self {
        if value.trim().is_empty() {
            return self;
        }
        match value.trim().parse::<i64>() {
            Ok(v) if (min..=max).contains(&v) => {}
            _ => self.errors.insert(
                key,
                format!("{} debe ser un número entre {} y {}", label, min, max),
            ),
        }
        self
    }

    pub fn date(&mut self, key: &str, label: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() && parse_date(value).is_none() {
            self.errors.insert(
                key,
                format!("{} debe tener el formato AAAA-MM-DD", label),
            );
        }
        self
    }

    /// Дата строго позже `min` (например, срок действия лицензии)
    pub fn date_after(&mut self, key: &str, value: &str, min: NaiveDate, message: &str) -> &mut Self {
        if let Some(date) = parse_date(value) {
            if date <= min {
                self.errors.insert(key, message);
            }
        }
        self
    }

    pub fn matches(&mut self, key: &str, value: &str, other: &str, message: &str) -> &mut Self {
        if !value.is_empty() && value != other {
            self.errors.insert(key, message);
        }
        self
    }

    /// Страна/провинция/город: обязательность, порядок выбора и принадлежность каталогу
    pub fn location(&mut self, location: &LocationSelection) -> &mut Self {
        let country = location.country.trim();
        let province = location.province.trim();
        let city = location.city.trim();

        if country.is_empty() {
            self.errors.insert("country", "El país es obligatorio");
        } else if !location::is_known_country(country) {
            self.errors.insert("country", "País no válido");
        }

        if country.is_empty() {
            self.errors.insert("province", "Seleccione primero un país");
        } else if province.is_empty() {
            self.errors.insert("province", "La provincia es obligatoria");
        } else if !location::is_known_province(country, province) {
            self.errors
                .insert("province", "La provincia no pertenece al país seleccionado");
        }

        if country.is_empty() || province.is_empty() {
            self.errors.insert("city", "Seleccione primero una provincia");
        } else if city.is_empty() {
            self.errors.insert("city", "La ciudad es obligatoria");
        } else if !location::is_known_city(country, province, city) {
            self.errors
                .insert("city", "La ciudad no pertenece a la provincia seleccionada");
        }

        self
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_reports_blank_and_whitespace() {
        let mut v = FormValidator::new();
        v.required("a", "El nombre", "")
            .required("b", "La dirección", "   ")
            .required("c", "El email", "x@y.com");
        let errors = v.finish();
        assert_eq!(errors.get("a"), Some("El nombre es obligatorio"));
        assert_eq!(errors.get("b"), Some("La dirección es obligatoria"));
        assert!(!errors.contains("c"));
    }

    #[test]
    fn test_digits_only_rejects_letters_and_dashes() {
        for value in ["30-71122233-4", "30A", "12 34"] {
            let mut v = FormValidator::new();
            v.digits_only("tax_id", "El CUIT", value);
            assert_eq!(
                v.finish().get("tax_id"),
                Some("El CUIT debe contener solo números"),
                "value {value}"
            );
        }
        let mut v = FormValidator::new();
        v.digits_only("tax_id", "El CUIT", "30711222334");
        assert!(v.finish().is_empty());
    }

    #[test]
    fn test_first_error_per_field_wins() {
        let mut v = FormValidator::new();
        v.required("tax_id", "El CUIT", "")
            .digits_only("tax_id", "El CUIT", "")
            .min_length("tax_id", "El CUIT", "", 11);
        assert_eq!(v.finish().get("tax_id"), Some("El CUIT es obligatorio"));
    }

    #[test]
    fn test_email_format() {
        let mut v = FormValidator::new();
        v.email("ok", "ventas@empresa.com.ar").email("bad", "ventas@empresa");
        let errors = v.finish();
        assert!(!errors.contains("ok"));
        assert_eq!(errors.get("bad"), Some("Ingrese un email válido"));
    }

    #[test]
    fn test_pattern_skips_blank_and_reports_mismatch() {
        let code_re = Regex::new(r"^[A-Z]{3}-[0-9]{3}$").unwrap();
        let mut v = FormValidator::new();
        v.pattern("blank", "  ", &code_re, "Código inválido")
            .pattern("ok", " DEP-001 ", &code_re, "Código inválido")
            .pattern("bad", "dep001", &code_re, "Código inválido");
        let errors = v.finish();
        assert!(!errors.contains("blank"));
        assert!(!errors.contains("ok"));
        assert_eq!(errors.get("bad"), Some("Código inválido"));
    }

    #[test]
    fn test_coordinates_range_and_format() {
        let mut v = FormValidator::new();
        v.latitude("lat_ok", "-34.0")
            .latitude("lat_range", "91")
            .latitude("lat_text", "norte")
            .longitude("lng_ok", "-58,38")
            .longitude("lng_range", "-180.5");
        let errors = v.finish();
        assert!(!errors.contains("lat_ok"));
        assert!(!errors.contains("lng_ok"));
        assert_eq!(
            errors.get("lat_range"),
            Some("La latitud debe ser un número entre -90 y 90")
        );
        assert!(errors.contains("lat_text"));
        assert_eq!(
            errors.get("lng_range"),
            Some("La longitud debe ser un número entre -180 y 180")
        );
    }

    #[test]
    fn test_confirm_password_must_match() {
        let mut v = FormValidator::new();
        v.matches("confirm", "secreto123", "secreto124", "Las contraseñas no coinciden");
        assert_eq!(v.finish().get("confirm"), Some("Las contraseñas no coinciden"));
    }

    #[test]
    fn test_province_requires_country_first() {
        let mut v = FormValidator::new();
        v.location(&LocationSelection::new("", "Mendoza", ""));
        let errors = v.finish();
        assert_eq!(errors.get("country"), Some("El país es obligatorio"));
        assert_eq!(errors.get("province"), Some("Seleccione primero un país"));
        assert_eq!(errors.get("city"), Some("Seleccione primero una provincia"));
    }

    #[test]
    fn test_city_waits_for_country_even_with_stale_province() {
        let mut v = FormValidator::new();
        v.location(&LocationSelection::new("", "Mendoza", "Mendoza"));
        let errors = v.finish();
        assert_eq!(errors.get("city"), Some("Seleccione primero una provincia"));
    }

    #[test]
    fn test_location_must_belong_to_catalog() {
        let mut v = FormValidator::new();
        v.location(&LocationSelection::new("Chile", "Mendoza", "Mendoza"));
        let errors = v.finish();
        assert!(!errors.contains("country"));
        assert_eq!(
            errors.get("province"),
            Some("La provincia no pertenece al país seleccionado")
        );

        let mut v = FormValidator::new();
        v.location(&LocationSelection::new("Argentina", "Buenos Aires", "Buenos Aires"));
        assert!(v.finish().is_empty());
    }

    #[test]
    fn test_plates_and_containers() {
        assert!(is_valid_plate("AB123CD"));
        assert!(is_valid_plate("abc 123"));
        assert!(!is_valid_plate("1234ABC"));
        assert!(is_valid_container("MSCU1234567"));
        assert!(!is_valid_container("MSC1234567"));
    }

    #[test]
    fn test_tax_id_label_by_country() {
        assert_eq!(tax_id_label("Argentina"), "CUIT");
        assert_eq!(tax_id_label("Uruguay"), "RUT");
        assert_eq!(tax_id_label(""), "Identificador fiscal");
        assert_eq!(tax_id_subject("Paraguay"), "El RUC");
        assert_eq!(tax_id_subject(""), "El identificador fiscal");
    }

    #[test]
    fn test_prefixed_keys() {
        let mut errors = FieldErrors::new();
        errors.insert("driver", "El chofer es obligatorio");
        let errors = errors.prefixed("trip");
        assert_eq!(errors.get("trip.driver"), Some("El chofer es obligatorio"));
    }
}
