//! Каскад país → provincia → ciudad.
//!
//! Логика сброса живёт в `LocationSelection`; компонент только отдаёт новое
//! значение наверх.

use super::form_field::{plain_options, SelectField};
use contracts::shared::location::{countries, LocationSelection};
use contracts::shared::validation::FieldErrors;
use leptos::prelude::*;

fn key(prefix: &'static str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}

#[component]
pub fn LocationSelect(
    #[prop(into)]
    value: Signal<LocationSelection>,
    on_change: Callback<LocationSelection>,
    #[prop(into)]
    errors: Signal<FieldErrors>,
    /// Префикс ключей ошибок ("origin" → "origin.country")
    #[prop(optional)]
    prefix: &'static str,
) -> impl IntoView {
    let update = move |apply: fn(&mut LocationSelection, &str), v: String| {
        let mut next = value.get_untracked();
        apply(&mut next, &v);
        on_change.run(next);
    };

    let country_options = plain_options(&countries());
    let province_options = Signal::derive(move || value.with(|l| plain_options(&l.province_options())));
    let city_options = Signal::derive(move || value.with(|l| plain_options(&l.city_options())));

    view! {
        <div class="form__row form__row--location">
            <SelectField
                label="País"
                field={key(prefix, "country")}
                value={Signal::derive(move || value.with(|l| l.country.clone()))}
                on_change={Callback::new(move |v| update(LocationSelection::select_country, v))}
                options=country_options
                errors=errors
                required=true
            />
            <SelectField
                label="Provincia"
                field={key(prefix, "province")}
                value={Signal::derive(move || value.with(|l| l.province.clone()))}
                on_change={Callback::new(move |v| update(LocationSelection::select_province, v))}
                options=province_options
                errors=errors
                required=true
                disabled={Signal::derive(move || value.with(|l| l.country.is_empty()))}
            />
            <SelectField
                label="Ciudad"
                field={key(prefix, "city")}
                value={Signal::derive(move || value.with(|l| l.city.clone()))}
                on_change={Callback::new(move |v| update(LocationSelection::select_city, v))}
                options=city_options
                errors=errors
                required=true
                disabled={Signal::derive(move || value.with(|l| l.province.is_empty()))}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_keys_follow_prefix() {
        assert_eq!(key("", "city"), "city");
        assert_eq!(key("destination", "province"), "destination.province");
    }
}
