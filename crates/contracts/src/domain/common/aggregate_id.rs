use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
///
/// Справочники нумеруются последовательно (1, 2, 3...), поэтому каждый ID
/// умеет строиться из порядкового номера и возвращать его.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String {
        self.seq().to_string()
    }

    /// Создать ID из строки
    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(Self::from_seq)
            .map_err(|e| format!("Invalid id '{}': {}", s, e))
    }

    /// Создать ID из порядкового номера
    fn from_seq(seq: i64) -> Self;

    /// Порядковый номер
    fn seq(&self) -> i64;
}

impl AggregateId for i64 {
    fn from_seq(seq: i64) -> Self {
        seq
    }

    fn seq(&self) -> i64 {
        *self
    }
}

/// Объявляет newtype с последовательным `i64` id для агрегата справочника.
#[macro_export]
macro_rules! sequential_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        pub struct $name(pub i64);

        impl $name {
            pub fn new(value: i64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn from_seq(seq: i64) -> Self {
                Self(seq)
            }

            fn seq(&self) -> i64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    sequential_id!(TestId);

    #[test]
    fn test_round_trip_through_string() {
        let id = TestId::from_string(" 42 ").unwrap();
        assert_eq!(id, TestId(42));
        assert_eq!(id.as_string(), "42");
    }

    #[test]
    fn test_rejects_non_numeric() {
        assert!(TestId::from_string("abc").is_err());
    }
}
