use serde::{Deserialize, Serialize};

/// Статус записи справочника. Удаление логическое, физически запись не стирается.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum RecordStatus {
    #[default]
    Activo,
    Inactivo,
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordStatus::Activo => "Activo",
            RecordStatus::Inactivo => "Inactivo",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            RecordStatus::Activo => RecordStatus::Inactivo,
            RecordStatus::Inactivo => RecordStatus::Activo,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Activo)
    }

    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "Activo" => Some(RecordStatus::Activo),
            "Inactivo" => Some(RecordStatus::Inactivo),
            _ => None,
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_restores_original() {
        for status in [RecordStatus::Activo, RecordStatus::Inactivo] {
            assert_ne!(status.toggle(), status);
            assert_eq!(status.toggle().toggle(), status);
        }
    }

    #[test]
    fn test_serializes_as_spanish_label() {
        let json = serde_json::to_string(&RecordStatus::Inactivo).unwrap();
        assert_eq!(json, "\"Inactivo\"");
        assert_eq!(RecordStatus::from_str_opt("Activo"), Some(RecordStatus::Activo));
        assert_eq!(RecordStatus::from_str_opt("x"), None);
    }
}
