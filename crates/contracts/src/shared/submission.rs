use serde::{Deserialize, Serialize};

/// Состояние отправки формы вокруг имитации запроса
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

impl SubmitState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmitState::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SubmitState::Succeeded(m) | SubmitState::Failed(m) => Some(m),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, SubmitState::Failed(_))
    }
}
