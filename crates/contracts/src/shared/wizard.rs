//! Общие типы пошаговых мастеров (carga, empresa de transporte)

use crate::shared::validation::FieldErrors;
use thiserror::Error;

/// Шаг мастера: порядок и подпись для индикатора
pub trait WizardStep: Copy + PartialEq + Sized + 'static {
    fn all() -> &'static [Self];

    fn label(&self) -> &'static str;

    fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    fn next(&self) -> Option<Self> {
        Self::all().get(self.index() + 1).copied()
    }

    fn previous(&self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::all().get(i).copied())
    }

    fn is_last(&self) -> bool {
        self.index() + 1 == Self::all().len()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    /// Ошибки текущего шага; ключи полей как в форме
    #[error("Revise los datos del paso {step}: {errors}")]
    InvalidStep { step: &'static str, errors: FieldErrors },
    #[error("El paso {0} todavía no fue completado")]
    StepNotReached(&'static str),
    #[error("Ya se encuentra en el último paso")]
    AtLastStep,
    #[error("Ya se encuentra en el primer paso")]
    AtFirstStep,
    #[error("{0}")]
    Rejected(String),
}

impl WizardError {
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            WizardError::InvalidStep { errors, .. } => errors.clone(),
            _ => FieldErrors::new(),
        }
    }
}

/// Состояние навигации: текущий шаг + самый дальний посещённый
#[derive(Debug, Clone, PartialEq)]
pub struct StepCursor<S: WizardStep> {
    current: S,
    furthest: usize,
}

impl<S: WizardStep> StepCursor<S> {
    pub fn new() -> Self {
        Self {
            current: S::all()[0],
            furthest: 0,
        }
    }

    pub fn current(&self) -> S {
        self.current
    }

    pub fn is_visited(&self, step: S) -> bool {
        step.index() <= self.furthest
    }

    pub fn advance(&mut self) -> Result<S, WizardError> {
        let next = self.current.next().ok_or(WizardError::AtLastStep)?;
        self.current = next;
        self.furthest = self.furthest.max(next.index());
        Ok(next)
    }

    pub fn back(&mut self) -> Result<S, WizardError> {
        let prev = self.current.previous().ok_or(WizardError::AtFirstStep)?;
        self.current = prev;
        Ok(prev)
    }

    pub fn go_to(&mut self, step: S) -> Result<S, WizardError> {
        if !self.is_visited(step) {
            return Err(WizardError::StepNotReached(step.label()));
        }
        self.current = step;
        Ok(step)
    }
}

impl<S: WizardStep> Default for StepCursor<S> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Step {
        One,
        Two,
        Three,
    }

    impl WizardStep for Step {
        fn all() -> &'static [Self] {
            &[Step::One, Step::Two, Step::Three]
        }

        fn label(&self) -> &'static str {
            match self {
                Step::One => "Uno",
                Step::Two => "Dos",
                Step::Three => "Tres",
            }
        }
    }

    #[test]
    fn test_cursor_only_jumps_to_visited_steps() {
        let mut cursor = StepCursor::<Step>::new();
        assert_eq!(cursor.go_to(Step::Three), Err(WizardError::StepNotReached("Tres")));
        cursor.advance().unwrap();
        cursor.advance().unwrap();
        assert_eq!(cursor.advance(), Err(WizardError::AtLastStep));
        assert_eq!(cursor.go_to(Step::One), Ok(Step::One));
        assert_eq!(cursor.go_to(Step::Three), Ok(Step::Three));
        assert!(Step::Three.is_last());
    }

    #[test]
    fn test_back_from_first_step_fails() {
        let mut cursor = StepCursor::<Step>::default();
        assert_eq!(cursor.back(), Err(WizardError::AtFirstStep));
    }
}
