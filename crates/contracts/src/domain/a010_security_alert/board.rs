//! Панель тревог безопасности: сводка, фильтр и переходы статусов.
//!
//! Nueva → En revisión → Resuelta. Возврат из Resuelta не поддерживается.

use super::aggregate::{AlertStatus, SecurityAlert, SecurityAlertId, Severity};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("Alerta {0} no encontrada")]
    NotFound(SecurityAlertId),
    #[error("La alerta {id} está {from} y no puede pasar a {to}")]
    InvalidTransition {
        id: SecurityAlertId,
        from: &'static str,
        to: &'static str,
    },
    #[error("Ingrese una nota de resolución")]
    MissingNote,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertSummary {
    pub total: usize,
    pub open: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub new: usize,
    pub in_review: usize,
    pub resolved: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub severity: Option<Severity>,
    pub status: Option<AlertStatus>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertBoard {
    alerts: Vec<SecurityAlert>,
}

impl AlertBoard {
    pub fn new(alerts: Vec<SecurityAlert>) -> Self {
        Self { alerts }
    }

    pub fn alerts(&self) -> &[SecurityAlert] {
        &self.alerts
    }

    pub fn get(&self, id: SecurityAlertId) -> Option<&SecurityAlert> {
        self.alerts.iter().find(|a| a.id == id)
    }

    pub fn summary(&self) -> AlertSummary {
        let mut s = AlertSummary {
            total: self.alerts.len(),
            ..AlertSummary::default()
        };
        for alert in &self.alerts {
            if alert.status.is_open() {
                s.open += 1;
            }
            match alert.severity {
                Severity::Alta => s.high += 1,
                Severity::Media => s.medium += 1,
                Severity::Baja => s.low += 1,
            }
            match alert.status {
                AlertStatus::Nueva => s.new += 1,
                AlertStatus::EnRevision => s.in_review += 1,
                AlertStatus::Resuelta => s.resolved += 1,
            }
        }
        s
    }

    /// Отфильтрованные тревоги, новые сверху
    pub fn filtered(&self, filter: &AlertFilter) -> Vec<SecurityAlert> {
        let needle = filter.text.trim().to_lowercase();
        let mut items: Vec<SecurityAlert> = self
            .alerts
            .iter()
            .filter(|a| filter.severity.map_or(true, |s| a.severity == s))
            .filter(|a| filter.status.map_or(true, |s| a.status == s))
            .filter(|a| needle.is_empty() || a.matches_text(&needle))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.raised_at.cmp(&a.raised_at));
        items
    }

    fn alert_mut(&mut self, id: SecurityAlertId) -> Result<&mut SecurityAlert, AlertError> {
        self.alerts
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(AlertError::NotFound(id))
    }

    pub fn acknowledge(&mut self, id: SecurityAlertId) -> Result<(), AlertError> {
        let alert = self.alert_mut(id)?;
        if alert.status != AlertStatus::Nueva {
            return Err(AlertError::InvalidTransition {
                id,
                from: alert.status.label(),
                to: AlertStatus::EnRevision.label(),
            });
        }
        alert.status = AlertStatus::EnRevision;
        log::info!("alert {} acknowledged", id);
        Ok(())
    }

    pub fn resolve(&mut self, id: SecurityAlertId, note: &str) -> Result<(), AlertError> {
        let note = note.trim();
        let alert = self.alert_mut(id)?;
        if alert.status == AlertStatus::Resuelta {
            return Err(AlertError::InvalidTransition {
                id,
                from: alert.status.label(),
                to: AlertStatus::Resuelta.label(),
            });
        }
        if note.is_empty() {
            return Err(AlertError::MissingNote);
        }
        alert.status = AlertStatus::Resuelta;
        alert.notes.push(note.to_string());
        log::info!("alert {} resolved", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a010_security_alert::aggregate::demo_alerts;

    fn board() -> AlertBoard {
        AlertBoard::new(demo_alerts())
    }

    #[test]
    fn test_summary_counts() {
        let s = board().summary();
        assert_eq!(s.total, 5);
        assert_eq!(s.open, 4);
        assert_eq!((s.high, s.medium, s.low), (2, 2, 1));
        assert_eq!((s.new, s.in_review, s.resolved), (3, 1, 1));
    }

    #[test]
    fn test_filtered_newest_first() {
        let b = board();
        let open_high = b.filtered(&AlertFilter {
            severity: Some(Severity::Alta),
            ..AlertFilter::default()
        });
        let ids: Vec<i64> = open_high.iter().map(|a| a.id.value()).collect();
        assert_eq!(ids, vec![4, 2]);

        let by_text = b.filtered(&AlertFilter {
            text: "GÓMEZ".into(),
            ..AlertFilter::default()
        });
        assert_eq!(by_text.len(), 2);
    }

    #[test]
    fn test_acknowledge_only_from_new() {
        let mut b = board();
        b.acknowledge(SecurityAlertId(1)).unwrap();
        assert_eq!(b.get(SecurityAlertId(1)).unwrap().status, AlertStatus::EnRevision);
        assert!(matches!(
            b.acknowledge(SecurityAlertId(1)),
            Err(AlertError::InvalidTransition { .. })
        ));
        assert_eq!(
            b.acknowledge(SecurityAlertId(99)),
            Err(AlertError::NotFound(SecurityAlertId(99)))
        );
    }

    #[test]
    fn test_resolve_requires_note_and_is_final() {
        let mut b = board();
        assert_eq!(b.resolve(SecurityAlertId(4), "  "), Err(AlertError::MissingNote));
        b.resolve(SecurityAlertId(4), "Precinto verificado en destino").unwrap();
        let alert = b.get(SecurityAlertId(4)).unwrap();
        assert_eq!(alert.status, AlertStatus::Resuelta);
        assert_eq!(alert.notes.len(), 1);
        assert!(b.resolve(SecurityAlertId(4), "otra").is_err());
        assert_eq!(b.summary().open, 3);
    }
}
