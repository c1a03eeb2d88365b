//! Audit log entries
//!
//! Each entry records one mutation: what kind of entity, which one, what
//! happened, and when.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of entity an audit entry refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Employee,
    Transaction,
    Attendance,
    Balance,
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Employee => write!(f, "employee"),
            Self::Transaction => write!(f, "transaction"),
            Self::Attendance => write!(f, "attendance"),
            Self::Balance => write!(f, "balance"),
        }
    }
}

/// The kind of mutation being recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create => write!(f, "create"),
            Self::Update => write!(f, "update"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// One line in the audit log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the mutation happened
    pub timestamp: DateTime<Utc>,

    /// What kind of mutation
    pub action: AuditAction,

    /// What kind of entity
    pub entity_type: EntityType,

    /// The entity's identifier
    pub entity_id: String,

    /// Human-readable summary of the change
    #[serde(default)]
    pub summary: String,
}

impl AuditEntry {
    /// Create a new entry stamped with the current time
    pub fn new(
        action: AuditAction,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            action,
            entity_type,
            entity_id: entity_id.into(),
            summary: summary.into(),
        }
    }
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.action,
            self.entity_type,
            self.entity_id,
            self.summary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_round_trip() {
        let entry = AuditEntry::new(
            AuditAction::Create,
            EntityType::Transaction,
            "txn-12345678",
            "sales $400.00",
        );

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.action, AuditAction::Create);
        assert_eq!(parsed.entity_type, EntityType::Transaction);
        assert_eq!(parsed.entity_id, "txn-12345678");
    }

    #[test]
    fn test_display() {
        let entry = AuditEntry::new(
            AuditAction::Delete,
            EntityType::Employee,
            "emp-12345678",
            "Dana Whitfield",
        );
        let line = entry.to_string();
        assert!(line.contains("delete"));
        assert!(line.contains("employee"));
        assert!(line.contains("emp-12345678"));
    }
}
