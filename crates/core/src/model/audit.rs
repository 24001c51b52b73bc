use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::AuditEntryId;

/// Audit record before the log assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAuditEntry {
    pub user: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl NewAuditEntry {
    #[must_use]
    pub fn new(user: impl Into<String>, action: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            user: user.into(),
            action: action.into(),
            timestamp,
        }
    }
}

/// Append-only record of a grader action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub user: String,
    pub action: String,
    pub timestamp: DateTime<Utc>,
}

impl AuditEntry {
    #[must_use]
    pub fn from_new(id: AuditEntryId, entry: NewAuditEntry) -> Self {
        Self {
            id,
            user: entry.user,
            action: entry.action,
            timestamp: entry.timestamp,
        }
    }
}
