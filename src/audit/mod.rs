//! Audit logging system
//!
//! Append-only JSONL log of every create/update/delete that goes through the
//! service layer. The log is advisory: failures to write it surface as
//! errors, but nothing replays it.

pub mod entry;
pub mod logger;

pub use entry::{AuditAction, AuditEntry, EntityType};
pub use logger::AuditLogger;
