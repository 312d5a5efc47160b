//! Cross-record invariant checks.
//!
//! The room inventory and the occupancy registry are updated as a pair; a
//! crash between the two writes (or a hand-edited file) can leave them out of
//! step. [`audit`] walks both snapshots and reports every violation with a
//! stable code.
//!
//! # Issue Codes
//!
//! | Code | Description |
//! |------|-------------|
//! | A1001 | Room marked Booked but no active stay references it (warning) |
//! | A1002 | Room marked Available but an active stay references it |
//! | A1003 | More than one active stay references one room |
//! | A1004 | Active stay references a room not in the inventory |
//! | A1005 | Same identity pair appears in more than one active stay |

use hotelier_core::{Identified, Occupancy, Room, RoomStatus};
use std::collections::{HashMap, HashSet};
use std::fmt;
use thiserror::Error;

/// Stable codes for cross-record audit findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditCode {
    /// A1001: Room marked Booked but no active stay references it.
    ///
    /// This is the leak direction of an interrupted check-in/check-out and is
    /// recoverable by freeing the room, so it is a warning rather than an
    /// error.
    BookedWithoutOccupancy,
    /// A1002: Room marked Available but an active stay references it.
    AvailableWithOccupancy,
    /// A1003: More than one active stay references one room.
    DuplicateRoomOccupancy,
    /// A1004: Active stay references a room not in the inventory.
    UnknownRoom,
    /// A1005: Same identity pair appears in more than one active stay.
    DuplicateIdentity,
}

impl AuditCode {
    /// Get the issue code string (e.g., "A1001").
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BookedWithoutOccupancy => "A1001",
            Self::AvailableWithOccupancy => "A1002",
            Self::DuplicateRoomOccupancy => "A1003",
            Self::UnknownRoom => "A1004",
            Self::DuplicateIdentity => "A1005",
        }
    }

    /// Check if this finding is a warning (not an error).
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        matches!(self, Self::BookedWithoutOccupancy)
    }

    /// Get the severity level.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        if self.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }
}

impl fmt::Display for AuditCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Severity level of an audit finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The stores are inconsistent.
    Error,
    /// Recoverable inconsistency.
    Warning,
}

/// One audit finding.
#[derive(Debug, Clone, Error)]
#[error("[{code}] {message}")]
pub struct AuditIssue {
    /// Issue code.
    pub code: AuditCode,
    /// Finding message.
    pub message: String,
}

impl AuditIssue {
    fn new(code: AuditCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Check the cross-record invariants between the inventory and the registry.
///
/// Findings are reported in a deterministic order: room-side findings in
/// inventory order first, then occupancy-side findings in registry order.
/// An empty result means `status = Booked` holds exactly for the rooms with
/// one active stay.
#[must_use]
pub fn audit(rooms: &[Room], occupancies: &[Occupancy]) -> Vec<AuditIssue> {
    let mut issues = Vec::new();

    let mut stays_per_room: HashMap<&str, u32> = HashMap::new();
    for occupancy in occupancies {
        *stays_per_room
            .entry(occupancy.room_number.as_str())
            .or_default() += 1;
    }

    for room in rooms {
        let stays = stays_per_room
            .get(room.number.as_str())
            .copied()
            .unwrap_or(0);
        match (room.status, stays) {
            (RoomStatus::Booked, 0) => issues.push(AuditIssue::new(
                AuditCode::BookedWithoutOccupancy,
                format!("room {} is marked Booked but no active stay references it", room.number),
            )),
            (RoomStatus::Available, 1..) => issues.push(AuditIssue::new(
                AuditCode::AvailableWithOccupancy,
                format!("room {} is marked Available but an active stay references it", room.number),
            )),
            _ => {}
        }
        if stays > 1 {
            issues.push(AuditIssue::new(
                AuditCode::DuplicateRoomOccupancy,
                format!("room {} is referenced by {stays} active stays", room.number),
            ));
        }
    }

    let known_rooms: HashSet<&str> = rooms.iter().map(|room| room.number.as_str()).collect();
    let mut seen_identities = HashSet::new();
    for occupancy in occupancies {
        if !known_rooms.contains(occupancy.room_number.as_str()) {
            issues.push(AuditIssue::new(
                AuditCode::UnknownRoom,
                format!(
                    "stay for {} references unknown room {}",
                    occupancy.guest(),
                    occupancy.room_number
                ),
            ));
        }
        if !seen_identities.insert(occupancy.guest().key()) {
            issues.push(AuditIssue::new(
                AuditCode::DuplicateIdentity,
                format!("{} appears in more than one active stay", occupancy.guest()),
            ));
        }
    }

    issues
}
