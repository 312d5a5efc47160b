//! Append-only side logs: grievances and feedback.
//!
//! These records are written by the front desk on behalf of guests but are
//! never consumed by billing; they exist for the operations side to read.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::identity::{GuestId, Identified};
use crate::timestamp;

/// Urgency of a grievance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GrievancePriority {
    /// Needs attention immediately.
    High,
    /// Default urgency.
    #[default]
    Medium,
    /// Can wait.
    Low,
}

impl FromStr for GrievancePriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("unknown priority: {s}")),
        }
    }
}

impl fmt::Display for GrievancePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Handling state of a grievance. New grievances are `Open`; resolution is
/// written by the operations side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GrievanceStatus {
    /// Filed and not yet addressed.
    #[default]
    Open,
    /// Addressed by staff.
    Resolved,
}

impl fmt::Display for GrievanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "Open"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// A guest complaint.
///
/// Field order matches the on-disk record layout: name, id-proof, room
/// number, category, priority, description, timestamp, status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grievance {
    /// Guest name at filing time.
    pub name: String,
    /// Identity document reference.
    pub id_proof: String,
    /// Room of the active stay.
    pub room_number: String,
    /// Complaint category (cleanliness, staff, amenities, ...).
    pub category: String,
    /// Urgency.
    pub priority: GrievancePriority,
    /// Free-text description.
    pub description: String,
    /// When the grievance was filed.
    #[serde(with = "timestamp")]
    pub filed_at: NaiveDateTime,
    /// Handling state.
    pub status: GrievanceStatus,
}

impl Grievance {
    /// Create a new open grievance.
    #[must_use]
    pub fn new(
        guest: &GuestId,
        room_number: impl Into<String>,
        category: impl Into<String>,
        priority: GrievancePriority,
        description: impl Into<String>,
        filed_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: guest.name.clone(),
            id_proof: guest.id_proof.clone(),
            room_number: room_number.into(),
            category: category.into(),
            priority,
            description: description.into(),
            filed_at,
            status: GrievanceStatus::Open,
        }
    }
}

impl Identified for Grievance {
    fn guest_name(&self) -> &str {
        &self.name
    }

    fn guest_id_proof(&self) -> &str {
        &self.id_proof
    }
}

/// Star ratings (1-5) collected with feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratings {
    /// Room quality.
    pub room: u8,
    /// Staff service.
    pub staff: u8,
    /// Food quality.
    pub food: u8,
    /// Overall experience.
    pub overall: u8,
}

impl Ratings {
    /// Whether every rating is within 1-5.
    #[must_use]
    pub fn all_in_range(&self) -> bool {
        [self.room, self.staff, self.food, self.overall]
            .iter()
            .all(|r| (1..=5).contains(r))
    }
}

/// Yes/No wire encoding for the recommendation flag.
mod yes_no {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(if *value { "Yes" } else { "No" })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        match String::deserialize(deserializer)?.as_str() {
            "Yes" => Ok(true),
            "No" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected Yes or No, got {other}"
            ))),
        }
    }
}

/// A guest feedback entry.
///
/// Feedback does not require an active stay; when the identity cannot be
/// resolved to a room, `room_number` is recorded as `N/A`. Field order
/// matches the on-disk record layout: name, id-proof, room number, the four
/// ratings, recommendation, comments, timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Guest name.
    pub name: String,
    /// Identity document reference, may be empty.
    pub id_proof: String,
    /// Room of the active stay, or `N/A`.
    pub room_number: String,
    /// Room quality rating, 1-5.
    pub rating_room: u8,
    /// Staff service rating, 1-5.
    pub rating_staff: u8,
    /// Food quality rating, 1-5.
    pub rating_food: u8,
    /// Overall experience rating, 1-5.
    pub rating_overall: u8,
    /// Whether the guest would recommend the property.
    #[serde(with = "yes_no")]
    pub recommend: bool,
    /// Free-text comments, may be empty.
    pub comments: String,
    /// When the feedback was left.
    #[serde(with = "timestamp")]
    pub left_at: NaiveDateTime,
}

impl Feedback {
    /// Create a new feedback entry.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        id_proof: impl Into<String>,
        room_number: impl Into<String>,
        ratings: Ratings,
        recommend: bool,
        comments: impl Into<String>,
        left_at: NaiveDateTime,
    ) -> Self {
        Self {
            name: name.into(),
            id_proof: id_proof.into(),
            room_number: room_number.into(),
            rating_room: ratings.room,
            rating_staff: ratings.staff,
            rating_food: ratings.food,
            rating_overall: ratings.overall,
            recommend,
            comments: comments.into(),
            left_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_from_str() {
        assert_eq!(
            "high".parse::<GrievancePriority>(),
            Ok(GrievancePriority::High)
        );
        assert!("urgent".parse::<GrievancePriority>().is_err());
    }

    #[test]
    fn test_ratings_range() {
        let good = Ratings {
            room: 5,
            staff: 4,
            food: 3,
            overall: 5,
        };
        assert!(good.all_in_range());

        let bad = Ratings {
            room: 0,
            staff: 4,
            food: 3,
            overall: 6,
        };
        assert!(!bad.all_in_range());
    }

    #[test]
    fn test_grievance_starts_open() {
        let grievance = Grievance::new(
            &GuestId::new("Ann", "P1"),
            "101",
            "Noise Complaint",
            GrievancePriority::High,
            "loud corridor",
            timestamp::now(),
        );
        assert_eq!(grievance.status, GrievanceStatus::Open);
    }
}
