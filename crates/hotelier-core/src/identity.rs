//! Guest identity and the matching policy shared by all stores.
//!
//! A guest is identified by the pair (name, id-proof). Everywhere a record is
//! looked up by identity, the name comparison is case-insensitive and the
//! id-proof comparison is exact. That policy lives here so the registry and
//! the charge ledgers cannot drift apart.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Case-insensitive name comparison used by the identity matching policy.
fn name_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// The (name, id-proof) identity pair for a guest.
///
/// # Examples
///
/// ```
/// use hotelier_core::GuestId;
///
/// let guest = GuestId::new("Ann", "P1");
/// assert!(guest.matches("ann", "P1"));
/// assert!(!guest.matches("ann", "p1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestId {
    /// Guest name as given at check-in.
    pub name: String,
    /// Identity document reference (Aadhaar/PAN or similar), matched exactly.
    pub id_proof: String,
}

impl GuestId {
    /// Create a new identity pair.
    #[must_use]
    pub fn new(name: impl Into<String>, id_proof: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_proof: id_proof.into(),
        }
    }

    /// Check whether this identity matches the given pair.
    #[must_use]
    pub fn matches(&self, name: &str, id_proof: &str) -> bool {
        name_eq(&self.name, name) && self.id_proof == id_proof
    }

    /// Normalized lookup key: lowercase name plus exact id-proof.
    ///
    /// Two identities with the same key refer to the same guest under the
    /// matching policy. Used to index active stays for duplicate detection.
    #[must_use]
    pub fn key(&self) -> (String, String) {
        (self.name.to_lowercase(), self.id_proof.clone())
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id_proof)
    }
}

/// A record owned by a guest identity.
///
/// Implemented by occupancies and every charge record so the file-backed
/// stores can filter by identity with one shared policy.
pub trait Identified {
    /// The guest name recorded on this record.
    fn guest_name(&self) -> &str;

    /// The id-proof recorded on this record.
    fn guest_id_proof(&self) -> &str;

    /// Whether this record belongs to the given identity pair.
    fn matches(&self, name: &str, id_proof: &str) -> bool {
        name_eq(self.guest_name(), name) && self.guest_id_proof() == id_proof
    }

    /// The identity pair recorded on this record.
    fn guest(&self) -> GuestId {
        GuestId::new(self.guest_name(), self.guest_id_proof())
    }
}
