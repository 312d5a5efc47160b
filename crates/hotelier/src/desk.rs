//! The front desk: orchestration of room allocation, stays, and charges.
//!
//! All state transitions run through [`FrontDesk`], which holds the stores
//! behind one exclusive lock. A check-in and a check-out each mutate two
//! files (inventory and registry); holding the lock for the whole
//! read-modify-write cycle is what keeps two concurrent check-ins from
//! allocating the same room. Charge appends take the same lock so a bill
//! computed during check-out can never race a concurrent append for the same
//! guest.

use hotelier_billing::{audit, compute_bill, AuditIssue, Bill, ChargeSource, LedgerKind};
use hotelier_core::{
    timestamp, Feedback, Grievance, GrievancePriority, GuestId, HousekeepingCharge, Identified,
    NaiveDateTime, Occupancy, OrderCharge, Ratings, Room, RoomType,
};
use hotelier_store::{Store, StoreError};
use parking_lot::Mutex;
use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, warn};

/// Errors returned across the core/presentation boundary.
///
/// Everything here is an explicit result value; no operation panics on
/// malformed but well-typed input.
#[derive(Debug, Error)]
pub enum FrontDeskError {
    /// No active stay exists for the identity; the guest must check in first.
    #[error("no active stay for {guest}; please check in first")]
    NotCheckedIn {
        /// The identity that was looked up.
        guest: GuestId,
    },

    /// The identity already has an active stay.
    #[error("{guest} is already checked in to room {room_number}")]
    AlreadyCheckedIn {
        /// The identity as recorded on the existing stay.
        guest: GuestId,
        /// The room held by the existing stay.
        room_number: String,
    },

    /// A field was rejected before any mutation happened.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong.
        reason: String,
    },

    /// No room of the requested type is available; the guest may retry with
    /// a different type.
    #[error("no {room_type} rooms available")]
    NoAvailability {
        /// The requested room type.
        room_type: RoomType,
    },

    /// The underlying persistence failed.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl FrontDeskError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Fields collected for a check-in.
#[derive(Debug, Clone)]
pub struct CheckInRequest {
    /// Guest name.
    pub name: String,
    /// Identity document reference.
    pub id_proof: String,
    /// Requested room category.
    pub room_type: RoomType,
    /// Length of the stay in nights; must be positive.
    pub nights: u32,
    /// Contact phone number.
    pub phone: String,
}

/// Result of a successful check-in.
#[derive(Debug, Clone)]
pub struct CheckInReceipt {
    /// The allocated room.
    pub room_number: String,
    /// Category of the allocated room.
    pub room_type: RoomType,
    /// Nightly price at allocation time.
    pub price_per_night: Decimal,
    /// Length of the stay in nights.
    pub nights: u32,
    /// Frozen total for the room.
    pub room_total: Decimal,
    /// When the stay was opened.
    pub checked_in_at: NaiveDateTime,
}

/// Result of a successful check-out: the freed room and the final bill.
#[derive(Debug, Clone)]
pub struct CheckOutReceipt {
    /// The room that was freed.
    pub room_number: String,
    /// The authoritative final bill, computed before the stay was removed.
    pub bill: Bill,
    /// When the stay was closed.
    pub checked_out_at: NaiveDateTime,
}

/// One line of a food or non-food order.
#[derive(Debug, Clone)]
pub struct OrderLine {
    /// What is being ordered.
    pub description: String,
    /// Positive number of units.
    pub quantity: u32,
    /// Positive price per unit.
    pub unit_price: Decimal,
}

/// One selected housekeeping service.
#[derive(Debug, Clone)]
pub struct ServiceLine {
    /// Service name.
    pub service: String,
    /// Positive flat cost.
    pub cost: Decimal,
}

/// Fields collected for a housekeeping request.
#[derive(Debug, Clone)]
pub struct HousekeepingRequest {
    /// Selected services; must not be empty.
    pub services: Vec<ServiceLine>,
    /// Free-text preferred time of service.
    pub preferred_time: String,
    /// Free-text special requirements, may be empty.
    pub special_request: String,
}

/// Result of a successful charge append.
#[derive(Debug, Clone)]
pub struct OrderReceipt {
    /// Room the charges were booked to.
    pub room_number: String,
    /// Sum of the appended charges.
    pub total: Decimal,
    /// Timestamp stamped on every appended record.
    pub placed_at: NaiveDateTime,
}

/// The reservation manager.
///
/// Owns the stores behind an exclusive lock; see the module docs for the
/// locking rationale.
#[derive(Debug)]
pub struct FrontDesk {
    store: Mutex<Store>,
}

impl FrontDesk {
    /// Open the front desk over the stores in `data_dir`, seeding them on
    /// first use.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, FrontDeskError> {
        Ok(Self {
            store: Mutex::new(Store::open(data_dir)?),
        })
    }

    /// All rooms in storage order.
    pub fn list_rooms(&self) -> Result<Vec<Room>, FrontDeskError> {
        Ok(self.store.lock().rooms().list()?)
    }

    /// The active stay for an identity, if any.
    ///
    /// `Ok(None)` is the normal "not checked in" outcome used for identity
    /// verification by the presentation layer.
    pub fn find_active_occupancy(
        &self,
        name: &str,
        id_proof: &str,
    ) -> Result<Option<Occupancy>, FrontDeskError> {
        Ok(self.store.lock().occupancies().find_active(name, id_proof)?)
    }

    /// Allocate a room and open a stay.
    ///
    /// Rejects bad fields before any mutation. The inventory mark and the
    /// registry append happen under one lock; the room is marked first so an
    /// interruption between the two writes leaves a held room with no stay
    /// (audit finding A1001) rather than a double allocation.
    pub fn check_in(&self, request: CheckInRequest) -> Result<CheckInReceipt, FrontDeskError> {
        require_identity(&request.name, &request.id_proof)?;
        if request.phone.trim().is_empty() {
            return Err(FrontDeskError::invalid("phone number is required"));
        }
        if request.nights == 0 {
            return Err(FrontDeskError::invalid("number of nights must be positive"));
        }

        let store = self.store.lock();
        if let Some(existing) = store
            .occupancies()
            .find_active(&request.name, &request.id_proof)?
        {
            return Err(FrontDeskError::AlreadyCheckedIn {
                guest: existing.guest(),
                room_number: existing.room_number,
            });
        }

        let room = store
            .rooms()
            .find_available(request.room_type)?
            .ok_or(FrontDeskError::NoAvailability {
                room_type: request.room_type,
            })?;

        let guest = GuestId::new(request.name, request.id_proof);
        let checked_in_at = timestamp::now();
        let occupancy = Occupancy::new(
            &guest,
            &room.number,
            room.room_type,
            request.nights,
            room.price_per_night,
            request.phone,
            checked_in_at,
        );

        store.rooms().mark_booked(&room.number)?;
        if let Err(error) = store.occupancies().create(&occupancy) {
            // Free the room again so a failed append does not strand it.
            if let Err(rollback) = store.rooms().mark_available(&room.number) {
                warn!(room = %room.number, error = %rollback, "failed to release room after aborted check-in");
            }
            return Err(error.into());
        }

        info!(guest = %guest, room = %room.number, nights = request.nights, total = %occupancy.room_total, "checked in");
        Ok(CheckInReceipt {
            room_number: room.number,
            room_type: room.room_type,
            price_per_night: room.price_per_night,
            nights: request.nights,
            room_total: occupancy.room_total,
            checked_in_at,
        })
    }

    /// Close a stay, free its room, and return the final bill.
    ///
    /// The bill is computed from the frozen stay values before the record is
    /// removed, so the room charges are part of the final total. The stay is
    /// removed before the room is freed; an interruption between the two
    /// writes leaks toward audit finding A1001, never a double booking.
    pub fn check_out(
        &self,
        name: &str,
        id_proof: &str,
    ) -> Result<CheckOutReceipt, FrontDeskError> {
        require_identity(name, id_proof)?;

        let store = self.store.lock();
        let occupancy = store
            .occupancies()
            .find_active(name, id_proof)?
            .ok_or_else(|| FrontDeskError::NotCheckedIn {
                guest: GuestId::new(name, id_proof),
            })?;

        let guest = occupancy.guest();
        let bill = bill_for(&store, &guest, Some(&occupancy));

        store.occupancies().remove(name, id_proof)?;
        store.rooms().mark_available(&occupancy.room_number)?;

        info!(guest = %guest, room = %occupancy.room_number, total = %bill.grand_total, "checked out");
        Ok(CheckOutReceipt {
            room_number: occupancy.room_number,
            bill,
            checked_out_at: timestamp::now(),
        })
    }

    /// The running bill for an active stay.
    ///
    /// Requires an active occupancy; read-only.
    pub fn current_bill(&self, name: &str, id_proof: &str) -> Result<Bill, FrontDeskError> {
        require_identity(name, id_proof)?;

        let store = self.store.lock();
        let occupancy = store
            .occupancies()
            .find_active(name, id_proof)?
            .ok_or_else(|| FrontDeskError::NotCheckedIn {
                guest: GuestId::new(name, id_proof),
            })?;
        let guest = occupancy.guest();
        Ok(bill_for(&store, &guest, Some(&occupancy)))
    }

    /// Append food order charges for an active stay.
    pub fn order_food(
        &self,
        name: &str,
        id_proof: &str,
        lines: Vec<OrderLine>,
    ) -> Result<OrderReceipt, FrontDeskError> {
        self.place_order(name, id_proof, lines, OrderTarget::Food)
    }

    /// Append non-food item charges for an active stay.
    pub fn order_items(
        &self,
        name: &str,
        id_proof: &str,
        lines: Vec<OrderLine>,
    ) -> Result<OrderReceipt, FrontDeskError> {
        self.place_order(name, id_proof, lines, OrderTarget::Items)
    }

    fn place_order(
        &self,
        name: &str,
        id_proof: &str,
        lines: Vec<OrderLine>,
        target: OrderTarget,
    ) -> Result<OrderReceipt, FrontDeskError> {
        require_identity(name, id_proof)?;
        if lines.is_empty() {
            return Err(FrontDeskError::invalid("select at least one item"));
        }
        for line in &lines {
            if line.description.trim().is_empty() {
                return Err(FrontDeskError::invalid("item description is required"));
            }
            if line.quantity == 0 {
                return Err(FrontDeskError::invalid(format!(
                    "quantity for {} must be positive",
                    line.description
                )));
            }
            if line.unit_price <= Decimal::ZERO {
                return Err(FrontDeskError::invalid(format!(
                    "unit price for {} must be positive",
                    line.description
                )));
            }
        }

        let store = self.store.lock();
        let occupancy = require_active(&store, name, id_proof)?;
        let guest = occupancy.guest();
        let placed_at = timestamp::now();

        let charges: Vec<OrderCharge> = lines
            .iter()
            .map(|line| {
                OrderCharge::new(
                    &guest,
                    &occupancy.room_number,
                    &line.description,
                    line.quantity,
                    line.unit_price,
                    placed_at,
                )
            })
            .collect();
        match target {
            OrderTarget::Food => store.food().append_all(&charges)?,
            OrderTarget::Items => store.items().append_all(&charges)?,
        }

        let total: Decimal = charges.iter().map(|charge| charge.line_total).sum();
        info!(guest = %guest, room = %occupancy.room_number, ledger = ?target, %total, "order placed");
        Ok(OrderReceipt {
            room_number: occupancy.room_number,
            total,
            placed_at,
        })
    }

    /// Append pending housekeeping charges for an active stay.
    pub fn request_housekeeping(
        &self,
        name: &str,
        id_proof: &str,
        request: HousekeepingRequest,
    ) -> Result<OrderReceipt, FrontDeskError> {
        require_identity(name, id_proof)?;
        if request.services.is_empty() {
            return Err(FrontDeskError::invalid("select at least one service"));
        }
        for line in &request.services {
            if line.service.trim().is_empty() {
                return Err(FrontDeskError::invalid("service name is required"));
            }
            if line.cost <= Decimal::ZERO {
                return Err(FrontDeskError::invalid(format!(
                    "cost for {} must be positive",
                    line.service
                )));
            }
        }

        let store = self.store.lock();
        let occupancy = require_active(&store, name, id_proof)?;
        let guest = occupancy.guest();
        let requested_at = timestamp::now();

        let charges: Vec<HousekeepingCharge> = request
            .services
            .iter()
            .map(|line| {
                HousekeepingCharge::new(
                    &guest,
                    &occupancy.room_number,
                    &line.service,
                    line.cost,
                    &request.preferred_time,
                    &request.special_request,
                    requested_at,
                )
            })
            .collect();
        store.housekeeping().append_all(&charges)?;

        let total: Decimal = charges.iter().map(|charge| charge.cost).sum();
        info!(guest = %guest, room = %occupancy.room_number, %total, "housekeeping requested");
        Ok(OrderReceipt {
            room_number: occupancy.room_number,
            total,
            placed_at: requested_at,
        })
    }

    /// File a grievance for an active stay.
    pub fn file_grievance(
        &self,
        name: &str,
        id_proof: &str,
        category: &str,
        priority: GrievancePriority,
        description: &str,
    ) -> Result<Grievance, FrontDeskError> {
        require_identity(name, id_proof)?;
        if category.trim().is_empty() {
            return Err(FrontDeskError::invalid("category is required"));
        }
        if description.trim().is_empty() {
            return Err(FrontDeskError::invalid("description is required"));
        }

        let store = self.store.lock();
        let occupancy = require_active(&store, name, id_proof)?;
        let grievance = Grievance::new(
            &occupancy.guest(),
            &occupancy.room_number,
            category,
            priority,
            description,
            timestamp::now(),
        );
        store.grievances().append(&grievance)?;
        info!(guest = %grievance.guest(), room = %grievance.room_number, %priority, "grievance filed");
        Ok(grievance)
    }

    /// Record guest feedback.
    ///
    /// Feedback does not require an active stay. When the optional id-proof
    /// resolves to one, the room number is recorded; otherwise it is `N/A`.
    pub fn leave_feedback(
        &self,
        name: &str,
        id_proof: Option<&str>,
        ratings: Ratings,
        recommend: bool,
        comments: &str,
    ) -> Result<Feedback, FrontDeskError> {
        if name.trim().is_empty() {
            return Err(FrontDeskError::invalid("name is required"));
        }
        if !ratings.all_in_range() {
            return Err(FrontDeskError::invalid("ratings must be between 1 and 5"));
        }

        let store = self.store.lock();
        let room_number = match id_proof {
            Some(id) if !id.is_empty() => store
                .occupancies()
                .find_active(name, id)?
                .map(|occupancy| occupancy.room_number),
            _ => None,
        };

        let feedback = Feedback::new(
            name,
            id_proof.unwrap_or_default(),
            room_number.unwrap_or_else(|| "N/A".to_string()),
            ratings,
            recommend,
            comments,
            timestamp::now(),
        );
        store.feedback().append(&feedback)?;
        Ok(feedback)
    }

    /// Check the cross-record invariants over the current store state.
    pub fn audit(&self) -> Result<Vec<AuditIssue>, FrontDeskError> {
        let store = self.store.lock();
        let rooms = store.rooms().list()?;
        let occupancies = store.occupancies().list()?;
        Ok(audit(&rooms, &occupancies))
    }
}

fn require_active(store: &Store, name: &str, id_proof: &str) -> Result<Occupancy, FrontDeskError> {
    store
        .occupancies()
        .find_active(name, id_proof)?
        .ok_or_else(|| FrontDeskError::NotCheckedIn {
            guest: GuestId::new(name, id_proof),
        })
}

fn require_identity(name: &str, id_proof: &str) -> Result<(), FrontDeskError> {
    if name.trim().is_empty() {
        return Err(FrontDeskError::invalid("name is required"));
    }
    if id_proof.trim().is_empty() {
        return Err(FrontDeskError::invalid("id proof is required"));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum OrderTarget {
    Food,
    Items,
}

/// Read one ledger for billing, degrading an unreadable file to an
/// unavailable source instead of failing the aggregation.
fn charge_source<T>(result: Result<Vec<T>, StoreError>, ledger: LedgerKind) -> ChargeSource<T> {
    match result {
        Ok(records) => ChargeSource::available(records),
        Err(error) => {
            warn!(%ledger, %error, "charge ledger unreadable, billing it as 0");
            ChargeSource::unavailable()
        }
    }
}

fn bill_for(store: &Store, guest: &GuestId, occupancy: Option<&Occupancy>) -> Bill {
    let food = charge_source(
        store.food().lines_for(&guest.name, &guest.id_proof),
        LedgerKind::Food,
    );
    let services = charge_source(
        store.items().lines_for(&guest.name, &guest.id_proof),
        LedgerKind::Services,
    );
    let housekeeping = charge_source(
        store.housekeeping().lines_for(&guest.name, &guest.id_proof),
        LedgerKind::Housekeeping,
    );
    compute_bill(guest, occupancy, &food, &services, &housekeeping)
}
