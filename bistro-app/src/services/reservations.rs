//! Reservation workflow
//!
//! Table bookings on half-hour slots between 11:00 and 22:30. Date
//! validation is against a caller-supplied "today" so the rule stays
//! testable with fixed dates.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::models::{Reservation, ReservationDraft, ReservationStatus};
use shared::util::{now_millis, today};
use shared::AppResult;
use tracing::info;

use crate::core::Config;
use crate::store::RestaurantStore;
use crate::utils::validation::{
    validate_customer_name, validate_email, validate_not_past, validate_party_size, validate_phone,
};

/// Reservation booking and lifecycle
#[derive(Debug, Clone)]
pub struct ReservationService {
    store: Arc<RestaurantStore>,
    max_party_size: u32,
}

impl ReservationService {
    pub fn new(store: Arc<RestaurantStore>, config: &Config) -> Self {
        Self {
            store,
            max_party_size: config.max_party_size,
        }
    }

    /// Book a reservation, validating against the current local date
    pub fn book(&self, draft: ReservationDraft) -> AppResult<Reservation> {
        self.book_at(draft, today())
    }

    /// Book a reservation, validating against an explicit date
    ///
    /// New reservations start as pending.
    pub fn book_at(&self, draft: ReservationDraft, today: NaiveDate) -> AppResult<Reservation> {
        validate_customer_name(&draft.name)?;
        validate_email(&draft.email)?;
        validate_phone(&draft.phone)?;
        validate_party_size(draft.number_of_people, self.max_party_size)?;
        validate_not_past(draft.date, today)?;

        let reservation = self.store.insert_reservation(Reservation {
            id: 0,
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            number_of_people: draft.number_of_people,
            date: draft.date,
            time: draft.time,
            status: ReservationStatus::Pending,
            created_at: now_millis(),
        });
        info!(
            reservation_id = reservation.id,
            date = %reservation.date,
            time = %reservation.time,
            "Reservation booked"
        );
        Ok(reservation)
    }

    /// Move a reservation to a new status
    pub fn update_status(&self, id: i64, status: ReservationStatus) -> AppResult<Reservation> {
        let reservation = self.store.update_reservation_status(id, status)?;
        info!(reservation_id = id, status = ?status, "Reservation status updated");
        Ok(reservation)
    }

    /// Delete a reservation
    pub fn delete(&self, id: i64) -> AppResult<Reservation> {
        let reservation = self.store.remove_reservation(id)?;
        info!(reservation_id = id, "Reservation deleted");
        Ok(reservation)
    }
}
