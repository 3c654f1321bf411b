//! Reservation page
//!
//! Booking form over the reservation service. The date field stays empty
//! until the visitor picks one; submission validates everything at once.

use std::sync::Arc;

use chrono::NaiveDate;
use shared::error::{AppError, ErrorCode};
use shared::models::{Reservation, ReservationDraft, TimeSlot};
use shared::util::today;
use shared::AppResult;

use crate::core::Config;
use crate::services::ReservationService;
use crate::store::RestaurantStore;

/// Booking form state
#[derive(Debug, Clone)]
pub struct ReservationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub number_of_people: u32,
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            number_of_people: 2,
            date: None,
            time: None,
        }
    }
}

impl ReservationForm {
    /// Turn the form into a draft, requiring date and time to be picked
    fn into_draft(self) -> AppResult<ReservationDraft> {
        let date = self.date.ok_or_else(|| {
            AppError::with_message(ErrorCode::RequiredField, "date is required")
        })?;
        let time = self.time.ok_or_else(|| {
            AppError::with_message(ErrorCode::RequiredField, "time is required")
        })?;
        Ok(ReservationDraft {
            name: self.name,
            email: self.email,
            phone: self.phone,
            number_of_people: self.number_of_people,
            date,
            time,
        })
    }
}

/// Booking page state
pub struct ReservationPage {
    reservations: ReservationService,
    pub form: ReservationForm,
    pub reservation_confirmed: bool,
    pub confirmed_reservation_id: Option<i64>,
}

impl ReservationPage {
    pub fn new(store: Arc<RestaurantStore>, config: &Config) -> Self {
        Self {
            reservations: ReservationService::new(store, config),
            form: ReservationForm::default(),
            reservation_confirmed: false,
            confirmed_reservation_id: None,
        }
    }

    /// All offered time slots, for the time dropdown
    pub fn available_times(&self) -> Vec<TimeSlot> {
        TimeSlot::all()
    }

    /// Earliest selectable date (today)
    pub fn min_date(&self) -> NaiveDate {
        today()
    }

    /// Submit the form, validating against the current local date
    pub fn submit(&mut self) -> AppResult<Reservation> {
        self.submit_at(today())
    }

    /// Submit the form, validating against an explicit date
    pub fn submit_at(&mut self, today: NaiveDate) -> AppResult<Reservation> {
        let draft = self.form.clone().into_draft()?;
        let reservation = self.reservations.book_at(draft, today)?;
        self.form = ReservationForm::default();
        self.reservation_confirmed = true;
        self.confirmed_reservation_id = Some(reservation.id);
        Ok(reservation)
    }

    /// Dismiss the confirmation banner
    pub fn close_confirmation(&mut self) {
        self.reservation_confirmed = false;
        self.confirmed_reservation_id = None;
    }
}
