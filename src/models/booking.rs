use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A guest's booking of one room, as stored in the `room_bookings` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub user_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_count: u32,
    pub guest_name: String,
    pub total_price: f64,
    pub status: BookingStatus,
    #[serde(default)]
    pub special_requests: Option<String>,
    pub phone_number: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Insert payload for a new booking; the backend assigns id and timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct NewBooking {
    pub room_id: String,
    pub user_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guest_count: u32,
    pub guest_name: String,
    pub total_price: f64,
    pub status: BookingStatus,
    pub special_requests: Option<String>,
    pub phone_number: String,
}

/// The slice of a booking the availability calendar needs: its date span and
/// whether it still holds the room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationSpan {
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    /// Anything else the backend hands us; treated as still holding the room.
    #[serde(other)]
    Other,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other => "other",
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }
}

impl Booking {
    pub fn span(&self) -> ReservationSpan {
        ReservationSpan {
            check_in_date: self.check_in_date,
            check_out_date: self.check_out_date,
            status: self.status,
        }
    }
}
