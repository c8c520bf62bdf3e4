pub mod supabase;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{Booking, NewBooking, ReservationSpan, Room};

/// An authenticated user, as returned by password sign-in.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user_id: String,
    pub access_token: String,
}

/// The remote booking service. The engine only reads snapshots and submits
/// status changes; retry and reload policy belong to the caller.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn fetch_rooms(&self) -> anyhow::Result<Vec<Room>>;

    async fn fetch_room(&self, room_id: &str) -> anyhow::Result<Room>;

    /// Non-cancelled reservations of one room whose span intersects the
    /// inclusive `[from, to]` window.
    async fn fetch_reservations(
        &self,
        room_id: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> anyhow::Result<Vec<ReservationSpan>>;

    async fn fetch_my_bookings(&self, session: &AuthSession) -> anyhow::Result<Vec<Booking>>;

    async fn create_booking(
        &self,
        session: &AuthSession,
        booking: &NewBooking,
    ) -> anyhow::Result<()>;

    /// Cancels by flipping the booking's status to `cancelled`.
    async fn cancel_booking(&self, session: &AuthSession, booking_id: &str)
        -> anyhow::Result<()>;
}
