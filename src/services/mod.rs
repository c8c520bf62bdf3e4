pub mod bookings;
pub mod rooms;
