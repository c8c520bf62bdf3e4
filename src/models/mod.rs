pub mod booking;
pub mod room;

pub use booking::{Booking, BookingStatus, NewBooking, ReservationSpan};
pub use room::Room;
