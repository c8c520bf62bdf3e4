use crate::calendar::{quote, Selection};
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, NewBooking, Room};

/// Guest-entered details from the booking form.
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub guest_name: String,
    pub phone_number: String,
    pub guest_count: u32,
    pub special_requests: Option<String>,
}

/// Turns a completed selection plus form input into an insert payload.
///
/// Gates on the room being bookable, the form being filled out, the guest
/// count fitting the room and the date pair yielding at least one night.
/// New bookings always start out `pending`.
pub fn prepare_booking(
    room: &Room,
    user_id: &str,
    selection: &Selection,
    form: &BookingForm,
) -> Result<NewBooking, AppError> {
    if !room.is_available {
        return Err(AppError::RoomUnavailable(room.room_number.clone()));
    }

    let (check_in, check_out) = match *selection {
        Selection::Range {
            check_in,
            check_out,
        } => (check_in, check_out),
        _ => return Err(AppError::InvalidRange),
    };

    if form.guest_name.trim().is_empty() {
        return Err(AppError::MissingField("guest_name"));
    }
    if form.phone_number.trim().is_empty() {
        return Err(AppError::MissingField("phone_number"));
    }
    if form.guest_count > room.capacity {
        return Err(AppError::CapacityExceeded {
            requested: form.guest_count,
            capacity: room.capacity,
        });
    }

    let stay = quote(check_in, check_out, room.price_per_night)?;

    Ok(NewBooking {
        room_id: room.id.clone(),
        user_id: user_id.to_string(),
        check_in_date: check_in,
        check_out_date: check_out,
        guest_count: form.guest_count,
        guest_name: form.guest_name.trim().to_string(),
        total_price: stay.total_price,
        status: BookingStatus::Pending,
        special_requests: form.special_requests.clone(),
        phone_number: form.phone_number.trim().to_string(),
    })
}

/// Newest bookings first, as the bookings screen lists them. Records without
/// a creation timestamp sort last.
pub fn sort_newest_first(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

/// A booking can be cancelled as long as it is not already cancelled.
pub fn is_cancellable(booking: &Booking) -> bool {
    !booking.status.is_cancelled()
}
