use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::date::days_inclusive;
use crate::models::ReservationSpan;

/// The set of days a room cannot be booked because an existing non-cancelled
/// reservation covers them.
///
/// Built fresh from each reservation snapshot rather than patched in place;
/// cancelling a booking unblocks its days on the next rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDayIndex {
    days: BTreeSet<NaiveDate>,
}

impl BlockedDayIndex {
    /// Marks every day in the inclusive check-in..check-out span of each
    /// non-cancelled reservation. A span with check-out before check-in
    /// contributes nothing.
    pub fn from_reservations(reservations: &[ReservationSpan]) -> Self {
        let mut days = BTreeSet::new();
        for span in reservations {
            if span.status.is_cancelled() {
                continue;
            }
            days.extend(days_inclusive(span.check_in_date, span.check_out_date));
        }
        Self { days }
    }

    pub fn is_blocked(&self, day: NaiveDate) -> bool {
        self.days.contains(&day)
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Blocked days in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}
