use chrono::NaiveDate;

use crate::calendar::BlockedDayIndex;

/// The guest's in-progress check-in/check-out pick on the room calendar.
///
/// Invariant: a `Range` always has `check_in < check_out`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    Empty,
    CheckIn(NaiveDate),
    Range {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    Accepted,
    Rejected(TapRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapRejection {
    DayBlocked,
    CheckOutNotAfterCheckIn,
}

impl std::fmt::Display for TapRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TapRejection::DayBlocked => {
                write!(f, "That date is already booked. Please pick another day.")
            }
            TapRejection::CheckOutNotAfterCheckIn => {
                write!(f, "Check-out date must be after check-in date.")
            }
        }
    }
}

impl Selection {
    pub fn check_in(&self) -> Option<NaiveDate> {
        match self {
            Selection::Empty => None,
            Selection::CheckIn(day) => Some(*day),
            Selection::Range { check_in, .. } => Some(*check_in),
        }
    }

    pub fn check_out(&self) -> Option<NaiveDate> {
        match self {
            Selection::Range { check_out, .. } => Some(*check_out),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Selection::Range { .. })
    }

    pub fn clear(self) -> Selection {
        Selection::Empty
    }

    /// Applies one calendar tap and returns the new selection plus what to
    /// tell the guest.
    ///
    /// Only the tapped day itself is checked against the blocked index. Days
    /// strictly between check-in and check-out are never validated here; a
    /// completed range may straddle booked days, which the render pass still
    /// paints as blocked. Server-side validation at confirmation time owns
    /// that case.
    pub fn tap(self, day: NaiveDate, blocked: &BlockedDayIndex) -> (Selection, TapOutcome) {
        if blocked.is_blocked(day) {
            return (self, TapOutcome::Rejected(TapRejection::DayBlocked));
        }

        match self {
            Selection::Empty => (Selection::CheckIn(day), TapOutcome::Accepted),
            Selection::CheckIn(check_in) => {
                // Tapping the chosen check-in again deselects it.
                if day == check_in {
                    (Selection::Empty, TapOutcome::Accepted)
                } else if day <= check_in {
                    (
                        self,
                        TapOutcome::Rejected(TapRejection::CheckOutNotAfterCheckIn),
                    )
                } else {
                    (
                        Selection::Range {
                            check_in,
                            check_out: day,
                        },
                        TapOutcome::Accepted,
                    )
                }
            }
            // A third tap after a full pair starts the pick over.
            Selection::Range { .. } => (Selection::CheckIn(day), TapOutcome::Accepted),
        }
    }
}
