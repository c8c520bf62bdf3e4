use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::calendar::date::days_inclusive;
use crate::calendar::{BlockedDayIndex, Selection};

/// Display classification for one calendar cell. Days absent from the
/// marking map carry no decoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayMarking {
    Blocked,
    SelectionStart,
    SelectionMiddle,
    SelectionEnd,
    /// A lone check-in day: both the start and the end of the selection.
    SelectionSingle,
}

pub type RenderMarking = BTreeMap<NaiveDate, DayMarking>;

/// Merges the blocked index and the current selection into one per-day
/// marking map. Pure: same inputs always yield the same map.
///
/// A blocked day stays `Blocked` even inside the selection window, which can
/// happen because taps only validate the endpoints.
pub fn render(blocked: &BlockedDayIndex, selection: &Selection) -> RenderMarking {
    let mut marking = RenderMarking::new();

    match *selection {
        Selection::Empty => {}
        Selection::CheckIn(day) => {
            marking.insert(day, DayMarking::SelectionSingle);
        }
        Selection::Range {
            check_in,
            check_out,
        } => {
            for day in days_inclusive(check_in, check_out) {
                let mark = if day == check_in {
                    DayMarking::SelectionStart
                } else if day == check_out {
                    DayMarking::SelectionEnd
                } else {
                    DayMarking::SelectionMiddle
                };
                marking.insert(day, mark);
            }
        }
    }

    for day in blocked.iter() {
        marking.insert(day, DayMarking::Blocked);
    }

    marking
}

/// Whether a tap on `day` can ever be accepted.
pub fn is_selectable(blocked: &BlockedDayIndex, day: NaiveDate) -> bool {
    !blocked.is_blocked(day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::date::parse_day;
    use crate::models::{BookingStatus, ReservationSpan};

    fn d(s: &str) -> NaiveDate {
        parse_day(s).unwrap()
    }

    fn blocked(check_in: &str, check_out: &str) -> BlockedDayIndex {
        BlockedDayIndex::from_reservations(&[ReservationSpan {
            check_in_date: d(check_in),
            check_out_date: d(check_out),
            status: BookingStatus::Confirmed,
        }])
    }

    #[test]
    fn test_empty_inputs_render_nothing() {
        let marking = render(&BlockedDayIndex::default(), &Selection::Empty);
        assert!(marking.is_empty());
    }

    #[test]
    fn test_single_day_selection_is_start_and_end() {
        let marking = render(
            &BlockedDayIndex::default(),
            &Selection::CheckIn(d("2024-06-15")),
        );
        assert_eq!(
            marking.get(&d("2024-06-15")),
            Some(&DayMarking::SelectionSingle)
        );
        assert_eq!(marking.len(), 1);
    }

    #[test]
    fn test_range_marks_start_middle_end() {
        let selection = Selection::Range {
            check_in: d("2024-06-15"),
            check_out: d("2024-06-18"),
        };
        let marking = render(&BlockedDayIndex::default(), &selection);
        assert_eq!(
            marking.get(&d("2024-06-15")),
            Some(&DayMarking::SelectionStart)
        );
        assert_eq!(
            marking.get(&d("2024-06-16")),
            Some(&DayMarking::SelectionMiddle)
        );
        assert_eq!(
            marking.get(&d("2024-06-17")),
            Some(&DayMarking::SelectionMiddle)
        );
        assert_eq!(
            marking.get(&d("2024-06-18")),
            Some(&DayMarking::SelectionEnd)
        );
        assert_eq!(marking.get(&d("2024-06-19")), None);
    }

    #[test]
    fn test_two_day_range_has_no_middle() {
        let selection = Selection::Range {
            check_in: d("2024-06-15"),
            check_out: d("2024-06-16"),
        };
        let marking = render(&BlockedDayIndex::default(), &selection);
        assert_eq!(marking.len(), 2);
        assert_eq!(
            marking.get(&d("2024-06-15")),
            Some(&DayMarking::SelectionStart)
        );
        assert_eq!(
            marking.get(&d("2024-06-16")),
            Some(&DayMarking::SelectionEnd)
        );
    }

    #[test]
    fn test_blocked_wins_over_selection() {
        let index = blocked("2024-06-16", "2024-06-16");
        let selection = Selection::Range {
            check_in: d("2024-06-15"),
            check_out: d("2024-06-18"),
        };
        let marking = render(&index, &selection);
        assert_eq!(marking.get(&d("2024-06-16")), Some(&DayMarking::Blocked));
        assert_eq!(
            marking.get(&d("2024-06-15")),
            Some(&DayMarking::SelectionStart)
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let index = blocked("2024-06-10", "2024-06-12");
        let selection = Selection::Range {
            check_in: d("2024-06-14"),
            check_out: d("2024-06-16"),
        };
        assert_eq!(render(&index, &selection), render(&index, &selection));
    }

    #[test]
    fn test_is_selectable() {
        let index = blocked("2024-06-10", "2024-06-12");
        assert!(!is_selectable(&index, d("2024-06-11")));
        assert!(is_selectable(&index, d("2024-06-13")));
    }
}
