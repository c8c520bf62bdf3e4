pub mod blocked;
pub mod date;
pub mod pricing;
pub mod render;
pub mod selection;

pub use blocked::BlockedDayIndex;
pub use date::{add_days, days_inclusive, format_day, parse_day, DayRange};
pub use pricing::{quote, StayQuote};
pub use render::{render, DayMarking, RenderMarking};
pub use selection::{Selection, TapOutcome, TapRejection};
