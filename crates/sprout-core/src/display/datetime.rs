//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

/// Formats an optional project start date as `YYYY-MM-DD`.
///
/// Records written by older clients may carry no start date; those render as
/// `not set` so listings stay aligned.
pub struct StartDate<'a>(pub Option<&'a Date>);

impl fmt::Display for StartDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.strftime("%Y-%m-%d")),
            None => f.write_str("not set"),
        }
    }
}
