use std::sync::Arc;

use chrono::TimeDelta;
use compact_calendar::CompactCalendar;

use crate::localization::{Localize, NoLocation, TzLocation};

// --
// -- Holidays
// --

/// Pairs a set of public holidays with a set of school holidays.
#[derive(Clone, Default, Debug, Hash, PartialEq, Eq)]
pub struct ContextHolidays {
    pub(crate) public: Arc<CompactCalendar>,
    pub(crate) school: Arc<CompactCalendar>,
}

impl ContextHolidays {
    /// Create a new holidays context from sets of public and school holidays.
    pub fn new(public: Arc<CompactCalendar>, school: Arc<CompactCalendar>) -> Self {
        Self { public, school }
    }

    /// Get the set of public holidays attached to this context.
    pub fn get_public(&self) -> &CompactCalendar {
        &self.public
    }

    /// Get the set of school holidays attached to this context.
    pub fn get_school(&self) -> &CompactCalendar {
        &self.school
    }
}

// --
// -- Context
// --

/// All the context attached to a parsed OpeningHours expression and that can
/// alter its evaluation semantics.
#[derive(Clone, Debug, PartialEq)]
pub struct Context<L = NoLocation> {
    pub holidays: ContextHolidays,
    pub locale: L,
    /// Upper bound on the size of a gap the time-domain iterator is allowed
    /// to skip over without reporting an intermediate point, even when the
    /// state does not change. `None` means no such bound is enforced.
    pub approx_bound_interval_size: Option<TimeDelta>,
}

impl<L> Context<L> {
    /// Attach a new holidays component to this context.
    pub fn with_holidays(self, holidays: ContextHolidays) -> Self {
        Self { holidays, ..self }
    }

    /// Attach a new locale component to this context.
    pub fn with_locale<L2: Localize>(self, locale: L2) -> Context<L2> {
        Context {
            holidays: self.holidays,
            locale,
            approx_bound_interval_size: self.approx_bound_interval_size,
        }
    }

    /// Bound the size of the interval the time-domain iterator can skip at
    /// once.
    pub fn with_approx_bound_interval_size(self, bound: TimeDelta) -> Self {
        Self { approx_bound_interval_size: Some(bound), ..self }
    }
}

#[cfg(feature = "auto-timezone")]
impl Context<TzLocation<chrono_tz::Tz>> {
    /// Create a context with given coordinates and try to infer a timezone and
    /// a local holiday calendar.
    #[cfg(feature = "auto-country")]
    pub fn from_coords(coords: crate::localization::Coordinates) -> Self {
        use crate::country::Country;

        let holidays = Country::try_from_coords(coords.lat(), coords.lon())
            .map(Country::holidays)
            .unwrap_or_default();

        let locale = TzLocation::from_coords(coords);

        Self {
            holidays,
            locale,
            approx_bound_interval_size: None,
        }
    }
}

impl Default for Context<NoLocation> {
    fn default() -> Self {
        Self {
            holidays: Default::default(),
            locale: NoLocation,
            approx_bound_interval_size: None,
        }
    }
}
