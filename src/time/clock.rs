use chrono::NaiveDate;

/// A port that provides the **current date** for the application.
///
/// # Purpose
/// This trait abstracts access to "today" so that:
///
/// - Birthday rules and notification generators never read system time
/// - Implementations can be swapped (system clock, fixed clock, mutable clock)
/// - Tests can be deterministic and time-independent
///
/// # Design Notes
/// - The timezone concept is delegated to the implementation.
/// - Generators call [`Clock::today`] once per evaluation, so a single
///   `generate` call always sees one consistent date.
///
/// # Implementations
/// - [`SystemClock`](crate::time::system_clock::SystemClock): OS clock in a configured timezone
/// - [`FixedClock`](crate::time::fixed_clock::FixedClock): constant date
/// - [`MutableClock`](crate::time::fixed_clock::MutableClock): date that tests can move
pub trait Clock: Send + Sync {
    /// Returns today's date as a [`NaiveDate`].
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct StaticClock(NaiveDate);

    impl Clock for StaticClock {
        fn today(&self) -> NaiveDate {
            self.0
        }
    }

    #[test]
    fn clock_trait_object_works() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let clock: Box<dyn Clock> = Box::new(StaticClock(date));

        assert_eq!(clock.today(), date);
    }

    #[test]
    fn shared_and_borrowed_clocks_delegate() {
        let date = NaiveDate::from_ymd_opt(2021, 3, 14).unwrap();
        let clock = Arc::new(StaticClock(date));

        assert_eq!(Clock::today(&clock), date);
        assert_eq!(Clock::today(&&*clock), date);
    }
}
