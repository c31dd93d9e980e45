use tracing::debug;

use crate::birthday::rule::BirthdayRule;
use crate::domain::person::Birthday;
use crate::notification::generator::NotificationGenerator;
use crate::notification::notification::Notification;
use crate::time::clock::Clock;

/// Title used for every birthday notification.
pub const BIRTHDAY_TITLE: &str = "Happy Birthday!";

/// [`NotificationGenerator`] that greets subjects on their birthday.
///
/// ## Responsibilities
///
/// - Reads "today" from the injected [`Clock`], once per call
/// - Applies [`BirthdayRule`], including the leap-day deferral
/// - Builds the greeting from the subject's name
///
/// ## Example
/// ```
/// use birthday_notify::chrono::NaiveDate;
/// use birthday_notify::domain::person::Person;
/// use birthday_notify::notification::birthday::BirthdayNotificationGenerator;
/// use birthday_notify::notification::generator::NotificationGenerator;
/// use birthday_notify::time::fixed_clock::FixedClock;
///
/// let clock = FixedClock::new(NaiveDate::from_ymd_opt(2021, 3, 14).unwrap());
/// let generator = BirthdayNotificationGenerator::new(clock);
/// let al = Person::new("Al Einstein", NaiveDate::from_ymd_opt(1879, 3, 14).unwrap());
///
/// let notification = generator.generate(&al).unwrap();
/// assert_eq!(notification.message(), "Have a fabulous birthday Al Einstein!");
/// ```
#[derive(Debug, Clone)]
pub struct BirthdayNotificationGenerator<C> {
    clock: C,
}

impl<C: Clock> BirthdayNotificationGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    fn create_notification(name: &str) -> Notification {
        Notification::of(BIRTHDAY_TITLE, format!("Have a fabulous birthday {name}!"))
    }
}

impl<C, S> NotificationGenerator<S> for BirthdayNotificationGenerator<C>
where
    C: Clock,
    S: Birthday + ?Sized,
{
    fn generate(&self, subject: &S) -> Option<Notification> {
        let today = self.clock.today();
        if !BirthdayRule::is_observed(subject.birth_date(), today) {
            return None;
        }

        debug!(
            name = subject.display_name(),
            birth_date = %subject.birth_date(),
            %today,
            "birthday observed"
        );
        Some(Self::create_notification(subject.display_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use chrono::NaiveDate;

    use crate::domain::person::Person;
    use crate::time::fixed_clock::{FixedClock, MutableClock};

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn greeting(name: &str) -> Notification {
        Notification::new("Happy Birthday!", format!("Have a fabulous birthday {name}!"))
    }

    fn generate_on(today: NaiveDate, person: &Person) -> Option<Notification> {
        BirthdayNotificationGenerator::new(FixedClock::new(today)).generate(person)
    }

    #[test]
    fn should_generate_notification_on_birthday() {
        let person = Person::new("Al Einstein", ymd(1879, 3, 14));

        assert_eq!(generate_on(ymd(2021, 3, 14), &person), Some(greeting("Al Einstein")));
    }

    #[test]
    fn should_not_generate_notification_when_not_birthday() {
        let person = Person::new("Tom Hermann", ymd(1980, 3, 14));

        assert_eq!(generate_on(ymd(2021, 3, 15), &person), None);
    }

    #[test]
    fn leap_birthday_notified_on_march_first_in_common_year() {
        let person = Person::new("Saul Williams", ymd(1972, 2, 29));

        assert_eq!(generate_on(ymd(2021, 3, 1), &person), Some(greeting("Saul Williams")));
    }

    #[test]
    fn leap_birthday_notified_on_exact_day_in_leap_year() {
        let person = Person::new("Ja Rule", ymd(1976, 2, 29));

        assert_eq!(generate_on(ymd(2024, 2, 29), &person), Some(greeting("Ja Rule")));
    }

    #[test]
    fn leap_birthday_not_notified_twice_in_leap_year() {
        let person = Person::new("Saul Williams", ymd(1972, 2, 29));

        assert_eq!(generate_on(ymd(2020, 3, 1), &person), None);
    }

    #[test]
    fn follows_a_mutable_clock() {
        let clock = MutableClock::new(ymd(2021, 3, 13));
        let generator = BirthdayNotificationGenerator::new(&clock);
        let person = Person::new("Al Einstein", ymd(1879, 3, 14));

        assert_eq!(generator.generate(&person), None);
        clock.advance_days(1);
        assert_eq!(generator.generate(&person), Some(greeting("Al Einstein")));
        clock.advance_days(1);
        assert_eq!(generator.generate(&person), None);
    }

    #[test]
    fn repeated_calls_are_idempotent() {
        let generator = BirthdayNotificationGenerator::new(FixedClock::new(ymd(2021, 3, 14)));
        let person = Person::new("Al Einstein", ymd(1879, 3, 14));

        assert_eq!(generator.generate(&person), generator.generate(&person));
    }

    struct CountingClock {
        date: NaiveDate,
        reads: AtomicUsize,
    }

    impl Clock for CountingClock {
        fn today(&self) -> NaiveDate {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.date
        }
    }

    #[test]
    fn reads_the_clock_once_per_call() {
        let clock = CountingClock {
            date: ymd(2021, 3, 1),
            reads: AtomicUsize::new(0),
        };
        let generator = BirthdayNotificationGenerator::new(&clock);

        generator.generate(&Person::new("Saul Williams", ymd(1972, 2, 29)));
        assert_eq!(clock.reads.load(Ordering::SeqCst), 1);

        generator.generate(&Person::new("Tom Hermann", ymd(1980, 3, 14)));
        assert_eq!(clock.reads.load(Ordering::SeqCst), 2);
    }

    struct Employee {
        full_name: String,
        born: NaiveDate,
    }

    impl Birthday for Employee {
        fn birth_date(&self) -> NaiveDate {
            self.born
        }

        fn display_name(&self) -> &str {
            &self.full_name
        }
    }

    #[test]
    fn works_for_any_subject_with_a_birthday() {
        let employee = Employee {
            full_name: "Simone Biles".into(),
            born: ymd(1997, 3, 14),
        };
        let generator = BirthdayNotificationGenerator::new(FixedClock::new(ymd(2024, 3, 14)));

        assert_eq!(generator.generate(&employee), Some(greeting("Simone Biles")));
    }
}
