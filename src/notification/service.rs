//! # Notification Service
//!
//! Runs every registered [`NotificationGenerator`] against a subject and
//! collects what they produce.
//!
//! - Generators run in registration order.
//! - A generator returning `None` contributes nothing and does not shift the
//!   others.
//! - Panics inside a generator are not caught; the remaining generators for
//!   that subject do not run.
//!
//! # Example
//! ```
//! use birthday_notify::notification::notification::Notification;
//! use birthday_notify::notification::service::NotificationService;
//!
//! let service = NotificationService::<str>::builder()
//!     .with(|_: &str| Some(Notification::new("first", "1")))
//!     .with(|_: &str| -> Option<Notification> { None })
//!     .with(|_: &str| Some(Notification::new("third", "3")))
//!     .build();
//!
//! let titles: Vec<_> = service
//!     .generate("anyone")
//!     .iter()
//!     .map(|n| n.title().to_string())
//!     .collect();
//! assert_eq!(titles, ["first", "third"]);
//! ```

use std::fmt;

use crate::domain::person::Birthday;
use crate::notification::birthday::BirthdayNotificationGenerator;
use crate::notification::generator::NotificationGenerator;
use crate::notification::notification::Notification;
use crate::time::clock::Clock;

/// Ordered, immutable set of generators for subjects of type `S`.
pub struct NotificationService<S: ?Sized> {
    generators: Vec<Box<dyn NotificationGenerator<S>>>,
}

impl<S: ?Sized> NotificationService<S> {
    /// Creates a service from generators in the order they should run.
    pub fn new(generators: Vec<Box<dyn NotificationGenerator<S>>>) -> Self {
        Self { generators }
    }

    pub fn builder() -> NotificationServiceBuilder<S> {
        NotificationServiceBuilder {
            generators: Vec::new(),
        }
    }

    /// Number of registered generators.
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Collects the notifications every generator has for `subject`.
    ///
    /// The result holds between zero and [`len`](Self::len) items, in
    /// registration order.
    pub fn generate(&self, subject: &S) -> Vec<Notification> {
        self.iter(subject).collect()
    }

    /// Lazy form of [`generate`](Self::generate).
    ///
    /// Each generator runs only when the iterator reaches it.
    pub fn iter<'a>(&'a self, subject: &'a S) -> impl Iterator<Item = Notification> + 'a {
        self.generators
            .iter()
            .filter_map(move |generator| generator.generate(subject))
    }

    /// Runs the service over many subjects.
    ///
    /// Output is grouped by subject, in subject order, and by generator order
    /// within a subject.
    pub fn generate_all<'a, I>(&self, subjects: I) -> Vec<Notification>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        subjects
            .into_iter()
            .flat_map(|subject| self.iter(subject))
            .collect()
    }
}

impl<S: Birthday + ?Sized> NotificationService<S> {
    /// A service with a single [`BirthdayNotificationGenerator`].
    pub fn birthday<C: Clock + 'static>(clock: C) -> Self {
        Self::builder()
            .with(BirthdayNotificationGenerator::new(clock))
            .build()
    }
}

impl<S: ?Sized> fmt::Debug for NotificationService<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationService")
            .field("generators", &self.generators.len())
            .finish()
    }
}

/// Builder that registers generators in call order.
pub struct NotificationServiceBuilder<S: ?Sized> {
    generators: Vec<Box<dyn NotificationGenerator<S>>>,
}

impl<S: ?Sized> NotificationServiceBuilder<S> {
    pub fn with<G>(mut self, generator: G) -> Self
    where
        G: NotificationGenerator<S> + 'static,
    {
        self.generators.push(Box::new(generator));
        self
    }

    pub fn build(self) -> NotificationService<S> {
        NotificationService::new(self.generators)
    }
}
