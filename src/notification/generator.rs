use crate::notification::notification::Notification;

/// Port for a single notification rule.
///
/// A generator looks at one subject and produces **at most one**
/// [`Notification`]. Returning `None` is the normal "nothing to say today"
/// outcome, not an error.
///
/// New rules (work anniversaries, certification expiry, ...) implement this
/// trait and are registered in a
/// [`NotificationService`](crate::notification::service::NotificationService)
/// without changing the service.
///
/// ## Thread safety
///
/// Implementations must be `Send + Sync` so a service can be shared via
/// `Arc` and evaluated from several threads.
///
/// ## Closures
///
/// Any `Fn(&S) -> Option<Notification> + Send + Sync` is a generator:
///
/// ```
/// use birthday_notify::notification::generator::NotificationGenerator;
/// use birthday_notify::notification::notification::Notification;
///
/// let greet = |name: &str| Some(Notification::new("Hello", format!("Hi {name}")));
/// assert_eq!(greet.generate("Ada"), Some(Notification::new("Hello", "Hi Ada")));
/// ```
pub trait NotificationGenerator<S: ?Sized>: Send + Sync {
    fn generate(&self, subject: &S) -> Option<Notification>;
}

impl<S, F> NotificationGenerator<S> for F
where
    S: ?Sized,
    F: Fn(&S) -> Option<Notification> + Send + Sync,
{
    fn generate(&self, subject: &S) -> Option<Notification> {
        self(subject)
    }
}
