use thiserror::Error;

/// Errors raised while building a [`Person`](crate::domain::person::Person)
/// from raw input.
///
/// # Example
/// ```
/// use birthday_notify::domain::person::Person;
/// use birthday_notify::error::person::PersonError;
///
/// let err = Person::parse("  ", "1936-08-17").unwrap_err();
/// assert!(matches!(err, PersonError::EmptyName));
/// assert_eq!(err.to_string(), "person name must not be empty");
/// ```
#[derive(Debug, Error)]
pub enum PersonError {
    #[error("person name must not be empty")]
    EmptyName,

    /// The birthday is not a `YYYY-MM-DD` date that exists on the calendar.
    #[error("invalid birthday {value:?}: {source}")]
    InvalidBirthday {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn invalid_birthday_display_includes_value() {
        let source = NaiveDate::parse_from_str("2021-02-29", "%Y-%m-%d").unwrap_err();
        let err = PersonError::InvalidBirthday {
            value: "2021-02-29".into(),
            source,
        };

        assert!(err.to_string().starts_with("invalid birthday \"2021-02-29\""));
        assert!(std::error::Error::source(&err).is_some());
    }
}
