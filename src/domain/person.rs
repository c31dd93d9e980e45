use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::person::PersonError;

/// Anything that has a birthday and a name to greet.
///
/// [`BirthdayNotificationGenerator`](crate::notification::birthday::BirthdayNotificationGenerator)
/// works for every subject implementing this trait, so employees, customers
/// and plain people share one generator.
pub trait Birthday {
    fn birth_date(&self) -> NaiveDate;

    fn display_name(&self) -> &str;
}

/// A person with a name and a birth date.
///
/// Immutable value; equality and hashing use both fields.
/// Deserialization goes through [`Person::parse`], so roster files are
/// validated the same way as hand-built people.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPerson")]
pub struct Person {
    name: String,
    birthday: NaiveDate,
}

impl Person {
    pub fn new(name: impl Into<String>, birthday: NaiveDate) -> Self {
        Self {
            name: name.into(),
            birthday,
        }
    }

    /// Builds a person from a name and a `YYYY-MM-DD` birthday.
    ///
    /// # Errors
    /// - [`PersonError::EmptyName`] if `name` is empty or whitespace only
    /// - [`PersonError::InvalidBirthday`] if the date does not parse or does
    ///   not exist (e.g. `2021-02-29`)
    pub fn parse(name: impl Into<String>, birthday: &str) -> Result<Self, PersonError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PersonError::EmptyName);
        }

        let birthday = NaiveDate::parse_from_str(birthday.trim(), "%Y-%m-%d").map_err(|source| {
            PersonError::InvalidBirthday {
                value: birthday.to_string(),
                source,
            }
        })?;

        Ok(Self { name, birthday })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }
}

#[derive(Deserialize)]
struct RawPerson {
    name: String,
    birthday: String,
}

impl TryFrom<RawPerson> for Person {
    type Error = PersonError;

    fn try_from(raw: RawPerson) -> Result<Self, Self::Error> {
        Person::parse(raw.name, &raw.birthday)
    }
}

impl Birthday for Person {
    fn birth_date(&self) -> NaiveDate {
        self.birthday
    }

    fn display_name(&self) -> &str {
        &self.name
    }
}
