//! # Roster Loading
//!
//! A roster is the list of people the application checks each run.
//!
//! Roster files are JSON arrays:
//!
//! ```json
//! [
//!   { "name": "Margaret Hamilton", "birthday": "1936-08-17" },
//!   { "name": "James Gosling", "birthday": "1955-05-19" }
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Months, NaiveDate};

use crate::domain::person::Person;

/// Parses a roster from JSON text.
///
/// # Errors
/// Fails if the text is not a JSON array of people, or if any entry has an
/// empty name or an invalid birthday.
pub fn parse_roster(json: &str) -> Result<Vec<Person>> {
    serde_json::from_str(json).context("roster must be a JSON array of {name, birthday} objects")
}

/// Reads and parses a roster file.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Person>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read roster file {}", path.display()))?;

    parse_roster(&json).with_context(|| format!("invalid roster file {}", path.display()))
}

/// Built-in roster used when no roster file is configured.
///
/// "Party Animal" turns 21 on `today`, so a run always has at least one
/// notification to show.
pub fn demo_roster(today: NaiveDate) -> Vec<Person> {
    let mut people = Vec::with_capacity(3);
    if let Some(born) = today.checked_sub_months(Months::new(21 * 12)) {
        people.push(Person::new("Party Animal", born));
    }
    people.extend([
        Person::new("Margaret Hamilton", ymd(1936, 8, 17)),
        Person::new("James Gosling", ymd(1955, 5, 19)),
    ]);
    people
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use crate::birthday::rule::BirthdayRule;

    #[test]
    fn parse_roster_reads_people_in_order() {
        let people = parse_roster(
            r#"[
                {"name": "Al Einstein", "birthday": "1879-03-14"},
                {"name": "Ja Rule", "birthday": "1976-02-29"}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            people,
            vec![
                Person::new("Al Einstein", ymd(1879, 3, 14)),
                Person::new("Ja Rule", ymd(1976, 2, 29)),
            ]
        );
    }

    #[test]
    fn parse_roster_accepts_empty_array() {
        assert!(parse_roster("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_roster_rejects_malformed_json_with_context() {
        let err = parse_roster(r#"{"name": "Al"}"#).unwrap_err();
        assert!(err.to_string().contains("JSON array"));
    }

    #[test]
    fn parse_roster_rejects_impossible_dates() {
        assert!(parse_roster(r#"[{"name": "Tom", "birthday": "2021-02-29"}]"#).is_err());
    }

    #[test]
    fn load_roster_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"name": "James Gosling", "birthday": "1955-05-19"}}]"#).unwrap();

        let people = load_roster(file.path()).unwrap();

        assert_eq!(people, vec![Person::new("James Gosling", ymd(1955, 5, 19))]);
    }

    #[test]
    fn load_roster_reports_missing_file() {
        let err = load_roster("/definitely/not/here/roster.json").unwrap_err();
        assert!(err.to_string().contains("failed to read roster file"));
    }

    #[test]
    fn demo_roster_always_has_a_birthday_today() {
        for today in [ymd(2021, 3, 14), ymd(2026, 10, 19), ymd(2021, 12, 31)] {
            let people = demo_roster(today);

            assert_eq!(people.len(), 3);
            assert_eq!(people[0].name(), "Party Animal");
            assert!(BirthdayRule::is_observed(people[0].birthday(), today));
        }
    }
}
