pub mod person;
pub mod roster;
