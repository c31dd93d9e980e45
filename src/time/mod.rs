pub mod clock;
pub mod fixed_clock;
pub mod local;
pub mod month_day;
pub mod system_clock;
