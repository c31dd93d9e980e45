pub mod app;
pub mod env;
