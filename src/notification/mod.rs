pub mod birthday;
pub mod generator;
#[allow(clippy::module_inception)]
pub mod notification;
pub mod service;
