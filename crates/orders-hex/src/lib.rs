//! orders-hex: hexagonal Orders core (service, console report, demo driver)

pub mod config;
pub mod errors;

pub mod application;
pub mod table;

pub use orders_types::{domain, ports};
