//! orders-types: domain model and storage port shared by every adapter.

pub mod domain;
pub mod ports;
