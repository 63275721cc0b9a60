pub mod demo;
pub mod order_service;
