pub mod order;
pub mod report;
pub mod seed;
