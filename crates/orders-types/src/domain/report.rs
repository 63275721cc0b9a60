use serde::Serialize;

use crate::domain::order::Order;

pub const REPORT_HEADERS: [&str; 5] = ["No", "Product name", "Price", "Quantity", "Total"];

/// One product line of the order listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportRow {
    pub no: usize,
    pub product_name: String,
    pub price: f64,
    pub quantity: i64,
    pub total: f64,
}

/// Flattens orders into report rows. Row numbers start at 1 and keep
/// counting across orders.
pub fn flatten(orders: &[Order]) -> Vec<ReportRow> {
    orders
        .iter()
        .flat_map(|order| order.products.iter())
        .enumerate()
        .map(|(idx, line)| ReportRow {
            no: idx + 1,
            product_name: line.product_name.clone(),
            price: line.price,
            quantity: line.quantity,
            total: line.line_total(),
        })
        .collect()
}
