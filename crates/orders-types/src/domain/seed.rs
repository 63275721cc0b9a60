use std::path::Path;

use anyhow::Context;

use crate::domain::order::Order;

const SAMPLE_ORDERS: &str = include_str!("../../fixtures/orders.json");

/// The three demonstration orders bundled with the crate.
pub fn sample_orders() -> Vec<Order> {
    parse_orders(SAMPLE_ORDERS).unwrap_or_default()
}

pub fn parse_orders(json: &str) -> anyhow::Result<Vec<Order>> {
    serde_json::from_str(json).context("invalid order fixture")
}

/// Reads a JSON array of orders from disk.
pub fn load_orders(path: impl AsRef<Path>) -> anyhow::Result<Vec<Order>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading seed file {}", path.display()))?;
    parse_orders(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn bundled_fixture_has_three_orders() {
        let orders = sample_orders();
        let ids: Vec<i64> = orders.iter().map(|o| o.orderid).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        let lines: usize = orders.iter().map(|o| o.products.len()).sum();
        assert_eq!(lines, 6);
        assert_eq!(orders[0].total_amount, 31.0);
        assert_eq!(orders[1].delivery_address, "Ho Chi Minh");
    }

    #[test]
    fn load_orders_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"orderid": 9, "products": [], "total_amount": 0, "delivery_address": "Hue"}}]"#
        )
        .unwrap();
        let orders = load_orders(file.path()).unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].orderid, 9);
    }

    #[test]
    fn load_orders_reports_bad_input() {
        assert!(load_orders("/nonexistent/orders.json").is_err());
        assert!(parse_orders("{\"orderid\": 1}").is_err());
    }
}
