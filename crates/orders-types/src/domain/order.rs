use serde::{Deserialize, Serialize};

/// A line item embedded in an order. The same `product_id` can appear in
/// several orders with a different size and price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductLine {
    pub product_id: String,
    pub product_name: String,
    pub size: String,
    pub price: f64,
    pub quantity: i64,
}

impl ProductLine {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// One document per customer purchase.
///
/// `orderid` is the business identifier, not the storage key. `total_amount`
/// is stored as supplied and is not kept in sync with `products`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub orderid: i64,
    pub products: Vec<ProductLine>,
    pub total_amount: f64,
    pub delivery_address: String,
}

impl Order {
    pub fn products_total(&self) -> f64 {
        products_total(&self.products)
    }

    pub fn set_delivery_address(&mut self, address: &str) -> bool {
        if self.delivery_address == address {
            return false;
        }
        self.delivery_address = address.to_string();
        true
    }
}

pub fn products_total(products: &[ProductLine]) -> f64 {
    products.iter().map(ProductLine::line_total).sum()
}
