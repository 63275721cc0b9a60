//! Console walk-through of the order lifecycle.
//!
//! Each step prints a status line and, on failure, returns a neutral value
//! (`None`, `0`, an empty report) so the sequence always runs to the end.

use orders_types::domain::order::Order;
use orders_types::domain::report::ReportRow;
use orders_types::ports::order_repository::OrderRepository;

use crate::application::order_service::OrderService;
use crate::errors::AppError;
use crate::table::report_table;

pub const EDIT_ORDER_ID: i64 = 2;
pub const EDIT_ADDRESS: &str = "Da Nang";
pub const REMOVE_ORDER_ID: i64 = 3;
pub const TOTAL_ORDER_ID: i64 = 1;
pub const COUNT_PRODUCT_ID: &str = "somi";

/// What each step of [`Demo::run`] returned.
#[derive(Debug, Clone, Default)]
pub struct DemoSummary {
    pub inserted: Option<Vec<String>>,
    pub initial_report: Vec<ReportRow>,
    pub modified: u64,
    pub deleted: u64,
    pub final_report: Vec<ReportRow>,
    pub order_total: f64,
    pub product_quantity: i64,
}

pub struct Demo<R: OrderRepository> {
    service: OrderService<R>,
    seed: Vec<Order>,
}

impl<R: OrderRepository> Demo<R> {
    pub fn new(service: OrderService<R>, seed: Vec<Order>) -> Self {
        Self { service, seed }
    }

    pub fn service(&self) -> &OrderService<R> {
        &self.service
    }

    pub async fn run(&self) -> DemoSummary {
        if let Err(e) = self.service.reset().await {
            tracing::warn!(error = %e, "could not clear collection");
        }

        println!("\n--- INSERTING ORDERS ---");
        let inserted = self.insert_orders(self.seed.clone()).await;

        println!("\n--- DISPLAYING ALL ORDERS ---");
        let initial_report = self.display_all_orders().await;

        println!("\n--- UPDATING DELIVERY ADDRESS ---");
        let modified = self
            .edit_delivery_address(EDIT_ORDER_ID, EDIT_ADDRESS)
            .await;

        println!("\n--- REMOVING ORDER ---");
        let deleted = self.remove_order(REMOVE_ORDER_ID).await;

        println!("\n--- DISPLAYING UPDATED ORDERS ---");
        let final_report = self.display_all_orders().await;

        println!("\n--- CALCULATING TOTAL AMOUNT ---");
        let order_total = self.calculate_total_amount(TOTAL_ORDER_ID).await;

        println!("\n--- COUNTING PRODUCTS SOMI ---");
        let product_quantity = self.count_product(COUNT_PRODUCT_ID).await;

        DemoSummary {
            inserted,
            initial_report,
            modified,
            deleted,
            final_report,
            order_total,
            product_quantity,
        }
    }

    pub async fn insert_orders(&self, orders: Vec<Order>) -> Option<Vec<String>> {
        match self.service.seed(orders).await {
            Ok(ids) => {
                println!(" {} orders have been inserted!", ids.len());
                Some(ids)
            }
            Err(e) => {
                tracing::error!(error = %e, "insert failed");
                println!("Encountered errors trying to insert orders: {}", e);
                None
            }
        }
    }

    pub async fn display_all_orders(&self) -> Vec<ReportRow> {
        match self.service.report().await {
            Ok(rows) => {
                print!("{}", report_table(&rows));
                rows
            }
            Err(e) => {
                tracing::error!(error = %e, "report failed");
                println!("Error reading orders: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn edit_delivery_address(&self, orderid: i64, address: &str) -> u64 {
        match self.service.edit_delivery_address(orderid, address).await {
            Ok(modified) => {
                println!("Updated delivery address for order {} !", orderid);
                modified
            }
            Err(AppError::NotFound(_)) => {
                println!("No order found with ID: {}", orderid);
                0
            }
            Err(e) => {
                tracing::error!(error = %e, orderid, "update failed");
                println!("Error updating address: {}", e);
                0
            }
        }
    }

    pub async fn remove_order(&self, orderid: i64) -> u64 {
        match self.service.remove_order(orderid).await {
            Ok(()) => {
                println!("Deleted order with ID: {}!", orderid);
                1
            }
            Err(AppError::NotFound(_)) => {
                println!("No order found with ID: {}", orderid);
                0
            }
            Err(e) => {
                tracing::error!(error = %e, orderid, "delete failed");
                println!("Error deleting order: {}", e);
                0
            }
        }
    }

    pub async fn calculate_total_amount(&self, orderid: i64) -> f64 {
        match self.service.order_total(orderid).await {
            Ok(total) => {
                println!("Calculated total amount for order {}: ${}", orderid, total);
                total
            }
            Err(AppError::NotFound(_)) => {
                println!("No order found with ID: {}", orderid);
                0.0
            }
            Err(e) => {
                tracing::error!(error = %e, orderid, "total failed");
                println!("Error calculating total amount: {}", e);
                0.0
            }
        }
    }

    pub async fn count_product(&self, product_id: &str) -> i64 {
        match self.service.product_quantity(product_id).await {
            Ok(count) => {
                println!("Total quantity of product '{}': {}", product_id, count);
                count
            }
            Err(AppError::NotFound(_)) => {
                println!("No products found with product_id '{}'", product_id);
                0
            }
            Err(e) => {
                tracing::error!(error = %e, product_id, "aggregation failed");
                println!("Error counting products: {}", e);
                0
            }
        }
    }
}
