use async_trait::async_trait;

use crate::domain::order::{Order, ProductLine};

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("connection error: {0}")]
    Connection(String),
    #[error("db error: {0}")]
    DbError(String),
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result of an update by `orderid`. `modified` stays 0 when the document
/// matched but already held the requested value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounts {
    pub matched: u64,
    pub modified: u64,
}

/// Access to the order collection. Every lookup is by `orderid`; when several
/// documents share one, the first in natural order is used.
#[async_trait]
pub trait OrderRepository: Send + Sync + 'static {
    /// Removes every document from the collection.
    async fn clear(&self) -> Result<(), RepoError>;
    /// Returns the generated storage identifiers in input order.
    async fn insert_many(&self, orders: Vec<Order>) -> Result<Vec<String>, RepoError>;
    async fn list(&self) -> Result<Vec<Order>, RepoError>;
    async fn get(&self, orderid: i64) -> Result<Option<Order>, RepoError>;
    async fn set_delivery_address(
        &self,
        orderid: i64,
        address: &str,
    ) -> Result<UpdateCounts, RepoError>;
    async fn delete(&self, orderid: i64) -> Result<u64, RepoError>;
    /// Fetches only the `products` field of the matching order.
    async fn products(&self, orderid: i64) -> Result<Option<Vec<ProductLine>>, RepoError>;
    /// Sums `quantity` over every product line with `product_id` across all
    /// orders. `None` when no line matches.
    async fn product_quantity(&self, product_id: &str) -> Result<Option<i64>, RepoError>;
}
