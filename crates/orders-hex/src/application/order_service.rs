use crate::errors::AppError;
use orders_types::domain::order::{products_total, Order};
use orders_types::domain::report::{flatten, ReportRow};
use orders_types::ports::order_repository::OrderRepository;

pub struct OrderService<R: OrderRepository> {
    repo: R,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Drops everything currently stored in the collection.
    pub async fn reset(&self) -> Result<(), AppError> {
        self.repo.clear().await?;
        tracing::debug!("collection cleared");
        Ok(())
    }

    /// Bulk inserts `orders` as given; no shape validation happens here.
    pub async fn seed(&self, orders: Vec<Order>) -> Result<Vec<String>, AppError> {
        let ids = self.repo.insert_many(orders).await?;
        tracing::info!(count = ids.len(), "orders inserted");
        Ok(ids)
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, AppError> {
        Ok(self.repo.list().await?)
    }

    pub async fn report(&self) -> Result<Vec<ReportRow>, AppError> {
        let orders = self.repo.list().await?;
        let rows = flatten(&orders);
        tracing::debug!(orders = orders.len(), rows = rows.len(), "report built");
        Ok(rows)
    }

    pub async fn get_order(&self, orderid: i64) -> Result<Order, AppError> {
        match self.repo.get(orderid).await? {
            Some(o) => Ok(o),
            None => Err(AppError::NotFound(format!("order {}", orderid))),
        }
    }

    /// Returns the modified count, which is 0 when the address was already set.
    pub async fn edit_delivery_address(
        &self,
        orderid: i64,
        address: &str,
    ) -> Result<u64, AppError> {
        let counts = self.repo.set_delivery_address(orderid, address).await?;
        if counts.matched == 0 {
            return Err(AppError::NotFound(format!("order {}", orderid)));
        }
        tracing::info!(orderid, address, modified = counts.modified, "delivery address updated");
        Ok(counts.modified)
    }

    pub async fn remove_order(&self, orderid: i64) -> Result<(), AppError> {
        let deleted = self.repo.delete(orderid).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("order {}", orderid)));
        }
        tracing::info!(orderid, "order removed");
        Ok(())
    }

    /// Recomputes the total from the stored product lines, ignoring
    /// `total_amount`.
    pub async fn order_total(&self, orderid: i64) -> Result<f64, AppError> {
        match self.repo.products(orderid).await? {
            Some(products) => Ok(products_total(&products)),
            None => Err(AppError::NotFound(format!("order {}", orderid))),
        }
    }

    pub async fn product_quantity(&self, product_id: &str) -> Result<i64, AppError> {
        match self.repo.product_quantity(product_id).await? {
            Some(count) => Ok(count),
            None => Err(AppError::NotFound(format!("product {}", product_id))),
        }
    }
}
