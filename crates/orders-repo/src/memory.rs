use async_trait::async_trait;
use dashmap::DashMap;
use orders_types::domain::order::{Order, ProductLine};
use orders_types::ports::order_repository::{OrderRepository, RepoError, UpdateCounts};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct StoredOrder {
    pub id: String,
    pub order: Order,
}

/// Keyed by insertion sequence so listing keeps natural order.
#[derive(Clone)]
pub struct InMemoryRepo {
    pub map: Arc<DashMap<u64, StoredOrder>>,
    next_seq: Arc<AtomicU64>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            map: Arc::new(DashMap::new()),
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    fn first_match(&self, orderid: i64) -> Option<u64> {
        self.map
            .iter()
            .filter(|kv| kv.value().order.orderid == orderid)
            .map(|kv| *kv.key())
            .min()
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for InMemoryRepo {
    async fn clear(&self) -> Result<(), RepoError> {
        self.map.clear();
        Ok(())
    }

    async fn insert_many(&self, orders: Vec<Order>) -> Result<Vec<String>, RepoError> {
        let mut ids = Vec::with_capacity(orders.len());
        for order in orders {
            let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
            let id = Uuid::new_v4().to_string();
            self.map.insert(
                seq,
                StoredOrder {
                    id: id.clone(),
                    order,
                },
            );
            ids.push(id);
        }
        tracing::debug!(count = ids.len(), "inserted orders in memory");
        Ok(ids)
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        let mut rows: Vec<(u64, Order)> = self
            .map
            .iter()
            .map(|kv| (*kv.key(), kv.value().order.clone()))
            .collect();
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, order)| order).collect())
    }

    async fn get(&self, orderid: i64) -> Result<Option<Order>, RepoError> {
        Ok(self
            .first_match(orderid)
            .and_then(|seq| self.map.get(&seq).map(|r| r.order.clone())))
    }

    async fn set_delivery_address(
        &self,
        orderid: i64,
        address: &str,
    ) -> Result<UpdateCounts, RepoError> {
        let Some(seq) = self.first_match(orderid) else {
            return Ok(UpdateCounts::default());
        };
        match self.map.get_mut(&seq) {
            Some(mut v) => {
                let changed = v.order.set_delivery_address(address);
                Ok(UpdateCounts {
                    matched: 1,
                    modified: u64::from(changed),
                })
            }
            None => Ok(UpdateCounts::default()),
        }
    }

    async fn delete(&self, orderid: i64) -> Result<u64, RepoError> {
        Ok(self
            .first_match(orderid)
            .and_then(|seq| self.map.remove(&seq))
            .map_or(0, |_| 1))
    }

    async fn products(&self, orderid: i64) -> Result<Option<Vec<ProductLine>>, RepoError> {
        Ok(self.get(orderid).await?.map(|order| order.products))
    }

    async fn product_quantity(&self, product_id: &str) -> Result<Option<i64>, RepoError> {
        let quantities: Vec<i64> = self
            .map
            .iter()
            .flat_map(|kv| {
                kv.value()
                    .order
                    .products
                    .iter()
                    .filter(|line| line.product_id == product_id)
                    .map(|line| line.quantity)
                    .collect::<Vec<_>>()
            })
            .collect();
        if quantities.is_empty() {
            return Ok(None);
        }
        Ok(Some(quantities.iter().sum()))
    }
}
