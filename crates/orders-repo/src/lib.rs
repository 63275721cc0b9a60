#[cfg(not(any(feature = "memory", feature = "mongo")))]
compile_error!("Enable a repo feature: `memory` or `mongo`.");

use orders_types::domain::order::{Order, ProductLine};
use orders_types::ports::order_repository::{OrderRepository, RepoError, UpdateCounts};

#[cfg(feature = "memory")]
pub mod memory;
#[cfg(feature = "mongo")]
pub mod mongo;

/// Where the order collection lives.
#[derive(Debug, Clone)]
pub struct RepoConfig {
    pub url: String,
    pub database: String,
    pub collection: String,
}

pub enum Repo {
    #[cfg(feature = "memory")]
    Memory(memory::InMemoryRepo),
    #[cfg(feature = "mongo")]
    Mongo(mongo::MongoRepo),
}

pub async fn build_repo(config: &RepoConfig) -> anyhow::Result<Repo> {
    Repo::build_repo(config).await
}

impl Repo {
    /// Picks the adapter from the URL scheme: `memory://` or `mongodb://`
    /// (`mongodb+srv://` too).
    pub async fn build_repo(config: &RepoConfig) -> anyhow::Result<Self> {
        let url = config.url.as_str();
        if url.starts_with("memory://") {
            #[cfg(feature = "memory")]
            {
                tracing::info!("using in-memory order store");
                return Ok(Self::Memory(memory::InMemoryRepo::new()));
            }
            #[cfg(not(feature = "memory"))]
            {
                anyhow::bail!("memory backend not enabled: {url}");
            }
        }
        if url.starts_with("mongodb://") || url.starts_with("mongodb+srv://") {
            #[cfg(feature = "mongo")]
            {
                let repo =
                    mongo::MongoRepo::connect(url, &config.database, &config.collection).await?;
                return Ok(Self::Mongo(repo));
            }
            #[cfg(not(feature = "mongo"))]
            {
                anyhow::bail!("mongo backend not enabled: {url}");
            }
        }
        anyhow::bail!("unsupported database url: {url}")
    }

    fn inner(&self) -> &dyn OrderRepository {
        match self {
            #[cfg(feature = "memory")]
            Repo::Memory(r) => r,
            #[cfg(feature = "mongo")]
            Repo::Mongo(r) => r,
        }
    }
}

#[async_trait::async_trait]
impl OrderRepository for Repo {
    async fn clear(&self) -> Result<(), RepoError> {
        self.inner().clear().await
    }

    async fn insert_many(&self, orders: Vec<Order>) -> Result<Vec<String>, RepoError> {
        self.inner().insert_many(orders).await
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        self.inner().list().await
    }

    async fn get(&self, orderid: i64) -> Result<Option<Order>, RepoError> {
        self.inner().get(orderid).await
    }

    async fn set_delivery_address(
        &self,
        orderid: i64,
        address: &str,
    ) -> Result<UpdateCounts, RepoError> {
        self.inner().set_delivery_address(orderid, address).await
    }

    async fn delete(&self, orderid: i64) -> Result<u64, RepoError> {
        self.inner().delete(orderid).await
    }

    async fn products(&self, orderid: i64) -> Result<Option<Vec<ProductLine>>, RepoError> {
        self.inner().products(orderid).await
    }

    async fn product_quantity(&self, product_id: &str) -> Result<Option<i64>, RepoError> {
        self.inner().product_quantity(product_id).await
    }
}
