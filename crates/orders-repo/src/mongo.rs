use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use orders_types::domain::order::{Order, ProductLine};
use orders_types::ports::order_repository::{OrderRepository, RepoError, UpdateCounts};
use serde::Deserialize;

const APP_NAME: &str = "orders-app";

pub struct MongoRepo {
    collection: Collection<Order>,
}

#[derive(Deserialize)]
struct ProductsOnly {
    products: Vec<ProductLine>,
}

#[derive(Deserialize)]
struct QuantityTotal {
    count: i64,
}

fn db_err(e: MongoError) -> RepoError {
    match e.kind.as_ref() {
        ErrorKind::BsonDeserialization(_) => RepoError::Decode(e.to_string()),
        _ => RepoError::DbError(e.to_string()),
    }
}

fn id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Sums the quantity of one product across every order, server side.
pub fn product_quantity_pipeline(product_id: &str) -> Vec<Document> {
    vec![
        doc! { "$match": { "products.product_id": product_id } },
        doc! { "$unwind": "$products" },
        doc! { "$match": { "products.product_id": product_id } },
        doc! { "$group": { "_id": Bson::Null, "count": { "$sum": "$products.quantity" } } },
        doc! { "$project": { "_id": 0, "count": 1 } },
    ]
}

impl MongoRepo {
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, RepoError> {
        let mut options = ClientOptions::parse(uri)
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        options.app_name = Some(APP_NAME.to_string());
        let client =
            Client::with_options(options).map_err(|e| RepoError::Connection(e.to_string()))?;

        // The driver connects lazily; ping so an unreachable server fails here.
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))?;
        tracing::info!(database, collection, "connected to MongoDB");

        Ok(Self {
            collection: client.database(database).collection(collection),
        })
    }
}

#[async_trait]
impl OrderRepository for MongoRepo {
    async fn clear(&self) -> Result<(), RepoError> {
        self.collection.drop().await.map_err(db_err)
    }

    async fn insert_many(&self, orders: Vec<Order>) -> Result<Vec<String>, RepoError> {
        if orders.is_empty() {
            return Ok(Vec::new());
        }
        let res = self
            .collection
            .insert_many(&orders)
            .await
            .map_err(db_err)?;
        let mut ids: Vec<(usize, Bson)> = res.inserted_ids.into_iter().collect();
        ids.sort_by_key(|(idx, _)| *idx);
        Ok(ids.iter().map(|(_, id)| id_to_string(id)).collect())
    }

    async fn list(&self) -> Result<Vec<Order>, RepoError> {
        let cursor = self.collection.find(doc! {}).await.map_err(db_err)?;
        cursor.try_collect().await.map_err(db_err)
    }

    async fn get(&self, orderid: i64) -> Result<Option<Order>, RepoError> {
        self.collection
            .find_one(doc! { "orderid": orderid })
            .await
            .map_err(db_err)
    }

    async fn set_delivery_address(
        &self,
        orderid: i64,
        address: &str,
    ) -> Result<UpdateCounts, RepoError> {
        let res = self
            .collection
            .update_one(
                doc! { "orderid": orderid },
                doc! { "$set": { "delivery_address": address } },
            )
            .await
            .map_err(db_err)?;
        Ok(UpdateCounts {
            matched: res.matched_count,
            modified: res.modified_count,
        })
    }

    async fn delete(&self, orderid: i64) -> Result<u64, RepoError> {
        let res = self
            .collection
            .delete_one(doc! { "orderid": orderid })
            .await
            .map_err(db_err)?;
        Ok(res.deleted_count)
    }

    async fn products(&self, orderid: i64) -> Result<Option<Vec<ProductLine>>, RepoError> {
        let found = self
            .collection
            .clone_with_type::<ProductsOnly>()
            .find_one(doc! { "orderid": orderid })
            .projection(doc! { "products": 1, "_id": 0 })
            .await
            .map_err(db_err)?;
        Ok(found.map(|p| p.products))
    }

    async fn product_quantity(&self, product_id: &str) -> Result<Option<i64>, RepoError> {
        let mut cursor = self
            .collection
            .aggregate(product_quantity_pipeline(product_id))
            .await
            .map_err(db_err)?;
        let Some(first) = cursor.try_next().await.map_err(db_err)? else {
            return Ok(None);
        };
        let total: QuantityTotal = mongodb::bson::from_document(first)
            .map_err(|e| RepoError::Decode(e.to_string()))?;
        Ok(Some(total.count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_filters_unwinds_and_groups() {
        let stages = product_quantity_pipeline("somi");
        let ops: Vec<&str> = stages
            .iter()
            .filter_map(|stage| stage.keys().next().map(String::as_str))
            .collect();
        assert_eq!(
            ops,
            vec!["$match", "$unwind", "$match", "$group", "$project"]
        );
        let group = stages[3].get_document("$group").unwrap();
        assert_eq!(group.get("_id"), Some(&Bson::Null));
        assert_eq!(
            group.get_document("count").unwrap().get_str("$sum").unwrap(),
            "$products.quantity"
        );
    }

    #[test]
    fn object_ids_render_as_hex() {
        let oid = mongodb::bson::oid::ObjectId::new();
        assert_eq!(id_to_string(&Bson::ObjectId(oid)), oid.to_hex());
        assert_eq!(id_to_string(&Bson::String("abc".into())), "abc");
    }
}
