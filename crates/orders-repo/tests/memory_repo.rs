#![cfg(feature = "memory")]

use orders_repo::memory::InMemoryRepo;
use orders_types::domain::seed::sample_orders;
use orders_types::ports::order_repository::{OrderRepository, UpdateCounts};

#[tokio::test]
async fn memory_repo_crud_flow() {
    let repo = InMemoryRepo::new();

    let ids = repo.insert_many(sample_orders()).await.unwrap();
    assert_eq!(ids.len(), 3);

    let listed = repo.list().await.unwrap();
    let order_ids: Vec<i64> = listed.iter().map(|o| o.orderid).collect();
    assert_eq!(order_ids, vec![1, 2, 3]);

    let counts = repo.set_delivery_address(2, "Da Nang").await.unwrap();
    assert_eq!(
        counts,
        UpdateCounts {
            matched: 1,
            modified: 1
        }
    );
    let fetched = repo.get(2).await.unwrap().unwrap();
    assert_eq!(fetched.delivery_address, "Da Nang");
    assert_eq!(fetched.total_amount, 28.0);
    assert_eq!(fetched.products.len(), 2);

    // same value again: matched but not modified
    let again = repo.set_delivery_address(2, "Da Nang").await.unwrap();
    assert_eq!(again.matched, 1);
    assert_eq!(again.modified, 0);

    assert_eq!(repo.delete(3).await.unwrap(), 1);
    assert!(repo.get(3).await.unwrap().is_none());
    assert_eq!(repo.list().await.unwrap().len(), 2);

    repo.clear().await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn memory_repo_aggregates() {
    let repo = InMemoryRepo::new();
    repo.insert_many(sample_orders()).await.unwrap();

    let products = repo.products(1).await.unwrap().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[1].product_id, "somi");

    assert_eq!(repo.product_quantity("somi").await.unwrap(), Some(6));
    assert_eq!(repo.product_quantity("quanau").await.unwrap(), Some(3));
    assert_eq!(repo.product_quantity("nope").await.unwrap(), None);

    repo.delete(3).await.unwrap();
    assert_eq!(repo.product_quantity("somi").await.unwrap(), Some(4));
}

#[tokio::test]
async fn memory_repo_handles_missing_rows() {
    let repo = InMemoryRepo::new();
    assert!(repo.get(42).await.unwrap().is_none());
    assert!(repo.products(42).await.unwrap().is_none());

    let updated = repo.set_delivery_address(42, "Hue").await.unwrap();
    assert_eq!(updated, UpdateCounts::default());

    assert_eq!(repo.delete(42).await.unwrap(), 0);
}

#[tokio::test]
async fn memory_repo_first_match_wins_on_duplicate_ids() {
    let repo = InMemoryRepo::new();
    let mut orders = sample_orders();
    let mut dup = orders[0].clone();
    dup.delivery_address = "Hue".into();
    orders.push(dup);
    repo.insert_many(orders).await.unwrap();

    assert_eq!(repo.get(1).await.unwrap().unwrap().delivery_address, "Hanoi");
    assert_eq!(repo.delete(1).await.unwrap(), 1);
    assert_eq!(repo.get(1).await.unwrap().unwrap().delivery_address, "Hue");
}
