use orders_repo::{build_repo, Repo, RepoConfig};
use orders_types::domain::seed::sample_orders;
use orders_types::ports::order_repository::OrderRepository;

fn config(url: &str) -> RepoConfig {
    RepoConfig {
        url: url.into(),
        database: "eShop".into(),
        collection: "OrderCollection".into(),
    }
}

#[tokio::test]
async fn builds_memory_repo_from_url() {
    let repo: Repo = build_repo(&config("memory://")).await.expect("build repo");
    // basic sanity: list should succeed and be empty
    let list = repo.list().await.expect("list");
    assert!(list.is_empty());

    repo.insert_many(sample_orders()).await.expect("insert");
    assert_eq!(repo.product_quantity("somi").await.expect("count"), Some(6));
}

#[tokio::test]
async fn rejects_unknown_scheme() {
    let res = build_repo(&config("postgres://localhost/orders")).await;
    assert!(res.is_err());
}
