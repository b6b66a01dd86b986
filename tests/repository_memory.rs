use std::sync::Arc;
use product_store::domain::entities::{NewStore, ProductType};
use product_store::domain::repositories::{ProductRepository, StoreRepository};
use product_store::infrastructure::persistence::{
    MemoryDatabase, MemoryProductRepository, MemoryStoreRepository,
};
use uuid::Uuid;

fn repositories() -> (MemoryProductRepository, MemoryStoreRepository) {
    let db = Arc::new(MemoryDatabase::new());
    (
        MemoryProductRepository::new(db.clone()),
        MemoryStoreRepository::new(db),
    )
}

fn new_store(name: &str) -> NewStore {
    NewStore {
        name: name.to_string(),
        city: "CAL".to_string(),
        address: "Av 6N".to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find_product() {
    let (products, _) = repositories();

    let created = products
        .create("Leche".into(), "4200".into(), ProductType::Perishable)
        .await
        .unwrap();

    let found = products.find_by_id(created.id, true).await.unwrap().unwrap();
    assert_eq!(found, created);
    assert!(found.stores.is_empty());
}

#[tokio::test]
async fn test_find_missing_product() {
    let (products, _) = repositories();

    assert!(products.find_by_id(Uuid::new_v4(), true).await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_replaces_associations_in_order() {
    let (products, stores) = repositories();
    let a = stores.create(new_store("A")).await.unwrap();
    let b = stores.create(new_store("B")).await.unwrap();
    let mut product = products
        .create("Pan".into(), "900".into(), ProductType::Perishable)
        .await
        .unwrap();

    product.stores = vec![b.clone(), a.clone(), b.clone()];
    let saved = products.save(product.clone()).await.unwrap();

    assert_eq!(saved.store_ids(), vec![b.id, a.id, b.id]);
    assert_eq!(products.count_associations().await.unwrap(), 3);

    let lazy = products.find_by_id(product.id, false).await.unwrap().unwrap();
    assert!(lazy.stores.is_empty());
}

#[tokio::test]
async fn test_store_reverse_lookup_is_distinct() {
    let (products, stores) = repositories();
    let store = stores.create(new_store("A")).await.unwrap();
    let mut product = products
        .create("Pan".into(), "900".into(), ProductType::Perishable)
        .await
        .unwrap();

    product.stores = vec![store.clone(), store.clone()];
    products.save(product.clone()).await.unwrap();

    let found = stores.find_by_id(store.id, true).await.unwrap().unwrap();
    assert_eq!(found.product_ids, vec![product.id]);

    let lazy = stores.find_by_id(store.id, false).await.unwrap().unwrap();
    assert!(lazy.product_ids.is_empty());
}

#[tokio::test]
async fn test_delete_store_cascades_to_links() {
    let (products, stores) = repositories();
    let store = stores.create(new_store("A")).await.unwrap();
    let mut product = products
        .create("Pan".into(), "900".into(), ProductType::NonPerishable)
        .await
        .unwrap();
    product.stores = vec![store.clone()];
    products.save(product.clone()).await.unwrap();

    stores.delete(store.id).await.unwrap();

    let reloaded = products.find_by_id(product.id, true).await.unwrap().unwrap();
    assert!(reloaded.stores.is_empty());
    assert_eq!(products.count_associations().await.unwrap(), 0);
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let (products, stores) = repositories();

    assert!(products.delete(Uuid::new_v4()).await.is_err());
    assert!(stores.delete(Uuid::new_v4()).await.is_err());
}

#[tokio::test]
async fn test_save_with_missing_store_fails() {
    let (products, stores) = repositories();
    let store = stores.create(new_store("A")).await.unwrap();
    let mut product = products
        .create("Pan".into(), "900".into(), ProductType::Perishable)
        .await
        .unwrap();
    product.stores = vec![store.clone()];
    stores.delete(store.id).await.unwrap();

    assert!(products.save(product).await.is_err());
    assert_eq!(products.count_associations().await.unwrap(), 0);
}

#[tokio::test]
async fn test_clear() {
    let (products, stores) = repositories();
    let store = stores.create(new_store("A")).await.unwrap();
    let mut product = products
        .create("Pan".into(), "900".into(), ProductType::Perishable)
        .await
        .unwrap();
    product.stores = vec![store];
    products.save(product).await.unwrap();

    products.clear().await.unwrap();
    stores.clear().await.unwrap();

    assert_eq!(products.count().await.unwrap(), 0);
    assert_eq!(stores.count().await.unwrap(), 0);
    assert_eq!(products.count_associations().await.unwrap(), 0);
}
