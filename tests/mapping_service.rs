mod common;

use alias_shortener::domain::alias_generator::{ALPHABET, RandomAliasGenerator};
use alias_shortener::domain::repositories::UrlStore;
use alias_shortener::error::{AliasError, CreateMappingError};
use std::sync::Arc;

#[tokio::test]
async fn test_create_then_resolve_roundtrip() {
    let store = common::memory_store().await;
    let service = common::mapping_service(store, Arc::new(RandomAliasGenerator::new()));

    let mapping = service
        .create_mapping("https://example.com/page".to_string(), Some("page".to_string()))
        .await
        .unwrap();

    assert_eq!(mapping.alias, "page");
    assert_eq!(
        service.resolve_alias("page").await.unwrap(),
        "https://example.com/page"
    );
}

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let store = common::memory_store().await;
    let service = common::mapping_service(store, Arc::new(RandomAliasGenerator::new()));

    let mapping = service
        .create_mapping("https://example.com".to_string(), Some("ex1".to_string()))
        .await
        .unwrap();
    assert_eq!(mapping.alias, "ex1");

    assert_eq!(
        service.resolve_alias("ex1").await.unwrap(),
        "https://example.com"
    );

    let again = service
        .create_mapping("https://other.com".to_string(), Some("ex1".to_string()))
        .await;
    assert!(matches!(again, Err(CreateMappingError::AliasExists(_))));

    // The first mapping is unaffected by the rejected insert.
    assert_eq!(
        service.resolve_alias("ex1").await.unwrap(),
        "https://example.com"
    );

    service.delete_mapping("ex1").await.unwrap();

    assert!(matches!(
        service.resolve_alias("ex1").await,
        Err(AliasError::NotFound)
    ));
}

#[tokio::test]
async fn test_forced_collision_is_caught_by_precheck() {
    let store = common::memory_store().await;
    let service = common::mapping_service(
        store.clone(),
        Arc::new(common::FixedAliasGenerator("SaMe01")),
    );

    let first = service
        .create_mapping("https://first.com".to_string(), None)
        .await
        .unwrap();
    assert_eq!(first.alias, "SaMe01");

    let second = service
        .create_mapping("https://second.com".to_string(), Some(String::new()))
        .await;
    assert!(matches!(second, Err(CreateMappingError::NotUnique(alias)) if alias == "SaMe01"));

    assert_eq!(store.count().await.unwrap(), 1);
    assert_eq!(store.get("SaMe01").await.unwrap(), "https://first.com");
}

#[tokio::test]
async fn test_generated_aliases_are_six_symbols_from_alphabet() {
    let store = common::memory_store().await;
    let service = common::mapping_service(store, Arc::new(RandomAliasGenerator::seeded(2024)));

    for i in 0..20 {
        let mapping = service
            .create_mapping(format!("https://example.com/{}", i), None)
            .await
            .unwrap();

        assert_eq!(mapping.alias.len(), 6);
        assert!(mapping.alias.bytes().all(|b| ALPHABET.contains(&b)));
        assert_eq!(
            service.resolve_alias(&mapping.alias).await.unwrap(),
            format!("https://example.com/{}", i)
        );
    }
}

#[tokio::test]
async fn test_generated_alias_never_collides_with_existing() {
    let store = common::memory_store().await;
    common::create_test_mapping(&store, "taken1", "https://existing.com").await;

    let service = common::mapping_service(
        store.clone(),
        Arc::new(common::FixedAliasGenerator("taken1")),
    );

    let result = service
        .create_mapping("https://new.com".to_string(), None)
        .await;

    assert!(matches!(result, Err(CreateMappingError::NotUnique(_))));
    assert_eq!(store.get("taken1").await.unwrap(), "https://existing.com");
}

#[tokio::test]
async fn test_resolve_unknown_alias() {
    let store = common::memory_store().await;
    let service = common::mapping_service(store, Arc::new(RandomAliasGenerator::new()));

    assert!(matches!(
        service.resolve_alias("never").await,
        Err(AliasError::NotFound)
    ));
}

#[tokio::test]
async fn test_delete_unknown_alias() {
    let store = common::memory_store().await;
    let service = common::mapping_service(store, Arc::new(RandomAliasGenerator::new()));

    assert!(matches!(
        service.delete_mapping("never").await,
        Err(AliasError::NotFound)
    ));
}

#[tokio::test]
async fn test_store_failure_is_store_unavailable() {
    let store = common::memory_store().await;
    let service = common::mapping_service(store.clone(), Arc::new(RandomAliasGenerator::new()));
    store.pool().close().await;

    assert!(matches!(
        service.resolve_alias("ex1").await,
        Err(AliasError::StoreUnavailable(_))
    ));
    assert!(matches!(
        service
            .create_mapping("https://example.com".to_string(), None)
            .await,
        Err(CreateMappingError::StoreUnavailable(_))
    ));
}

#[tokio::test]
async fn test_delete_store_failure_is_store_unavailable() {
    let store = common::memory_store().await;
    common::create_test_mapping(&store, "ex1", "https://example.com").await;
    let service = common::mapping_service(store.clone(), Arc::new(RandomAliasGenerator::new()));
    store.pool().close().await;

    assert!(matches!(
        service.delete_mapping("ex1").await,
        Err(AliasError::StoreUnavailable(_))
    ));
}
