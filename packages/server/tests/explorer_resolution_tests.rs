//! Integration tests for explorer drill-down resolution against real rows.

mod common;

use crate::common::{create_user, create_vehicle_service, TestHarness};
use server_core::common::UserRole;
use server_core::domains::bookings::models::{Booking, BookingItem};
use server_core::domains::explorer::resolver::{resolve, ExplorerLeaves, Taxonomy};
use server_core::domains::services::models::{ServiceModel, ServiceType};
use test_context::test_context;

fn segments(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[test_context(TestHarness)]
#[tokio::test]
async fn services_taxonomy_drills_type_brand_model_to_leaves(ctx: &TestHarness) {
    let provider = create_user(UserRole::Host, &ctx.db_pool).await;
    // A brand unique to this test keeps the shared database out of the way.
    let brand = format!("Borgward-{}", uuid::Uuid::new_v4().simple());
    let service = create_vehicle_service(
        &provider,
        ServiceType::Car,
        &brand,
        "Isabella",
        55.0,
        &ctx.db_pool,
    )
    .await;

    // Depth 0: static service types.
    let root = resolve(Taxonomy::Services, &[], &ctx.db_pool).await.unwrap();
    let labels: Vec<&str> = root.folders.iter().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, ["car", "bike", "tour"]);

    // Depth 1: distinct brands for the type.
    let brands = resolve(Taxonomy::Services, &segments(&["car"]), &ctx.db_pool)
        .await
        .unwrap();
    assert!(brands.folders.iter().any(|f| f.label == brand));

    // Depth 2: distinct models, decorated with catalog metadata.
    ServiceModel::upsert(
        ServiceType::Car,
        brand.clone(),
        "Isabella".to_string(),
        "A classic tourer".to_string(),
        Some("https://img.holibay.test/isabella.jpg".to_string()),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    let models = resolve(
        Taxonomy::Services,
        &segments(&["car", &brand]),
        &ctx.db_pool,
    )
    .await
    .unwrap();
    let isabella = models
        .folders
        .iter()
        .find(|f| f.label == "Isabella")
        .expect("model folder present");
    assert_eq!(isabella.description.as_deref(), Some("A classic tourer"));
    assert!(isabella.image.is_some());

    // Depth 3: leaf rows by feature containment.
    let leaves = resolve(
        Taxonomy::Services,
        &segments(&["car", &brand, "Isabella"]),
        &ctx.db_pool,
    )
    .await
    .unwrap();
    match leaves.leaves {
        ExplorerLeaves::Services(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].id, service.id);
        }
        other => panic!("expected service leaves, got {:?}", other),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn bookings_taxonomy_resolves_titles_for_leaf_rows(ctx: &TestHarness) {
    let provider = create_user(UserRole::Host, &ctx.db_pool).await;
    let guest = create_user(UserRole::Guest, &ctx.db_pool).await;
    let service = create_vehicle_service(
        &provider,
        ServiceType::Bike,
        "Honda",
        "PCX",
        18.0,
        &ctx.db_pool,
    )
    .await;

    let booking = Booking::create(
        guest.id,
        BookingItem::Service(service.id),
        "2026-08-14".parse().unwrap(),
        "2026-08-16".parse().unwrap(),
        36.0,
        &ctx.db_pool,
    )
    .await
    .unwrap();

    let level = resolve(
        Taxonomy::Bookings,
        &segments(&["pending"]),
        &ctx.db_pool,
    )
    .await
    .unwrap();

    match level.leaves {
        ExplorerLeaves::Bookings(rows) => {
            let row = rows
                .iter()
                .find(|r| r.booking.id == booking.id)
                .expect("booking leaf present");
            assert_eq!(row.item_title.as_deref(), Some(service.title.as_str()));
        }
        other => panic!("expected booking leaves, got {:?}", other),
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn a_path_deeper_than_the_taxonomy_is_an_error(ctx: &TestHarness) {
    let result = resolve(
        Taxonomy::Users,
        &segments(&["host", "too", "deep"]),
        &ctx.db_pool,
    )
    .await;
    assert!(result.is_err());
}
