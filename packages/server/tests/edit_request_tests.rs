//! Integration tests for the service edit-request workflow.
//!
//! An edit is a standalone patch row; the live service only changes when an
//! admin approves, at which point the edit record disappears.

mod common;

use crate::common::{create_pending_edit, create_user, create_vehicle_service, TestHarness};
use server_core::common::{NotificationKind, UserRole};
use server_core::domains::services::actions as service_actions;
use server_core::domains::services::models::{Service, ServiceEdit, ServicePatch, ServiceType};
use server_core::kernel::TestDependencies;
use server_core::server::app::build_engine;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn approving_an_edit_applies_the_patch_and_drops_the_record(ctx: &TestHarness) {
    let provider = create_user(UserRole::Host, &ctx.db_pool).await;
    let service =
        create_vehicle_service(&provider, ServiceType::Car, "Fiat", "Egea", 30.0, &ctx.db_pool)
            .await;

    let edit = create_pending_edit(
        &service,
        ServicePatch {
            price: Some(45.0),
            ..Default::default()
        },
        &ctx.db_pool,
    )
    .await;

    let (deps, sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());
    let engine = build_engine(deps.clone());

    let event = service_actions::approve_edit(edit.id, &deps)
        .await
        .expect("Approval should succeed");
    engine.process(event).await;

    let updated = Service::find_by_id(service.id, &ctx.db_pool).await.unwrap();
    assert_eq!(updated.price, 45.0);
    // Untouched fields survive the patch.
    assert_eq!(updated.title, service.title);

    let pending = ServiceEdit::find_pending(Some(service.id), &ctx.db_pool)
        .await
        .unwrap();
    assert!(pending.is_empty(), "approved edit leaves no pending record");

    let enqueued = sink.enqueued();
    assert_eq!(enqueued.len(), 1);
    assert_eq!(enqueued[0].user_id, provider.id);
    assert_eq!(enqueued[0].kind, NotificationKind::Success);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejecting_an_edit_leaves_the_live_service_untouched(ctx: &TestHarness) {
    let provider = create_user(UserRole::Host, &ctx.db_pool).await;
    let service =
        create_vehicle_service(&provider, ServiceType::Car, "Fiat", "Egea", 30.0, &ctx.db_pool)
            .await;

    let edit = create_pending_edit(
        &service,
        ServicePatch {
            price: Some(60.0),
            ..Default::default()
        },
        &ctx.db_pool,
    )
    .await;

    let (deps, sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());
    let engine = build_engine(deps.clone());

    let event = service_actions::reject_edit(
        edit.id,
        Some("price out of range".to_string()),
        &deps,
    )
    .await
    .expect("Rejection should succeed");
    engine.process(event).await;

    let untouched = Service::find_by_id(service.id, &ctx.db_pool).await.unwrap();
    assert_eq!(untouched.price, 30.0);

    let kept = ServiceEdit::find_by_id(edit.id, &ctx.db_pool).await.unwrap();
    assert_eq!(kept.status, "rejected");
    assert_eq!(kept.reason.as_deref(), Some("price out of range"));

    let enqueued = sink.enqueued();
    assert_eq!(enqueued.len(), 1);
    assert_eq!(enqueued[0].kind, NotificationKind::Warning);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn only_the_owner_may_propose_an_edit(ctx: &TestHarness) {
    let provider = create_user(UserRole::Host, &ctx.db_pool).await;
    let stranger = create_user(UserRole::Guest, &ctx.db_pool).await;
    let service =
        create_vehicle_service(&provider, ServiceType::Car, "Fiat", "Egea", 30.0, &ctx.db_pool)
            .await;

    let (deps, _sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());

    let result = service_actions::submit_edit(
        service.id,
        stranger.id,
        ServicePatch {
            price: Some(1.0),
            ..Default::default()
        },
        &deps,
    )
    .await;

    assert!(result.is_err());
    let pending = ServiceEdit::find_pending(Some(service.id), &ctx.db_pool)
        .await
        .unwrap();
    assert!(pending.is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn an_empty_edit_is_refused(ctx: &TestHarness) {
    let provider = create_user(UserRole::Host, &ctx.db_pool).await;
    let service =
        create_vehicle_service(&provider, ServiceType::Car, "Fiat", "Egea", 30.0, &ctx.db_pool)
            .await;

    let (deps, _sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());

    let result =
        service_actions::submit_edit(service.id, provider.id, ServicePatch::default(), &deps).await;
    assert!(result.is_err());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn concurrent_submissions_may_leave_multiple_pending_edits(ctx: &TestHarness) {
    // Nothing enforces one pending edit per service; both submissions land.
    let provider = create_user(UserRole::Host, &ctx.db_pool).await;
    let service =
        create_vehicle_service(&provider, ServiceType::Car, "Fiat", "Egea", 30.0, &ctx.db_pool)
            .await;

    let (deps, _sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());

    for price in [40.0, 50.0] {
        service_actions::submit_edit(
            service.id,
            provider.id,
            ServicePatch {
                price: Some(price),
                ..Default::default()
            },
            &deps,
        )
        .await
        .expect("Submission should succeed");
    }

    let pending = ServiceEdit::find_pending(Some(service.id), &ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(pending.len(), 2);
}
