//! Integration tests for the listing moderation workflow.
//!
//! Covers the status state machine against real rows, and the notification
//! fan-out contract: side effects never block or roll back the mutation.

mod common;

use crate::common::{create_pending_property, create_user, TestHarness};
use server_core::common::{NotificationKind, UserRole};
use server_core::domains::properties::actions as property_actions;
use server_core::domains::properties::models::Property;
use server_core::kernel::TestDependencies;
use server_core::server::app::build_engine;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn rejecting_a_pending_property_stores_status_reason_and_notifies_once(ctx: &TestHarness) {
    let host = create_user(UserRole::Host, &ctx.db_pool).await;
    let property = create_pending_property(&host, &ctx.db_pool).await;
    assert_eq!(property.status, "pending");

    let (deps, sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());
    let engine = build_engine(deps.clone());

    let event = property_actions::reject_property(
        property.id,
        "incomplete photos".to_string(),
        &deps,
    )
    .await
    .expect("Rejection should succeed");

    engine.process(event).await;

    let updated = Property::find_by_id(property.id, &ctx.db_pool)
        .await
        .expect("Property should still exist");
    assert_eq!(updated.status, "rejected");
    assert_eq!(updated.rejection_reason.as_deref(), Some("incomplete photos"));

    let enqueued = sink.enqueued();
    assert_eq!(enqueued.len(), 1, "exactly one notification for the owner");
    assert_eq!(enqueued[0].user_id, host.id);
    assert_eq!(enqueued[0].kind, NotificationKind::Warning);
    assert!(enqueued[0].message.contains("incomplete photos"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn approving_a_rejected_property_clears_the_rejection_reason(ctx: &TestHarness) {
    let host = create_user(UserRole::Host, &ctx.db_pool).await;
    let property = create_pending_property(&host, &ctx.db_pool).await;

    let (deps, _sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());
    let engine = build_engine(deps.clone());

    let rejected = property_actions::reject_property(
        property.id,
        "blurry images".to_string(),
        &deps,
    )
    .await
    .unwrap();
    engine.process(rejected).await;

    let approved = property_actions::approve_property(property.id, &deps)
        .await
        .expect("Approving a rejected listing is legal");
    engine.process(approved).await;

    let updated = Property::find_by_id(property.id, &ctx.db_pool).await.unwrap();
    assert_eq!(updated.status, "approved");
    assert_eq!(updated.rejection_reason, None);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejecting_an_approved_property_is_refused(ctx: &TestHarness) {
    let host = create_user(UserRole::Host, &ctx.db_pool).await;
    let property = create_pending_property(&host, &ctx.db_pool).await;

    let (deps, sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());
    let engine = build_engine(deps.clone());

    let approved = property_actions::approve_property(property.id, &deps).await.unwrap();
    engine.process(approved).await;

    let result =
        property_actions::reject_property(property.id, "late regret".to_string(), &deps).await;
    assert!(result.is_err());

    let updated = Property::find_by_id(property.id, &ctx.db_pool).await.unwrap();
    assert_eq!(updated.status, "approved");
    // Only the approval notified; the refused transition did not.
    assert_eq!(sink.enqueued().len(), 1);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn deleting_a_property_notifies_the_owner_with_the_reason(ctx: &TestHarness) {
    let host = create_user(UserRole::Host, &ctx.db_pool).await;
    let property = create_pending_property(&host, &ctx.db_pool).await;

    let (deps, sink, _email) = TestDependencies::new().into_deps(ctx.db_pool.clone());
    let engine = build_engine(deps.clone());

    let event = property_actions::delete_property(
        property.id,
        Some("duplicate listing".to_string()),
        &deps,
    )
    .await
    .expect("Deletion should succeed");
    engine.process(event).await;

    assert!(Property::find_by_id(property.id, &ctx.db_pool).await.is_err());

    let enqueued = sink.enqueued();
    assert_eq!(enqueued.len(), 1);
    assert_eq!(enqueued[0].kind, NotificationKind::Error);
    assert!(enqueued[0].message.contains("duplicate listing"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn notification_sink_failure_does_not_block_the_status_mutation(ctx: &TestHarness) {
    let host = create_user(UserRole::Host, &ctx.db_pool).await;
    let property = create_pending_property(&host, &ctx.db_pool).await;

    let (deps, sink, _email) = TestDependencies::with_failing_sink().into_deps(ctx.db_pool.clone());
    let engine = build_engine(deps.clone());

    let event = property_actions::reject_property(
        property.id,
        "incomplete photos".to_string(),
        &deps,
    )
    .await
    .expect("Mutation must succeed regardless of the sink");

    let report = engine.process(event).await;
    assert_eq!(report.failed, 0, "fan-out swallows sink failures");

    let updated = Property::find_by_id(property.id, &ctx.db_pool).await.unwrap();
    assert_eq!(updated.status, "rejected");
    assert!(sink.enqueued().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn email_failure_does_not_block_the_persisted_notification(ctx: &TestHarness) {
    let host = create_user(UserRole::Host, &ctx.db_pool).await;
    let property = create_pending_property(&host, &ctx.db_pool).await;

    let (deps, sink, email) = TestDependencies::with_failing_email().into_deps(ctx.db_pool.clone());
    let engine = build_engine(deps.clone());

    let event = property_actions::approve_property(property.id, &deps).await.unwrap();
    let report = engine.process(event).await;

    assert_eq!(report.failed, 0);
    assert_eq!(sink.enqueued().len(), 1, "row persisted despite dead email gateway");
    assert!(email.sent().is_empty());

    let updated = Property::find_by_id(property.id, &ctx.db_pool).await.unwrap();
    assert_eq!(updated.status, "approved");
}
