//! GraphQL schema definition.
//!
//! Root Query/Mutation delegate to the per-domain edge functions; nothing
//! here touches models directly.

use juniper::{EmptySubscription, FieldResult, RootNode};

use super::context::GraphQLContext;

use crate::domains::bookings::data::{BookingData, FavoriteData, ReviewData};
use crate::domains::bookings::edges::mutation as booking_mutations;
use crate::domains::bookings::edges::mutation::{CreateBookingInput, SubmitReviewInput};
use crate::domains::bookings::edges::query as booking_queries;
use crate::domains::explorer::data::ExplorerLevelData;
use crate::domains::explorer::edges::query as explorer_queries;
use crate::domains::notifications::data::NotificationData;
use crate::domains::notifications::edges::mutation as notification_mutations;
use crate::domains::notifications::edges::query as notification_queries;
use crate::domains::properties::data::PropertyData;
use crate::domains::properties::edges::mutation as property_mutations;
use crate::domains::properties::edges::mutation::SubmitPropertyInput;
use crate::domains::properties::edges::query as property_queries;
use crate::domains::services::data::{
    ModelGroupData, ServiceData, ServiceEditData, ServiceModelData,
};
use crate::domains::services::edges::mutation as service_mutations;
use crate::domains::services::edges::mutation::{
    SubmitServiceEditInput, SubmitServiceInput, UpsertServiceModelInput,
};
use crate::domains::services::edges::query as service_queries;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    // =========================================================================
    // Property Queries
    // =========================================================================

    /// Get a single property by ID
    async fn property(ctx: &GraphQLContext, id: String) -> FieldResult<Option<PropertyData>> {
        property_queries::query_property(ctx, id).await
    }

    /// Properties filtered by status (defaults to approved)
    async fn properties(
        ctx: &GraphQLContext,
        status: Option<String>,
    ) -> FieldResult<Vec<PropertyData>> {
        property_queries::query_properties(ctx, status).await
    }

    /// The admin review queue for properties
    async fn pending_properties(ctx: &GraphQLContext) -> FieldResult<Vec<PropertyData>> {
        property_queries::query_pending_properties(ctx).await
    }

    // =========================================================================
    // Service Queries
    // =========================================================================

    /// Get a single service by ID
    async fn service(ctx: &GraphQLContext, id: String) -> FieldResult<Option<ServiceData>> {
        service_queries::query_service(ctx, id).await
    }

    /// Services filtered by status (defaults to approved)
    async fn services(
        ctx: &GraphQLContext,
        status: Option<String>,
    ) -> FieldResult<Vec<ServiceData>> {
        service_queries::query_services(ctx, status).await
    }

    /// The admin review queue for services
    async fn pending_services(ctx: &GraphQLContext) -> FieldResult<Vec<ServiceData>> {
        service_queries::query_pending_services(ctx).await
    }

    /// The rental catalog for a service type, grouped by brand and model
    async fn vehicle_catalog(
        ctx: &GraphQLContext,
        service_type: String,
    ) -> FieldResult<Vec<ModelGroupData>> {
        service_queries::query_catalog(ctx, service_type).await
    }

    /// Editorial metadata for a (type, brand, model) triple
    async fn service_model(
        ctx: &GraphQLContext,
        service_type: String,
        brand: String,
        model: String,
    ) -> FieldResult<Option<ServiceModelData>> {
        service_queries::query_service_model(ctx, service_type, brand, model).await
    }

    /// Pending edit requests, optionally for one service (admin only)
    async fn pending_edits(
        ctx: &GraphQLContext,
        service_id: Option<String>,
    ) -> FieldResult<Vec<ServiceEditData>> {
        service_queries::query_pending_edits(ctx, service_id).await
    }

    // =========================================================================
    // Explorer Queries
    // =========================================================================

    /// One drill-down level of an admin taxonomy (admin only)
    async fn explore(
        ctx: &GraphQLContext,
        taxonomy: String,
        path: Vec<String>,
    ) -> FieldResult<ExplorerLevelData> {
        explorer_queries::query_explore(ctx, taxonomy, path).await
    }

    // =========================================================================
    // Booking Queries
    // =========================================================================

    /// Bookings with a given status, item titles resolved (admin only)
    async fn bookings(ctx: &GraphQLContext, status: String) -> FieldResult<Vec<BookingData>> {
        booking_queries::query_bookings(ctx, status).await
    }

    /// The calling user's saved listings
    async fn my_favorites(ctx: &GraphQLContext) -> FieldResult<Vec<FavoriteData>> {
        booking_queries::query_my_favorites(ctx).await
    }

    // =========================================================================
    // Notification Queries
    // =========================================================================

    /// The calling user's notifications, newest first
    async fn my_notifications(ctx: &GraphQLContext) -> FieldResult<Vec<NotificationData>> {
        notification_queries::query_my_notifications(ctx).await
    }

    /// Unread badge count for the calling user
    async fn unread_notification_count(ctx: &GraphQLContext) -> FieldResult<i32> {
        notification_queries::query_unread_notification_count(ctx).await
    }
}

pub struct Mutation;

#[juniper::graphql_object(context = GraphQLContext)]
impl Mutation {
    // =========================================================================
    // Property Mutations
    // =========================================================================

    /// Submit a new property listing; it enters the review queue as pending
    async fn submit_property(
        ctx: &GraphQLContext,
        input: SubmitPropertyInput,
    ) -> FieldResult<PropertyData> {
        property_mutations::submit_property(ctx, input).await
    }

    /// Approve a property listing (admin only)
    async fn approve_property(
        ctx: &GraphQLContext,
        property_id: String,
    ) -> FieldResult<PropertyData> {
        property_mutations::approve_property(ctx, property_id).await
    }

    /// Reject a pending property with a reason (admin only)
    async fn reject_property(
        ctx: &GraphQLContext,
        property_id: String,
        reason: String,
    ) -> FieldResult<PropertyData> {
        property_mutations::reject_property(ctx, property_id, reason).await
    }

    /// Delete a property with an optional reason (admin only)
    async fn delete_property(
        ctx: &GraphQLContext,
        property_id: String,
        reason: Option<String>,
    ) -> FieldResult<bool> {
        property_mutations::delete_property(ctx, property_id, reason).await
    }

    // =========================================================================
    // Service Mutations
    // =========================================================================

    /// Submit a new service listing; it enters the review queue as pending
    async fn submit_service(
        ctx: &GraphQLContext,
        input: SubmitServiceInput,
    ) -> FieldResult<ServiceData> {
        service_mutations::submit_service(ctx, input).await
    }

    /// Approve a service listing (admin only)
    async fn approve_service(
        ctx: &GraphQLContext,
        service_id: String,
    ) -> FieldResult<ServiceData> {
        service_mutations::approve_service(ctx, service_id).await
    }

    /// Reject a pending service with a reason (admin only)
    async fn reject_service(
        ctx: &GraphQLContext,
        service_id: String,
        reason: String,
    ) -> FieldResult<ServiceData> {
        service_mutations::reject_service(ctx, service_id, reason).await
    }

    /// Delete a service with an optional reason (admin only)
    async fn delete_service(
        ctx: &GraphQLContext,
        service_id: String,
        reason: Option<String>,
    ) -> FieldResult<bool> {
        service_mutations::delete_service(ctx, service_id, reason).await
    }

    /// Propose an edit to a live service; applied only after admin approval
    async fn submit_service_edit(
        ctx: &GraphQLContext,
        input: SubmitServiceEditInput,
    ) -> FieldResult<ServiceEditData> {
        service_mutations::submit_service_edit(ctx, input).await
    }

    /// Apply a pending edit and drop the edit record (admin only)
    async fn approve_service_edit(
        ctx: &GraphQLContext,
        edit_id: String,
    ) -> FieldResult<ServiceData> {
        service_mutations::approve_service_edit(ctx, edit_id).await
    }

    /// Reject a pending edit with an optional reason (admin only)
    async fn reject_service_edit(
        ctx: &GraphQLContext,
        edit_id: String,
        reason: Option<String>,
    ) -> FieldResult<ServiceEditData> {
        service_mutations::reject_service_edit(ctx, edit_id, reason).await
    }

    /// Create or refresh catalog metadata for a triple (admin only)
    async fn upsert_service_model(
        ctx: &GraphQLContext,
        input: UpsertServiceModelInput,
    ) -> FieldResult<ServiceModelData> {
        service_mutations::upsert_service_model(ctx, input).await
    }

    // =========================================================================
    // Booking Mutations
    // =========================================================================

    /// Book a property or service
    async fn create_booking(
        ctx: &GraphQLContext,
        input: CreateBookingInput,
    ) -> FieldResult<BookingData> {
        booking_mutations::create_booking(ctx, input).await
    }

    /// Review a property or service
    async fn submit_review(
        ctx: &GraphQLContext,
        input: SubmitReviewInput,
    ) -> FieldResult<ReviewData> {
        booking_mutations::submit_review(ctx, input).await
    }

    /// Save a listing to favorites
    async fn add_favorite(
        ctx: &GraphQLContext,
        item_type: String,
        item_id: String,
    ) -> FieldResult<FavoriteData> {
        booking_mutations::add_favorite(ctx, item_type, item_id).await
    }

    /// Remove a listing from favorites
    async fn remove_favorite(
        ctx: &GraphQLContext,
        item_type: String,
        item_id: String,
    ) -> FieldResult<bool> {
        booking_mutations::remove_favorite(ctx, item_type, item_id).await
    }

    // =========================================================================
    // Notification Mutations
    // =========================================================================

    /// Mark one of the calling user's notifications read
    async fn mark_notification_read(
        ctx: &GraphQLContext,
        notification_id: String,
    ) -> FieldResult<bool> {
        notification_mutations::mark_notification_read(ctx, notification_id).await
    }

    // =========================================================================
    // Media
    // =========================================================================

    /// Upload a listing image (base64 payload) and get back its public URL.
    /// Hosting is fully delegated to the object store.
    async fn upload_listing_image(
        ctx: &GraphQLContext,
        filename: String,
        content_base64: String,
    ) -> FieldResult<String> {
        use base64::Engine as _;

        let user = ctx.require_user()?;

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(content_base64.as_bytes())
            .map_err(|_| {
                juniper::FieldError::new("Invalid base64 payload", juniper::Value::null())
            })?;

        let path = format!("{}/{}", user.user_id, filename);
        let url = ctx
            .deps()
            .storage
            .upload(bytes, "listings", &path)
            .await
            .map_err(|e| {
                juniper::FieldError::new(
                    format!("Upload failed: {}", e),
                    juniper::Value::null(),
                )
            })?;

        Ok(url)
    }
}

pub type Schema = RootNode<'static, Query, Mutation, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, Mutation, EmptySubscription::new())
}
