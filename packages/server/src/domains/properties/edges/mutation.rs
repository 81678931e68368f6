use juniper::{FieldError, FieldResult};
use tracing::info;

use crate::common::PropertyId;
use crate::domains::properties::actions;
use crate::domains::properties::data::PropertyData;
use crate::domains::properties::models::Property;
use crate::server::graphql::context::GraphQLContext;

#[derive(juniper::GraphQLInputObject)]
pub struct SubmitPropertyInput {
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub location: String,
    pub price_per_night: f64,
    pub images: Vec<String>,
}

/// Submit a new property listing (host); enters the pending review queue
pub async fn submit_property(
    ctx: &GraphQLContext,
    input: SubmitPropertyInput,
) -> FieldResult<PropertyData> {
    let user = ctx.require_user()?;

    let property = actions::submit_property(
        user.user_id,
        input.title,
        input.description,
        input.property_type,
        input.location,
        input.price_per_night,
        input.images,
        ctx.deps(),
    )
    .await
    .map_err(|e| {
        FieldError::new(
            format!("Failed to submit property: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(PropertyData::from(property))
}

/// Approve a property listing (admin only)
pub async fn approve_property(ctx: &GraphQLContext, property_id: String) -> FieldResult<PropertyData> {
    info!(property_id = %property_id, "Approving property");

    ctx.require_admin()?;

    let id = parse_property_id(&property_id)?;

    let event = actions::approve_property(id, ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to approve property: {}", e),
            juniper::Value::null(),
        )
    })?;

    ctx.engine.process(event).await;

    fetch_property(ctx, id).await
}

/// Reject a pending property with a reason (admin only)
pub async fn reject_property(
    ctx: &GraphQLContext,
    property_id: String,
    reason: String,
) -> FieldResult<PropertyData> {
    info!(property_id = %property_id, reason = %reason, "Rejecting property");

    ctx.require_admin()?;

    let id = parse_property_id(&property_id)?;

    let event = actions::reject_property(id, reason, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to reject property: {}", e),
                juniper::Value::null(),
            )
        })?;

    ctx.engine.process(event).await;

    fetch_property(ctx, id).await
}

/// Delete a property with an optional reason (admin only)
pub async fn delete_property(
    ctx: &GraphQLContext,
    property_id: String,
    reason: Option<String>,
) -> FieldResult<bool> {
    info!(property_id = %property_id, "Deleting property");

    ctx.require_admin()?;

    let id = parse_property_id(&property_id)?;

    let event = actions::delete_property(id, reason, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to delete property: {}", e),
                juniper::Value::null(),
            )
        })?;

    ctx.engine.process(event).await;

    Ok(true)
}

fn parse_property_id(raw: &str) -> FieldResult<PropertyId> {
    PropertyId::parse(raw)
        .map_err(|_| FieldError::new("Invalid property ID", juniper::Value::null()))
}

async fn fetch_property(ctx: &GraphQLContext, id: PropertyId) -> FieldResult<PropertyData> {
    let property = Property::find_by_id(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to load property: {}", e),
            juniper::Value::null(),
        )
    })?;
    Ok(PropertyData::from(property))
}
