use juniper::{FieldError, FieldResult};

use crate::common::{ListingStatus, PropertyId};
use crate::domains::properties::actions;
use crate::domains::properties::data::PropertyData;
use crate::domains::properties::models::Property;
use crate::server::graphql::context::GraphQLContext;

/// Get a single property by ID
pub async fn query_property(ctx: &GraphQLContext, id: String) -> FieldResult<Option<PropertyData>> {
    let property_id = PropertyId::parse(&id)
        .map_err(|_| FieldError::new("Invalid property ID", juniper::Value::null()))?;

    match Property::find_by_id(property_id, &ctx.db_pool).await {
        Ok(property) => Ok(Some(PropertyData::from(property))),
        Err(_) => Ok(None),
    }
}

/// Query properties with an optional status filter (defaults to approved)
pub async fn query_properties(
    ctx: &GraphQLContext,
    status: Option<String>,
) -> FieldResult<Vec<PropertyData>> {
    let status = match status {
        Some(raw) => Some(raw.parse::<ListingStatus>().map_err(|e| {
            FieldError::new(format!("{}", e), juniper::Value::null())
        })?),
        None => None,
    };

    let properties = actions::get_properties(status, ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to fetch properties: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(properties.into_iter().map(PropertyData::from).collect())
}

/// Query properties awaiting review (admin approval queue)
pub async fn query_pending_properties(ctx: &GraphQLContext) -> FieldResult<Vec<PropertyData>> {
    ctx.require_admin()?;

    let properties = actions::get_pending_properties(ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to fetch pending properties: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(properties.into_iter().map(PropertyData::from).collect())
}
