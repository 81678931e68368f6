use juniper::{FieldError, FieldResult};

use crate::common::{ListingStatus, ServiceId};
use crate::domains::services::actions;
use crate::domains::services::data::{ModelGroupData, ServiceData, ServiceEditData, ServiceModelData};
use crate::domains::services::models::{Service, ServiceType};
use crate::server::graphql::context::GraphQLContext;

/// Get a single service by ID
pub async fn query_service(ctx: &GraphQLContext, id: String) -> FieldResult<Option<ServiceData>> {
    let service_id = ServiceId::parse(&id)
        .map_err(|_| FieldError::new("Invalid service ID", juniper::Value::null()))?;

    match Service::find_by_id(service_id, &ctx.db_pool).await {
        Ok(service) => Ok(Some(ServiceData::from(service))),
        Err(_) => Ok(None),
    }
}

/// Query services with an optional status filter (defaults to approved)
pub async fn query_services(
    ctx: &GraphQLContext,
    status: Option<String>,
) -> FieldResult<Vec<ServiceData>> {
    let status = match status {
        Some(raw) => Some(
            raw.parse::<ListingStatus>()
                .map_err(|e| FieldError::new(format!("{}", e), juniper::Value::null()))?,
        ),
        None => None,
    };

    let services = actions::get_services(status, ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to fetch services: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(services.into_iter().map(ServiceData::from).collect())
}

/// Query services awaiting review (admin approval queue)
pub async fn query_pending_services(ctx: &GraphQLContext) -> FieldResult<Vec<ServiceData>> {
    ctx.require_admin()?;

    let services = actions::get_pending_services(ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to fetch pending services: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(services.into_iter().map(ServiceData::from).collect())
}

/// The rental catalog for a service type, grouped by (brand, model)
pub async fn query_catalog(
    ctx: &GraphQLContext,
    service_type: String,
) -> FieldResult<Vec<ModelGroupData>> {
    let service_type = parse_service_type(&service_type)?;

    let groups = actions::get_catalog(service_type, ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to build catalog: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(groups.into_iter().map(ModelGroupData::from).collect())
}

/// Editorial metadata for a (type, brand, model) triple
pub async fn query_service_model(
    ctx: &GraphQLContext,
    service_type: String,
    brand: String,
    model: String,
) -> FieldResult<Option<ServiceModelData>> {
    let service_type = parse_service_type(&service_type)?;

    let found = actions::get_service_model(service_type, &brand, &model, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to fetch service model: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(found.map(ServiceModelData::from))
}

/// Pending edit requests, optionally narrowed to one service (admin only)
pub async fn query_pending_edits(
    ctx: &GraphQLContext,
    service_id: Option<String>,
) -> FieldResult<Vec<ServiceEditData>> {
    ctx.require_admin()?;

    let service_id = match service_id {
        Some(raw) => Some(
            ServiceId::parse(&raw)
                .map_err(|_| FieldError::new("Invalid service ID", juniper::Value::null()))?,
        ),
        None => None,
    };

    let edits = actions::get_pending_edits(service_id, ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to fetch pending edits: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(edits.into_iter().map(ServiceEditData::from).collect())
}

pub(super) fn parse_service_type(raw: &str) -> FieldResult<ServiceType> {
    raw.parse::<ServiceType>()
        .map_err(|e| FieldError::new(format!("{}", e), juniper::Value::null()))
}
