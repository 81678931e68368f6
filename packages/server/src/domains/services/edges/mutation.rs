use juniper::{FieldError, FieldResult};
use tracing::info;

use crate::common::{EditId, ServiceId};
use crate::domains::services::actions;
use crate::domains::services::data::{ServiceData, ServiceEditData, ServiceModelData};
use crate::domains::services::edges::query::parse_service_type;
use crate::domains::services::models::{Service, ServiceFeatures, ServicePatch};
use crate::server::graphql::context::GraphQLContext;

#[derive(juniper::GraphQLInputObject)]
pub struct SubmitServiceInput {
    pub service_type: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    /// Feature bag as JSON, e.g. {"kind":"vehicle","brand":"Fiat","model":"Egea"}
    pub features: String,
}

#[derive(juniper::GraphQLInputObject)]
pub struct SubmitServiceEditInput {
    pub service_id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub images: Option<Vec<String>>,
    /// Replacement feature bag as JSON, if the edit touches it
    pub features: Option<String>,
}

#[derive(juniper::GraphQLInputObject)]
pub struct UpsertServiceModelInput {
    pub service_type: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub hero_image: Option<String>,
}

/// Submit a new service listing (provider); enters the pending review queue
pub async fn submit_service(
    ctx: &GraphQLContext,
    input: SubmitServiceInput,
) -> FieldResult<ServiceData> {
    let user = ctx.require_user()?;

    let service_type = parse_service_type(&input.service_type)?;
    // Malformed feature JSON is rejected here, before anything is written.
    let features = parse_features(&input.features)?;

    let service = actions::submit_service(
        user.user_id,
        service_type,
        input.title,
        input.description,
        input.price,
        input.images,
        features,
        ctx.deps(),
    )
    .await
    .map_err(|e| {
        FieldError::new(
            format!("Failed to submit service: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(ServiceData::from(service))
}

/// Approve a service listing (admin only)
pub async fn approve_service(ctx: &GraphQLContext, service_id: String) -> FieldResult<ServiceData> {
    info!(service_id = %service_id, "Approving service");

    ctx.require_admin()?;

    let id = parse_service_id(&service_id)?;

    let event = actions::approve_service(id, ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to approve service: {}", e),
            juniper::Value::null(),
        )
    })?;

    ctx.engine.process(event).await;

    fetch_service(ctx, id).await
}

/// Reject a pending service with a reason (admin only)
pub async fn reject_service(
    ctx: &GraphQLContext,
    service_id: String,
    reason: String,
) -> FieldResult<ServiceData> {
    info!(service_id = %service_id, reason = %reason, "Rejecting service");

    ctx.require_admin()?;

    let id = parse_service_id(&service_id)?;

    let event = actions::reject_service(id, reason, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to reject service: {}", e),
                juniper::Value::null(),
            )
        })?;

    ctx.engine.process(event).await;

    fetch_service(ctx, id).await
}

/// Delete a service with an optional reason (admin only)
pub async fn delete_service(
    ctx: &GraphQLContext,
    service_id: String,
    reason: Option<String>,
) -> FieldResult<bool> {
    info!(service_id = %service_id, "Deleting service");

    ctx.require_admin()?;

    let id = parse_service_id(&service_id)?;

    let event = actions::delete_service(id, reason, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to delete service: {}", e),
                juniper::Value::null(),
            )
        })?;

    ctx.engine.process(event).await;

    Ok(true)
}

/// Propose an edit to a live service (owner); the service is untouched until
/// an admin approves
pub async fn submit_service_edit(
    ctx: &GraphQLContext,
    input: SubmitServiceEditInput,
) -> FieldResult<ServiceEditData> {
    let user = ctx.require_user()?;

    let service_id = parse_service_id(&input.service_id)?;
    let features = match input.features.as_deref() {
        Some(raw) => Some(parse_features(raw)?),
        None => None,
    };

    let proposed = ServicePatch {
        title: input.title,
        description: input.description,
        price: input.price,
        images: input.images,
        features,
    };

    let edit = actions::submit_edit(service_id, user.user_id, proposed, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to submit edit: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(ServiceEditData::from(edit))
}

/// Apply a pending edit and drop the edit record (admin only)
pub async fn approve_service_edit(ctx: &GraphQLContext, edit_id: String) -> FieldResult<ServiceData> {
    info!(edit_id = %edit_id, "Approving service edit");

    ctx.require_admin()?;

    let id = parse_edit_id(&edit_id)?;

    let event = actions::approve_edit(id, ctx.deps()).await.map_err(|e| {
        FieldError::new(
            format!("Failed to approve edit: {}", e),
            juniper::Value::null(),
        )
    })?;

    let service_id = match &event {
        crate::domains::services::events::ServiceEvent::EditApproved { service_id, .. } => {
            *service_id
        }
        _ => unreachable!("approve_edit returns EditApproved"),
    };

    ctx.engine.process(event).await;

    fetch_service(ctx, service_id).await
}

/// Reject a pending edit with an optional reason (admin only)
pub async fn reject_service_edit(
    ctx: &GraphQLContext,
    edit_id: String,
    reason: Option<String>,
) -> FieldResult<ServiceEditData> {
    info!(edit_id = %edit_id, "Rejecting service edit");

    ctx.require_admin()?;

    let id = parse_edit_id(&edit_id)?;

    let event = actions::reject_edit(id, reason, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to reject edit: {}", e),
                juniper::Value::null(),
            )
        })?;

    ctx.engine.process(event).await;

    let edit = crate::domains::services::models::ServiceEdit::find_by_id(id, &ctx.db_pool)
        .await
        .map_err(|e| {
            FieldError::new(format!("Failed to load edit: {}", e), juniper::Value::null())
        })?;

    Ok(ServiceEditData::from(edit))
}

/// Create or refresh catalog metadata for a (type, brand, model) triple
/// (admin only)
pub async fn upsert_service_model(
    ctx: &GraphQLContext,
    input: UpsertServiceModelInput,
) -> FieldResult<ServiceModelData> {
    ctx.require_admin()?;

    let service_type = parse_service_type(&input.service_type)?;

    let model = actions::upsert_service_model(
        service_type,
        input.brand,
        input.model,
        input.description,
        input.hero_image,
        ctx.deps(),
    )
    .await
    .map_err(|e| {
        FieldError::new(
            format!("Failed to upsert service model: {}", e),
            juniper::Value::null(),
        )
    })?;

    Ok(ServiceModelData::from(model))
}

fn parse_service_id(raw: &str) -> FieldResult<ServiceId> {
    ServiceId::parse(raw)
        .map_err(|_| FieldError::new("Invalid service ID", juniper::Value::null()))
}

fn parse_edit_id(raw: &str) -> FieldResult<EditId> {
    EditId::parse(raw).map_err(|_| FieldError::new("Invalid edit ID", juniper::Value::null()))
}

fn parse_features(raw: &str) -> FieldResult<ServiceFeatures> {
    serde_json::from_str::<ServiceFeatures>(raw).map_err(|e| {
        FieldError::new(
            format!("Invalid features JSON: {}", e),
            juniper::Value::null(),
        )
    })
}

async fn fetch_service(ctx: &GraphQLContext, id: ServiceId) -> FieldResult<ServiceData> {
    let service = Service::find_by_id(id, &ctx.db_pool).await.map_err(|e| {
        FieldError::new(
            format!("Failed to load service: {}", e),
            juniper::Value::null(),
        )
    })?;
    Ok(ServiceData::from(service))
}
