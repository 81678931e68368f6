//! GraphQL types for the services domain. Feature bags cross the wire as
//! JSON strings; clients and admins already speak that shape.

use juniper::GraphQLObject;

use crate::domains::services::catalog::ModelGroup;
use crate::domains::services::models::{Service, ServiceEdit, ServiceModel};

#[derive(Debug, Clone, GraphQLObject)]
pub struct ServiceData {
    pub id: String,
    pub provider_id: String,
    pub service_type: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub images: Vec<String>,
    pub features: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: String,
}

impl From<Service> for ServiceData {
    fn from(service: Service) -> Self {
        let features = serde_json::to_string(&service.features.0).unwrap_or_default();
        Self {
            id: service.id.to_string(),
            provider_id: service.provider_id.to_string(),
            service_type: service.service_type,
            title: service.title,
            description: service.description,
            price: service.price,
            images: service.images,
            features,
            status: service.status,
            rejection_reason: service.rejection_reason,
            created_at: service.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct ServiceModelData {
    pub id: String,
    pub service_type: String,
    pub brand: String,
    pub model: String,
    pub description: String,
    pub hero_image: Option<String>,
}

impl From<ServiceModel> for ServiceModelData {
    fn from(model: ServiceModel) -> Self {
        Self {
            id: model.id.to_string(),
            service_type: model.service_type,
            brand: model.brand,
            model: model.model,
            description: model.description,
            hero_image: model.hero_image,
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct ServiceEditData {
    pub id: String,
    pub service_id: String,
    pub proposed: String,
    pub status: String,
    pub reason: Option<String>,
    pub created_at: String,
}

impl From<ServiceEdit> for ServiceEditData {
    fn from(edit: ServiceEdit) -> Self {
        let proposed = serde_json::to_string(&edit.proposed.0).unwrap_or_default();
        Self {
            id: edit.id.to_string(),
            service_id: edit.service_id.to_string(),
            proposed,
            status: edit.status,
            reason: edit.reason,
            created_at: edit.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct ModelGroupData {
    pub brand: String,
    pub model: String,
    pub title: String,
    pub min_price: f64,
    pub count: i32,
    pub image: String,
    pub year: Option<i32>,
    pub features: String,
}

impl From<ModelGroup> for ModelGroupData {
    fn from(group: ModelGroup) -> Self {
        let features = serde_json::to_string(&group.features).unwrap_or_default();
        Self {
            brand: group.brand,
            model: group.model,
            title: group.title,
            min_price: group.min_price,
            count: group.count,
            image: group.image,
            year: group.year,
            features,
        }
    }
}
