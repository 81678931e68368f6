//! GraphQL types for the properties domain.

use juniper::GraphQLObject;

use crate::domains::properties::models::Property;

#[derive(Debug, Clone, GraphQLObject)]
pub struct PropertyData {
    pub id: String,
    pub host_id: String,
    pub title: String,
    pub description: String,
    pub property_type: String,
    pub location: String,
    pub price_per_night: f64,
    pub images: Vec<String>,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: String,
}

impl From<Property> for PropertyData {
    fn from(property: Property) -> Self {
        Self {
            id: property.id.to_string(),
            host_id: property.host_id.to_string(),
            title: property.title,
            description: property.description,
            property_type: property.property_type,
            location: property.location,
            price_per_night: property.price_per_night,
            images: property.images,
            status: property.status,
            rejection_reason: property.rejection_reason,
            created_at: property.created_at.to_rfc3339(),
        }
    }
}
