//! Row factories for integration tests. Every fixture generates unique
//! identifying data so tests can share one database.

use server_core::common::UserRole;
use server_core::domains::properties::models::Property;
use server_core::domains::services::models::{
    Service, ServiceEdit, ServiceFeatures, ServicePatch, ServiceType,
};
use server_core::domains::users::models::User;
use sqlx::PgPool;
use uuid::Uuid;

pub async fn create_user(role: UserRole, pool: &PgPool) -> User {
    let tag = Uuid::new_v4();
    User::create(
        format!("Test {}", role),
        format!("user-{}@holibay.test", tag),
        role,
        pool,
    )
    .await
    .expect("Failed to create user")
}

pub async fn create_pending_property(host: &User, pool: &PgPool) -> Property {
    Property::create(
        host.id,
        format!("Seaside Villa {}", Uuid::new_v4()),
        "Three bedrooms, walkable beach".to_string(),
        "villa".to_string(),
        "Alanya".to_string(),
        180.0,
        vec!["https://img.holibay.test/villa.jpg".to_string()],
        pool,
    )
    .await
    .expect("Failed to create property")
}

pub async fn create_vehicle_service(
    provider: &User,
    service_type: ServiceType,
    brand: &str,
    model: &str,
    price: f64,
    pool: &PgPool,
) -> Service {
    Service::create(
        provider.id,
        service_type,
        format!("{} {}", brand, model),
        "Well maintained, full insurance".to_string(),
        price,
        vec![],
        ServiceFeatures::vehicle(brand, model),
        pool,
    )
    .await
    .expect("Failed to create service")
}

pub async fn create_pending_edit(
    service: &Service,
    proposed: ServicePatch,
    pool: &PgPool,
) -> ServiceEdit {
    ServiceEdit::create(service.id, proposed, pool)
        .await
        .expect("Failed to create service edit")
}
