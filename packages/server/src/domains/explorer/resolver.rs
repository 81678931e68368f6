//! Depth-indexed resolution: breadcrumb path → the next level's rows.
//!
//! Each taxonomy hardcodes what its depths mean; there is no generic tree.
//! Every call is exactly one fetch for the level the path points at.

use anyhow::Result;
use sqlx::PgPool;

use crate::common::{BookingStatus, UserRole};
use crate::domains::bookings::models::{Booking, BookingSummary};
use crate::domains::properties::models::Property;
use crate::domains::services::models::{Service, ServiceModel, ServiceType};
use crate::domains::users::models::User;

/// The four admin drill-down tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Taxonomy {
    Services,
    Properties,
    Users,
    Bookings,
}

impl std::fmt::Display for Taxonomy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Taxonomy::Services => write!(f, "services"),
            Taxonomy::Properties => write!(f, "properties"),
            Taxonomy::Users => write!(f, "users"),
            Taxonomy::Bookings => write!(f, "bookings"),
        }
    }
}

impl std::str::FromStr for Taxonomy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "services" => Ok(Taxonomy::Services),
            "properties" => Ok(Taxonomy::Properties),
            "users" => Ok(Taxonomy::Users),
            "bookings" => Ok(Taxonomy::Bookings),
            _ => Err(anyhow::anyhow!("Invalid taxonomy: {}", s)),
        }
    }
}

/// A drillable entry at the current level, decorated with catalog metadata
/// where the services taxonomy has any.
#[derive(Debug, Clone, PartialEq)]
pub struct ExplorerFolder {
    pub label: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl ExplorerFolder {
    fn plain(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: None,
            image: None,
        }
    }
}

/// Leaf rows, present only at a taxonomy's maximum depth.
#[derive(Debug, Clone, Default)]
pub enum ExplorerLeaves {
    #[default]
    None,
    Services(Vec<Service>),
    Properties(Vec<Property>),
    Users(Vec<User>),
    Bookings(Vec<BookingSummary>),
}

/// Everything the console shows for one breadcrumb position.
#[derive(Debug, Clone, Default)]
pub struct ExplorerLevel {
    pub folders: Vec<ExplorerFolder>,
    pub leaves: ExplorerLeaves,
}

impl ExplorerLevel {
    fn folders(folders: Vec<ExplorerFolder>) -> Self {
        Self {
            folders,
            leaves: ExplorerLeaves::None,
        }
    }

    fn leaves(leaves: ExplorerLeaves) -> Self {
        Self {
            folders: Vec::new(),
            leaves,
        }
    }
}

/// Resolve the level a path points at. One fetch per call.
pub async fn resolve(taxonomy: Taxonomy, segments: &[String], pool: &PgPool) -> Result<ExplorerLevel> {
    match taxonomy {
        Taxonomy::Services => resolve_services(segments, pool).await,
        Taxonomy::Properties => resolve_properties(segments, pool).await,
        Taxonomy::Users => resolve_users(segments, pool).await,
        Taxonomy::Bookings => resolve_bookings(segments, pool).await,
    }
}

/// services: type → brand → model → leaf rows
async fn resolve_services(segments: &[String], pool: &PgPool) -> Result<ExplorerLevel> {
    match segments {
        [] => Ok(ExplorerLevel::folders(
            ServiceType::ALL
                .iter()
                .map(|t| ExplorerFolder::plain(t.to_string()))
                .collect(),
        )),
        [service_type] => {
            let service_type: ServiceType = service_type.parse()?;
            let brands = Service::distinct_brands(service_type, pool).await?;
            Ok(ExplorerLevel::folders(
                brands.into_iter().map(ExplorerFolder::plain).collect(),
            ))
        }
        [service_type, brand] => {
            let service_type: ServiceType = service_type.parse()?;
            let models = Service::distinct_models(service_type, brand, pool).await?;
            // Decorate each model with its editorial metadata, one query for
            // the whole brand.
            let metadata = ServiceModel::find_by_brand(service_type, brand, pool).await?;
            let folders = models
                .into_iter()
                .map(|model| {
                    let decoration = metadata.iter().find(|m| m.model == model);
                    ExplorerFolder {
                        label: model,
                        description: decoration.map(|m| m.description.clone()),
                        image: decoration.and_then(|m| m.hero_image.clone()),
                    }
                })
                .collect();
            Ok(ExplorerLevel::folders(folders))
        }
        [service_type, brand, model] => {
            let service_type: ServiceType = service_type.parse()?;
            let services = Service::find_by_model(service_type, brand, model, pool).await?;
            Ok(ExplorerLevel::leaves(ExplorerLeaves::Services(services)))
        }
        _ => Err(anyhow::anyhow!(
            "services taxonomy has no depth {}",
            segments.len()
        )),
    }
}

/// properties: type → location → leaf rows
async fn resolve_properties(segments: &[String], pool: &PgPool) -> Result<ExplorerLevel> {
    match segments {
        [] => {
            let types = Property::distinct_types(pool).await?;
            Ok(ExplorerLevel::folders(
                types.into_iter().map(ExplorerFolder::plain).collect(),
            ))
        }
        [property_type] => {
            let locations = Property::distinct_locations(property_type, pool).await?;
            Ok(ExplorerLevel::folders(
                locations.into_iter().map(ExplorerFolder::plain).collect(),
            ))
        }
        [property_type, location] => {
            let properties =
                Property::find_by_type_and_location(property_type, location, pool).await?;
            Ok(ExplorerLevel::leaves(ExplorerLeaves::Properties(properties)))
        }
        _ => Err(anyhow::anyhow!(
            "properties taxonomy has no depth {}",
            segments.len()
        )),
    }
}

/// users: role → leaf rows
async fn resolve_users(segments: &[String], pool: &PgPool) -> Result<ExplorerLevel> {
    match segments {
        [] => Ok(ExplorerLevel::folders(
            UserRole::ALL
                .iter()
                .map(|r| ExplorerFolder::plain(r.to_string()))
                .collect(),
        )),
        [role] => {
            let role: UserRole = role.parse()?;
            let users = User::find_by_role(role, pool).await?;
            Ok(ExplorerLevel::leaves(ExplorerLeaves::Users(users)))
        }
        _ => Err(anyhow::anyhow!(
            "users taxonomy has no depth {}",
            segments.len()
        )),
    }
}

/// bookings: status → leaf rows (titles batched per item kind)
async fn resolve_bookings(segments: &[String], pool: &PgPool) -> Result<ExplorerLevel> {
    match segments {
        [] => Ok(ExplorerLevel::folders(
            BookingStatus::ALL
                .iter()
                .map(|s| ExplorerFolder::plain(s.to_string()))
                .collect(),
        )),
        [status] => {
            let status: BookingStatus = status.parse()?;
            let bookings = Booking::find_by_status(status, pool).await?;
            let summaries = Booking::with_titles(bookings, pool).await?;
            Ok(ExplorerLevel::leaves(ExplorerLeaves::Bookings(summaries)))
        }
        _ => Err(anyhow::anyhow!(
            "bookings taxonomy has no depth {}",
            segments.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn taxonomy_roundtrip() {
        for taxonomy in [
            Taxonomy::Services,
            Taxonomy::Properties,
            Taxonomy::Users,
            Taxonomy::Bookings,
        ] {
            assert_eq!(
                Taxonomy::from_str(&taxonomy.to_string()).unwrap(),
                taxonomy
            );
        }
    }

    #[test]
    fn root_levels_of_static_taxonomies_need_no_database() {
        // Depth 0 of services/users/bookings is a static enum; only the
        // folder labels matter here.
        let services: Vec<String> = ServiceType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(services, ["car", "bike", "tour"]);

        let roles: Vec<String> = UserRole::ALL.iter().map(|r| r.to_string()).collect();
        assert_eq!(roles, ["host", "guest", "admin"]);

        let statuses: Vec<String> = BookingStatus::ALL.iter().map(|s| s.to_string()).collect();
        assert_eq!(statuses, ["pending", "confirmed", "completed", "cancelled"]);
    }
}
