//! Catalog aggregation: flat service rows → one group per (brand, model).
//!
//! A pure fold over the input slice. Order matters and is part of the
//! contract — callers pass rows newest-first (created_at DESC) and:
//!
//! - `min_price` compares with strict `<`, so a tie keeps the earlier price;
//! - `image` is taken from the *last* processed member that has one;
//! - `year` and `features` come from the *first* member and never change.
//!
//! Grouping is case-insensitive on the concatenated brand+model text and
//! nothing else: "BMW 3 Series" and "bmw 3series" are different groups.

use std::collections::HashMap;

use serde::Serialize;

use crate::domains::services::models::{Service, ServiceFeatures};

/// Shown when no listing in the group carries an image.
pub const PLACEHOLDER_IMAGE: &str =
    "https://storage.holibay.app/object/public/static/vehicle-placeholder.png";

const UNKNOWN_BRAND: &str = "Unknown";
const UNKNOWN_MODEL: &str = "Model";

/// One (brand, model) bucket of the rental catalog. Derived, never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ModelGroup {
    pub brand: String,
    pub model: String,
    pub title: String,
    pub min_price: f64,
    pub count: i32,
    pub image: String,
    pub year: Option<i32>,
    pub features: ServiceFeatures,
}

/// Fold services into model groups. Output order is unspecified; consumers
/// re-sort by price or title as needed.
pub fn group_by_model(services: &[Service]) -> Vec<ModelGroup> {
    let mut groups: HashMap<String, ModelGroup> = HashMap::new();

    for service in services {
        let features = &service.features.0;
        let brand = features.brand().unwrap_or(UNKNOWN_BRAND);
        let model = features.model().unwrap_or(UNKNOWN_MODEL);
        let key = format!("{}{}", brand, model).to_lowercase();

        match groups.get_mut(&key) {
            Some(group) => {
                group.count += 1;
                if service.price < group.min_price {
                    group.min_price = service.price;
                }
                if let Some(image) = service.images.first() {
                    group.image = image.clone();
                }
            }
            None => {
                groups.insert(
                    key,
                    ModelGroup {
                        brand: brand.to_string(),
                        model: model.to_string(),
                        title: format!("{} {}", brand, model),
                        min_price: service.price,
                        count: 1,
                        image: service
                            .images
                            .first()
                            .cloned()
                            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
                        year: features.year(),
                        features: features.clone(),
                    },
                );
            }
        }
    }

    groups.into_values().collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sqlx::types::Json;

    use super::*;
    use crate::common::{ServiceId, UserId};
    use crate::domains::services::models::{ServiceFeatures, VehicleFeatures};

    fn vehicle_service(
        brand: Option<&str>,
        model: Option<&str>,
        price: f64,
        images: Vec<&str>,
    ) -> Service {
        let now = Utc::now();
        Service {
            id: ServiceId::new(),
            provider_id: UserId::new(),
            service_type: "car".to_string(),
            title: format!(
                "{} {}",
                brand.unwrap_or(UNKNOWN_BRAND),
                model.unwrap_or(UNKNOWN_MODEL)
            ),
            description: String::new(),
            price,
            images: images.into_iter().map(String::from).collect(),
            features: Json(ServiceFeatures::Vehicle(VehicleFeatures {
                brand: brand.map(String::from),
                model: model.map(String::from),
                year: Some(2021),
                ..Default::default()
            })),
            status: "approved".to_string(),
            rejection_reason: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_model(&[]).is_empty());
    }

    #[test]
    fn same_model_groups_with_count_and_min_price() {
        let services = vec![
            vehicle_service(Some("Fiat"), Some("Egea"), 30.0, vec![]),
            vehicle_service(Some("Fiat"), Some("Egea"), 25.0, vec![]),
        ];

        let groups = group_by_model(&services);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].count, 2);
        assert_eq!(groups[0].min_price, 25.0);
        assert_eq!(groups[0].title, "Fiat Egea");
    }

    #[test]
    fn grouping_is_case_insensitive_but_not_normalized() {
        let services = vec![
            vehicle_service(Some("BMW"), Some("3 Series"), 80.0, vec![]),
            vehicle_service(Some("bmw"), Some("3 series"), 75.0, vec![]),
            vehicle_service(Some("bmw"), Some("3series"), 70.0, vec![]),
        ];

        let groups = group_by_model(&services);
        // "3 series" folds with "3 Series"; "3series" stands alone.
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn missing_brand_and_model_fall_back_to_literals() {
        let groups = group_by_model(&[vehicle_service(None, None, 10.0, vec![])]);
        assert_eq!(groups[0].brand, "Unknown");
        assert_eq!(groups[0].model, "Model");
        assert_eq!(groups[0].title, "Unknown Model");
    }

    #[test]
    fn last_member_with_an_image_wins() {
        let services = vec![
            vehicle_service(Some("Fiat"), Some("Egea"), 30.0, vec!["first.jpg"]),
            vehicle_service(Some("Fiat"), Some("Egea"), 28.0, vec!["second.jpg"]),
            vehicle_service(Some("Fiat"), Some("Egea"), 26.0, vec![]),
        ];

        let groups = group_by_model(&services);
        assert_eq!(groups[0].image, "second.jpg");
    }

    #[test]
    fn placeholder_when_no_member_has_an_image() {
        let groups = group_by_model(&[vehicle_service(Some("Fiat"), Some("Egea"), 30.0, vec![])]);
        assert_eq!(groups[0].image, PLACEHOLDER_IMAGE);
    }

    #[test]
    fn price_tie_keeps_first_seen_price() {
        // Equal minimum prices: the strict `<` comparison never replaces the
        // value the first member set.
        let services = vec![
            vehicle_service(Some("Fiat"), Some("Egea"), 25.0, vec![]),
            vehicle_service(Some("Fiat"), Some("Egea"), 25.0, vec![]),
            vehicle_service(Some("Fiat"), Some("Egea"), 31.0, vec![]),
        ];

        let groups = group_by_model(&services);
        assert_eq!(groups[0].min_price, 25.0);
        assert_eq!(groups[0].count, 3);
    }

    #[test]
    fn year_and_features_come_from_the_first_member() {
        let mut newer = vehicle_service(Some("Fiat"), Some("Egea"), 30.0, vec![]);
        if let ServiceFeatures::Vehicle(v) = &mut newer.features.0 {
            v.year = Some(2024);
            v.seats = Some(5);
        }
        let older = vehicle_service(Some("Fiat"), Some("Egea"), 25.0, vec![]);

        // Input arrives newest-first; the 2024 listing is processed first.
        let groups = group_by_model(&[newer.clone(), older]);
        assert_eq!(groups[0].year, Some(2024));
        assert_eq!(groups[0].features, newer.features.0);
    }

    #[test]
    fn count_matches_members_per_key() {
        let services = vec![
            vehicle_service(Some("Fiat"), Some("Egea"), 30.0, vec![]),
            vehicle_service(Some("Honda"), Some("PCX"), 18.0, vec![]),
            vehicle_service(Some("Fiat"), Some("Egea"), 32.0, vec![]),
            vehicle_service(Some("Honda"), Some("PCX"), 15.0, vec![]),
            vehicle_service(Some("Honda"), Some("PCX"), 22.0, vec![]),
        ];

        let groups = group_by_model(&services);
        let egea = groups.iter().find(|g| g.model == "Egea").unwrap();
        let pcx = groups.iter().find(|g| g.model == "PCX").unwrap();
        assert_eq!(egea.count, 2);
        assert_eq!(pcx.count, 3);
        assert_eq!(egea.min_price, 30.0);
        assert_eq!(pcx.min_price, 15.0);
    }
}
