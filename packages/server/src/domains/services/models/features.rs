//! Service feature bags.
//!
//! A closed tagged union selected by the service's type: vehicles (cars,
//! bikes) carry rental attributes, activities (tours) carry an itinerary.
//! Stored as JSONB; the `kind` discriminant rides inside the JSON so rows
//! deserialize unambiguously.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceFeatures {
    Vehicle(VehicleFeatures),
    Activity(ActivityFeatures),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct VehicleFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transmission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seats: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActivityFeatures {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Ordered schedule of the activity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub itinerary: Vec<ItineraryStop>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItineraryStop {
    pub time: String,
    pub description: String,
}

impl ServiceFeatures {
    pub fn vehicle(brand: &str, model: &str) -> Self {
        ServiceFeatures::Vehicle(VehicleFeatures {
            brand: Some(brand.to_string()),
            model: Some(model.to_string()),
            ..Default::default()
        })
    }

    pub fn brand(&self) -> Option<&str> {
        match self {
            ServiceFeatures::Vehicle(v) => v.brand.as_deref(),
            ServiceFeatures::Activity(_) => None,
        }
    }

    pub fn model(&self) -> Option<&str> {
        match self {
            ServiceFeatures::Vehicle(v) => v.model.as_deref(),
            ServiceFeatures::Activity(_) => None,
        }
    }

    pub fn year(&self) -> Option<i32> {
        match self {
            ServiceFeatures::Vehicle(v) => v.year,
            ServiceFeatures::Activity(_) => None,
        }
    }
}

impl Default for ServiceFeatures {
    fn default() -> Self {
        ServiceFeatures::Vehicle(VehicleFeatures::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_serializes_with_kind_tag() {
        let features = ServiceFeatures::vehicle("Fiat", "Egea");
        let json = serde_json::to_value(&features).unwrap();
        assert_eq!(json["kind"], "vehicle");
        assert_eq!(json["brand"], "Fiat");
        assert_eq!(json["model"], "Egea");
    }

    #[test]
    fn activity_roundtrip_preserves_itinerary_order() {
        let features = ServiceFeatures::Activity(ActivityFeatures {
            subcategory: Some("boat".to_string()),
            duration_hours: Some(6.0),
            difficulty: Some("easy".to_string()),
            itinerary: vec![
                ItineraryStop {
                    time: "09:00".to_string(),
                    description: "Harbor departure".to_string(),
                },
                ItineraryStop {
                    time: "12:30".to_string(),
                    description: "Lunch at the cove".to_string(),
                },
            ],
        });

        let json = serde_json::to_string(&features).unwrap();
        let back: ServiceFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(back, features);

        match back {
            ServiceFeatures::Activity(a) => {
                assert_eq!(a.itinerary[0].time, "09:00");
                assert_eq!(a.itinerary[1].time, "12:30");
            }
            _ => panic!("expected activity features"),
        }
    }

    #[test]
    fn activity_has_no_brand_or_model() {
        let features = ServiceFeatures::Activity(ActivityFeatures::default());
        assert_eq!(features.brand(), None);
        assert_eq!(features.model(), None);
    }

    #[test]
    fn missing_vehicle_fields_deserialize_as_none() {
        let features: ServiceFeatures =
            serde_json::from_str(r#"{"kind":"vehicle","brand":"BMW"}"#).unwrap();
        assert_eq!(features.brand(), Some("BMW"));
        assert_eq!(features.model(), None);
        assert_eq!(features.year(), None);
    }
}
