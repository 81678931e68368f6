pub mod features;
pub mod service;
pub mod service_edit;
pub mod service_model;

pub use features::{ActivityFeatures, ItineraryStop, ServiceFeatures, VehicleFeatures};
pub use service::{Service, ServicePatch, ServiceType};
pub use service_edit::ServiceEdit;
pub use service_model::ServiceModel;
