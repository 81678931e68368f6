//! Shared building blocks: typed ids, column enums, config, auth identity.

pub mod auth;
pub mod config;
pub mod entity_ids;
pub mod id;
pub mod types;

pub use auth::AuthUser;
pub use config::Config;
pub use entity_ids::{
    BookingId, EditId, FavoriteId, NotificationId, PropertyId, ReviewId, ServiceId,
    ServiceModelId, UserId,
};
pub use id::Id;
pub use types::{BookingStatus, ListingKind, ListingStatus, NotificationKind, UserRole};
