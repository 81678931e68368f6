//! Entity marker types and the id aliases used across the codebase.

use crate::common::id::Id;

pub struct User;
pub struct Property;
pub struct Service;
pub struct ServiceModel;
pub struct ServiceEdit;
pub struct Booking;
pub struct Review;
pub struct Favorite;
pub struct Notification;

pub type UserId = Id<User>;
pub type PropertyId = Id<Property>;
pub type ServiceId = Id<Service>;
pub type ServiceModelId = Id<ServiceModel>;
pub type EditId = Id<ServiceEdit>;
pub type BookingId = Id<Booking>;
pub type ReviewId = Id<Review>;
pub type FavoriteId = Id<Favorite>;
pub type NotificationId = Id<Notification>;
