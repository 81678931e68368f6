//! GraphQL types for the bookings domain.

use juniper::GraphQLObject;

use crate::domains::bookings::models::{BookingSummary, Favorite, Review};

#[derive(Debug, Clone, GraphQLObject)]
pub struct BookingData {
    pub id: String,
    pub guest_id: String,
    pub item_type: String,
    pub item_id: String,
    pub item_title: Option<String>,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
    pub created_at: String,
}

impl From<BookingSummary> for BookingData {
    fn from(summary: BookingSummary) -> Self {
        let booking = summary.booking;
        Self {
            id: booking.id.to_string(),
            guest_id: booking.guest_id.to_string(),
            item_type: booking.item_type,
            item_id: booking.item_id.to_string(),
            item_title: summary.item_title,
            status: booking.status,
            start_date: booking.start_date.to_string(),
            end_date: booking.end_date.to_string(),
            total_price: booking.total_price,
            created_at: booking.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct ReviewData {
    pub id: String,
    pub author_id: String,
    pub item_type: String,
    pub item_id: String,
    pub rating: i32,
    pub comment: String,
    pub created_at: String,
}

impl From<Review> for ReviewData {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            author_id: review.author_id.to_string(),
            item_type: review.item_type,
            item_id: review.item_id.to_string(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct FavoriteData {
    pub id: String,
    pub item_type: String,
    pub item_id: String,
    pub created_at: String,
}

impl From<Favorite> for FavoriteData {
    fn from(favorite: Favorite) -> Self {
        Self {
            id: favorite.id.to_string(),
            item_type: favorite.item_type,
            item_id: favorite.item_id.to_string(),
            created_at: favorite.created_at.to_rfc3339(),
        }
    }
}
