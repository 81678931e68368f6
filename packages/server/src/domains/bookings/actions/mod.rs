//! Booking domain actions - business logic functions

use anyhow::Result;
use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::common::{BookingStatus, ListingKind, UserId};
use crate::domains::bookings::events::BookingEvent;
use crate::domains::bookings::models::{Booking, BookingItem, BookingSummary, Favorite, Review};
use crate::domains::properties::models::Property;
use crate::domains::services::models::Service;
use crate::kernel::ServerDeps;

/// Owner and title of the listing an item reference points at.
async fn resolve_item(item: BookingItem, deps: &ServerDeps) -> Result<(UserId, String)> {
    match item {
        BookingItem::Property(id) => {
            let property = Property::find_by_id(id, &deps.db_pool).await?;
            Ok((property.host_id, property.title))
        }
        BookingItem::Service(id) => {
            let service = Service::find_by_id(id, &deps.db_pool).await?;
            Ok((service.provider_id, service.title))
        }
    }
}

/// Guest books a property or service.
/// Returns the booking and a BookingCreated event for the owner.
pub async fn create_booking(
    guest_id: UserId,
    item: BookingItem,
    start_date: NaiveDate,
    end_date: NaiveDate,
    total_price: f64,
    deps: &ServerDeps,
) -> Result<(Booking, BookingEvent)> {
    info!(guest_id = %guest_id, "Creating booking");

    if end_date < start_date {
        anyhow::bail!("Booking ends before it starts");
    }

    let (owner_id, item_title) = resolve_item(item, deps).await?;

    let booking = Booking::create(
        guest_id,
        item,
        start_date,
        end_date,
        total_price,
        &deps.db_pool,
    )
    .await?;

    let event = BookingEvent::BookingCreated {
        booking_id: booking.id,
        guest_id,
        owner_id,
        item_title,
    };

    Ok((booking, event))
}

/// Guest reviews a property or service.
/// Returns the review and a ReviewSubmitted event for the owner.
pub async fn submit_review(
    author_id: UserId,
    item: BookingItem,
    rating: i32,
    comment: String,
    deps: &ServerDeps,
) -> Result<(Review, BookingEvent)> {
    info!(author_id = %author_id, rating = rating, "Submitting review");

    if !(1..=5).contains(&rating) {
        anyhow::bail!("Rating must be between 1 and 5");
    }

    let (owner_id, item_title) = resolve_item(item, deps).await?;

    let review = Review::create(
        author_id,
        item.kind(),
        item.raw_id(),
        rating,
        comment,
        &deps.db_pool,
    )
    .await?;

    let event = BookingEvent::ReviewSubmitted {
        review_id: review.id,
        author_id,
        owner_id,
        item_title,
        rating,
    };

    Ok((review, event))
}

/// Bookings with a given status, display titles resolved in a batch.
/// Note: Admin auth is checked at the GraphQL layer
pub async fn get_bookings_by_status(
    status: BookingStatus,
    deps: &ServerDeps,
) -> Result<Vec<BookingSummary>> {
    let bookings = Booking::find_by_status(status, &deps.db_pool).await?;
    Booking::with_titles(bookings, &deps.db_pool).await
}

/// Save a listing to the user's favorites.
pub async fn add_favorite(
    user_id: UserId,
    kind: ListingKind,
    item_id: Uuid,
    deps: &ServerDeps,
) -> Result<Favorite> {
    Favorite::add(user_id, kind, item_id, &deps.db_pool).await
}

/// Remove a listing from the user's favorites.
pub async fn remove_favorite(
    user_id: UserId,
    kind: ListingKind,
    item_id: Uuid,
    deps: &ServerDeps,
) -> Result<()> {
    Favorite::remove(user_id, kind, item_id, &deps.db_pool).await
}

/// The user's saved listings.
pub async fn get_favorites(user_id: UserId, deps: &ServerDeps) -> Result<Vec<Favorite>> {
    Favorite::find_by_user(user_id, &deps.db_pool).await
}
