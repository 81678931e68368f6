use chrono::NaiveDate;
use juniper::{FieldError, FieldResult};
use tracing::info;
use uuid::Uuid;

use crate::common::{ListingKind, PropertyId, ServiceId};
use crate::domains::bookings::actions;
use crate::domains::bookings::data::{BookingData, FavoriteData, ReviewData};
use crate::domains::bookings::models::{BookingItem, BookingSummary};
use crate::server::graphql::context::GraphQLContext;

#[derive(juniper::GraphQLInputObject)]
pub struct CreateBookingInput {
    /// "property" or "service"
    pub item_type: String,
    pub item_id: String,
    /// ISO date, e.g. 2026-08-14
    pub start_date: String,
    pub end_date: String,
    pub total_price: f64,
}

#[derive(juniper::GraphQLInputObject)]
pub struct SubmitReviewInput {
    pub item_type: String,
    pub item_id: String,
    pub rating: i32,
    pub comment: String,
}

/// Book a property or service (guest)
pub async fn create_booking(
    ctx: &GraphQLContext,
    input: CreateBookingInput,
) -> FieldResult<BookingData> {
    let user = ctx.require_user()?;

    let item = parse_item(&input.item_type, &input.item_id)?;
    let start_date = parse_date(&input.start_date)?;
    let end_date = parse_date(&input.end_date)?;

    let (booking, event) = actions::create_booking(
        user.user_id,
        item,
        start_date,
        end_date,
        input.total_price,
        ctx.deps(),
    )
    .await
    .map_err(|e| {
        FieldError::new(
            format!("Failed to create booking: {}", e),
            juniper::Value::null(),
        )
    })?;

    info!(booking_id = %booking.id, "Booking created");

    ctx.engine.process(event).await;

    let item_title = None; // title shown to admins is resolved on read
    Ok(BookingData::from(BookingSummary {
        booking,
        item_title,
    }))
}

/// Review a property or service (guest)
pub async fn submit_review(
    ctx: &GraphQLContext,
    input: SubmitReviewInput,
) -> FieldResult<ReviewData> {
    let user = ctx.require_user()?;

    let item = parse_item(&input.item_type, &input.item_id)?;

    let (review, event) = actions::submit_review(
        user.user_id,
        item,
        input.rating,
        input.comment,
        ctx.deps(),
    )
    .await
    .map_err(|e| {
        FieldError::new(
            format!("Failed to submit review: {}", e),
            juniper::Value::null(),
        )
    })?;

    ctx.engine.process(event).await;

    Ok(ReviewData::from(review))
}

/// Save a listing to favorites
pub async fn add_favorite(
    ctx: &GraphQLContext,
    item_type: String,
    item_id: String,
) -> FieldResult<FavoriteData> {
    let user = ctx.require_user()?;

    let kind = parse_kind(&item_type)?;
    let item_id = parse_uuid(&item_id)?;

    let favorite = actions::add_favorite(user.user_id, kind, item_id, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to add favorite: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(FavoriteData::from(favorite))
}

/// Remove a listing from favorites
pub async fn remove_favorite(
    ctx: &GraphQLContext,
    item_type: String,
    item_id: String,
) -> FieldResult<bool> {
    let user = ctx.require_user()?;

    let kind = parse_kind(&item_type)?;
    let item_id = parse_uuid(&item_id)?;

    actions::remove_favorite(user.user_id, kind, item_id, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to remove favorite: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(true)
}

fn parse_kind(raw: &str) -> FieldResult<ListingKind> {
    raw.parse::<ListingKind>()
        .map_err(|e| FieldError::new(format!("{}", e), juniper::Value::null()))
}

fn parse_uuid(raw: &str) -> FieldResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| FieldError::new("Invalid item ID", juniper::Value::null()))
}

fn parse_item(item_type: &str, item_id: &str) -> FieldResult<BookingItem> {
    let id = parse_uuid(item_id)?;
    Ok(match parse_kind(item_type)? {
        ListingKind::Property => BookingItem::Property(PropertyId::from_uuid(id)),
        ListingKind::Service => BookingItem::Service(ServiceId::from_uuid(id)),
    })
}

fn parse_date(raw: &str) -> FieldResult<NaiveDate> {
    raw.parse::<NaiveDate>()
        .map_err(|_| FieldError::new("Invalid date (expected YYYY-MM-DD)", juniper::Value::null()))
}
