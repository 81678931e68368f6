use juniper::{FieldError, FieldResult};

use crate::common::BookingStatus;
use crate::domains::bookings::actions;
use crate::domains::bookings::data::{BookingData, FavoriteData};
use crate::server::graphql::context::GraphQLContext;

/// Bookings with the given status, titles resolved (admin only)
pub async fn query_bookings(ctx: &GraphQLContext, status: String) -> FieldResult<Vec<BookingData>> {
    ctx.require_admin()?;

    let status = status
        .parse::<BookingStatus>()
        .map_err(|e| FieldError::new(format!("{}", e), juniper::Value::null()))?;

    let bookings = actions::get_bookings_by_status(status, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to fetch bookings: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(bookings.into_iter().map(BookingData::from).collect())
}

/// The calling user's saved listings
pub async fn query_my_favorites(ctx: &GraphQLContext) -> FieldResult<Vec<FavoriteData>> {
    let user = ctx.require_user()?;

    let favorites = actions::get_favorites(user.user_id, ctx.deps())
        .await
        .map_err(|e| {
            FieldError::new(
                format!("Failed to fetch favorites: {}", e),
                juniper::Value::null(),
            )
        })?;

    Ok(favorites.into_iter().map(FavoriteData::from).collect())
}
