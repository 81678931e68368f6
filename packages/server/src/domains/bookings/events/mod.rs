//! Booking domain events - FACT EVENTS ONLY
//!
//! Guest-facing engagement facts. The notifications domain watches these and
//! tells the listing owner.

use crate::common::{BookingId, ReviewId, UserId};

#[derive(Debug, Clone)]
pub enum BookingEvent {
    /// A guest booked a property or service.
    BookingCreated {
        booking_id: BookingId,
        guest_id: UserId,
        owner_id: UserId,
        item_title: String,
    },

    /// A guest reviewed a property or service.
    ReviewSubmitted {
        review_id: ReviewId,
        author_id: UserId,
        owner_id: UserId,
        item_title: String,
        rating: i32,
    },
}
