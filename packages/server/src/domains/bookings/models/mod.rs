pub mod booking;
pub mod favorite;
pub mod review;

pub use booking::{Booking, BookingItem, BookingSummary};
pub use favorite::Favorite;
pub use review::Review;
