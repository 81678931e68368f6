//! Domain modules. Each follows the same layout: `models/` own the SQL,
//! `actions/` hold business logic and return events, `effects/` react to
//! events, `data/` carry GraphQL DTOs, `edges/` are the resolvers.

pub mod bookings;
pub mod explorer;
pub mod moderation;
pub mod notifications;
pub mod properties;
pub mod services;
pub mod users;
