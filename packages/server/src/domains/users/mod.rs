//! Users domain: hosts, guests, and administrators.

pub mod data;
pub mod models;
