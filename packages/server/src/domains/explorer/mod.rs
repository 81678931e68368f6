//! Explorer domain: the breadcrumb-driven drill-down used across the four
//! admin taxonomies (services, properties, users, bookings).

pub mod data;
pub mod edges;
pub mod path;
pub mod resolver;
pub mod session;

pub use path::BreadcrumbPath;
pub use resolver::{ExplorerFolder, ExplorerLeaves, ExplorerLevel, Taxonomy};
pub use session::{ExplorerSession, FetchTicket};
