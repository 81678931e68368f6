pub mod graphql;
pub mod health;
pub mod stream;

pub use graphql::{graphql_batch_handler, graphql_handler, graphql_playground};
pub use health::health_handler;
pub use stream::stream_handler;
