use juniper::{FieldError, FieldResult};
use tracing::error;

use crate::domains::explorer::data::ExplorerLevelData;
use crate::domains::explorer::resolver::{self, ExplorerLevel, Taxonomy};
use crate::server::graphql::context::GraphQLContext;

/// Resolve one explorer level (admin only).
///
/// A resolution failure is logged and answered with an empty level; bad
/// paths must never crash the console's navigation.
pub async fn query_explore(
    ctx: &GraphQLContext,
    taxonomy: String,
    path: Vec<String>,
) -> FieldResult<ExplorerLevelData> {
    ctx.require_admin()?;

    let taxonomy = taxonomy
        .parse::<Taxonomy>()
        .map_err(|e| FieldError::new(format!("{}", e), juniper::Value::null()))?;

    let level = match resolver::resolve(taxonomy, &path, &ctx.db_pool).await {
        Ok(level) => level,
        Err(e) => {
            error!(taxonomy = %taxonomy, path = ?path, "Explorer resolution failed: {}", e);
            ExplorerLevel::default()
        }
    };

    Ok(ExplorerLevelData::from(level))
}
