//! GraphQL types for the users domain.

use juniper::GraphQLObject;

use crate::domains::users::models::User;

#[derive(Debug, Clone, GraphQLObject)]
pub struct UserData {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

impl From<User> for UserData {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            display_name: user.display_name,
            email: user.email,
            role: user.role,
            created_at: user.created_at.to_rfc3339(),
        }
    }
}
