//! GraphQL types for the explorer. One flat level object: folders plus
//! whichever leaf list the taxonomy produces at its deepest level.

use juniper::GraphQLObject;

use crate::domains::bookings::data::BookingData;
use crate::domains::explorer::resolver::{ExplorerFolder, ExplorerLeaves, ExplorerLevel};
use crate::domains::properties::data::PropertyData;
use crate::domains::services::data::ServiceData;
use crate::domains::users::data::UserData;

#[derive(Debug, Clone, GraphQLObject)]
pub struct ExplorerFolderData {
    pub label: String,
    pub description: Option<String>,
    pub image: Option<String>,
}

impl From<ExplorerFolder> for ExplorerFolderData {
    fn from(folder: ExplorerFolder) -> Self {
        Self {
            label: folder.label,
            description: folder.description,
            image: folder.image,
        }
    }
}

#[derive(Debug, Clone, GraphQLObject)]
pub struct ExplorerLevelData {
    pub folders: Vec<ExplorerFolderData>,
    pub services: Vec<ServiceData>,
    pub properties: Vec<PropertyData>,
    pub users: Vec<UserData>,
    pub bookings: Vec<BookingData>,
}

impl From<ExplorerLevel> for ExplorerLevelData {
    fn from(level: ExplorerLevel) -> Self {
        let folders = level.folders.into_iter().map(ExplorerFolderData::from).collect();

        let mut services = Vec::new();
        let mut properties = Vec::new();
        let mut users = Vec::new();
        let mut bookings = Vec::new();

        match level.leaves {
            ExplorerLeaves::None => {}
            ExplorerLeaves::Services(rows) => {
                services = rows.into_iter().map(ServiceData::from).collect();
            }
            ExplorerLeaves::Properties(rows) => {
                properties = rows.into_iter().map(PropertyData::from).collect();
            }
            ExplorerLeaves::Users(rows) => {
                users = rows.into_iter().map(UserData::from).collect();
            }
            ExplorerLeaves::Bookings(rows) => {
                bookings = rows.into_iter().map(BookingData::from).collect();
            }
        }

        Self {
            folders,
            services,
            properties,
            users,
            bookings,
        }
    }
}
