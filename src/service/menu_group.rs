use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::info;

use super::require_name;
use crate::entity::menu_group::MenuGroupResponse;
use crate::error::AppResult;
use crate::store::MenuGroupStore;

#[derive(Debug, Deserialize)]
pub struct MenuGroupCreateRequest {
    #[serde(default)]
    pub name: String,
}

pub struct MenuGroupService {
    db: DatabaseConnection,
}

impl MenuGroupService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: MenuGroupCreateRequest) -> AppResult<MenuGroupResponse> {
        let name = require_name(request.name)?;
        let menu_group = MenuGroupStore::new(&self.db).insert(name).await?;
        info!("Menu group created: id={}, name={}", menu_group.id, menu_group.name);
        Ok(menu_group.into())
    }

    pub async fn list(&self) -> AppResult<Vec<MenuGroupResponse>> {
        let groups = MenuGroupStore::new(&self.db).find_all().await?;
        Ok(groups.into_iter().map(Into::into).collect())
    }
}
