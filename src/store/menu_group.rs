use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder, Set,
};

use crate::entity::menu_group;

pub struct MenuGroupStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MenuGroupStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, name: String) -> Result<menu_group::Model, DbErr> {
        menu_group::ActiveModel {
            name: Set(name),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<menu_group::Model>, DbErr> {
        menu_group::Entity::find()
            .order_by_asc(menu_group::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, DbErr> {
        Ok(menu_group::Entity::find_by_id(id).one(self.conn).await?.is_some())
    }
}
