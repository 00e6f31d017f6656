use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entity::menu;
use crate::price::Price;

pub struct MenuStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MenuStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(
        &self,
        name: String,
        price: Price,
        menu_group_id: i64,
    ) -> Result<menu::Model, DbErr> {
        menu::ActiveModel {
            name: Set(name),
            price: Set(price.value()),
            menu_group_id: Set(menu_group_id),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<menu::Model>, DbErr> {
        menu::Entity::find()
            .order_by_asc(menu::Column::Id)
            .all(self.conn)
            .await
    }

    /// Number of distinct existing menus among `ids`.
    pub async fn count_by_id_in(&self, ids: Vec<i64>) -> Result<u64, DbErr> {
        menu::Entity::find()
            .filter(menu::Column::Id.is_in(ids))
            .count(self.conn)
            .await
    }
}
