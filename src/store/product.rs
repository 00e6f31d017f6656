use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::product;
use crate::price::Price;

pub struct ProductStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> ProductStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(&self, name: String, price: Price) -> Result<product::Model, DbErr> {
        product::ActiveModel {
            name: Set(name),
            price: Set(price.value()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_all(&self) -> Result<Vec<product::Model>, DbErr> {
        product::Entity::find()
            .order_by_asc(product::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_by_id_in(&self, ids: Vec<i64>) -> Result<Vec<product::Model>, DbErr> {
        product::Entity::find()
            .filter(product::Column::Id.is_in(ids))
            .all(self.conn)
            .await
    }
}
