use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entity::menu_product;

pub struct MenuProductStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> MenuProductStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(
        &self,
        menu_id: i64,
        product_id: i64,
        quantity: i64,
    ) -> Result<menu_product::Model, DbErr> {
        menu_product::ActiveModel {
            menu_id: Set(menu_id),
            product_id: Set(product_id),
            quantity: Set(quantity),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_all_by_menu_id(&self, menu_id: i64) -> Result<Vec<menu_product::Model>, DbErr> {
        menu_product::Entity::find()
            .filter(menu_product::Column::MenuId.eq(menu_id))
            .order_by_asc(menu_product::Column::Seq)
            .all(self.conn)
            .await
    }
}
