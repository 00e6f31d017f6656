use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

use crate::entity::order_line_item;

pub struct OrderLineItemStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderLineItemStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(
        &self,
        order_id: i64,
        menu_id: i64,
        quantity: i64,
    ) -> Result<order_line_item::Model, DbErr> {
        order_line_item::ActiveModel {
            order_id: Set(order_id),
            menu_id: Set(menu_id),
            quantity: Set(quantity),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_all_by_order_id(
        &self,
        order_id: i64,
    ) -> Result<Vec<order_line_item::Model>, DbErr> {
        order_line_item::Entity::find()
            .filter(order_line_item::Column::OrderId.eq(order_id))
            .order_by_asc(order_line_item::Column::Seq)
            .all(self.conn)
            .await
    }
}
