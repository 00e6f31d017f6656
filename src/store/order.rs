use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::entity::orders::{self, OrderStatus};

pub struct OrderStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(
        &self,
        order_table_id: i64,
        order_status: OrderStatus,
        ordered_time: chrono::NaiveDateTime,
    ) -> Result<orders::Model, DbErr> {
        orders::ActiveModel {
            order_table_id: Set(order_table_id),
            order_status: Set(order_status),
            ordered_time: Set(ordered_time),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Persist the status of an existing order.
    pub async fn update(&self, order: &orders::Model) -> Result<orders::Model, DbErr> {
        orders::ActiveModel {
            id: Unchanged(order.id),
            order_status: Set(order.order_status),
            ..Default::default()
        }
        .update(self.conn)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<orders::Model>, DbErr> {
        orders::Entity::find_by_id(id).one(self.conn).await
    }

    pub async fn find_all(&self) -> Result<Vec<orders::Model>, DbErr> {
        orders::Entity::find()
            .order_by_asc(orders::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn exists_by_order_table_id_in_and_order_status_in(
        &self,
        order_table_ids: Vec<i64>,
        statuses: Vec<OrderStatus>,
    ) -> Result<bool, DbErr> {
        let count = orders::Entity::find()
            .filter(orders::Column::OrderTableId.is_in(order_table_ids))
            .filter(orders::Column::OrderStatus.is_in(statuses))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }
}
