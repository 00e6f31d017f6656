use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entity::order_table;

pub struct OrderTableStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderTableStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(
        &self,
        number_of_guests: i32,
        empty: bool,
    ) -> Result<order_table::Model, DbErr> {
        order_table::ActiveModel {
            table_group_id: Set(None),
            number_of_guests: Set(number_of_guests),
            empty: Set(empty),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Write back every mutable column of an existing table.
    pub async fn update(&self, table: &order_table::Model) -> Result<order_table::Model, DbErr> {
        order_table::ActiveModel {
            id: Unchanged(table.id),
            table_group_id: Set(table.table_group_id),
            number_of_guests: Set(table.number_of_guests),
            empty: Set(table.empty),
        }
        .update(self.conn)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<order_table::Model>, DbErr> {
        order_table::Entity::find_by_id(id).one(self.conn).await
    }

    pub async fn find_all(&self) -> Result<Vec<order_table::Model>, DbErr> {
        order_table::Entity::find()
            .order_by_asc(order_table::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_all_by_id_in(&self, ids: Vec<i64>) -> Result<Vec<order_table::Model>, DbErr> {
        order_table::Entity::find()
            .filter(order_table::Column::Id.is_in(ids))
            .order_by_asc(order_table::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn find_all_by_table_group_id(
        &self,
        table_group_id: i64,
    ) -> Result<Vec<order_table::Model>, DbErr> {
        order_table::Entity::find()
            .filter(order_table::Column::TableGroupId.eq(table_group_id))
            .order_by_asc(order_table::Column::Id)
            .all(self.conn)
            .await
    }
}
