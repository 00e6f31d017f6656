use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, Set};

use crate::entity::table_group;

pub struct TableGroupStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> TableGroupStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn insert(
        &self,
        created_date: chrono::NaiveDateTime,
    ) -> Result<table_group::Model, DbErr> {
        table_group::ActiveModel {
            created_date: Set(created_date),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<table_group::Model>, DbErr> {
        table_group::Entity::find_by_id(id).one(self.conn).await
    }
}
