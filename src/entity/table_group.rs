//! Table group entity - two or more tables merged for joint ordering
//!
//! Table: table_group

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::order_table;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "table_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub created_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Members are found through order_table::Column::TableGroupId

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableGroupResponse {
    pub id: i64,
    pub created_date: DateTime,
    pub order_tables: Vec<order_table::OrderTableResponse>,
}

impl TableGroupResponse {
    pub fn new(model: Model, order_tables: Vec<order_table::Model>) -> Self {
        Self {
            id: model.id,
            created_date: model.created_date,
            order_tables: order_tables.into_iter().map(Into::into).collect(),
        }
    }
}
