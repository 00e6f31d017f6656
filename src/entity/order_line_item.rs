//! Order line item entity - one menu selection within an order
//!
//! Table: order_line_item

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_line_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i64,

    pub order_id: i64,

    pub menu_id: i64,

    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemResponse {
    pub seq: i64,
    pub order_id: i64,
    pub menu_id: i64,
    pub quantity: i64,
}

impl From<Model> for OrderLineItemResponse {
    fn from(model: Model) -> Self {
        Self {
            seq: model.seq,
            order_id: model.order_id,
            menu_id: model.menu_id,
            quantity: model.quantity,
        }
    }
}
