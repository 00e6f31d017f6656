//! Menu product entity - quantity of one product inside a menu
//!
//! Table: menu_product

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i64,

    pub menu_id: i64,

    pub product_id: i64,

    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProductResponse {
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

impl From<Model> for MenuProductResponse {
    fn from(model: Model) -> Self {
        Self {
            seq: model.seq,
            menu_id: model.menu_id,
            product_id: model.product_id,
            quantity: model.quantity,
        }
    }
}
