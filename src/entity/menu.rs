//! Menu entity
//!
//! Table: menu

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::menu_product;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(255))")]
    pub name: String,

    /// Advertised price, at most the sum of its products' prices at creation
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,

    pub menu_group_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Menu products are loaded by the service through menu_product::Column::MenuId

impl ActiveModelBehavior for ActiveModel {}

/// Menu together with its menu products
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub menu_group_id: i64,
    pub menu_products: Vec<menu_product::MenuProductResponse>,
}

impl MenuResponse {
    pub fn new(model: Model, menu_products: Vec<menu_product::Model>) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
            menu_group_id: model.menu_group_id,
            menu_products: menu_products.into_iter().map(Into::into).collect(),
        }
    }
}
