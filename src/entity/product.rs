//! Product entity
//!
//! Table: product

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::KitchenError;
use crate::price::Price;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    #[sea_orm(column_type = "String(Some(255))")]
    pub name: String,

    /// Unit price, never negative
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn price(&self) -> Result<Price, KitchenError> {
        Price::new(self.price)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

impl From<Model> for ProductResponse {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            price: model.price,
        }
    }
}
