//! Order table entity - a physical seating unit
//!
//! Table: order_table
//!
//! Fields are only changed through the transition methods below so the
//! grouping and emptiness rules hold wherever a table is modified.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::KitchenError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_table")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Table group this table currently belongs to
    #[sea_orm(nullable)]
    pub table_group_id: Option<i64>,

    pub number_of_guests: i32,

    pub empty: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn is_grouped(&self) -> bool {
        self.table_group_id.is_some()
    }

    /// Grouped tables keep their emptiness until they are ungrouped.
    pub fn change_empty(&mut self, empty: bool) -> Result<(), KitchenError> {
        if self.is_grouped() {
            return Err(KitchenError::OrderTableAlreadyGrouped(self.id));
        }
        self.empty = empty;
        Ok(())
    }

    pub fn change_number_of_guests(&mut self, number_of_guests: i32) -> Result<(), KitchenError> {
        if number_of_guests < 0 {
            return Err(KitchenError::NegativeNumberOfGuests(number_of_guests));
        }
        if self.empty {
            return Err(KitchenError::OrderTableEmpty(self.id));
        }
        self.number_of_guests = number_of_guests;
        Ok(())
    }

    /// Only empty, ungrouped tables may join a table group.
    pub fn ensure_groupable(&self) -> Result<(), KitchenError> {
        if !self.empty {
            return Err(KitchenError::OrderTableNotEmpty(self.id));
        }
        if self.is_grouped() {
            return Err(KitchenError::OrderTableAlreadyGrouped(self.id));
        }
        Ok(())
    }

    pub fn join_group(&mut self, table_group_id: i64) -> Result<(), KitchenError> {
        self.ensure_groupable()?;
        self.table_group_id = Some(table_group_id);
        self.empty = false;
        Ok(())
    }

    pub fn leave_group(&mut self) {
        self.table_group_id = None;
        self.empty = false;
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTableResponse {
    pub id: i64,
    pub table_group_id: Option<i64>,
    pub number_of_guests: i32,
    pub empty: bool,
}

impl From<Model> for OrderTableResponse {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            table_group_id: model.table_group_id,
            number_of_guests: model.number_of_guests,
            empty: model.empty,
        }
    }
}
