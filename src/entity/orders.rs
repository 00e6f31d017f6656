//! Order entity
//!
//! Table: orders

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::order_line_item;
use crate::error::KitchenError;

/// Order lifecycle: COOKING -> MEAL -> COMPLETION.
///
/// Only COMPLETION is terminal; other transitions are not restricted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(Some(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[sea_orm(string_value = "COOKING")]
    Cooking,
    #[sea_orm(string_value = "MEAL")]
    Meal,
    #[sea_orm(string_value = "COMPLETION")]
    Completion,
}

impl OrderStatus {
    /// Statuses that keep a table occupied.
    pub const IN_PROGRESS: [OrderStatus; 2] = [OrderStatus::Cooking, OrderStatus::Meal];

    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Completion)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub order_table_id: i64,

    pub order_status: OrderStatus,

    pub ordered_time: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// Line items are loaded through order_line_item::Column::OrderId

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn change_status(&mut self, status: OrderStatus) -> Result<(), KitchenError> {
        if self.order_status.is_terminal() {
            return Err(KitchenError::OrderAlreadyCompleted(self.id));
        }
        self.order_status = status;
        Ok(())
    }
}

/// Order together with its line items
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: i64,
    pub order_table_id: i64,
    pub order_status: OrderStatus,
    pub ordered_time: DateTime,
    pub order_line_items: Vec<order_line_item::OrderLineItemResponse>,
}

impl OrderResponse {
    pub fn new(model: Model, line_items: Vec<order_line_item::Model>) -> Self {
        Self {
            id: model.id,
            order_table_id: model.order_table_id,
            order_status: model.order_status,
            ordered_time: model.ordered_time,
            order_line_items: line_items.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(status: OrderStatus) -> Model {
        Model {
            id: 5,
            order_table_id: 1,
            order_status: status,
            ordered_time: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_status_changes_are_loose_until_completion() {
        let mut o = order(OrderStatus::Meal);
        o.change_status(OrderStatus::Cooking).unwrap();
        assert_eq!(o.order_status, OrderStatus::Cooking);
        o.change_status(OrderStatus::Completion).unwrap();
        assert_eq!(o.order_status, OrderStatus::Completion);
    }

    #[test]
    fn test_completed_order_is_terminal() {
        for target in [OrderStatus::Cooking, OrderStatus::Meal, OrderStatus::Completion] {
            let mut o = order(OrderStatus::Completion);
            assert_eq!(o.change_status(target), Err(KitchenError::OrderAlreadyCompleted(5)));
            assert_eq!(o.order_status, OrderStatus::Completion);
        }
    }

    #[test]
    fn test_status_json_names() {
        assert_eq!(serde_json::to_string(&OrderStatus::Completion).unwrap(), "\"COMPLETION\"");
        let status: OrderStatus = serde_json::from_str("\"MEAL\"").unwrap();
        assert_eq!(status, OrderStatus::Meal);
        assert!(serde_json::from_str::<OrderStatus>("\"EATING\"").is_err());
    }
}
