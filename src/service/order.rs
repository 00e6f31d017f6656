use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use tracing::{debug, info};

use crate::entity::orders::{OrderResponse, OrderStatus};
use crate::error::{AppError, AppResult, KitchenError};
use crate::store::{MenuStore, OrderLineItemStore, OrderStore, OrderTableStore};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItemRequest {
    pub menu_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreateRequest {
    pub order_table_id: Option<i64>,
    #[serde(default)]
    pub order_line_items: Vec<OrderLineItemRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusChangeRequest {
    pub order_status: Option<OrderStatus>,
}

pub struct OrderService {
    db: DatabaseConnection,
}

impl OrderService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Place an order on an occupied table.
    ///
    /// Checks run in order: line items present, quantities positive, every
    /// menu exists, table exists and is not empty.
    pub async fn create(&self, request: OrderCreateRequest) -> AppResult<OrderResponse> {
        let line_items = request.order_line_items;
        if line_items.is_empty() {
            return Err(KitchenError::EmptyOrderLineItems.into());
        }
        if let Some(item) = line_items.iter().find(|item| item.quantity < 1) {
            return Err(KitchenError::InvalidQuantity(item.quantity).into());
        }

        // Duplicate menu ids count once, so they fail this check as well
        let menu_ids: Vec<i64> = line_items.iter().map(|item| item.menu_id).collect();
        let found = MenuStore::new(&self.db).count_by_id_in(menu_ids).await?;
        if found != line_items.len() as u64 {
            return Err(KitchenError::MenuNotFound {
                requested: line_items.len(),
                found,
            }
            .into());
        }

        let order_table_id = request
            .order_table_id
            .ok_or(KitchenError::MissingField("orderTableId"))?;
        let table = OrderTableStore::new(&self.db)
            .find_by_id(order_table_id)
            .await?
            .ok_or(KitchenError::OrderTableNotFound(order_table_id))?;
        if table.empty {
            return Err(KitchenError::OrderTableEmpty(order_table_id).into());
        }

        let ordered_time = chrono::Local::now().naive_local();
        let order = self
            .db
            .transaction::<_, OrderResponse, AppError>(|txn| {
                Box::pin(async move {
                    let order = OrderStore::new(txn)
                        .insert(order_table_id, OrderStatus::Cooking, ordered_time)
                        .await?;

                    let store = OrderLineItemStore::new(txn);
                    let mut saved = Vec::with_capacity(line_items.len());
                    for item in line_items {
                        saved.push(store.insert(order.id, item.menu_id, item.quantity).await?);
                    }

                    Ok(OrderResponse::new(order, saved))
                })
            })
            .await?;

        info!(
            "Order created: id={}, table={}, line_items={}",
            order.id,
            order.order_table_id,
            order.order_line_items.len()
        );
        Ok(order)
    }

    pub async fn list(&self) -> AppResult<Vec<OrderResponse>> {
        let orders = OrderStore::new(&self.db).find_all().await?;
        let line_items = OrderLineItemStore::new(&self.db);

        let mut result = Vec::with_capacity(orders.len());
        for order in orders {
            let items = line_items.find_all_by_order_id(order.id).await?;
            result.push(OrderResponse::new(order, items));
        }
        debug!("Listed {} orders", result.len());
        Ok(result)
    }

    /// Overwrite the status of an order that is not yet completed.
    pub async fn change_order_status(
        &self,
        order_id: i64,
        request: OrderStatusChangeRequest,
    ) -> AppResult<OrderResponse> {
        let store = OrderStore::new(&self.db);
        let mut order = store
            .find_by_id(order_id)
            .await?
            .ok_or(KitchenError::OrderNotFound(order_id))?;

        let status = request
            .order_status
            .ok_or(KitchenError::MissingField("orderStatus"))?;
        let previous = order.order_status;
        order.change_status(status)?;

        let order = store.update(&order).await?;
        info!("Order {} status changed: {:?} -> {:?}", order.id, previous, order.order_status);

        let items = OrderLineItemStore::new(&self.db)
            .find_all_by_order_id(order.id)
            .await?;
        Ok(OrderResponse::new(order, items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::test_support::{create_menu, create_table, setup_db};

    fn order_request(order_table_id: i64, menu_id: i64) -> OrderCreateRequest {
        OrderCreateRequest {
            order_table_id: Some(order_table_id),
            order_line_items: vec![OrderLineItemRequest { menu_id, quantity: 1 }],
        }
    }

    fn change_to(status: OrderStatus) -> OrderStatusChangeRequest {
        OrderStatusChangeRequest { order_status: Some(status) }
    }

    #[tokio::test]
    async fn test_create() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let table_id = create_table(&db, 5, false).await;
        let service = OrderService::new(db);

        let order = service.create(order_request(table_id, menu_id)).await.unwrap();
        assert_eq!(order.order_table_id, table_id);
        assert_eq!(order.order_status, OrderStatus::Cooking);
        assert_eq!(order.order_line_items.len(), 1);
        assert_eq!(order.order_line_items[0].menu_id, menu_id);
        assert_eq!(order.order_line_items[0].order_id, order.id);
    }

    #[tokio::test]
    async fn test_create_without_line_items() {
        let db = setup_db().await;
        let table_id = create_table(&db, 5, false).await;

        let err = OrderService::new(db)
            .create(OrderCreateRequest {
                order_table_id: Some(table_id),
                order_line_items: vec![],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::EmptyOrderLineItems)));
    }

    #[tokio::test]
    async fn test_create_with_unknown_menu() {
        let db = setup_db().await;
        let table_id = create_table(&db, 5, false).await;

        let err = OrderService::new(db)
            .create(order_request(table_id, 999))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(KitchenError::MenuNotFound { requested: 1, found: 0 })
        ));
    }

    #[tokio::test]
    async fn test_create_with_duplicate_menu() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let table_id = create_table(&db, 5, false).await;

        let mut request = order_request(table_id, menu_id);
        request
            .order_line_items
            .push(OrderLineItemRequest { menu_id, quantity: 2 });
        let err = OrderService::new(db).create(request).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::MenuNotFound { .. })));
    }

    #[tokio::test]
    async fn test_create_with_zero_quantity() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let table_id = create_table(&db, 5, false).await;

        let mut request = order_request(table_id, menu_id);
        request.order_line_items[0].quantity = 0;
        let err = OrderService::new(db).create(request).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::InvalidQuantity(0))));
    }

    #[tokio::test]
    async fn test_create_on_unknown_table() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let service = OrderService::new(db);

        let err = service.create(order_request(999, menu_id)).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::OrderTableNotFound(999))));

        let err = service
            .create(OrderCreateRequest {
                order_table_id: None,
                order_line_items: vec![OrderLineItemRequest { menu_id, quantity: 1 }],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::MissingField("orderTableId"))));
    }

    #[tokio::test]
    async fn test_create_on_empty_table() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let table_id = create_table(&db, 0, true).await;
        let service = OrderService::new(db);

        let err = service.create(order_request(table_id, menu_id)).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::OrderTableEmpty(_))));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let table_id = create_table(&db, 5, false).await;
        let service = OrderService::new(db);
        service.create(order_request(table_id, menu_id)).await.unwrap();

        let orders = service.list().await.unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].order_line_items.len(), 1);
    }

    #[tokio::test]
    async fn test_change_order_status() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let table_id = create_table(&db, 5, false).await;
        let service = OrderService::new(db);
        let saved = service.create(order_request(table_id, menu_id)).await.unwrap();

        let changed = service
            .change_order_status(saved.id, change_to(OrderStatus::Meal))
            .await
            .unwrap();
        assert_eq!(changed.id, saved.id);
        assert_eq!(changed.order_table_id, table_id);
        assert_eq!(changed.order_status, OrderStatus::Meal);
        assert_eq!(changed.order_line_items.len(), 1);

        // Only completion is terminal
        let changed = service
            .change_order_status(saved.id, change_to(OrderStatus::Cooking))
            .await
            .unwrap();
        assert_eq!(changed.order_status, OrderStatus::Cooking);
    }

    #[tokio::test]
    async fn test_change_status_of_unknown_order() {
        let service = OrderService::new(setup_db().await);
        let err = service
            .change_order_status(42, change_to(OrderStatus::Meal))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::OrderNotFound(42))));
    }

    #[tokio::test]
    async fn test_change_status_after_completion() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let table_id = create_table(&db, 5, false).await;
        let service = OrderService::new(db);
        let saved = service.create(order_request(table_id, menu_id)).await.unwrap();

        service
            .change_order_status(saved.id, change_to(OrderStatus::Meal))
            .await
            .unwrap();
        service
            .change_order_status(saved.id, change_to(OrderStatus::Completion))
            .await
            .unwrap();

        for target in [OrderStatus::Meal, OrderStatus::Cooking, OrderStatus::Completion] {
            let err = service
                .change_order_status(saved.id, change_to(target))
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Domain(KitchenError::OrderAlreadyCompleted(_))));
        }
        let orders = service.list().await.unwrap();
        assert_eq!(orders[0].order_status, OrderStatus::Completion);
    }
}
