use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::info;

use crate::entity::order_table::OrderTableResponse;
use crate::entity::orders::OrderStatus;
use crate::error::{AppResult, KitchenError};
use crate::store::{OrderStore, OrderTableStore};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCreateRequest {
    #[serde(default)]
    pub number_of_guests: i32,
    #[serde(default)]
    pub empty: bool,
}

#[derive(Debug, Deserialize)]
pub struct ChangeEmptyRequest {
    pub empty: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNumberOfGuestsRequest {
    pub number_of_guests: i32,
}

pub struct TableService {
    db: DatabaseConnection,
}

impl TableService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: TableCreateRequest) -> AppResult<OrderTableResponse> {
        if request.number_of_guests < 0 {
            return Err(KitchenError::NegativeNumberOfGuests(request.number_of_guests).into());
        }
        let table = OrderTableStore::new(&self.db)
            .insert(request.number_of_guests, request.empty)
            .await?;
        info!("Order table created: id={}, empty={}", table.id, table.empty);
        Ok(table.into())
    }

    pub async fn list(&self) -> AppResult<Vec<OrderTableResponse>> {
        let tables = OrderTableStore::new(&self.db).find_all().await?;
        Ok(tables.into_iter().map(Into::into).collect())
    }

    /// Grouped tables, and tables whose orders are still cooking or being
    /// eaten, keep their current emptiness.
    pub async fn change_empty(
        &self,
        order_table_id: i64,
        request: ChangeEmptyRequest,
    ) -> AppResult<OrderTableResponse> {
        let tables = OrderTableStore::new(&self.db);
        let mut table = tables
            .find_by_id(order_table_id)
            .await?
            .ok_or(KitchenError::OrderTableNotFound(order_table_id))?;

        table.change_empty(request.empty)?;

        let in_progress = OrderStore::new(&self.db)
            .exists_by_order_table_id_in_and_order_status_in(
                vec![order_table_id],
                OrderStatus::IN_PROGRESS.to_vec(),
            )
            .await?;
        if in_progress {
            return Err(KitchenError::OrderInProgress.into());
        }

        let table = tables.update(&table).await?;
        info!("Order table {} empty set to {}", table.id, table.empty);
        Ok(table.into())
    }

    pub async fn change_number_of_guests(
        &self,
        order_table_id: i64,
        request: ChangeNumberOfGuestsRequest,
    ) -> AppResult<OrderTableResponse> {
        let tables = OrderTableStore::new(&self.db);
        let mut table = tables
            .find_by_id(order_table_id)
            .await?
            .ok_or(KitchenError::OrderTableNotFound(order_table_id))?;

        table.change_number_of_guests(request.number_of_guests)?;

        let table = tables.update(&table).await?;
        info!("Order table {} guests set to {}", table.id, table.number_of_guests);
        Ok(table.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::service::order::{OrderCreateRequest, OrderLineItemRequest, OrderService};
    use crate::service::test_support::{create_menu, create_table, setup_db};

    #[tokio::test]
    async fn test_create_and_list() {
        let service = TableService::new(setup_db().await);
        let table = service.create(TableCreateRequest::default()).await.unwrap();
        assert_eq!(table.number_of_guests, 0);
        assert!(!table.empty);
        assert_eq!(table.table_group_id, None);

        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_with_negative_guests() {
        let service = TableService::new(setup_db().await);
        let err = service
            .create(TableCreateRequest { number_of_guests: -1, empty: false })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::NegativeNumberOfGuests(-1))));
    }

    #[tokio::test]
    async fn test_change_empty() {
        let db = setup_db().await;
        let table_id = create_table(&db, 0, true).await;
        let service = TableService::new(db);

        let table = service
            .change_empty(table_id, ChangeEmptyRequest { empty: false })
            .await
            .unwrap();
        assert!(!table.empty);
    }

    #[tokio::test]
    async fn test_change_empty_with_order_in_progress() {
        let db = setup_db().await;
        let menu_id = create_menu(&db).await;
        let table_id = create_table(&db, 3, false).await;
        OrderService::new(db.clone())
            .create(OrderCreateRequest {
                order_table_id: Some(table_id),
                order_line_items: vec![OrderLineItemRequest { menu_id, quantity: 1 }],
            })
            .await
            .unwrap();

        let service = TableService::new(db);
        let err = service
            .change_empty(table_id, ChangeEmptyRequest { empty: true })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::OrderInProgress)));
        assert!(!service.list().await.unwrap()[0].empty);
    }

    #[tokio::test]
    async fn test_change_empty_of_unknown_table() {
        let service = TableService::new(setup_db().await);
        let err = service
            .change_empty(7, ChangeEmptyRequest { empty: true })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::OrderTableNotFound(7))));
    }

    #[tokio::test]
    async fn test_change_number_of_guests() {
        let db = setup_db().await;
        let table_id = create_table(&db, 2, false).await;
        let service = TableService::new(db);

        let table = service
            .change_number_of_guests(table_id, ChangeNumberOfGuestsRequest { number_of_guests: 4 })
            .await
            .unwrap();
        assert_eq!(table.number_of_guests, 4);

        let err = service
            .change_number_of_guests(table_id, ChangeNumberOfGuestsRequest { number_of_guests: -1 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::NegativeNumberOfGuests(-1))));
    }

    #[tokio::test]
    async fn test_change_number_of_guests_on_empty_table() {
        let db = setup_db().await;
        let table_id = create_table(&db, 0, true).await;

        let err = TableService::new(db)
            .change_number_of_guests(table_id, ChangeNumberOfGuestsRequest { number_of_guests: 4 })
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::OrderTableEmpty(_))));
    }
}
