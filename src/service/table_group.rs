use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use tracing::info;

use crate::entity::orders::OrderStatus;
use crate::entity::table_group::TableGroupResponse;
use crate::error::{AppError, AppResult, KitchenError};
use crate::store::{OrderStore, OrderTableStore, TableGroupStore};

const MIN_TABLES: usize = 2;

#[derive(Debug, Deserialize)]
pub struct OrderTableIdRequest {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableGroupCreateRequest {
    #[serde(default)]
    pub order_tables: Vec<OrderTableIdRequest>,
}

pub struct TableGroupService {
    db: DatabaseConnection,
}

impl TableGroupService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Merge two or more empty, ungrouped tables. Members become occupied.
    pub async fn create(&self, request: TableGroupCreateRequest) -> AppResult<TableGroupResponse> {
        let ids: Vec<i64> = request.order_tables.iter().map(|t| t.id).collect();
        if ids.len() < MIN_TABLES {
            return Err(KitchenError::TableGroupTooSmall(ids.len()).into());
        }

        let tables = OrderTableStore::new(&self.db)
            .find_all_by_id_in(ids.clone())
            .await?;
        if tables.len() != ids.len() {
            return Err(KitchenError::OrderTablesNotFound {
                requested: ids.len(),
                found: tables.len(),
            }
            .into());
        }
        for table in &tables {
            table.ensure_groupable()?;
        }

        let created_date = chrono::Local::now().naive_local();
        let group = self
            .db
            .transaction::<_, TableGroupResponse, AppError>(|txn| {
                Box::pin(async move {
                    let group = TableGroupStore::new(txn).insert(created_date).await?;

                    let store = OrderTableStore::new(txn);
                    let mut members = Vec::with_capacity(tables.len());
                    for mut table in tables {
                        table.join_group(group.id)?;
                        members.push(store.update(&table).await?);
                    }

                    Ok(TableGroupResponse::new(group, members))
                })
            })
            .await?;

        info!("Table group created: id={}, tables={:?}", group.id, ids);
        Ok(group)
    }

    /// Release every member table, unless one still has an order cooking or
    /// being eaten.
    pub async fn ungroup(&self, table_group_id: i64) -> AppResult<()> {
        TableGroupStore::new(&self.db)
            .find_by_id(table_group_id)
            .await?
            .ok_or(KitchenError::TableGroupNotFound(table_group_id))?;

        let tables = OrderTableStore::new(&self.db)
            .find_all_by_table_group_id(table_group_id)
            .await?;
        let ids: Vec<i64> = tables.iter().map(|t| t.id).collect();

        let in_progress = OrderStore::new(&self.db)
            .exists_by_order_table_id_in_and_order_status_in(
                ids.clone(),
                OrderStatus::IN_PROGRESS.to_vec(),
            )
            .await?;
        if in_progress {
            return Err(KitchenError::OrderInProgress.into());
        }

        self.db
            .transaction::<_, (), AppError>(|txn| {
                Box::pin(async move {
                    let store = OrderTableStore::new(txn);
                    for mut table in tables {
                        table.leave_group();
                        store.update(&table).await?;
                    }
                    Ok(())
                })
            })
            .await?;

        info!("Table group {} ungrouped: tables={:?}", table_group_id, ids);
        Ok(())
    }
}
