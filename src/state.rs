use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;
use crate::service::{
    MenuGroupService, MenuService, OrderService, ProductService, TableGroupService, TableService,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    pub fn products(&self) -> ProductService {
        ProductService::new(self.db.clone())
    }

    pub fn menu_groups(&self) -> MenuGroupService {
        MenuGroupService::new(self.db.clone())
    }

    pub fn menus(&self) -> MenuService {
        MenuService::new(self.db.clone())
    }

    pub fn orders(&self) -> OrderService {
        OrderService::new(self.db.clone())
    }

    pub fn tables(&self) -> TableService {
        TableService::new(self.db.clone())
    }

    pub fn table_groups(&self) -> TableGroupService {
        TableGroupService::new(self.db.clone())
    }
}
