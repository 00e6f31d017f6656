use sea_orm::sea_query::TableCreateStatement;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr, Schema,
    Statement,
};
use std::time::Duration;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::entity::{
    menu, menu_group, menu_product, order_line_item, order_table, orders, product, table_group,
};

/// Initialize database connection and auto-migrate tables
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let database_url = config.connection_url();

    info!("Connecting to {} database: {}", config.db_type, config.describe());

    let mut opt = ConnectOptions::new(&database_url);
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .acquire_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(600))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;
    info!("Database connection established");

    create_schema(&db).await?;

    Ok(db)
}

/// Create every table that does not exist yet
pub async fn create_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    info!("Running auto-migration for all entities...");

    // 1. Independent tables first
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(product::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(menu_group::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(table_group::Entity)).await?;

    // 2. Tables referencing them by id
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(menu::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(menu_product::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(order_table::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(orders::Entity)).await?;
    create_table_if_not_exists(db, backend, schema.create_table_from_entity(order_line_item::Entity)).await?;

    info!("Auto-migration completed successfully");
    Ok(())
}

/// Create a table if it doesn't exist
async fn create_table_if_not_exists(
    db: &DatabaseConnection,
    backend: DbBackend,
    mut stmt: TableCreateStatement,
) -> Result<(), DbErr> {
    stmt.if_not_exists();

    let sql = backend.build(&stmt);

    db.execute(Statement::from_string(backend, sql.to_string())).await?;

    Ok(())
}
