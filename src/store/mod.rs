//! Stores - persistence contract for each entity
//!
//! Every store borrows a `ConnectionTrait`, so the same code runs against
//! the pooled connection or inside a transaction.

pub mod menu;
pub mod menu_group;
pub mod menu_product;
pub mod order;
pub mod order_line_item;
pub mod order_table;
pub mod product;
pub mod table_group;

pub use menu::MenuStore;
pub use menu_group::MenuGroupStore;
pub use menu_product::MenuProductStore;
pub use order::OrderStore;
pub use order_line_item::OrderLineItemStore;
pub use order_table::OrderTableStore;
pub use product::ProductStore;
pub use table_group::TableGroupStore;
