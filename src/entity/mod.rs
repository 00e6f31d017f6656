//! Entity module - SeaORM entity definitions
//!
//! One module per table. Cross-table lookups are done by the stores with
//! explicit column filters rather than SeaORM relations.

pub mod menu;
pub mod menu_group;
pub mod menu_product;
pub mod order_line_item;
pub mod order_table;
pub mod orders;
pub mod product;
pub mod table_group;
