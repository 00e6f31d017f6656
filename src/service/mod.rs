//! Application services
//!
//! Each operation validates its input in a fixed order, failing fast with a
//! named `KitchenError`, and wraps multi-row writes in one transaction.

use crate::error::KitchenError;

pub mod menu;
pub mod menu_group;
pub mod menu_validator;
pub mod order;
pub mod product;
pub mod table;
pub mod table_group;

pub use menu::MenuService;
pub use menu_group::MenuGroupService;
pub use menu_validator::MenuValidator;
pub use order::OrderService;
pub use product::ProductService;
pub use table::TableService;
pub use table_group::TableGroupService;

fn require_name(name: String) -> Result<String, KitchenError> {
    if name.trim().is_empty() {
        return Err(KitchenError::BlankName);
    }
    Ok(name)
}
