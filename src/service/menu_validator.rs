//! Menu price rule: a menu may not cost more than the products it bundles.

use std::collections::HashMap;

use sea_orm::ConnectionTrait;

use super::menu::MenuProductRequest;
use crate::error::{AppResult, KitchenError};
use crate::price::Price;
use crate::store::ProductStore;

pub struct MenuValidator<'a, C> {
    products: ProductStore<'a, C>,
}

impl<'a, C: ConnectionTrait> MenuValidator<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self {
            products: ProductStore::new(conn),
        }
    }

    /// Load the current price of every referenced product, then check the
    /// menu price against their sum.
    pub async fn validate_price(
        &self,
        menu_products: &[MenuProductRequest],
        price: Price,
    ) -> AppResult<()> {
        let mut product_ids: Vec<i64> = menu_products.iter().map(|mp| mp.product_id).collect();
        product_ids.sort_unstable();
        product_ids.dedup();

        let prices = self
            .products
            .find_by_id_in(product_ids)
            .await?
            .into_iter()
            .map(|product| -> Result<(i64, Price), KitchenError> {
                Ok((product.id, product.price()?))
            })
            .collect::<Result<HashMap<_, _>, KitchenError>>()?;

        check_price_against(menu_products, &prices, price)?;
        Ok(())
    }
}

/// Fails when `price` exceeds Σ(product price × quantity). Every product
/// id must be present in `prices`; a sum past the decimal range is
/// `PriceOverflow`.
pub fn check_price_against(
    menu_products: &[MenuProductRequest],
    prices: &HashMap<i64, Price>,
    price: Price,
) -> Result<(), KitchenError> {
    let sum = menu_products.iter().try_fold(Price::ZERO, |sum, mp| {
        let unit = prices
            .get(&mp.product_id)
            .ok_or(KitchenError::ProductNotFound(mp.product_id))?;
        sum.checked_add(unit.multiply(mp.quantity)?)
    })?;

    if price.is_greater_than(&sum) {
        return Err(KitchenError::MenuPriceExceedsProducts {
            price: price.value(),
            sum: sum.value(),
        });
    }
    Ok(())
}
