use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tracing::info;

use super::require_name;
use crate::entity::product::ProductResponse;
use crate::error::AppResult;
use crate::price::Price;
use crate::store::ProductStore;

#[derive(Debug, Deserialize)]
pub struct ProductCreateRequest {
    #[serde(default)]
    pub name: String,
    pub price: Option<Decimal>,
}

pub struct ProductService {
    db: DatabaseConnection,
}

impl ProductService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: ProductCreateRequest) -> AppResult<ProductResponse> {
        let name = require_name(request.name)?;
        let price = Price::try_from_option(request.price)?;

        let product = ProductStore::new(&self.db).insert(name, price).await?;
        info!("Product created: id={}, name={}, price={}", product.id, product.name, product.price);
        Ok(product.into())
    }

    pub async fn list(&self) -> AppResult<Vec<ProductResponse>> {
        let products = ProductStore::new(&self.db).find_all().await?;
        Ok(products.into_iter().map(Into::into).collect())
    }
}
