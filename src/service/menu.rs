use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Deserialize;
use tracing::info;

use super::{require_name, MenuValidator};
use crate::entity::menu::MenuResponse;
use crate::error::{AppError, AppResult, KitchenError};
use crate::price::Price;
use crate::store::{MenuGroupStore, MenuProductStore, MenuStore};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuProductRequest {
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCreateRequest {
    #[serde(default)]
    pub name: String,
    pub price: Option<Decimal>,
    pub menu_group_id: Option<i64>,
    #[serde(default)]
    pub menu_products: Vec<MenuProductRequest>,
}

pub struct MenuService {
    db: DatabaseConnection,
}

impl MenuService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, request: MenuCreateRequest) -> AppResult<MenuResponse> {
        let name = require_name(request.name)?;
        let price = Price::try_from_option(request.price)?;
        let menu_group_id = request
            .menu_group_id
            .ok_or(KitchenError::MissingField("menuGroupId"))?;

        if !MenuGroupStore::new(&self.db).exists_by_id(menu_group_id).await? {
            return Err(KitchenError::MenuGroupNotFound(menu_group_id).into());
        }

        let menu_products = request.menu_products;
        if let Some(mp) = menu_products.iter().find(|mp| mp.quantity < 0) {
            return Err(KitchenError::InvalidQuantity(mp.quantity).into());
        }

        MenuValidator::new(&self.db)
            .validate_price(&menu_products, price)
            .await?;

        let menu = self
            .db
            .transaction::<_, MenuResponse, AppError>(|txn| {
                Box::pin(async move {
                    let menu = MenuStore::new(txn).insert(name, price, menu_group_id).await?;

                    let store = MenuProductStore::new(txn);
                    let mut saved = Vec::with_capacity(menu_products.len());
                    for mp in menu_products {
                        saved.push(store.insert(menu.id, mp.product_id, mp.quantity).await?);
                    }

                    Ok(MenuResponse::new(menu, saved))
                })
            })
            .await?;

        info!(
            "Menu created: id={}, name={}, price={}, products={}",
            menu.id,
            menu.name,
            menu.price,
            menu.menu_products.len()
        );
        Ok(menu)
    }

    pub async fn list(&self) -> AppResult<Vec<MenuResponse>> {
        let menus = MenuStore::new(&self.db).find_all().await?;
        let menu_products = MenuProductStore::new(&self.db);

        let mut result = Vec::with_capacity(menus.len());
        for menu in menus {
            let products = menu_products.find_all_by_menu_id(menu.id).await?;
            result.push(MenuResponse::new(menu, products));
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::menu_group::{MenuGroupCreateRequest, MenuGroupService};
    use crate::service::product::{ProductCreateRequest, ProductService};
    use crate::service::test_support::setup_db;

    struct Fixture {
        db: DatabaseConnection,
        menu_group_id: i64,
        chicken_id: i64,
        coke_id: i64,
    }

    async fn fixture() -> Fixture {
        let db = setup_db().await;
        let menu_group_id = MenuGroupService::new(db.clone())
            .create(MenuGroupCreateRequest { name: "chicken".to_string() })
            .await
            .unwrap()
            .id;
        let products = ProductService::new(db.clone());
        let chicken_id = products
            .create(ProductCreateRequest {
                name: "fried chicken".to_string(),
                price: Some(Decimal::from(16000)),
            })
            .await
            .unwrap()
            .id;
        let coke_id = products
            .create(ProductCreateRequest {
                name: "coke".to_string(),
                price: Some(Decimal::from(1000)),
            })
            .await
            .unwrap()
            .id;
        Fixture { db, menu_group_id, chicken_id, coke_id }
    }

    fn request(f: &Fixture, price: i64) -> MenuCreateRequest {
        MenuCreateRequest {
            name: "chicken set".to_string(),
            price: Some(Decimal::from(price)),
            menu_group_id: Some(f.menu_group_id),
            menu_products: vec![
                MenuProductRequest { product_id: f.chicken_id, quantity: 2 },
                MenuProductRequest { product_id: f.coke_id, quantity: 1 },
            ],
        }
    }

    #[tokio::test]
    async fn test_create_menu() {
        let f = fixture().await;
        let service = MenuService::new(f.db.clone());

        let menu = service.create(request(&f, 33000)).await.unwrap();
        assert_eq!(menu.price, Decimal::from(33000));
        assert_eq!(menu.menu_group_id, f.menu_group_id);
        assert_eq!(menu.menu_products.len(), 2);
        assert!(menu.menu_products.iter().all(|mp| mp.menu_id == menu.id));

        let menus = service.list().await.unwrap();
        assert_eq!(menus.len(), 1);
        assert_eq!(menus[0].menu_products.len(), 2);
    }

    #[tokio::test]
    async fn test_price_above_products_rejected() {
        let f = fixture().await;
        let service = MenuService::new(f.db.clone());

        let err = service.create(request(&f, 33001)).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(KitchenError::MenuPriceExceedsProducts { .. })
        ));
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_product_rejected() {
        let f = fixture().await;
        let mut req = request(&f, 1000);
        req.menu_products.push(MenuProductRequest { product_id: 999, quantity: 1 });

        let err = MenuService::new(f.db.clone()).create(req).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::ProductNotFound(999))));
    }

    #[tokio::test]
    async fn test_unknown_menu_group_rejected() {
        let f = fixture().await;
        let mut req = request(&f, 1000);
        req.menu_group_id = Some(999);

        let err = MenuService::new(f.db.clone()).create(req).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::MenuGroupNotFound(999))));
    }

    #[tokio::test]
    async fn test_invalid_price_rejected() {
        let f = fixture().await;
        let mut req = request(&f, 0);
        req.price = Some(Decimal::from(-1));

        let err = MenuService::new(f.db.clone()).create(req).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::InvalidPrice(_))));
    }

    #[tokio::test]
    async fn test_product_sum_out_of_range_rejected() {
        let f = fixture().await;
        let expensive_id = ProductService::new(f.db.clone())
            .create(ProductCreateRequest {
                name: "gold chicken".to_string(),
                price: Some(Decimal::from(10_000_000_000_000i64)),
            })
            .await
            .unwrap()
            .id;
        let mut req = request(&f, 1);
        req.menu_products = vec![MenuProductRequest {
            product_id: expensive_id,
            quantity: 10_000_000_000_000_000,
        }];

        let service = MenuService::new(f.db.clone());
        let err = service.create(req).await.unwrap_err();
        assert!(matches!(err, AppError::Domain(KitchenError::PriceOverflow)));
        assert!(service.list().await.unwrap().is_empty());
    }
}
