//! SQLite storage for orders.

use crate::framework::{ResourceStore, StoreError};
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;
use sqlx::SqlitePool;

/// `orders` table. `user_id` carries no foreign key; the user lives in another service.
pub struct SqliteOrderStore {
    pool: SqlitePool,
}

impl SqliteOrderStore {
    /// Creates the table if it does not exist yet.
    pub async fn init(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS orders (\
                 id INTEGER PRIMARY KEY AUTOINCREMENT, \
                 user_id INTEGER NOT NULL, \
                 product TEXT NOT NULL\
             )",
        )
        .execute(&pool)
        .await?;
        Ok(Self { pool })
    }
}

#[async_trait]
impl ResourceStore<Order> for SqliteOrderStore {
    async fn list(&mut self) -> Result<Vec<Order>, StoreError> {
        let orders =
            sqlx::query_as::<_, Order>("SELECT id, user_id, product FROM orders ORDER BY id")
                .fetch_all(&self.pool)
                .await?;
        Ok(orders)
    }

    async fn fetch(&mut self, id: &OrderId) -> Result<Option<Order>, StoreError> {
        let order =
            sqlx::query_as::<_, Order>("SELECT id, user_id, product FROM orders WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(order)
    }

    async fn insert(&mut self, params: OrderCreate) -> Result<Order, StoreError> {
        let order = sqlx::query_as::<_, Order>(
            "INSERT INTO orders (user_id, product) VALUES (?, ?) RETURNING id, user_id, product",
        )
        .bind(params.user_id)
        .bind(&params.product)
        .fetch_one(&self.pool)
        .await?;
        Ok(order)
    }

    async fn save(&mut self, order: &Order) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE orders SET product = ? WHERE id = ?")
            .bind(&order.product)
            .bind(order.id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::Backend(format!("no record {} to save", order.id)));
        }
        Ok(())
    }

    async fn remove(&mut self, id: &OrderId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserId;

    #[tokio::test]
    async fn orders_are_listed_in_id_order() {
        let pool = crate::db::connect("sqlite::memory:").await.unwrap();
        let mut store = SqliteOrderStore::init(pool).await.unwrap();

        for product in ["Book", "Pen"] {
            store
                .insert(OrderCreate {
                    user_id: UserId(1),
                    product: product.into(),
                })
                .await
                .unwrap();
        }

        let products: Vec<_> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|o| o.product)
            .collect();
        assert_eq!(products, ["Book", "Pen"]);
        assert_eq!(store.fetch(&OrderId(3)).await.unwrap(), None);
    }
}
