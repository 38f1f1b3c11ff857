use crate::domain::{
    models::order::{Order, OrderDetail},
    ports::OrderRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::error;

pub struct SqliteOrderRepo {
    pool: SqlitePool,
}

impl SqliteOrderRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, user_id, order_date, total, status, shipping_address, payment_method, created_date, updated_date";

#[async_trait]
impl OrderRepository for SqliteOrderRepo {
    async fn create_with_items(&self, order: &Order, items: &[OrderDetail]) -> Result<Order, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let created = sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO orders (user_id, order_date, total, status, shipping_address, payment_method, created_date) \
             VALUES (?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}",
        ))
            .bind(order.user_id)
            .bind(order.order_date)
            .bind(order.total)
            .bind(&order.status)
            .bind(&order.shipping_address)
            .bind(&order.payment_method)
            .bind(order.created_date)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        for item in items {
            sqlx::query(
                "INSERT INTO order_details (order_id, product_id, quantity, price, sub_total) VALUES (?, ?, ?, ?, ?)",
            )
                .bind(created.id)
                .bind(item.product_id)
                .bind(item.quantity)
                .bind(item.price)
                .bind(item.sub_total)
                .execute(&mut *tx)
                .await
                .map_err(AppError::Database)?;
        }

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError> {
        sqlx::query_as::<_, Order>(&format!("SELECT {COLUMNS} FROM orders WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Order>, AppError> {
        sqlx::query_as::<_, Order>(&format!("SELECT {COLUMNS} FROM orders ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>, AppError> {
        sqlx::query_as::<_, Order>(&format!("SELECT {COLUMNS} FROM orders WHERE user_id = ? ORDER BY id ASC"))
            .bind(user_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, order: &Order) -> Result<Order, AppError> {
        sqlx::query_as::<_, Order>(&format!(
            "UPDATE orders SET order_date = ?, total = ?, status = ?, shipping_address = ?, payment_method = ?, \
             updated_date = ? WHERE id = ? RETURNING {COLUMNS}",
        ))
            .bind(order.order_date)
            .bind(order.total)
            .bind(&order.status)
            .bind(&order.shipping_address)
            .bind(&order.payment_method)
            .bind(order.updated_date)
            .bind(order.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete_with_items(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // Line items first: the schema has no ON DELETE CASCADE, so the
        // child rows must go in the same transaction as the parent.
        sqlx::query("DELETE FROM order_details WHERE order_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        sqlx::query("DELETE FROM orders WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!("Order deletion failed: {:?}", e);
                AppError::Database(e)
            })?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(())
    }
}
