use crate::domain::{
    models::order::{OrderDetail, OrderDetailLine},
    ports::OrderDetailRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteOrderDetailRepo {
    pool: SqlitePool,
}

impl SqliteOrderDetailRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const JOINED: &str = "SELECT d.id, d.order_id, d.product_id, d.quantity, d.price, d.sub_total, \
    COALESCE(p.name, '') AS product_name \
    FROM order_details d LEFT JOIN products p ON p.id = d.product_id";

#[async_trait]
impl OrderDetailRepository for SqliteOrderDetailRepo {
    async fn create(&self, detail: &OrderDetail) -> Result<OrderDetailLine, AppError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO order_details (order_id, product_id, quantity, price, sub_total) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
            .bind(detail.order_id)
            .bind(detail.product_id)
            .bind(detail.quantity)
            .bind(detail.price)
            .bind(detail.sub_total)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)?;

        self.find_by_id(id).await?.ok_or(AppError::Internal)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<OrderDetailLine>, AppError> {
        sqlx::query_as::<_, OrderDetailLine>(&format!("{JOINED} WHERE d.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<OrderDetailLine>, AppError> {
        sqlx::query_as::<_, OrderDetailLine>(&format!("{JOINED} ORDER BY d.id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list_by_order(&self, order_id: i64) -> Result<Vec<OrderDetailLine>, AppError> {
        sqlx::query_as::<_, OrderDetailLine>(&format!("{JOINED} WHERE d.order_id = ? ORDER BY d.id ASC"))
            .bind(order_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, detail: &OrderDetail) -> Result<OrderDetail, AppError> {
        sqlx::query_as::<_, OrderDetail>(
            "UPDATE order_details SET order_id = ?, product_id = ?, quantity = ?, price = ?, sub_total = ? \
             WHERE id = ? RETURNING id, order_id, product_id, quantity, price, sub_total",
        )
            .bind(detail.order_id)
            .bind(detail.product_id)
            .bind(detail.quantity)
            .bind(detail.price)
            .bind(detail.sub_total)
            .bind(detail.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM order_details WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
