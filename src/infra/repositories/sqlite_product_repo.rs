use crate::domain::{
    models::product::{Product, ProductWithCategory},
    ports::ProductRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteProductRepo {
    pool: SqlitePool,
}

impl SqliteProductRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, name, price, description, image, stock, category_id, created_by, created_date, updated_by, updated_date";

// Category is a lookup relation only; the display name is resolved at read
// time and falls back to an empty string when the row is gone.
const JOINED: &str = "SELECT p.id, p.name, p.price, p.description, p.image, p.stock, p.category_id, \
    p.created_by, p.created_date, p.updated_by, p.updated_date, \
    COALESCE(c.name, '') AS category_name \
    FROM products p LEFT JOIN categories c ON c.id = p.category_id";

#[async_trait]
impl ProductRepository for SqliteProductRepo {
    async fn create(&self, product: &Product) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, price, description, image, stock, category_id, created_by, created_date) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}",
        ))
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .bind(&product.image)
            .bind(product.stock)
            .bind(product.category_id)
            .bind(&product.created_by)
            .bind(product.created_date)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ProductWithCategory>, AppError> {
        sqlx::query_as::<_, ProductWithCategory>(&format!("{JOINED} WHERE p.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<ProductWithCategory>, AppError> {
        sqlx::query_as::<_, ProductWithCategory>(&format!("{JOINED} ORDER BY p.id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, product: &Product) -> Result<Product, AppError> {
        sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET name = ?, price = ?, description = ?, image = ?, stock = ?, category_id = ?, \
             updated_by = ?, updated_date = ? WHERE id = ? RETURNING {COLUMNS}",
        ))
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .bind(&product.image)
            .bind(product.stock)
            .bind(product.category_id)
            .bind(&product.updated_by)
            .bind(product.updated_date)
            .bind(product.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
