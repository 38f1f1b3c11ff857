use crate::domain::{models::category::Category, ports::CategoryRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCategoryRepo {
    pool: SqlitePool,
}

impl SqliteCategoryRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

const COLUMNS: &str = "id, name, description, is_active, created_by, created_date, updated_by, updated_date";

#[async_trait]
impl CategoryRepository for SqliteCategoryRepo {
    async fn create(&self, category: &Category) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(&format!(
            "INSERT INTO categories (name, description, is_active, created_by, created_date) VALUES (?, ?, ?, ?, ?) RETURNING {COLUMNS}",
        ))
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.is_active)
            .bind(&category.created_by)
            .bind(category.created_date)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        sqlx::query_as::<_, Category>(&format!("SELECT {COLUMNS} FROM categories WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Category>, AppError> {
        sqlx::query_as::<_, Category>(&format!("SELECT {COLUMNS} FROM categories ORDER BY id ASC"))
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, category: &Category) -> Result<Category, AppError> {
        sqlx::query_as::<_, Category>(&format!(
            "UPDATE categories SET name = ?, description = ?, is_active = ?, updated_by = ?, updated_date = ? WHERE id = ? RETURNING {COLUMNS}",
        ))
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.is_active)
            .bind(&category.updated_by)
            .bind(category.updated_date)
            .bind(category.id)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
