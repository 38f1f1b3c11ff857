use crate::domain::models::{
    category::Category,
    order::{Order, OrderDetail, OrderDetailLine},
    product::{Product, ProductWithCategory},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &Category) -> Result<Category, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;
    async fn list(&self) -> Result<Vec<Category>, AppError>;
    async fn update(&self, category: &Category) -> Result<Category, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn create(&self, product: &Product) -> Result<Product, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ProductWithCategory>, AppError>;
    async fn list(&self) -> Result<Vec<ProductWithCategory>, AppError>;
    async fn update(&self, product: &Product) -> Result<Product, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
    async fn list(&self) -> Result<Vec<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order and all of its line items in one transaction.
    async fn create_with_items(&self, order: &Order, items: &[OrderDetail]) -> Result<Order, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, AppError>;
    async fn list(&self) -> Result<Vec<Order>, AppError>;
    async fn list_by_user(&self, user_id: i64) -> Result<Vec<Order>, AppError>;
    async fn update(&self, order: &Order) -> Result<Order, AppError>;
    /// Deletes the order together with its line items so no orphaned
    /// rows remain.
    async fn delete_with_items(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait OrderDetailRepository: Send + Sync {
    async fn create(&self, detail: &OrderDetail) -> Result<OrderDetailLine, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderDetailLine>, AppError>;
    async fn list(&self) -> Result<Vec<OrderDetailLine>, AppError>;
    async fn list_by_order(&self, order_id: i64) -> Result<Vec<OrderDetailLine>, AppError>;
    async fn update(&self, detail: &OrderDetail) -> Result<OrderDetail, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Writes the content under a generated collision-resistant name and
    /// returns the path relative to the configured upload root.
    async fn save(&self, content: &[u8], original_name: &str) -> Result<String, AppError>;
}
