use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{
    CategoryRepository, FileStore, OrderDetailRepository, OrderRepository,
    ProductRepository, UserRepository,
};
use crate::domain::services::auth_service::AuthService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub category_repo: Arc<dyn CategoryRepository>,
    pub product_repo: Arc<dyn ProductRepository>,
    pub user_repo: Arc<dyn UserRepository>,
    pub order_repo: Arc<dyn OrderRepository>,
    pub order_detail_repo: Arc<dyn OrderDetailRepository>,
    pub auth_service: Arc<AuthService>,
    pub file_store: Arc<dyn FileStore>,
}
