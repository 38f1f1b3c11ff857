pub mod auth;
pub mod category;
pub mod forms;
pub mod health;
pub mod order;
pub mod order_detail;
pub mod product;
pub mod user;
