pub mod sqlite_category_repo;
pub mod sqlite_order_detail_repo;
pub mod sqlite_order_repo;
pub mod sqlite_product_repo;
pub mod sqlite_user_repo;
