#[tokio::main]
async fn main() {
    shop_backend::run().await;
}
