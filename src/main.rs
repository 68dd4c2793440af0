#[tokio::main]
async fn main() {
    volunthero_backend::run().await;
}
