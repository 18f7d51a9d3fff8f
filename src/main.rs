#[tokio::main]
async fn main() {
    medsift::run().await;
}
