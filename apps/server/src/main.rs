#[tokio::main]
async fn main() -> anyhow::Result<()> {
    review_hub_server::run().await
}
