#[tokio::main]
async fn main() -> anyhow::Result<()> {
    burger_api::run().await?;
    Ok(())
}
