use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    teraboxbot::run().await
}
