#[tokio::main]
async fn main() -> anyhow::Result<()> {
    readalong_backend::run().await
}
