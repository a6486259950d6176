use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    chorecast::tui::run().await
}
