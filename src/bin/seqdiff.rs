use anyhow::Result;
use seqdiff::cli::run;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    run().await
}
