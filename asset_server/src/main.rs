#[tokio::main]
async fn main() -> std::io::Result<()> {
    asset_server::run_with_config().await
}
