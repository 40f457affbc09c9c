#[tokio::main]
async fn main() -> std::io::Result<()> {
    lobby_client::frameworks::probe::run_with_config()
        .await
        .inspect_err(|e| tracing::error!(error = %e, "probe failed"))
}
