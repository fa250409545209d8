use std::sync::Arc;

use hostfetch::net::RequestOptions;
use hostfetch::transport::{HttpTransport, NativeTransport};
use hostfetch::FetchAdapter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/".to_string());

    let transport: Arc<dyn HttpTransport> =
        Arc::new(NativeTransport::new(None).map_err(|e| anyhow::anyhow!(e))?);
    let adapter = FetchAdapter::new(Some(transport))?;

    let response = adapter.request(&url, RequestOptions::default())?.await?;

    println!("{} {}", response.status(), response.status_text());
    for (name, value) in response.headers() {
        println!("{}: {}", name, value.to_str().unwrap_or(""));
    }
    println!();
    println!("{}", response.text());

    Ok(())
}
