use std::env;
use std::error::Error;
use std::process;

use tokio::net::TcpListener;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use teller::api;
use teller::ServerConfig;

#[tokio::main]
async fn main() {
    if let Err(err) = serve().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn serve() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_max_level(config.max_level())
        .init();

    let app = api::router(api::new_shared_store()).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
