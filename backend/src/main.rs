use std::{net::SocketAddr, sync::Arc};

use backend::{AppState, catalog::Catalog, create_router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE_CATALOG_PATH: &str = "backend/data/catalog.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "backend=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog_path =
        std::env::var("CATALOG_JSON").unwrap_or_else(|_| SAMPLE_CATALOG_PATH.to_string());
    let catalog = Catalog::from_file(&catalog_path).expect("load destination catalog");
    tracing::info!(
        "loaded {} cities / {} attractions from {catalog_path}",
        catalog.cities().len(),
        catalog.attraction_count()
    );

    let state = AppState {
        catalog: Arc::new(catalog),
    };
    let app = create_router(state);

    let addr: SocketAddr = "0.0.0.0:8080".parse().expect("valid socket address");
    tracing::info!("starting backend on http://{addr}");
    axum::serve(tokio::net::TcpListener::bind(addr).await.unwrap(), app)
        .await
        .unwrap();
}
