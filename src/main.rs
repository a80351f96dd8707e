use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use std::env;
use std::net::SocketAddr;
use venturegraph::store::GraphStore;
use venturegraph::{create_app, AppState};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load .env (if present) so DATABASE_URL from file is visible
    let _ = dotenv();

    // A missing connection string is startup-fatal
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let store = GraphStore::open(&db_url)
        .await
        .expect("failed to connect to database");
    Migrator::up(store.connection(), None)
        .await
        .expect("failed to apply migrations");

    // Run our server
    let app = create_app(AppState { store });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await.unwrap();
    tracing::info!("Server running on http://127.0.0.1:3000");
    // Peer addresses feed the rate limiter's key extractor
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
