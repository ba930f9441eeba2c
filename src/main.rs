use donatugee::store::Store;
use donatugee::{create_app, db};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let conn = db::connect().await.expect("Failed to connect to database");

    // Missing tables are fatal; there is no point serving without them.
    let store = Store::new(conn);
    store
        .initialize_schema()
        .await
        .expect("Failed to run schema migrations");

    let app = create_app(store);

    let port = std::env::var("PORT").unwrap_or_else(|_| "8081".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .unwrap();
    tracing::info!("Server running on http://{}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
