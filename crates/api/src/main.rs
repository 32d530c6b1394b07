#[tokio::main]
async fn main() {
    nexus_observability::init();

    let admin = nexus_api::app::AdminSeed::from_env();

    let app = nexus_api::app::build_app(admin);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:8080")
        .await
        .expect("failed to bind 0.0.0.0:8080");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
