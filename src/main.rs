use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::get_service;
use dotenvy::dotenv;
use http::header::{HeaderValue, CACHE_CONTROL};
use tokio::sync::RwLock;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use activity_signups::registry::ActivityRegistry;
use activity_signups::web;

#[tokio::main]
async fn main() {
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::fmt::init();

    // 2. Seed the in-memory registry
    let registry = Arc::new(RwLock::new(ActivityRegistry::seeded()));

    // 3. API routes plus the static front-end
    let app = web::app(registry).nest_service(
        "/static",
        get_service(ServeDir::new("static")).layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        )),
    );

    // 4. Start the server (with fallback port)
    let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(3000);
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .expect("Invalid host/port");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!(
                "Could not bind {}: {}. Trying fallback {}:{}",
                addr,
                e,
                host,
                port + 1
            );
            let fallback: SocketAddr = format!("{}:{}", host, port + 1)
                .parse()
                .expect("Invalid fallback address");
            tokio::net::TcpListener::bind(fallback)
                .await
                .expect("Could not bind fallback port")
        }
    };

    let bound_addr = listener.local_addr().unwrap();
    println!("Server running on http://{}", bound_addr);
    println!("Activity list at http://{}/activities", bound_addr);

    axum::serve(listener, app).await.unwrap();
}
