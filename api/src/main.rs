use std::env;
use std::sync::Arc;

use api::{create_router, AppState};
use estate_extractor::{ExtractionService, GeminiService};

#[tokio::main]
async fn main() {
    // Initialize environment variables and logging
    dotenv::dotenv().ok();
    env_logger::init();

    let api_key = match env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY environment variable not set");
            std::process::exit(1);
        }
    };

    let port: u16 = env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    let gemini = Arc::new(GeminiService::new(api_key));
    let extraction = Arc::new(ExtractionService::new(gemini));
    let app = create_router(AppState { extraction });

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    log::info!("Listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
