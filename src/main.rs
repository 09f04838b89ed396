mod config;
mod error;
mod model;
mod web;

use std::sync::Arc;
use actix_web::dev::Service;
use actix_web::{App, HttpServer, web::Data};
use dotenv::dotenv;
use log::{info, error};

use config::Config;
use model::{GeminiModel, ModelManager};
use web::{routes, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting Tina insurance advisor relay");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {:#}", e);
            std::process::exit(1);
        }
    };
    info!("Loaded configuration: {:?}", config);

    // Initialize the model client once; every worker shares it
    let model = match GeminiModel::new(&config) {
        Ok(model) => {
            info!("Gemini client initialized");
            ModelManager::new(Arc::new(model))
        }
        Err(e) => {
            error!("Failed to initialize Gemini client: {:#}", e);
            std::process::exit(1);
        }
    };

    let app_state = Data::new(AppState { model });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap_fn(|req, srv| {
                web::log_request(&req);
                srv.call(req)
            })
            .wrap(web::cors())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?;

    info!("Server running on http://{}:{}", config.host, config.port);
    server.run().await
}
