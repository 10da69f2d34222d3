use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use log::{info, warn};

use tm_core::services::mail::Mailer;
use tm_infra::mail::{MockMailer, ResendMailer};
use tm_shared::config::{EmailConfig, Environment, ServerConfig};

mod app;
mod dto;
mod handlers;
mod middleware;
mod routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting TrackMail API server");

    let environment = Environment::from_env();
    let server_config = ServerConfig::from_env();
    let email_config = EmailConfig::from_env(environment);

    info!("Environment: {}", environment);

    // Select the mail provider: Resend when a key is configured, the
    // logging mock otherwise.
    match email_config.resend_api_key.clone() {
        Some(api_key) => {
            info!("Mail provider: Resend");
            run(Arc::new(ResendMailer::new(api_key)), server_config, email_config).await
        }
        None => {
            warn!("RESEND_API_KEY not set; outgoing mail goes to the mock mailer");
            run(Arc::new(MockMailer::new()), server_config, email_config).await
        }
    }
}

async fn run<M: Mailer + 'static>(
    mailer: Arc<M>,
    server_config: ServerConfig,
    email_config: EmailConfig,
) -> std::io::Result<()> {
    let state = web::Data::new(app::build_state(mailer, &email_config));

    let bind_address = server_config.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = server_config.workers;
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(middleware::cors::create_cors())
            .app_data(state.clone())
            .configure(app::configure::<M>)
            .default_service(web::route().to(handlers::not_found))
    })
    .bind(&bind_address)?;

    if workers > 0 {
        server = server.workers(workers);
    }

    server.run().await
}
