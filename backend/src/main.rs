use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger};

use smart_home_backend::{APP_DESCRIPTION, APP_TITLE, VERSION, api, config::ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("{} v{} - {}", APP_TITLE, VERSION, APP_DESCRIPTION);
    log::info!("Starting server at http://{}", config.bind_address());

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .configure(api::config)
    })
    .client_request_timeout(config.client_timeout)
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
