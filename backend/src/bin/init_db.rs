//! Database bootstrap
//!
//! Creates the `users` and `devices` tables (and their indexes) in the
//! database named by `DATABASE_URL` if they are missing, then exits.
//! Safe to run repeatedly.
//!
//! Environment variables:
//!   DATABASE_URL - PostgreSQL connection string (required)

use smart_home_backend::{config, db};

fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let database_url = match config::database_url() {
        Ok(url) => url,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut conn = match db::establish(&database_url) {
        Ok(conn) => conn,
        Err(e) => {
            log::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = db::create_tables(&mut conn) {
        log::error!("Failed to create tables: {}", e);
        std::process::exit(1);
    }

    log::info!("Database ready");
}
