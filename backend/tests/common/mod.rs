use diesel::pg::PgConnection;
use diesel::prelude::*;
use log::info;
use smart_home_backend::db;
use std::env;
use std::sync::Once;

static CREATE_TABLES: Once = Once::new();

/// Opens a connection to the database named by `DATABASE_URL` inside a test
/// transaction, so nothing a test inserts is ever committed.
pub fn test_connection() -> PgConnection {
    dotenvy::dotenv().ok();
    env_logger::builder().is_test(true).try_init().ok();

    let database_url = env::var("DATABASE_URL").expect("Failed to load DATABASE_URL from .env");

    CREATE_TABLES.call_once(|| {
        let mut conn = db::establish(&database_url).expect("Couldn't connect to test database");
        db::create_tables(&mut conn).expect("Couldn't create tables");
    });

    let mut conn = db::establish(&database_url).expect("Couldn't connect to test database");
    conn.begin_test_transaction().expect("Couldn't begin test transaction");

    info!("Using DB {:?}", database_url);
    conn
}
