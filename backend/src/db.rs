use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::error::StoreError;

/// `users` and `devices` with their unique indexes and the owner foreign key.
/// Every statement is `IF NOT EXISTS`, so running it twice is harmless.
pub const CREATE_TABLES: &str = include_str!("../sql/create_tables.sql");

pub fn establish(database_url: &str) -> Result<PgConnection, StoreError> {
    let conn = PgConnection::establish(database_url)?;
    Ok(conn)
}

pub fn create_tables(conn: &mut PgConnection) -> Result<(), StoreError> {
    conn.batch_execute(CREATE_TABLES)?;
    log::info!("Database tables users and devices are in place");
    Ok(())
}
