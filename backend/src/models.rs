use chrono::NaiveDateTime;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::schema::{devices, users};

#[derive(Queryable, Selectable, Identifiable, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Insert form of [`User`]. `None` fields are left to the column defaults
/// (`is_active = true`, `created_at = now()` in UTC).
#[derive(Insertable, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub hashed_password: String,
    pub is_active: Option<bool>,
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Queryable, Selectable, Identifiable, Associations)]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[diesel(table_name = devices)]
#[diesel(belongs_to(User, foreign_key = owner_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DeviceModel {
    pub id: i32,
    /// Identifier assigned by the device or its vendor
    pub device_id: String,
    pub name: String,
    pub device_type: Option<String>,
    pub status: Option<String>,
    /// Schema-less key/value document
    pub properties: Option<Value>,
    pub owner_id: Option<i32>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable, Deserialize, Debug, Clone, Default)]
#[diesel(table_name = devices)]
pub struct NewDevice {
    pub device_id: String,
    pub name: String,
    pub device_type: Option<String>,
    pub status: Option<String>,
    pub properties: Option<Value>,
    pub owner_id: Option<i32>,
    pub created_at: Option<NaiveDateTime>,
}

impl NewUser {
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        hashed_password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            hashed_password: hashed_password.into(),
            ..Default::default()
        }
    }

    /// Inserts the row and returns it with database defaults filled in
    pub fn insert(&self, conn: &mut PgConnection) -> Result<User, StoreError> {
        let user = diesel::insert_into(users::table)
            .values(self)
            .returning(User::as_returning())
            .get_result(conn)?;
        Ok(user)
    }
}

impl NewDevice {
    pub fn new(device_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn owned_by(mut self, owner_id: i32) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    pub fn insert(&self, conn: &mut PgConnection) -> Result<DeviceModel, StoreError> {
        let device = diesel::insert_into(devices::table)
            .values(self)
            .returning(DeviceModel::as_returning())
            .get_result(conn)?;
        Ok(device)
    }
}

impl User {
    pub fn find(id: i32, conn: &mut PgConnection) -> Result<Option<User>, StoreError> {
        let user = users::table
            .find(id)
            .select(User::as_select())
            .first(conn)
            .optional()?;
        Ok(user)
    }

    pub fn find_by_username(
        username: &str,
        conn: &mut PgConnection,
    ) -> Result<Option<User>, StoreError> {
        let user = users::table
            .filter(users::username.eq(username))
            .select(User::as_select())
            .first(conn)
            .optional()?;
        Ok(user)
    }

    /// Devices owned by this user, oldest first
    pub fn devices(&self, conn: &mut PgConnection) -> Result<Vec<DeviceModel>, StoreError> {
        let devices = DeviceModel::belonging_to(self)
            .select(DeviceModel::as_select())
            .order(devices::id.asc())
            .load(conn)?;
        Ok(devices)
    }

    /// Loads the devices of several users with a single query and pairs each
    /// user with its own collection. Users without devices get an empty list.
    pub fn with_devices(
        users: Vec<User>,
        conn: &mut PgConnection,
    ) -> Result<Vec<(User, Vec<DeviceModel>)>, StoreError> {
        let devices = DeviceModel::belonging_to(&users)
            .select(DeviceModel::as_select())
            .order(devices::id.asc())
            .load(conn)?;

        Ok(devices
            .grouped_by(&users)
            .into_iter()
            .zip(users)
            .map(|(devices, user)| (user, devices))
            .collect())
    }
}

impl DeviceModel {
    pub fn find_by_device_id(
        device_id: &str,
        conn: &mut PgConnection,
    ) -> Result<Option<DeviceModel>, StoreError> {
        let device = devices::table
            .filter(devices::device_id.eq(device_id))
            .select(DeviceModel::as_select())
            .first(conn)
            .optional()?;
        Ok(device)
    }

    /// The owning user, or `None` for an unowned device
    pub fn owner(&self, conn: &mut PgConnection) -> Result<Option<User>, StoreError> {
        match self.owner_id {
            Some(owner_id) => User::find(owner_id, conn),
            None => Ok(None),
        }
    }
}
