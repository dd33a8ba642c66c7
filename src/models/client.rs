use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;

use crate::domain::client::{
    Client as DomainClient, NewClient as DomainNewClient, UpdateClient as DomainUpdateClient,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::clients)]
/// Diesel model for [`crate::domain::client::Client`].
pub struct Client {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub restaurant_id: Option<i32>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::clients)]
/// Insertable form of [`Client`]. Timestamps come from column defaults and
/// the membership reference always starts out unset.
pub struct NewClient<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub age: i32,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::clients)]
/// Data used when patching a [`Client`] record. `None` fields are left
/// untouched; `updated_at` is always stamped so the changeset is never
/// empty.
pub struct UpdateClient<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub age: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<Client> for DomainClient {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            email: client.email,
            phone: client.phone,
            age: client.age,
            restaurant_id: client.restaurant_id,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewClient> for NewClient<'a> {
    fn from(client: &'a DomainNewClient) -> Self {
        Self {
            name: client.name.as_str(),
            email: client.email.as_str(),
            phone: client.phone.as_str(),
            age: client.age,
        }
    }
}

impl<'a> From<&'a DomainUpdateClient> for UpdateClient<'a> {
    fn from(updates: &'a DomainUpdateClient) -> Self {
        Self {
            name: updates.name.as_deref(),
            email: updates.email.as_deref(),
            phone: updates.phone.as_deref(),
            age: updates.age,
            updated_at: Utc::now().naive_utc(),
        }
    }
}
