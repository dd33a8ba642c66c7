use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::{
    ClientListQuery, ClientReader, ClientWriter, DieselRepository, errors::RepositoryResult,
};
use crate::schema::clients;

/// Appends every supplied filter with OR: string filters match as
/// substrings, the age filter matches exactly. Generic over the select
/// clause so the same allow-list drives both the page query and the
/// count query.
fn apply_filters<'a, ST>(
    mut q: clients::BoxedQuery<'a, Sqlite, ST>,
    query: &ClientListQuery,
) -> clients::BoxedQuery<'a, Sqlite, ST> {
    if let Some(name) = &query.name {
        q = q.or_filter(clients::name.like(format!("%{name}%")));
    }
    if let Some(email) = &query.email {
        q = q.or_filter(clients::email.like(format!("%{email}%")));
    }
    if let Some(phone) = &query.phone {
        q = q.or_filter(clients::phone.like(format!("%{phone}%")));
    }
    if let Some(age) = query.age {
        q = q.or_filter(clients::age.eq(age));
    }
    q
}

impl ClientReader for DieselRepository {
    fn get_client_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;

        let mut conn = self.conn()?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn list_clients(&self, query: ClientListQuery) -> RepositoryResult<(usize, Vec<Client>)> {
        use crate::models::client::Client as DbClient;

        let mut conn = self.conn()?;

        let total: i64 = apply_filters(
            clients::table.select(diesel::dsl::count_star()).into_boxed(),
            &query,
        )
        .first(&mut conn)?;

        let mut items_query = apply_filters(clients::table.into_boxed(), &query);
        if let Some(pagination) = query.pagination {
            items_query = items_query
                .limit(pagination.limit())
                .offset(pagination.offset());
        }

        let items = items_query
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Client>>();

        Ok((total as usize, items))
    }
}

impl ClientWriter for DieselRepository {
    fn create_client(&self, new_client: &NewClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, NewClient as DbNewClient};

        let mut conn = self.conn()?;
        let insertable: DbNewClient = new_client.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }

    fn update_client(&self, client_id: i32, updates: &UpdateClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, UpdateClient as DbUpdateClient};

        let mut conn = self.conn()?;
        let db_updates: DbUpdateClient = updates.into();

        let updated = diesel::update(clients::table.find(client_id))
            .set(&db_updates)
            .get_result::<DbClient>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_client(&self, client_id: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let affected = diesel::delete(clients::table.find(client_id)).execute(&mut conn)?;
        Ok(affected)
    }
}
