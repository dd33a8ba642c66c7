use std::collections::HashMap;

use chrono::Utc;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::client::Client;
use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::repository::{
    AttachOutcome, DieselRepository, RestaurantListQuery, RestaurantReader, RestaurantWriter,
    errors::RepositoryResult,
};
use crate::schema::{clients, restaurants};

fn apply_filters<'a, ST>(
    mut q: restaurants::BoxedQuery<'a, Sqlite, ST>,
    query: &RestaurantListQuery,
) -> restaurants::BoxedQuery<'a, Sqlite, ST> {
    if let Some(name) = &query.name {
        q = q.or_filter(restaurants::name.like(format!("%{name}%")));
    }
    if let Some(address) = &query.address {
        q = q.or_filter(restaurants::address.like(format!("%{address}%")));
    }
    if let Some(capacity) = query.capacity {
        q = q.or_filter(restaurants::capacity.eq(capacity));
    }
    q
}

/// Loads the member roster for the given restaurant inside the caller's
/// connection (and therefore, when there is one, the caller's
/// transaction).
fn load_members(conn: &mut SqliteConnection, restaurant_id: i32) -> QueryResult<Vec<Client>> {
    use crate::models::client::Client as DbClient;

    Ok(clients::table
        .filter(clients::restaurant_id.eq(restaurant_id))
        .load::<DbClient>(conn)?
        .into_iter()
        .map(Into::into)
        .collect())
}

impl RestaurantReader for DieselRepository {
    fn get_restaurant_by_id(&self, id: i32) -> RepositoryResult<Option<Restaurant>> {
        use crate::models::restaurant::Restaurant as DbRestaurant;

        let mut conn = self.conn()?;
        let restaurant = restaurants::table
            .find(id)
            .first::<DbRestaurant>(&mut conn)
            .optional()?;

        match restaurant {
            Some(restaurant) => {
                let members = load_members(&mut conn, restaurant.id)?;
                Ok(Some(restaurant.into_domain(members)))
            }
            None => Ok(None),
        }
    }

    fn list_restaurants(
        &self,
        query: RestaurantListQuery,
    ) -> RepositoryResult<(usize, Vec<Restaurant>)> {
        use crate::models::client::Client as DbClient;
        use crate::models::restaurant::Restaurant as DbRestaurant;

        let mut conn = self.conn()?;

        let total: i64 = apply_filters(
            restaurants::table
                .select(diesel::dsl::count_star())
                .into_boxed(),
            &query,
        )
        .first(&mut conn)?;

        let mut items_query = apply_filters(restaurants::table.into_boxed(), &query);
        if let Some(pagination) = query.pagination {
            items_query = items_query
                .limit(pagination.limit())
                .offset(pagination.offset());
        }
        let items = items_query.load::<DbRestaurant>(&mut conn)?;

        // One roster query for the whole page instead of one per row.
        let ids: Vec<i32> = items.iter().map(|r| r.id).collect();
        let mut rosters: HashMap<i32, Vec<Client>> = HashMap::new();
        for member in clients::table
            .filter(clients::restaurant_id.eq_any(&ids))
            .load::<DbClient>(&mut conn)?
        {
            if let Some(restaurant_id) = member.restaurant_id {
                rosters.entry(restaurant_id).or_default().push(member.into());
            }
        }

        let restaurants = items
            .into_iter()
            .map(|r| {
                let members = rosters.remove(&r.id).unwrap_or_default();
                r.into_domain(members)
            })
            .collect();

        Ok((total as usize, restaurants))
    }
}

impl RestaurantWriter for DieselRepository {
    fn create_restaurant(&self, new_restaurant: &NewRestaurant) -> RepositoryResult<Restaurant> {
        use crate::models::restaurant::{
            NewRestaurant as DbNewRestaurant, Restaurant as DbRestaurant,
        };

        let mut conn = self.conn()?;
        let insertable: DbNewRestaurant = new_restaurant.into();
        let created = diesel::insert_into(restaurants::table)
            .values(&insertable)
            .get_result::<DbRestaurant>(&mut conn)?;

        Ok(created.into_domain(Vec::new()))
    }

    fn update_restaurant(
        &self,
        restaurant_id: i32,
        updates: &UpdateRestaurant,
    ) -> RepositoryResult<Restaurant> {
        use crate::models::restaurant::{
            Restaurant as DbRestaurant, UpdateRestaurant as DbUpdateRestaurant,
        };

        let mut conn = self.conn()?;
        let db_updates: DbUpdateRestaurant = updates.into();

        let updated = diesel::update(restaurants::table.find(restaurant_id))
            .set(&db_updates)
            .get_result::<DbRestaurant>(&mut conn)?;
        let members = load_members(&mut conn, updated.id)?;

        Ok(updated.into_domain(members))
    }

    fn delete_restaurant(&self, restaurant_id: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        // Membership edges go with the aggregate; orders keep their
        // foreign keys and will veto the delete instead.
        conn.immediate_transaction(|conn| {
            diesel::update(clients::table.filter(clients::restaurant_id.eq(restaurant_id)))
                .set((
                    clients::restaurant_id.eq(None::<i32>),
                    clients::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)?;

            let affected =
                diesel::delete(restaurants::table.find(restaurant_id)).execute(conn)?;
            Ok(affected)
        })
    }

    fn attach_client(
        &self,
        restaurant_id: i32,
        client_id: i32,
    ) -> RepositoryResult<AttachOutcome> {
        use crate::models::client::Client as DbClient;
        use crate::models::restaurant::Restaurant as DbRestaurant;

        let mut conn = self.conn()?;

        // An immediate transaction takes the write lock before the
        // capacity read, so concurrent membership requests against the
        // same restaurant serialize here and the read-check-write
        // sequence cannot race.
        conn.immediate_transaction(|conn| {
            let restaurant = restaurants::table
                .find(restaurant_id)
                .first::<DbRestaurant>(conn)?;

            let member_count: i64 = clients::table
                .filter(clients::restaurant_id.eq(restaurant_id))
                .count()
                .get_result(conn)?;
            if member_count >= i64::from(restaurant.capacity) {
                return Ok(AttachOutcome::CapacityReached);
            }

            let client = clients::table.find(client_id).first::<DbClient>(conn)?;
            if client.restaurant_id == Some(restaurant_id) {
                return Ok(AttachOutcome::AlreadyMember);
            }

            diesel::update(clients::table.find(client_id))
                .set((
                    clients::restaurant_id.eq(Some(restaurant_id)),
                    clients::updated_at.eq(Utc::now().naive_utc()),
                ))
                .execute(conn)?;

            let members = load_members(conn, restaurant_id)?;
            Ok(AttachOutcome::Attached(restaurant.into_domain(members)))
        })
    }
}
