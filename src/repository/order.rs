use diesel::prelude::*;

use crate::domain::order::{NewOrder, Order, UpdateOrder};
use crate::repository::{
    DieselRepository, OrderListQuery, OrderReader, OrderWriter, errors::RepositoryResult,
};
use crate::schema::{clients, orders, restaurants};

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>> {
        use crate::models::client::Client as DbClient;
        use crate::models::order::Order as DbOrder;
        use crate::models::restaurant::Restaurant as DbRestaurant;

        let mut conn = self.conn()?;
        let row = orders::table
            .inner_join(clients::table)
            .inner_join(restaurants::table)
            .filter(orders::id.eq(id))
            .select((
                orders::all_columns,
                clients::all_columns,
                restaurants::all_columns,
            ))
            .first::<(DbOrder, DbClient, DbRestaurant)>(&mut conn)
            .optional()?;

        Ok(row.map(Into::into))
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)> {
        use crate::models::client::Client as DbClient;
        use crate::models::order::Order as DbOrder;
        use crate::models::restaurant::Restaurant as DbRestaurant;

        let mut conn = self.conn()?;

        // The filter chain is repeated for the count query; the joined
        // boxed type does not lend itself to a shared helper the way the
        // single-table queries do.
        let mut count_query = orders::table
            .inner_join(clients::table)
            .inner_join(restaurants::table)
            .select(diesel::dsl::count_star())
            .into_boxed();
        if let Some(name) = &query.client_name {
            count_query = count_query.or_filter(clients::name.like(format!("%{name}%")));
        }
        if let Some(name) = &query.restaurant_name {
            count_query = count_query.or_filter(restaurants::name.like(format!("%{name}%")));
        }
        let total: i64 = count_query.first(&mut conn)?;

        let mut items_query = orders::table
            .inner_join(clients::table)
            .inner_join(restaurants::table)
            .select((
                orders::all_columns,
                clients::all_columns,
                restaurants::all_columns,
            ))
            .into_boxed();
        if let Some(name) = &query.client_name {
            items_query = items_query.or_filter(clients::name.like(format!("%{name}%")));
        }
        if let Some(name) = &query.restaurant_name {
            items_query = items_query.or_filter(restaurants::name.like(format!("%{name}%")));
        }
        if let Some(pagination) = query.pagination {
            items_query = items_query
                .limit(pagination.limit())
                .offset(pagination.offset());
        }

        let items = items_query
            .load::<(DbOrder, DbClient, DbRestaurant)>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect::<Vec<Order>>();

        Ok((total as usize, items))
    }
}

impl OrderWriter for DieselRepository {
    fn create_order(&self, new_order: &NewOrder) -> RepositoryResult<Order> {
        use crate::models::client::Client as DbClient;
        use crate::models::order::{NewOrder as DbNewOrder, Order as DbOrder};
        use crate::models::restaurant::Restaurant as DbRestaurant;

        let mut conn = self.conn()?;
        let insertable: DbNewOrder = new_order.into();

        let created = diesel::insert_into(orders::table)
            .values(&insertable)
            .get_result::<DbOrder>(&mut conn)?;

        let client = clients::table
            .find(created.client_id)
            .first::<DbClient>(&mut conn)?;
        let restaurant = restaurants::table
            .find(created.restaurant_id)
            .first::<DbRestaurant>(&mut conn)?;

        Ok((created, client, restaurant).into())
    }

    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order> {
        use crate::models::client::Client as DbClient;
        use crate::models::order::{Order as DbOrder, UpdateOrder as DbUpdateOrder};
        use crate::models::restaurant::Restaurant as DbRestaurant;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateOrder = updates.into();

        let updated = diesel::update(orders::table.find(order_id))
            .set(&db_updates)
            .get_result::<DbOrder>(&mut conn)?;

        let client = clients::table
            .find(updated.client_id)
            .first::<DbClient>(&mut conn)?;
        let restaurant = restaurants::table
            .find(updated.restaurant_id)
            .first::<DbRestaurant>(&mut conn)?;

        Ok((updated, client, restaurant).into())
    }

    fn delete_order(&self, order_id: i32) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;
        let affected = diesel::delete(orders::table.find(order_id)).execute(&mut conn)?;
        Ok(affected)
    }
}
