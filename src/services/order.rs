use log::info;

use crate::domain::order::{NewOrder, Order, UpdateOrder};
use crate::dto::order::ListOrdersParams;
use crate::forms::order::{CreateOrderForm, UpdateOrderForm};
use crate::forms::validate_form;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ClientReader, OrderListQuery, OrderReader, OrderWriter, RestaurantReader};
use crate::services::{ServiceError, ServiceResult, check_pagination};

/// Creates an order after resolving both references. Either one missing
/// yields the combined [`ServiceError::ReferenceNotFound`]; nothing is
/// written in that case. Whether the client is a member of the restaurant
/// is deliberately not checked.
pub fn create_order<R>(repo: &R, form: &CreateOrderForm) -> ServiceResult<Order>
where
    R: OrderWriter + ClientReader + RestaurantReader + ?Sized,
{
    validate_form(form).map_err(ServiceError::ValidationFailed)?;
    info!(
        "Creating order for client ID {} at restaurant ID {}",
        form.client_id, form.restaurant_id
    );

    let client = repo
        .get_client_by_id(form.client_id)
        .map_err(ServiceError::query)?;
    let restaurant = repo
        .get_restaurant_by_id(form.restaurant_id)
        .map_err(ServiceError::query)?;
    if client.is_none() || restaurant.is_none() {
        return Err(ServiceError::ReferenceNotFound);
    }

    let new_order: NewOrder = form.into();
    let order = repo
        .create_order(&new_order)
        .map_err(ServiceError::persistence)?;
    info!("Order created successfully with ID {}", order.id);

    Ok(order)
}

pub fn list_orders<R>(repo: &R, params: ListOrdersParams) -> ServiceResult<Paginated<Order>>
where
    R: OrderReader + ?Sized,
{
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_ITEMS_PER_PAGE);
    check_pagination(page, limit)?;

    let mut query = OrderListQuery::new().paginate(page, limit);
    if let Some(name) = params.client_name {
        query = query.client_name(name);
    }
    if let Some(name) = params.restaurant_name {
        query = query.restaurant_name(name);
    }

    let (total, data) = repo.list_orders(query).map_err(ServiceError::query)?;
    Ok(Paginated::new(data, total, page, limit))
}

pub fn get_order<R>(repo: &R, order_id: i32) -> ServiceResult<Order>
where
    R: OrderReader + ?Sized,
{
    repo.get_order_by_id(order_id)
        .map_err(ServiceError::query)?
        .ok_or(ServiceError::NotFound {
            entity: "Order",
            id: order_id,
        })
}

/// Only the description may change; the references stay as created.
pub fn update_order<R>(repo: &R, order_id: i32, form: &UpdateOrderForm) -> ServiceResult<Order>
where
    R: OrderReader + OrderWriter + ?Sized,
{
    validate_form(form).map_err(ServiceError::ValidationFailed)?;
    let order = get_order(repo, order_id)?;

    if form.description.is_none() {
        // Nothing to change; hand back the order as-is without a write.
        return Ok(order);
    }

    let updates: UpdateOrder = form.into();
    repo.update_order(order_id, &updates)
        .map_err(ServiceError::persistence)
}

pub fn remove_order<R>(repo: &R, order_id: i32) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    info!("Removing order with ID {order_id}");
    let affected = repo
        .delete_order(order_id)
        .map_err(ServiceError::persistence)?;
    if affected == 0 {
        return Err(ServiceError::NotFound {
            entity: "Order",
            id: order_id,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::client::Client;
    use crate::domain::order::RestaurantRef;
    use crate::domain::restaurant::Restaurant;
    use crate::repository::mock::MockRepository;

    fn sample_order(id: i32) -> Order {
        Order {
            id,
            description: "2 cheeseburger con una coca cola".to_string(),
            client: Client::default(),
            restaurant: RestaurantRef::default(),
            created_at: Default::default(),
            updated_at: Default::default(),
        }
    }

    fn create_form() -> CreateOrderForm {
        CreateOrderForm {
            description: "2 cheeseburger con una coca cola".to_string(),
            client_id: 1,
            restaurant_id: 2,
        }
    }

    #[test]
    fn missing_client_is_reference_not_found_and_writes_nothing() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().returning(|_| Ok(None));
        repo.expect_get_restaurant_by_id()
            .returning(|_| Ok(Some(Restaurant::default())));

        // create_order has no expectation: a write would panic the test.
        assert!(matches!(
            create_order(&repo, &create_form()),
            Err(ServiceError::ReferenceNotFound)
        ));
    }

    #[test]
    fn missing_restaurant_is_the_same_combined_error() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .returning(|_| Ok(Some(Client::default())));
        repo.expect_get_restaurant_by_id().returning(|_| Ok(None));

        assert!(matches!(
            create_order(&repo, &create_form()),
            Err(ServiceError::ReferenceNotFound)
        ));
    }

    #[test]
    fn create_links_both_references() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .returning(|_| Ok(Some(Client::default())));
        repo.expect_get_restaurant_by_id()
            .returning(|_| Ok(Some(Restaurant::default())));
        repo.expect_create_order().returning(|new_order| {
            let mut order = sample_order(10);
            order.description = new_order.description.clone();
            Ok(order)
        });

        let order = create_order(&repo, &create_form()).unwrap();
        assert_eq!(order.id, 10);
        assert_eq!(order.description, "2 cheeseburger con una coca cola");
    }

    #[test]
    fn update_without_description_returns_order_unchanged() {
        let mut repo = MockRepository::new();
        repo.expect_get_order_by_id()
            .returning(|id| Ok(Some(sample_order(id))));

        // update_order on the repo has no expectation; it must not run.
        let order = update_order(&repo, 5, &UpdateOrderForm::default()).unwrap();
        assert_eq!(order.id, 5);
    }

    #[test]
    fn remove_of_missing_order_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_order().returning(|_| Ok(0));

        assert!(matches!(
            remove_order(&repo, 3),
            Err(ServiceError::NotFound {
                entity: "Order",
                id: 3
            })
        ));
    }
}
