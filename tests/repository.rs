use mesa_api::domain::client::{NewClient, UpdateClient};
use mesa_api::domain::order::{NewOrder, UpdateOrder};
use mesa_api::domain::restaurant::NewRestaurant;
use mesa_api::repository::{
    AttachOutcome, ClientListQuery, ClientReader, ClientWriter, DieselRepository, OrderListQuery,
    OrderReader, OrderWriter, RestaurantListQuery, RestaurantReader, RestaurantWriter,
};

mod common;

fn new_client(name: &str, age: i32) -> NewClient {
    NewClient::new(
        name.to_string(),
        format!("{}@example.com", name.to_lowercase()),
        "+34600111222".to_string(),
        age,
    )
}

fn new_restaurant(name: &str, capacity: i32) -> NewRestaurant {
    NewRestaurant::new(
        name.to_string(),
        "Avenida Siempre Viva 123".to_string(),
        capacity,
    )
}

#[test]
fn test_client_repository_crud() {
    let test_db = common::TestDb::new("test_client_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo.create_client(&new_client("Alice", 30)).unwrap();
    let bob = repo.create_client(&new_client("Bob", 25)).unwrap();
    assert_eq!(alice.email, "alice@example.com");
    assert!(alice.restaurant_id.is_none());

    let (total, items) = repo.list_clients(ClientListQuery::new()).unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);

    let updates = UpdateClient::new(Some("Bobby".to_string()), None, None, None);
    let updated = repo.update_client(bob.id, &updates).unwrap();
    assert_eq!(updated.name, "Bobby");
    // Untouched fields keep their stored values.
    assert_eq!(updated.email, bob.email);
    assert_eq!(updated.age, 25);

    assert_eq!(repo.delete_client(alice.id).unwrap(), 1);
    assert!(repo.get_client_by_id(alice.id).unwrap().is_none());
    assert_eq!(repo.delete_client(alice.id).unwrap(), 0);
}

#[test]
fn test_client_filters_combine_with_or() {
    let test_db = common::TestDb::new("test_client_filters_combine_with_or.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_client(&new_client("Lucia", 25)).unwrap();
    repo.create_client(&new_client("Bob", 30)).unwrap();
    repo.create_client(&new_client("Carol", 40)).unwrap();

    // A name filter and an age filter together return the union of
    // matches, not the intersection.
    let query = ClientListQuery::new().name("Lu").age(30);
    let (total, items) = repo.list_clients(query).unwrap();
    assert_eq!(total, 2);
    let mut names: Vec<String> = items.into_iter().map(|c| c.name).collect();
    names.sort();
    assert_eq!(names, vec!["Bob", "Lucia"]);

    // A single filter behaves as a plain substring match.
    let (total, items) = repo.list_clients(ClientListQuery::new().name("aro")).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Carol");
}

#[test]
fn test_client_pagination_bounds_result_set() {
    let test_db = common::TestDb::new("test_client_pagination_bounds_result_set.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 0..25 {
        repo.create_client(&new_client(&format!("Client{i}"), 20 + (i % 50)))
            .unwrap();
    }

    let (total, items) = repo
        .list_clients(ClientListQuery::new().paginate(1, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(items.len(), 10);

    let (total, items) = repo
        .list_clients(ClientListQuery::new().paginate(3, 10))
        .unwrap();
    assert_eq!(total, 25);
    assert_eq!(items.len(), 5);
}

#[test]
fn test_restaurant_round_trip_has_empty_roster() {
    let test_db = common::TestDb::new("test_restaurant_round_trip_has_empty_roster.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let created = repo
        .create_restaurant(&new_restaurant("El Buen Sabor", 50))
        .unwrap();
    let fetched = repo
        .get_restaurant_by_id(created.id)
        .unwrap()
        .expect("restaurant should exist");

    assert_eq!(fetched.name, "El Buen Sabor");
    assert_eq!(fetched.address, "Avenida Siempre Viva 123");
    assert_eq!(fetched.capacity, 50);
    assert!(fetched.clients.is_empty());
}

#[test]
fn test_attach_client_enforces_capacity_and_uniqueness() {
    let test_db = common::TestDb::new("test_attach_client_enforces_capacity.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let restaurant = repo.create_restaurant(&new_restaurant("Tiny", 1)).unwrap();
    let first = repo.create_client(&new_client("First", 30)).unwrap();
    let second = repo.create_client(&new_client("Second", 30)).unwrap();

    match repo.attach_client(restaurant.id, first.id).unwrap() {
        AttachOutcome::Attached(updated) => {
            assert_eq!(updated.clients.len(), 1);
            assert!(updated.has_member(first.id));
        }
        other => panic!("expected Attached, got {other:?}"),
    }

    assert!(matches!(
        repo.attach_client(restaurant.id, second.id).unwrap(),
        AttachOutcome::CapacityReached
    ));
    assert!(matches!(
        repo.attach_client(restaurant.id, first.id).unwrap(),
        AttachOutcome::AlreadyMember
    ));

    // The membership edge is visible on the client row as well.
    let first = repo.get_client_by_id(first.id).unwrap().unwrap();
    assert_eq!(first.restaurant_id, Some(restaurant.id));
}

#[test]
fn test_restaurant_delete_detaches_members() {
    let test_db = common::TestDb::new("test_restaurant_delete_detaches_members.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let restaurant = repo.create_restaurant(&new_restaurant("Doomed", 5)).unwrap();
    let client = repo.create_client(&new_client("Survivor", 30)).unwrap();
    repo.attach_client(restaurant.id, client.id).unwrap();

    assert_eq!(repo.delete_restaurant(restaurant.id).unwrap(), 1);
    assert!(repo.get_restaurant_by_id(restaurant.id).unwrap().is_none());

    let client = repo.get_client_by_id(client.id).unwrap().unwrap();
    assert!(client.restaurant_id.is_none());
}

#[test]
fn test_order_repository_crud_and_search() {
    let test_db = common::TestDb::new("test_order_repository_crud_and_search.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let restaurant = repo
        .create_restaurant(&new_restaurant("El Buen Sabor", 50))
        .unwrap();
    let client = repo.create_client(&new_client("Lucia", 30)).unwrap();

    let order = repo
        .create_order(&NewOrder::new(
            "2 cheeseburger con una coca cola".to_string(),
            client.id,
            restaurant.id,
        ))
        .unwrap();
    assert_eq!(order.client.id, client.id);
    assert_eq!(order.restaurant.id, restaurant.id);

    let fetched = repo.get_order_by_id(order.id).unwrap().unwrap();
    assert_eq!(fetched.description, "2 cheeseburger con una coca cola");
    assert_eq!(fetched.client.name, "Lucia");
    assert_eq!(fetched.restaurant.name, "El Buen Sabor");

    let (total, items) = repo
        .list_orders(OrderListQuery::new().client_name("Luc"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].id, order.id);

    let (total, _) = repo
        .list_orders(OrderListQuery::new().client_name("Nobody"))
        .unwrap();
    assert_eq!(total, 0);

    let updated = repo
        .update_order(order.id, &UpdateOrder::new(Some("1 ensalada".to_string())))
        .unwrap();
    assert_eq!(updated.description, "1 ensalada");
    assert_eq!(updated.client.id, client.id);

    assert_eq!(repo.delete_order(order.id).unwrap(), 1);
    assert_eq!(repo.delete_order(order.id).unwrap(), 0);
}

#[test]
fn test_restaurant_search_filters() {
    let test_db = common::TestDb::new("test_restaurant_search_filters.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    repo.create_restaurant(&new_restaurant("El Buen Sabor", 50))
        .unwrap();
    repo.create_restaurant(&new_restaurant("La Esquina", 20))
        .unwrap();

    let (total, items) = repo
        .list_restaurants(RestaurantListQuery::new().name("Buen"))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "El Buen Sabor");

    // OR-combination across restaurant filters too.
    let (total, _) = repo
        .list_restaurants(RestaurantListQuery::new().name("Buen").capacity(20))
        .unwrap();
    assert_eq!(total, 2);
}
