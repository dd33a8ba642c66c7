use log::info;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::dto::client::ListClientsParams;
use crate::forms::client::{CreateClientForm, UpdateClientForm};
use crate::forms::validate_form;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ClientListQuery, ClientReader, ClientWriter};
use crate::services::{ServiceError, ServiceResult, check_pagination};

/// Validates and persists a new client. Age only has to pass the field
/// rules here; the adults-only check belongs to the membership operation.
pub fn create_client<R>(repo: &R, form: &CreateClientForm) -> ServiceResult<Client>
where
    R: ClientWriter + ?Sized,
{
    validate_form(form).map_err(ServiceError::ValidationFailed)?;

    let new_client: NewClient = form.into();
    let client = repo
        .create_client(&new_client)
        .map_err(ServiceError::persistence)?;
    info!("Created client with ID {}", client.id);

    Ok(client)
}

/// Returns one page of clients matching any of the supplied filters.
pub fn list_clients<R>(repo: &R, params: ListClientsParams) -> ServiceResult<Paginated<Client>>
where
    R: ClientReader + ?Sized,
{
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(DEFAULT_ITEMS_PER_PAGE);
    check_pagination(page, limit)?;

    let mut query = ClientListQuery::new().paginate(page, limit);
    if let Some(name) = params.name {
        query = query.name(name);
    }
    if let Some(email) = params.email {
        query = query.email(email);
    }
    if let Some(phone) = params.phone {
        query = query.phone(phone);
    }
    if let Some(age) = params.age {
        query = query.age(age);
    }

    let (total, data) = repo.list_clients(query).map_err(ServiceError::query)?;
    Ok(Paginated::new(data, total, page, limit))
}

pub fn get_client<R>(repo: &R, client_id: i32) -> ServiceResult<Client>
where
    R: ClientReader + ?Sized,
{
    repo.get_client_by_id(client_id)
        .map_err(ServiceError::query)?
        .ok_or(ServiceError::NotFound {
            entity: "Client",
            id: client_id,
        })
}

/// Applies a partial patch after validating the supplied fields.
pub fn update_client<R>(
    repo: &R,
    client_id: i32,
    form: &UpdateClientForm,
) -> ServiceResult<Client>
where
    R: ClientReader + ClientWriter + ?Sized,
{
    validate_form(form).map_err(ServiceError::ValidationFailed)?;
    get_client(repo, client_id)?;

    let updates: UpdateClient = form.into();
    repo.update_client(client_id, &updates)
        .map_err(ServiceError::persistence)
}

pub fn remove_client<R>(repo: &R, client_id: i32) -> ServiceResult<()>
where
    R: ClientWriter + ?Sized,
{
    let affected = repo
        .delete_client(client_id)
        .map_err(ServiceError::persistence)?;
    if affected == 0 {
        return Err(ServiceError::NotFound {
            entity: "Client",
            id: client_id,
        });
    }
    info!("Removed client with ID {client_id}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::mock::MockRepository;

    fn sample_client(id: i32) -> Client {
        Client {
            id,
            name: "Lucía".to_string(),
            email: "lucia@example.com".to_string(),
            phone: "+34600111222".to_string(),
            age: 30,
            ..Client::default()
        }
    }

    #[test]
    fn create_rejects_invalid_payload_without_touching_storage() {
        let repo = MockRepository::new();
        let form = CreateClientForm {
            name: "L".to_string(),
            email: "broken".to_string(),
            phone: "x".to_string(),
            age: -1,
        };

        // No expectation is set on the mock: any repository call panics.
        let err = create_client(&repo, &form).unwrap_err();
        match err {
            ServiceError::ValidationFailed(errors) => {
                assert!(errors.iter().any(|e| e.field == "name"));
                assert!(errors.iter().any(|e| e.field == "email"));
            }
            other => panic!("expected ValidationFailed, got {other:?}"),
        }
    }

    #[test]
    fn create_preserves_submitted_fields() {
        let mut repo = MockRepository::new();
        repo.expect_create_client().returning(|new_client| {
            Ok(Client {
                id: 1,
                name: new_client.name.clone(),
                email: new_client.email.clone(),
                phone: new_client.phone.clone(),
                age: new_client.age,
                ..Client::default()
            })
        });

        let form = CreateClientForm {
            name: "Lucía".to_string(),
            email: "Lucia@Example.com".to_string(),
            phone: "+34600111222".to_string(),
            age: 30,
        };
        let client = create_client(&repo, &form).unwrap();
        assert_eq!(client.name, "Lucía");
        assert_eq!(client.email, "lucia@example.com");
        assert_eq!(client.phone, "+34600111222");
        assert_eq!(client.age, 30);
    }

    #[test]
    fn list_computes_last_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_clients()
            .returning(|_| Ok((25, (0..10).map(sample_client).collect())));

        let page = list_clients(&repo, ListClientsParams::default()).unwrap();
        assert_eq!(page.total, 25);
        assert_eq!(page.page, 1);
        assert_eq!(page.last_page, 3);
        assert_eq!(page.data.len(), 10);
    }

    #[test]
    fn list_rejects_page_zero_and_limit_zero() {
        let repo = MockRepository::new();
        let params = ListClientsParams {
            page: Some(0),
            ..ListClientsParams::default()
        };
        assert!(matches!(
            list_clients(&repo, params),
            Err(ServiceError::InvalidArgument(_))
        ));

        let params = ListClientsParams {
            limit: Some(0),
            ..ListClientsParams::default()
        };
        assert!(matches!(
            list_clients(&repo, params),
            Err(ServiceError::InvalidArgument(_))
        ));
    }

    #[test]
    fn get_missing_client_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id().returning(|_| Ok(None));

        assert!(matches!(
            get_client(&repo, 42),
            Err(ServiceError::NotFound {
                entity: "Client",
                id: 42
            })
        ));
    }

    #[test]
    fn update_patches_only_supplied_fields() {
        let mut repo = MockRepository::new();
        repo.expect_get_client_by_id()
            .returning(|id| Ok(Some(sample_client(id))));
        repo.expect_update_client().returning(|id, updates| {
            let mut client = sample_client(id);
            if let Some(name) = &updates.name {
                client.name = name.clone();
            }
            if let Some(age) = updates.age {
                client.age = age;
            }
            Ok(client)
        });

        let form = UpdateClientForm {
            age: Some(31),
            ..UpdateClientForm::default()
        };
        let client = update_client(&repo, 1, &form).unwrap();
        assert_eq!(client.age, 31);
        assert_eq!(client.name, "Lucía");
    }

    #[test]
    fn remove_missing_client_is_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_client().returning(|_| Ok(0));

        assert!(matches!(
            remove_client(&repo, 7),
            Err(ServiceError::NotFound { .. })
        ));
    }
}
