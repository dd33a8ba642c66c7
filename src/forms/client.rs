use serde::Deserialize;
use validator::Validate;

use crate::domain::client::{NewClient, UpdateClient};
use crate::forms::validate_phone;

#[derive(Clone, Debug, Deserialize, Validate)]
/// Payload for creating a client. Age only has to be a plausible human
/// age here; the adults-only rule applies when joining a restaurant.
pub struct CreateClientForm {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters."))]
    pub name: String,
    #[validate(email(message = "Invalid email format."))]
    pub email: String,
    #[validate(custom(function = validate_phone, message = "Invalid phone number."))]
    pub phone: String,
    #[validate(range(min = 0, max = 120, message = "Age must be between 0 and 120."))]
    pub age: i32,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Partial payload for updating a client; absent fields keep their stored
/// value and are not validated.
pub struct UpdateClientForm {
    #[validate(length(min = 2, max = 50, message = "Name must be between 2 and 50 characters."))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format."))]
    pub email: Option<String>,
    #[validate(custom(function = validate_phone, message = "Invalid phone number."))]
    pub phone: Option<String>,
    #[validate(range(min = 0, max = 120, message = "Age must be between 0 and 120."))]
    pub age: Option<i32>,
}

impl From<&CreateClientForm> for NewClient {
    fn from(form: &CreateClientForm) -> Self {
        NewClient::new(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.age,
        )
    }
}

impl From<&UpdateClientForm> for UpdateClient {
    fn from(form: &UpdateClientForm) -> Self {
        UpdateClient::new(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.age,
        )
    }
}
