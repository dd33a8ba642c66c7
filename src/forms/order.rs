use serde::Deserialize;
use validator::Validate;

use crate::domain::order::{NewOrder, UpdateOrder};

#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderForm {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Description must be between 1 and 100 characters."
    ))]
    pub description: String,
    pub client_id: i32,
    pub restaurant_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
/// Only the description is patchable; the client and restaurant
/// references are fixed at creation time.
pub struct UpdateOrderForm {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Description must be between 1 and 100 characters."
    ))]
    pub description: Option<String>,
}

impl From<&CreateOrderForm> for NewOrder {
    fn from(form: &CreateOrderForm) -> Self {
        NewOrder::new(form.description.clone(), form.client_id, form.restaurant_id)
    }
}

impl From<&UpdateOrderForm> for UpdateOrder {
    fn from(form: &UpdateOrderForm) -> Self {
        UpdateOrder::new(form.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validate_form;

    #[test]
    fn description_cannot_be_empty() {
        let form = CreateOrderForm {
            description: String::new(),
            client_id: 1,
            restaurant_id: 1,
        };
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors[0].field, "description");
    }
}
