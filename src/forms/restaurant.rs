use serde::Deserialize;
use validator::Validate;

use crate::domain::restaurant::{NewRestaurant, UpdateRestaurant};

#[derive(Clone, Debug, Deserialize, Validate)]
pub struct CreateRestaurantForm {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters."))]
    pub name: String,
    #[validate(length(
        min = 1,
        max = 150,
        message = "Address must be between 1 and 150 characters."
    ))]
    pub address: String,
    #[validate(range(min = 1, message = "Capacity must be at least 1."))]
    pub capacity: i32,
}

#[derive(Clone, Debug, Default, Deserialize, Validate)]
pub struct UpdateRestaurantForm {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters."))]
    pub name: Option<String>,
    #[validate(length(
        min = 1,
        max = 150,
        message = "Address must be between 1 and 150 characters."
    ))]
    pub address: Option<String>,
    #[validate(range(min = 1, message = "Capacity must be at least 1."))]
    pub capacity: Option<i32>,
}

impl From<&CreateRestaurantForm> for NewRestaurant {
    fn from(form: &CreateRestaurantForm) -> Self {
        NewRestaurant::new(form.name.clone(), form.address.clone(), form.capacity)
    }
}

impl From<&UpdateRestaurantForm> for UpdateRestaurant {
    fn from(form: &UpdateRestaurantForm) -> Self {
        UpdateRestaurant::new(form.name.clone(), form.address.clone(), form.capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::validate_form;

    #[test]
    fn capacity_must_be_positive() {
        let form = CreateRestaurantForm {
            name: "El Buen Sabor".to_string(),
            address: "Avenida Siempre Viva 123".to_string(),
            capacity: 0,
        };
        let errors = validate_form(&form).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "capacity");
        assert_eq!(errors[0].message, "Capacity must be at least 1.");
    }

    #[test]
    fn empty_name_and_address_are_rejected() {
        let form = CreateRestaurantForm {
            name: String::new(),
            address: String::new(),
            capacity: 10,
        };
        let errors = validate_form(&form).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["address", "name"]);
    }
}
