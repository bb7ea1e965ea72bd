use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::validation::{checked_text, is_alphanumeric, is_car_year, is_letters, json_integer};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cars")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Body of POST and PUT as sent; see [`CarPayload::validate`].
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CarPayload {
    pub make: Option<Value>,
    pub model: Option<Value>,
    pub year: Option<Value>,
}

impl CarPayload {
    /// Checks make, model, year in that order and reports the first bad field.
    pub fn validate(self) -> Result<CarInput, ModelError> {
        let make = checked_text(self.make, is_letters).ok_or(ModelError::invalid("make"))?;
        let model = checked_text(self.model, is_alphanumeric).ok_or(ModelError::invalid("model"))?;
        let year = json_integer(self.year.as_ref())
            .and_then(|year| i32::try_from(year).ok())
            .filter(|year| is_car_year(*year))
            .ok_or(ModelError::invalid("year"))?;
        Ok(CarInput { make, model, year })
    }
}

impl From<CarInput> for CarPayload {
    fn from(input: CarInput) -> Self {
        Self {
            make: Some(Value::String(input.make)),
            model: Some(Value::String(input.model)),
            year: Some(Value::from(input.year)),
        }
    }
}

/// Writable fields of a car.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarInput {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl CarInput {
    pub fn new(make: &str, model: &str, year: i32) -> Self {
        Self { make: make.to_string(), model: model.to_string(), year }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        CarPayload::from(self.clone()).validate().map(drop)
    }

    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            make: Set(self.make),
            model: Set(self.model),
            year: Set(self.year),
            ..Default::default()
        }
    }

    pub fn apply_to(self, am: &mut ActiveModel) {
        am.make = Set(self.make);
        am.model = Set(self.model);
        am.year = Set(self.year);
    }
}
