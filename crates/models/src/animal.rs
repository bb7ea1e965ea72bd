use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ModelError;
use crate::validation::{checked_text, is_letters, json_integer};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "animals")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub species: String,
    pub age: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Body of POST and PUT as sent. Fields stay untyped so a missing or
/// mistyped value is reported by [`AnimalPayload::validate`] in field order.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnimalPayload {
    pub name: Option<Value>,
    pub species: Option<Value>,
    pub age: Option<Value>,
}

impl AnimalPayload {
    /// Checks name, species, age in that order and reports the first bad field.
    pub fn validate(self) -> Result<AnimalInput, ModelError> {
        let name = checked_text(self.name, is_letters).ok_or(ModelError::invalid("name"))?;
        let species = checked_text(self.species, is_letters).ok_or(ModelError::invalid("species"))?;
        let age = json_integer(self.age.as_ref())
            .filter(|age| *age >= 0)
            .ok_or(ModelError::invalid("age"))?;
        Ok(AnimalInput { name, species, age })
    }
}

impl From<AnimalInput> for AnimalPayload {
    fn from(input: AnimalInput) -> Self {
        Self {
            name: Some(Value::String(input.name)),
            species: Some(Value::String(input.species)),
            age: Some(Value::from(input.age)),
        }
    }
}

/// Writable fields of an animal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalInput {
    pub name: String,
    pub species: String,
    pub age: i64,
}

impl AnimalInput {
    pub fn new(name: &str, species: &str, age: i64) -> Self {
        Self { name: name.to_string(), species: species.to_string(), age }
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        AnimalPayload::from(self.clone()).validate().map(drop)
    }

    /// New row; the id is left to the database.
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            species: Set(self.species),
            age: Set(self.age),
            ..Default::default()
        }
    }

    /// Overwrite every non-id column of an existing row.
    pub fn apply_to(self, am: &mut ActiveModel) {
        am.name = Set(self.name);
        am.species = Set(self.species);
        am.age = Set(self.age);
    }
}
