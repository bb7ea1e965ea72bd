use std::str::FromStr;

use common::pagination::{PageLimits, Pagination};
use models::animal;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::Deserialize;

use super::{contains_ci, non_empty, parse_optional, parse_or_default, SortOrder};
use crate::errors::ServiceError;

/// Sortable animal columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimalSort {
    #[default]
    Id,
    Name,
    Species,
    Age,
}

impl AnimalSort {
    pub fn column(self) -> animal::Column {
        match self {
            AnimalSort::Id => animal::Column::Id,
            AnimalSort::Name => animal::Column::Name,
            AnimalSort::Species => animal::Column::Species,
            AnimalSort::Age => animal::Column::Age,
        }
    }
}

impl FromStr for AnimalSort {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(AnimalSort::Id),
            "name" => Ok(AnimalSort::Name),
            "species" => Ok(AnimalSort::Species),
            "age" => Ok(AnimalSort::Age),
            _ => Err(ServiceError::BadRequest("Invalid sort parameter.".into())),
        }
    }
}

/// Query string of `GET /animals` as sent by the client.
#[derive(Debug, Default, Deserialize)]
pub struct AnimalListParams {
    pub species: Option<String>,
    pub name: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimalListQuery {
    /// exact match
    pub species: Option<String>,
    /// case-insensitive substring
    pub name: Option<String>,
    pub sort: AnimalSort,
    pub order: SortOrder,
    pub pagination: Pagination,
}

impl AnimalListParams {
    pub fn parse(self, limits: PageLimits) -> Result<AnimalListQuery, ServiceError> {
        let sort = parse_or_default(self.sort_by)?;
        let order = parse_or_default(self.order)?;
        let page = parse_optional(self.page, "page")?;
        let per_page = parse_optional(self.per_page, "per_page")?;
        Ok(AnimalListQuery {
            species: non_empty(self.species),
            name: non_empty(self.name),
            sort,
            order,
            pagination: Pagination::from_request(page, per_page, limits)?,
        })
    }
}

impl AnimalListQuery {
    /// Filtered and ordered select; pagination is applied by the caller.
    pub fn select(&self) -> Select<animal::Entity> {
        let mut select = animal::Entity::find();
        if let Some(species) = &self.species {
            select = select.filter(animal::Column::Species.eq(species.as_str()));
        }
        if let Some(name) = &self.name {
            select = select.filter(contains_ci(animal::Column::Name, name));
        }
        select = select.order_by(self.sort.column(), self.order.as_order());
        if self.sort != AnimalSort::Id {
            select = select.order_by(animal::Column::Id, self.order.as_order());
        }
        select
    }
}
