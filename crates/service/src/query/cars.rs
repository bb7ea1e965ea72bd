use std::str::FromStr;

use common::pagination::{PageLimits, Pagination};
use models::car;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Select};
use serde::Deserialize;

use super::{contains_ci, non_empty, parse_optional, parse_or_default, SortOrder};
use crate::errors::ServiceError;

/// Sortable car columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CarSort {
    #[default]
    Id,
    Make,
    Model,
    Year,
}

impl CarSort {
    pub fn column(self) -> car::Column {
        match self {
            CarSort::Id => car::Column::Id,
            CarSort::Make => car::Column::Make,
            CarSort::Model => car::Column::Model,
            CarSort::Year => car::Column::Year,
        }
    }
}

impl FromStr for CarSort {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(CarSort::Id),
            "make" => Ok(CarSort::Make),
            "model" => Ok(CarSort::Model),
            "year" => Ok(CarSort::Year),
            _ => Err(ServiceError::BadRequest("Invalid sort parameter.".into())),
        }
    }
}

/// Query string of `GET /cars` as sent by the client.
#[derive(Debug, Default, Deserialize)]
pub struct CarListParams {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarListQuery {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    /// case-insensitive substring of make or model
    pub search: Option<String>,
    pub sort: CarSort,
    pub order: SortOrder,
    pub pagination: Pagination,
}

impl CarListParams {
    pub fn parse(self, limits: PageLimits) -> Result<CarListQuery, ServiceError> {
        let year = parse_optional(self.year, "year")?;
        let sort = parse_or_default(self.sort_by)?;
        let order = parse_or_default(self.order)?;
        let page = parse_optional(self.page, "page")?;
        let per_page = parse_optional(self.per_page, "per_page")?;
        Ok(CarListQuery {
            make: non_empty(self.make),
            model: non_empty(self.model),
            year,
            search: non_empty(self.search),
            sort,
            order,
            pagination: Pagination::from_request(page, per_page, limits)?,
        })
    }
}

impl CarListQuery {
    pub fn select(&self) -> Select<car::Entity> {
        let mut select = car::Entity::find();
        if let Some(make) = &self.make {
            select = select.filter(car::Column::Make.eq(make.as_str()));
        }
        if let Some(model) = &self.model {
            select = select.filter(car::Column::Model.eq(model.as_str()));
        }
        if let Some(year) = self.year {
            select = select.filter(car::Column::Year.eq(year));
        }
        if let Some(search) = &self.search {
            select = select.filter(
                Condition::any()
                    .add(contains_ci(car::Column::Make, search))
                    .add(contains_ci(car::Column::Model, search)),
            );
        }
        select = select.order_by(self.sort.column(), self.order.as_order());
        if self.sort != CarSort::Id {
            select = select.order_by(car::Column::Id, self.order.as_order());
        }
        select
    }
}
