//! Request parsing for the list endpoints.
//!
//! Raw query strings come in as `*ListParams`, are checked against the sort
//! allow-lists and page limits, and leave as typed `*ListQuery` values the
//! `db` functions can turn into SQL.

pub mod animals;
pub mod cars;

use std::str::FromStr;

use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{ColumnTrait, Order};

use crate::errors::ServiceError;

pub use animals::{AnimalListParams, AnimalListQuery, AnimalSort};
pub use cars::{CarListParams, CarListQuery, CarSort};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_order(self) -> Order {
        match self {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ServiceError::BadRequest("Invalid order parameter.".into())),
        }
    }
}

/// Treat `?species=` the same as a missing parameter.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub(crate) fn parse_optional<T: FromStr>(
    value: Option<String>,
    name: &str,
) -> Result<Option<T>, ServiceError> {
    non_empty(value)
        .map(|v| {
            v.trim()
                .parse::<T>()
                .map_err(|_| ServiceError::BadRequest(format!("{name} must be an integer")))
        })
        .transpose()
}

pub(crate) fn parse_or_default<T: FromStr<Err = ServiceError> + Default>(
    value: Option<String>,
) -> Result<T, ServiceError> {
    non_empty(value).map(|v| v.parse()).transpose().map(Option::unwrap_or_default)
}

const LIKE_ESCAPE: char = '!';

/// Case-insensitive `column LIKE %needle%` with `%` and `_` in the needle taken literally.
pub(crate) fn contains_ci<C: ColumnTrait>(col: C, needle: &str) -> SimpleExpr {
    let mut escaped = String::with_capacity(needle.len() + 2);
    escaped.push('%');
    for c in needle.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');
    Expr::expr(Func::lower(Expr::col((col.entity_name(), col))))
        .like(LikeExpr::new(escaped).escape(LIKE_ESCAPE))
}
