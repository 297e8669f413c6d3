//! Parsed form of the advanced-results query string.
//!
//! Turns raw `key=value` pairs such as `averageCost[lte]=10000&select=name&sort=-name`
//! into filters, a projection, sort keys and a page window. Field names are checked
//! against each entity's queryable field table in the data layer, not here.

use serde::Serialize;
use serde_json::Value;

use crate::{
    model::api::{ListResponse, PageRefDto, PaginationDto},
    server::error::AppError,
};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 25;
/// Largest page size a client may request.
pub const MAX_LIMIT: u64 = 1000;
pub const DEFAULT_SORT_FIELD: &str = "createdAt";

/// Comparison applied by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
}

impl FilterOp {
    fn parse(keyword: &str) -> Option<Self> {
        match keyword {
            "gt" => Some(Self::Gt),
            "gte" => Some(Self::Gte),
            "lt" => Some(Self::Lt),
            "lte" => Some(Self::Lte),
            "in" => Some(Self::In),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    /// Raw values; a single entry for every operator except `In`.
    pub values: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pub filters: Vec<Filter>,
    pub select: Option<Vec<String>>,
    pub sort: Vec<SortKey>,
    pub page: u64,
    pub limit: u64,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
            select: None,
            sort: vec![SortKey {
                field: DEFAULT_SORT_FIELD.to_string(),
                descending: true,
            }],
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl QueryParams {
    /// Parses the raw query string of a request.
    ///
    /// # Arguments
    /// - `query` - Raw query string without the leading `?`, if any
    ///
    /// # Returns
    /// - `Ok(QueryParams)` - Parsed filters, projection, sort and page window
    /// - `Err(AppError::BadRequest)` - Malformed operator, page or limit
    pub fn from_query(query: Option<&str>) -> Result<Self, AppError> {
        let pairs = query
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();

        Self::parse(pairs)
    }

    /// Parses already-decoded query pairs.
    pub fn parse(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut params = Self::default();

        for (key, value) in pairs {
            match key.as_str() {
                "select" => params.select = Some(split_list(&value)),
                "sort" => {
                    let keys: Vec<SortKey> = split_list(&value)
                        .into_iter()
                        .map(|field| match field.strip_prefix('-') {
                            Some(field) => SortKey {
                                field: field.to_string(),
                                descending: true,
                            },
                            None => SortKey {
                                field,
                                descending: false,
                            },
                        })
                        .collect();
                    if !keys.is_empty() {
                        params.sort = keys;
                    }
                }
                "page" => params.page = parse_positive("page", &value)?,
                "limit" => params.limit = parse_positive("limit", &value)?,
                _ => params.push_filter(&key, value)?,
            }
        }

        params.check_window()?;

        Ok(params)
    }

    /// Rejects page windows the database cannot address.
    ///
    /// The end of the window (`page * limit`) must fit in an `i64` so neither the
    /// offset arithmetic nor the SQL bind can overflow.
    fn check_window(&self) -> Result<(), AppError> {
        if self.limit > MAX_LIMIT {
            return Err(AppError::BadRequest(format!(
                "Invalid limit '{}', must not exceed {}",
                self.limit, MAX_LIMIT
            )));
        }

        let addressable = matches!(self.page.checked_mul(self.limit), Some(end) if end <= i64::MAX as u64);
        if !addressable {
            return Err(AppError::BadRequest(format!(
                "Invalid page '{}', out of range",
                self.page
            )));
        }

        Ok(())
    }

    fn push_filter(&mut self, key: &str, value: String) -> Result<(), AppError> {
        let (field, op) = match key.split_once('[') {
            Some((field, rest)) => {
                let keyword = rest.strip_suffix(']').ok_or_else(|| {
                    AppError::BadRequest(format!("Malformed query parameter '{}'", key))
                })?;
                let op = FilterOp::parse(keyword).ok_or_else(|| {
                    AppError::BadRequest(format!("Unknown query operator '{}'", keyword))
                })?;
                (field, op)
            }
            None => (key, FilterOp::Eq),
        };

        if field.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Malformed query parameter '{}'",
                key
            )));
        }

        let values = match op {
            FilterOp::In => split_list(&value),
            _ => vec![value],
        };

        // Repeated keys widen the match to any of the supplied values.
        let widens = |op: FilterOp| matches!(op, FilterOp::Eq | FilterOp::In);
        if let Some(existing) = self
            .filters
            .iter_mut()
            .find(|f| f.field == field && widens(f.op) && widens(op))
        {
            existing.op = FilterOp::In;
            existing.values.extend(values);
            return Ok(());
        }

        self.filters.push(Filter {
            field: field.to_string(),
            op,
            values,
        });

        Ok(())
    }

    /// Number of records skipped before the current page.
    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// Builds next/prev links for a result set of `total` records.
    pub fn pagination(&self, total: u64) -> PaginationDto {
        let end = self.page * self.limit;

        PaginationDto {
            next: (end < total).then_some(PageRefDto {
                page: self.page + 1,
                limit: self.limit,
            }),
            prev: (self.offset() > 0).then_some(PageRefDto {
                page: self.page - 1,
                limit: self.limit,
            }),
        }
    }

    /// Restricts a serialised record to the selected fields.
    ///
    /// `id` and every key in `keep` survive regardless of the selection. Dotted
    /// selections such as `location.city` keep the whole top-level object.
    pub fn project(&self, value: Value, keep: &[&str]) -> Value {
        let Some(fields) = &self.select else {
            return value;
        };

        match value {
            Value::Object(map) => Value::Object(
                map.into_iter()
                    .filter(|(key, _)| {
                        key == "id"
                            || keep.contains(&key.as_str())
                            || fields
                                .iter()
                                .any(|f| f.split('.').next() == Some(key.as_str()))
                    })
                    .collect(),
            ),
            other => other,
        }
    }
}

/// One page of records plus the count of every record matching the filters.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }
}

impl<T: Serialize> Page<T> {
    /// Serialises the page into the list envelope, applying `?select=` projection.
    pub fn into_list_response(
        self,
        params: &QueryParams,
        keep: &[&str],
    ) -> Result<ListResponse, AppError> {
        let data = self
            .items
            .into_iter()
            .map(|item| Ok(params.project(serde_json::to_value(item)?, keep)))
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(ListResponse::paginated(
            data,
            self.total,
            params.pagination(self.total),
        ))
    }
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_positive(name: &str, value: &str) -> Result<u64, AppError> {
    match value.trim().parse::<u64>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::BadRequest(format!(
            "Invalid {} '{}', expected a positive integer",
            name, value
        ))),
    }
}
