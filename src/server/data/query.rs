//! Advanced-results query shaping shared by every listable entity.
//!
//! Each entity publishes a table of queryable fields (API name, column, value kind).
//! `fetch_page` validates the parsed query against that table, translates filters and
//! sort keys into SeaORM conditions and orderings, and returns one page of models
//! along with the total number of matches.

use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Select, Value,
};

use crate::server::{
    error::AppError,
    model::query::{Filter, FilterOp, Page, QueryParams},
};

/// How raw query-string values for a field are parsed and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    Integer,
    Boolean,
    /// JSON array of strings; equality and `in` test membership.
    Tags,
}

impl FieldKind {
    fn parse(self, field: &str, raw: &str) -> Result<Value, AppError> {
        let invalid = || AppError::BadRequest(format!("Invalid value '{}' for field '{}'", raw, field));

        Ok(match self {
            Self::Text | Self::Tags => Value::from(raw.to_string()),
            Self::Number => Value::from(
                raw.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .ok_or_else(invalid)?,
            ),
            Self::Integer => Value::from(raw.trim().parse::<i64>().map_err(|_| invalid())?),
            Self::Boolean => Value::from(raw.trim().parse::<bool>().map_err(|_| invalid())?),
        })
    }
}

/// A field clients may filter, sort or select on.
#[derive(Debug, Clone, Copy)]
pub struct QueryField<C> {
    /// Name used in the query string and in the JSON response.
    pub name: &'static str,
    pub column: C,
    pub kind: FieldKind,
}

/// Implemented by every entity that supports advanced-results listing.
pub trait AdvancedQuery: EntityTrait {
    /// Queryable fields; must include `createdAt` for the default sort.
    const FIELDS: &'static [QueryField<Self::Column>];

    /// Primary key column, used as the final tie-breaker so pages never overlap.
    const ID: Self::Column;
}

/// Runs `select` with the filters, sort and page window of `params`.
///
/// # Arguments
/// - `db` - Database connection
/// - `select` - Base query, possibly already scoped by the caller
/// - `params` - Parsed query string
///
/// # Returns
/// - `Ok(Page)` - Models of the requested page and the total number of matches
/// - `Err(AppError::BadRequest)` - Unknown field, unsupported operator or unparsable value
/// - `Err(AppError::DbErr)` - Database error during count or fetch
pub async fn fetch_page<C, E>(
    db: &C,
    select: Select<E>,
    params: &QueryParams,
) -> Result<Page<E::Model>, AppError>
where
    C: ConnectionTrait,
    E: AdvancedQuery,
    E::Model: Sync,
{
    let select = shape::<E>(select, params)?;

    let paginator = select.paginate(db, params.limit);
    let total = paginator.num_items().await?;
    let items = paginator.fetch_page(params.page - 1).await?;

    Ok(Page { items, total })
}

/// Applies filters and ordering without touching the page window.
pub fn shape<E: AdvancedQuery>(select: Select<E>, params: &QueryParams) -> Result<Select<E>, AppError> {
    let mut select = select.filter(condition::<E>(&params.filters)?);

    if let Some(fields) = &params.select {
        for name in fields {
            if !is_selectable::<E>(name) {
                return Err(unknown_field(name));
            }
        }
    }

    let mut descending = true;
    for (index, key) in params.sort.iter().enumerate() {
        let field = lookup::<E>(&key.field)?;
        if field.kind == FieldKind::Tags {
            return Err(AppError::BadRequest(format!(
                "Cannot sort by field '{}'",
                field.name
            )));
        }
        if index == 0 {
            descending = key.descending;
        }
        select = if key.descending {
            select.order_by_desc(field.column)
        } else {
            select.order_by_asc(field.column)
        };
    }

    Ok(if descending {
        select.order_by_desc(E::ID)
    } else {
        select.order_by_asc(E::ID)
    })
}

fn condition<E: AdvancedQuery>(filters: &[Filter]) -> Result<Condition, AppError> {
    filters.iter().try_fold(Condition::all(), |cond, filter| {
        let field = lookup::<E>(&filter.field)?;
        Ok(cond.add(filter_condition(field, filter)?))
    })
}

fn filter_condition<C: ColumnTrait>(
    field: &QueryField<C>,
    filter: &Filter,
) -> Result<Condition, AppError> {
    let column = field.column;

    if field.kind == FieldKind::Tags {
        if !matches!(filter.op, FilterOp::Eq | FilterOp::In) {
            return Err(AppError::BadRequest(format!(
                "Only equality and 'in' are supported for field '{}'",
                field.name
            )));
        }

        return filter.values.iter().try_fold(Condition::any(), |cond, tag| {
            if tag.contains(['%', '_', '"', '\\']) {
                return Err(AppError::BadRequest(format!(
                    "Invalid value '{}' for field '{}'",
                    tag, field.name
                )));
            }
            Ok(cond.add(column.like(format!("%\"{}\"%", tag))))
        });
    }

    let values = filter
        .values
        .iter()
        .map(|raw| field.kind.parse(field.name, raw))
        .collect::<Result<Vec<_>, _>>()?;

    let single = |values: Vec<Value>| {
        values.into_iter().next().ok_or_else(|| {
            AppError::BadRequest(format!("Missing value for field '{}'", field.name))
        })
    };

    let expr = match filter.op {
        FilterOp::Eq => column.eq(single(values)?),
        FilterOp::Gt => column.gt(single(values)?),
        FilterOp::Gte => column.gte(single(values)?),
        FilterOp::Lt => column.lt(single(values)?),
        FilterOp::Lte => column.lte(single(values)?),
        FilterOp::In => column.is_in(values),
    };

    Ok(Condition::all().add(expr))
}

fn lookup<E: AdvancedQuery>(name: &str) -> Result<&'static QueryField<E::Column>, AppError> {
    E::FIELDS
        .iter()
        .find(|field| field.name == name)
        .ok_or_else(|| unknown_field(name))
}

/// A selection may name a field or the object holding dotted fields (`location`).
fn is_selectable<E: AdvancedQuery>(name: &str) -> bool {
    E::FIELDS
        .iter()
        .any(|field| field.name == name || field.name.split('.').next() == Some(name))
}

fn unknown_field(name: &str) -> AppError {
    AppError::BadRequest(format!("Unknown query field '{}'", name))
}
