use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every failed request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub success: bool,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

/// Envelope for single-record responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope for list responses.
///
/// Records are carried as JSON values because `?select=` may drop any field.
/// `pagination` is omitted for nested lists that are not paginated.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse {
    pub success: bool,
    /// Number of matching records before pagination.
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationDto>,
    #[schema(value_type = Vec<Object>)]
    pub data: Vec<serde_json::Value>,
}

impl ListResponse {
    pub fn new(data: Vec<serde_json::Value>) -> Self {
        Self {
            success: true,
            count: data.len() as u64,
            pagination: None,
            data,
        }
    }

    /// Serializes unpaginated records into a list envelope.
    pub fn from_items<T: Serialize>(items: Vec<T>) -> Result<Self, serde_json::Error> {
        let data = items
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(data))
    }

    pub fn paginated(data: Vec<serde_json::Value>, total: u64, pagination: PaginationDto) -> Self {
        Self {
            success: true,
            count: total,
            pagination: Some(pagination),
            data,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<PageRefDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev: Option<PageRefDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PageRefDto {
    pub page: u64,
    pub limit: u64,
}

/// Body of an empty successful delete: `{ success: true, data: {} }`.
#[derive(Debug, Default, Serialize, ToSchema)]
pub struct EmptyDto {}
