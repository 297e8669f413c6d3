use crate::server::error::AppError;

/// Parses a resource id taken from the request path.
///
/// An id that is not a positive integer cannot match any record, so it is reported the
/// same way as a missing record.
///
/// # Arguments
/// - `value` - Raw path segment
/// - `resource` - Resource name used in the error message
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(AppError::NotFound)` - The value is not a valid id
pub fn parse_id(value: &str, resource: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::NotFound(format!("{} not found with id of {}", resource, value)))
}

/// Parses the distance segment of a radius search.
///
/// # Returns
/// - `Ok(f64)` - Finite, non-negative distance in miles
/// - `Err(AppError::BadRequest)` - Anything else
pub fn parse_distance(value: &str) -> Result<f64, AppError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|d| d.is_finite() && *d >= 0.0)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid distance '{}', expected a non-negative number of miles",
                value
            ))
        })
}
