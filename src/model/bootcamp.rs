use chrono::{DateTime, Utc};
use entity::bootcamp::Career;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::course::CourseDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    pub latitude: f64,
    pub longitude: f64,
    pub formatted_address: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zipcode: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BootcampDto {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: LocationDto,
    #[schema(value_type = Vec<String>)]
    pub careers: Vec<Career>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub created_at: DateTime<Utc>,
    /// Id of the owning user.
    pub user: i32,
    /// Courses offered, present only on list responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseDto>>,
}

/// Subset of a bootcamp inlined into course and review responses.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BootcampSummaryDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBootcampDto {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 50,
        message = "Please add a name of no more than 50 characters"
    ))]
    pub name: String,
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 500,
        message = "Please add a description of no more than 500 characters"
    ))]
    pub description: String,
    #[validate(url(message = "Please use a valid URL with HTTP or HTTPS"))]
    pub website: Option<String>,
    #[validate(length(max = 20, message = "Phone number can not be longer than 20 characters"))]
    pub phone: Option<String>,
    #[validate(email(message = "Please add a valid email"))]
    pub email: Option<String>,
    /// Free-form address, geocoded into `location` and not stored.
    #[serde(default)]
    #[validate(length(min = 1, message = "Please add an address"))]
    pub address: String,
    #[serde(default)]
    #[schema(value_type = Vec<String>)]
    #[validate(length(min = 1, message = "Please add at least one career"))]
    pub careers: Vec<Career>,
    #[serde(default)]
    pub housing: bool,
    #[serde(default)]
    pub job_assistance: bool,
    #[serde(default)]
    pub job_guarantee: bool,
    #[serde(default)]
    pub accept_gi: bool,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBootcampDto {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Please add a name of no more than 50 characters"
    ))]
    pub name: Option<String>,
    #[validate(length(
        min = 1,
        max = 500,
        message = "Please add a description of no more than 500 characters"
    ))]
    pub description: Option<String>,
    #[validate(url(message = "Please use a valid URL with HTTP or HTTPS"))]
    pub website: Option<String>,
    #[validate(length(max = 20, message = "Phone number can not be longer than 20 characters"))]
    pub phone: Option<String>,
    #[validate(email(message = "Please add a valid email"))]
    pub email: Option<String>,
    #[validate(length(min = 1, message = "Please add an address"))]
    pub address: Option<String>,
    #[schema(value_type = Option<Vec<String>>)]
    #[validate(length(min = 1, message = "Please add at least one career"))]
    pub careers: Option<Vec<Career>>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}
