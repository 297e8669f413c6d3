use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::course::BootcampRefDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub bootcamp: BootcampRefDto,
    pub user: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewDto {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 100,
        message = "Please add a title of no more than 100 characters"
    ))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please add some text"))]
    pub text: String,
    #[serde(default)]
    #[validate(range(min = 1, max = 10, message = "Please add a rating between 1 and 10"))]
    pub rating: i32,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewDto {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Please add a title of no more than 100 characters"
    ))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Please add some text"))]
    pub text: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Please add a rating between 1 and 10"))]
    pub rating: Option<i32>,
}
