use chrono::{DateTime, Utc};
use entity::course::MinimumSkill;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::bootcamp::BootcampSummaryDto;

/// Reference to the owning bootcamp: a bare id, or a summary when populated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum BootcampRefDto {
    Id(i32),
    Summary(BootcampSummaryDto),
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: f64,
    #[schema(value_type = String)]
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    pub created_at: DateTime<Utc>,
    pub bootcamp: BootcampRefDto,
    pub user: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseDto {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please add a course title"))]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please add a description"))]
    pub description: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Please add number of weeks"))]
    pub weeks: String,
    #[validate(range(min = 0.0, message = "Please add a tuition cost"))]
    pub tuition: f64,
    #[schema(value_type = String)]
    pub minimum_skill: MinimumSkill,
    #[serde(default)]
    pub scholarship_available: bool,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseDto {
    #[validate(length(min = 1, message = "Please add a course title"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Please add a description"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "Please add number of weeks"))]
    pub weeks: Option<String>,
    #[validate(range(min = 0.0, message = "Please add a tuition cost"))]
    pub tuition: Option<f64>,
    #[schema(value_type = Option<String>)]
    pub minimum_skill: Option<MinimumSkill>,
    pub scholarship_available: Option<bool>,
}
