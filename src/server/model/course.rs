//! Course domain models and parameters.

use chrono::{DateTime, Utc};
use entity::course::MinimumSkill;

use crate::{
    model::course::{BootcampRefDto, CourseDto, CreateCourseDto, UpdateCourseDto},
    server::model::bootcamp::BootcampSummary,
};

#[derive(Debug, Clone)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: f64,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
    pub created_at: DateTime<Utc>,
    pub bootcamp_id: i32,
    pub user_id: i32,
    /// Owning bootcamp, present when the query populated it.
    pub bootcamp: Option<BootcampSummary>,
}

impl Course {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The course entity from the database
    /// - `bootcamp` - Owning bootcamp when it was loaded alongside the course
    pub fn from_entity(
        entity: entity::course::Model,
        bootcamp: Option<entity::bootcamp::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            weeks: entity.weeks,
            tuition: entity.tuition,
            minimum_skill: entity.minimum_skill,
            scholarship_available: entity.scholarship_available,
            created_at: entity.created_at,
            bootcamp_id: entity.bootcamp_id,
            user_id: entity.user_id,
            bootcamp: bootcamp.map(BootcampSummary::from_entity),
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            title: self.title,
            description: self.description,
            weeks: self.weeks,
            tuition: self.tuition,
            minimum_skill: self.minimum_skill,
            scholarship_available: self.scholarship_available,
            created_at: self.created_at,
            bootcamp: match self.bootcamp {
                Some(summary) => BootcampRefDto::Summary(summary.into_dto()),
                None => BootcampRefDto::Id(self.bootcamp_id),
            },
            user: self.user_id,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCourseParams {
    pub title: String,
    pub description: String,
    pub weeks: String,
    pub tuition: f64,
    pub minimum_skill: MinimumSkill,
    pub scholarship_available: bool,
}

impl CreateCourseParams {
    pub fn from_dto(dto: CreateCourseDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            weeks: dto.weeks,
            tuition: dto.tuition,
            minimum_skill: dto.minimum_skill,
            scholarship_available: dto.scholarship_available,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateCourseParams {
    pub title: Option<String>,
    pub description: Option<String>,
    pub weeks: Option<String>,
    pub tuition: Option<f64>,
    pub minimum_skill: Option<MinimumSkill>,
    pub scholarship_available: Option<bool>,
}

impl UpdateCourseParams {
    pub fn from_dto(dto: UpdateCourseDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            weeks: dto.weeks,
            tuition: dto.tuition,
            minimum_skill: dto.minimum_skill,
            scholarship_available: dto.scholarship_available,
        }
    }
}

/// Average tuition rounded up to the next multiple of ten, or `None` without courses.
pub fn average_cost(tuitions: &[f64]) -> Option<f64> {
    if tuitions.is_empty() {
        return None;
    }

    let mean = tuitions.iter().sum::<f64>() / tuitions.len() as f64;
    Some((mean / 10.0).ceil() * 10.0)
}
