//! Review domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::{
        course::BootcampRefDto,
        review::{CreateReviewDto, ReviewDto, UpdateReviewDto},
    },
    server::model::bootcamp::BootcampSummary,
};

#[derive(Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub created_at: DateTime<Utc>,
    pub bootcamp_id: i32,
    pub user_id: i32,
    /// Reviewed bootcamp, present when the query populated it.
    pub bootcamp: Option<BootcampSummary>,
}

impl Review {
    pub fn from_entity(
        entity: entity::review::Model,
        bootcamp: Option<entity::bootcamp::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            text: entity.text,
            rating: entity.rating,
            created_at: entity.created_at,
            bootcamp_id: entity.bootcamp_id,
            user_id: entity.user_id,
            bootcamp: bootcamp.map(BootcampSummary::from_entity),
        }
    }

    pub fn into_dto(self) -> ReviewDto {
        ReviewDto {
            id: self.id,
            title: self.title,
            text: self.text,
            rating: self.rating,
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
pub struct CreateReviewParams {
    pub title: String,
    pub text: String,
    pub rating: i32,
}

impl CreateReviewParams {
    pub fn from_dto(dto: CreateReviewDto) -> Self {
        Self {
            title: dto.title,
            text: dto.text,
            rating: dto.rating,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReviewParams {
    pub title: Option<String>,
    pub text: Option<String>,
    pub rating: Option<i32>,
}

impl UpdateReviewParams {
    pub fn from_dto(dto: UpdateReviewDto) -> Self {
        Self {
            title: dto.title,
            text: dto.text,
            rating: dto.rating,
        }
    }
}

/// Mean rating, or `None` when the bootcamp has no reviews.
pub fn average_rating(ratings: &[i32]) -> Option<f64> {
    if ratings.is_empty() {
        return None;
    }

    Some(ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64)
}
