//! Bootcamp domain models and parameters.

use std::path::Path;

use axum::body::Bytes;
use chrono::{DateTime, Utc};
use entity::bootcamp::Career;
use sha2::{Digest, Sha256};

use crate::{
    model::{
        bootcamp::{BootcampDto, BootcampSummaryDto, CreateBootcampDto, LocationDto, UpdateBootcampDto},
        course::CourseDto,
    },
    server::model::geo::GeoLocation,
};

pub const DEFAULT_PHOTO: &str = "no-photo.jpg";

#[derive(Debug, Clone)]
pub struct Bootcamp {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub location: GeoLocation,
    pub careers: Vec<Career>,
    pub average_rating: Option<f64>,
    pub average_cost: Option<f64>,
    pub photo: String,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
    pub created_at: DateTime<Utc>,
    pub user_id: i32,
}

impl Bootcamp {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::bootcamp::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            website: entity.website,
            phone: entity.phone,
            email: entity.email,
            location: GeoLocation {
                latitude: entity.latitude,
                longitude: entity.longitude,
                formatted_address: entity.formatted_address,
                street: entity.street,
                city: entity.city,
                state: entity.state,
                zipcode: entity.zipcode,
                country: entity.country,
            },
            careers: entity.careers.0,
            average_rating: entity.average_rating,
            average_cost: entity.average_cost,
            photo: entity.photo,
            housing: entity.housing,
            job_assistance: entity.job_assistance,
            job_guarantee: entity.job_guarantee,
            accept_gi: entity.accept_gi,
            created_at: entity.created_at,
            user_id: entity.user_id,
        }
    }

    /// Converts to the DTO, inlining `courses` when they were loaded.
    pub fn into_dto(self, courses: Option<Vec<CourseDto>>) -> BootcampDto {
        BootcampDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            website: self.website,
            phone: self.phone,
            email: self.email,
            location: LocationDto {
                latitude: self.location.latitude,
                longitude: self.location.longitude,
                formatted_address: self.location.formatted_address,
                street: self.location.street,
                city: self.location.city,
                state: self.location.state,
                zipcode: self.location.zipcode,
                country: self.location.country,
            },
            careers: self.careers,
            average_rating: self.average_rating,
            average_cost: self.average_cost,
            photo: self.photo,
            housing: self.housing,
            job_assistance: self.job_assistance,
            job_guarantee: self.job_guarantee,
            accept_gi: self.accept_gi,
            created_at: self.created_at,
            user: self.user_id,
            courses,
        }
    }
}

/// Name and description of a bootcamp, inlined into course and review responses.
#[derive(Debug, Clone, PartialEq)]
pub struct BootcampSummary {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl BootcampSummary {
    pub fn from_entity(entity: entity::bootcamp::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> BootcampSummaryDto {
        BootcampSummaryDto {
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBootcampParams {
    pub name: String,
    pub description: String,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Free-form address to geocode.
    pub address: String,
    pub careers: Vec<Career>,
    pub housing: bool,
    pub job_assistance: bool,
    pub job_guarantee: bool,
    pub accept_gi: bool,
}

impl CreateBootcampParams {
    pub fn from_dto(dto: CreateBootcampDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            website: dto.website,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            careers: dto.careers,
            housing: dto.housing,
            job_assistance: dto.job_assistance,
            job_guarantee: dto.job_guarantee,
            accept_gi: dto.accept_gi,
        }
    }
}

/// Partial update of a bootcamp. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateBootcampParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// New address; when present the location is geocoded again.
    pub address: Option<String>,
    pub careers: Option<Vec<Career>>,
    pub housing: Option<bool>,
    pub job_assistance: Option<bool>,
    pub job_guarantee: Option<bool>,
    pub accept_gi: Option<bool>,
}

impl UpdateBootcampParams {
    pub fn from_dto(dto: UpdateBootcampDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            website: dto.website,
            phone: dto.phone,
            email: dto.email,
            address: dto.address,
            careers: dto.careers,
            housing: dto.housing,
            job_assistance: dto.job_assistance,
            job_guarantee: dto.job_guarantee,
            accept_gi: dto.accept_gi,
        }
    }
}

/// A file part received by the photo upload endpoint.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl PhotoUpload {
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_deref()
            .is_some_and(|content_type| content_type.starts_with("image"))
    }

    /// Extension of the client's file name including the dot, or empty.
    ///
    /// Only ASCII alphanumeric extensions are kept so the stored name stays a plain file name.
    pub fn extension(&self) -> String {
        self.file_name
            .as_deref()
            .and_then(|name| Path::new(name).extension())
            .and_then(|ext| ext.to_str())
            .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default()
    }

    /// Name under which the photo of bootcamp `id` is stored.
    pub fn stored_name(&self, id: i32) -> String {
        format!("photo_{}{}", id, self.extension())
    }
}

/// Derives the URL slug of a bootcamp name.
///
/// Runs of characters other than ASCII letters and digits collapse into a single `-`;
/// the result is lower case with no leading or trailing separator. A name without
/// any ASCII letter or digit gets `bootcamp-` followed by a digest prefix of the name,
/// so distinct names still map to distinct slugs.
pub fn slugify(name: &str) -> String {
    let slug = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        let digest = Sha256::digest(name.trim().as_bytes());
        return format!("bootcamp-{}", hex::encode(&digest[..6]));
    }

    slug
}
