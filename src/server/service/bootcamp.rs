use sea_orm::DatabaseConnection;

use crate::server::{
    data::bootcamp::BootcampRepository,
    error::{unique_violation, upload::UploadError, AppError},
    model::{
        bootcamp::{Bootcamp, CreateBootcampParams, PhotoUpload, UpdateBootcampParams},
        course::Course,
        geo::{GeoLocation, SearchArea},
        query::{Page, QueryParams},
        user::User,
    },
    service::geocoder::Geocoder,
    state::UploadSettings,
};

pub struct BootcampService<'a> {
    db: &'a DatabaseConnection,
    geocoder: &'a dyn Geocoder,
}

impl<'a> BootcampService<'a> {
    pub fn new(db: &'a DatabaseConnection, geocoder: &'a dyn Geocoder) -> Self {
        Self { db, geocoder }
    }

    /// Gets one page of bootcamps with their courses
    pub async fn get_paginated(
        &self,
        params: &QueryParams,
    ) -> Result<Page<(Bootcamp, Vec<Course>)>, AppError> {
        BootcampRepository::new(self.db).get_paginated(params).await
    }

    /// Gets a bootcamp, failing with NotFound when it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Bootcamp, AppError> {
        BootcampRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Creates a bootcamp owned by `user` at the geocoded address.
    ///
    /// Non-admin users may own a single bootcamp. The limit is enforced by the unique
    /// owner column, so two concurrent creates by the same publisher cannot both succeed.
    ///
    /// # Returns
    /// - `Ok(Bootcamp)` - The created bootcamp
    /// - `Err(AppError::BadRequest)` - Address could not be geocoded, or the user already
    ///   published a bootcamp
    /// - `Err(AppError::DbErr)` - Duplicate name or other database error
    pub async fn create(
        &self,
        user: &User,
        params: CreateBootcampParams,
    ) -> Result<Bootcamp, AppError> {
        let location = self.geocode_address(&params.address).await?;

        let bootcamp = BootcampRepository::new(self.db)
            .create(params, location, user.id, !user.is_admin())
            .await
            .map_err(|err| match unique_violation(&err) {
                Some(message) if message.contains("exclusive_owner_id") => AppError::BadRequest(
                    format!("The user with ID {} has already published a bootcamp", user.id),
                ),
                _ => err.into(),
            })?;

        tracing::info!("User {} created bootcamp {}", user.id, bootcamp.id);

        Ok(bootcamp)
    }

    /// Updates a bootcamp owned by `user` (or any bootcamp for admins).
    ///
    /// A supplied address is geocoded again and replaces the stored location.
    pub async fn update(
        &self,
        id: i32,
        user: &User,
        params: UpdateBootcampParams,
    ) -> Result<Bootcamp, AppError> {
        let repo = BootcampRepository::new(self.db);

        let bootcamp = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        user.ensure_can_modify(bootcamp.user_id, format!("update bootcamp {}", id))?;

        let location = match params.address.as_deref() {
            Some(address) => Some(self.geocode_address(address).await?),
            None => None,
        };

        repo.update(id, params, location)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Deletes a bootcamp together with its courses and reviews
    pub async fn delete(&self, id: i32, user: &User) -> Result<(), AppError> {
        let repo = BootcampRepository::new(self.db);

        let bootcamp = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        user.ensure_can_modify(bootcamp.user_id, format!("delete bootcamp {}", id))?;

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("User {} deleted bootcamp {}", user.id, id);

        Ok(())
    }

    /// Finds every bootcamp within `distance_miles` of a postal code.
    ///
    /// # Returns
    /// - `Ok(Vec<Bootcamp>)` - Bootcamps inside the radius
    /// - `Err(AppError::NotFound)` - The postal code could not be geocoded
    pub async fn get_within_radius(
        &self,
        zipcode: &str,
        distance_miles: f64,
    ) -> Result<Vec<Bootcamp>, AppError> {
        let Some(center) = self.geocoder.geocode(zipcode).await? else {
            return Err(AppError::NotFound(format!(
                "Could not find a location for zipcode {}",
                zipcode
            )));
        };

        let area = SearchArea::from_miles(center.point(), distance_miles);

        Ok(BootcampRepository::new(self.db).find_within(&area).await?)
    }

    /// Stores an uploaded photo and records it on the bootcamp.
    ///
    /// # Arguments
    /// - `id` - Bootcamp to attach the photo to
    /// - `user` - Authenticated user; must own the bootcamp or be an admin
    /// - `upload` - The `file` part of the request, if one was sent
    /// - `settings` - Upload directory and size limit
    ///
    /// # Returns
    /// - `Ok(String)` - Stored file name, `photo_<id><ext>`
    /// - `Err(AppError::UploadErr)` - Missing file, wrong type, too large, or write failure
    pub async fn upload_photo(
        &self,
        id: i32,
        user: &User,
        upload: Option<PhotoUpload>,
        settings: &UploadSettings,
    ) -> Result<String, AppError> {
        let repo = BootcampRepository::new(self.db);

        let bootcamp = repo.find_by_id(id).await?.ok_or_else(|| not_found(id))?;
        user.ensure_can_modify(bootcamp.user_id, format!("update bootcamp {}", id))?;

        let upload = upload.ok_or(UploadError::MissingFile)?;
        if !upload.is_image() {
            return Err(UploadError::NotAnImage.into());
        }
        if upload.bytes.len() as u64 > settings.max_bytes {
            return Err(UploadError::TooLarge {
                max_bytes: settings.max_bytes,
            }
            .into());
        }

        let file_name = upload.stored_name(bootcamp.id);
        tokio::fs::write(settings.dir.join(&file_name), &upload.bytes)
            .await
            .map_err(UploadError::Write)?;

        repo.set_photo(id, file_name.clone()).await?;

        Ok(file_name)
    }

    async fn geocode_address(&self, address: &str) -> Result<GeoLocation, AppError> {
        self.geocoder.geocode(address).await?.ok_or_else(|| {
            AppError::BadRequest(format!("Could not geocode address '{}'", address))
        })
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Bootcamp not found with id of {}", id))
}
