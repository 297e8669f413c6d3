use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{bootcamp::BootcampRepository, course::CourseRepository},
    error::AppError,
    model::{
        course::{average_cost, Course, CreateCourseParams, UpdateCourseParams},
        query::{Page, QueryParams},
        user::User,
    },
};

pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of courses with their bootcamp summaries
    pub async fn get_paginated(&self, params: &QueryParams) -> Result<Page<Course>, AppError> {
        CourseRepository::new(self.db).get_paginated(params).await
    }

    /// Gets every course of a bootcamp
    pub async fn get_by_bootcamp(&self, bootcamp_id: i32) -> Result<Vec<Course>, AppError> {
        Ok(CourseRepository::new(self.db)
            .get_by_bootcamp(bootcamp_id)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Course, AppError> {
        CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Adds a course to a bootcamp owned by `user` and refreshes the bootcamp's average cost.
    ///
    /// # Returns
    /// - `Ok(Course)` - The created course
    /// - `Err(AppError::NotFound)` - No bootcamp with that id
    /// - `Err(AppError::AuthErr)` - User neither owns the bootcamp nor is an admin
    pub async fn create(
        &self,
        bootcamp_id: i32,
        user: &User,
        params: CreateCourseParams,
    ) -> Result<Course, AppError> {
        let bootcamp = BootcampRepository::new(self.db)
            .find_by_id(bootcamp_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("No bootcamp with the id of {}", bootcamp_id))
            })?;
        user.ensure_can_modify(
            bootcamp.user_id,
            format!("add a course to bootcamp {}", bootcamp_id),
        )?;

        let txn = self.db.begin().await?;
        let course = CourseRepository::new(&txn)
            .create(bootcamp_id, user.id, params)
            .await?;
        refresh_average_cost(&txn, bootcamp_id).await?;
        txn.commit().await?;

        Ok(course)
    }

    pub async fn update(
        &self,
        id: i32,
        user: &User,
        params: UpdateCourseParams,
    ) -> Result<Course, AppError> {
        let course = CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        user.ensure_can_modify(course.user_id, format!("update course {}", id))?;

        let txn = self.db.begin().await?;
        let updated = CourseRepository::new(&txn)
            .update(id, params)
            .await?
            .ok_or_else(|| not_found(id))?;
        refresh_average_cost(&txn, updated.bootcamp_id).await?;
        txn.commit().await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32, user: &User) -> Result<(), AppError> {
        let course = CourseRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        user.ensure_can_modify(course.user_id, format!("delete course {}", id))?;

        let txn = self.db.begin().await?;
        if !CourseRepository::new(&txn).delete(id).await? {
            return Err(not_found(id));
        }
        refresh_average_cost(&txn, course.bootcamp_id).await?;
        txn.commit().await?;

        Ok(())
    }
}

/// Recomputes a bootcamp's average cost on the connection that changed its courses.
async fn refresh_average_cost<C: ConnectionTrait>(db: &C, bootcamp_id: i32) -> Result<(), AppError> {
    let tuitions = CourseRepository::new(db)
        .tuitions_for_bootcamp(bootcamp_id)
        .await?;

    BootcampRepository::new(db)
        .set_average_cost(bootcamp_id, average_cost(&tuitions))
        .await?;

    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("No course with the id of {}", id))
}
