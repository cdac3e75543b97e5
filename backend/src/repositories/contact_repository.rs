use chrono::Utc;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use uuid::Uuid;
use crate::{
    models::contact_models::{ContactSubmission, NewContactSubmission},
    schema::contact_submissions,
    DbPool,
};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("failed to get DB connection: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("query failed: {0}")]
    Query(#[from] DieselError),
}

pub struct ContactRepository {
    pool: DbPool
}

impl ContactRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    // Store a submission and hand back the row as persisted
    pub fn create_submission(&self, new_submission: NewContactSubmission) -> Result<ContactSubmission, RepositoryError> {
        let mut conn = self.pool.get()?;

        let submission = ContactSubmission {
            id: Uuid::new_v4().to_string(),
            name: new_submission.name,
            email: new_submission.email,
            project_type: new_submission.project_type,
            message: new_submission.message,
            created_at: Utc::now().timestamp(),
        };

        diesel::insert_into(contact_submissions::table)
            .values(&submission)
            .execute(&mut conn)?;

        let stored = contact_submissions::table
            .filter(contact_submissions::id.eq(&submission.id))
            .select(ContactSubmission::as_select())
            .first(&mut conn)?;
        Ok(stored)
    }

    // Newest first. `seq` grows with every insert, so rows created within the
    // same second still come back in reverse insertion order.
    pub fn get_all_submissions(&self) -> Result<Vec<ContactSubmission>, RepositoryError> {
        let mut conn = self.pool.get()?;
        let submissions = contact_submissions::table
            .order(contact_submissions::seq.desc())
            .select(ContactSubmission::as_select())
            .load(&mut conn)?;
        Ok(submissions)
    }

    #[cfg(test)]
    pub fn count_submissions(&self) -> Result<i64, RepositoryError> {
        let mut conn = self.pool.get()?;
        let count = contact_submissions::table
            .count()
            .get_result(&mut conn)?;
        Ok(count)
    }
}
