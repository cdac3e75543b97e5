use diesel::prelude::*;
use crate::schema::contact_submissions;

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Insertable)]
#[diesel(table_name = contact_submissions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContactSubmission {
    pub id: String, // uuid v4, generated on insert
    pub name: String,
    pub email: String,
    pub project_type: String, // free-form, picked from a list on the site
    pub message: String,
    pub created_at: i64, // int timestamp utc epoch seconds
}

pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: String,
    pub message: String,
}
