use sqlx::PgPool;

use crate::models::ContactSubmission;
use crate::submission::ContactForm;

pub async fn create(pool: &PgPool, form: &ContactForm) -> Result<ContactSubmission, sqlx::Error> {
    sqlx::query_as::<_, ContactSubmission>(
        "INSERT INTO contact_submissions
         (full_name, email, phone, contact_method, plan, project_description, deadline, terms)
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8) RETURNING *",
    )
    .bind(&form.full_name)
    .bind(&form.email)
    .bind(&form.phone)
    .bind(&form.contact_method)
    .bind(&form.plan)
    .bind(&form.description)
    .bind(&form.deadline)
    .bind(form.terms)
    .fetch_one(pool)
    .await
}
