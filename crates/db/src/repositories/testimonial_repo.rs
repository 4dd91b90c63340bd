//! Repository for the `testimonials` table.

use datalab_core::domain::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

const COLUMNS: &str = "id, name, name_en, position, position_en, text_ka, text_en, rating, \
                       image, is_active, created_at, updated_at";

pub struct TestimonialRepo;

impl TestimonialRepo {
    /// Insert a new testimonial. New testimonials are active.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials \
                (name, name_en, position, position_en, text_ka, text_en, rating, image) \
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, 5), $8) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.name_en)
            .bind(&input.position)
            .bind(&input.position_en)
            .bind(&input.text_ka)
            .bind(&input.text_en)
            .bind(input.rating)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List testimonials newest first, optionally including inactive ones.
    pub async fn list(
        pool: &PgPool,
        include_inactive: bool,
    ) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = if include_inactive {
            format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at DESC, id DESC")
        } else {
            format!(
                "SELECT {COLUMNS} FROM testimonials WHERE is_active = true \
                 ORDER BY created_at DESC, id DESC"
            )
        };
        sqlx::query_as::<_, Testimonial>(&query).fetch_all(pool).await
    }

    /// Update a testimonial. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                name = COALESCE($2, name), \
                name_en = COALESCE($3, name_en), \
                position = COALESCE($4, position), \
                position_en = COALESCE($5, position_en), \
                text_ka = COALESCE($6, text_ka), \
                text_en = COALESCE($7, text_en), \
                rating = COALESCE($8, rating), \
                image = COALESCE($9, image), \
                is_active = COALESCE($10, is_active), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.name_en)
            .bind(&input.position)
            .bind(&input.position_en)
            .bind(&input.text_ka)
            .bind(&input.text_en)
            .bind(input.rating)
            .bind(&input.image)
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Hide a testimonial (set is_active = false).
    ///
    /// Returns `false` if the row does not exist or was already inactive.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE testimonials SET is_active = false, updated_at = NOW() \
             WHERE id = $1 AND is_active = true",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
