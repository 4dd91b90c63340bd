//! Testimonial model and DTOs.
//!
//! Testimonials are bilingual (Georgian / English). They are never deleted;
//! hiding one sets `is_active = false`.

use datalab_core::domain::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `testimonials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Testimonial {
    pub id: DbId,
    pub name: String,
    pub name_en: String,
    pub position: String,
    pub position_en: String,
    pub text_ka: String,
    pub text_en: String,
    pub rating: i16,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting a testimonial. `rating` defaults to 5.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTestimonial {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(min = 2, max = 100))]
    pub name_en: String,
    #[validate(length(min = 2, max = 100))]
    pub position: String,
    #[validate(length(min = 2, max = 100))]
    pub position_en: String,
    #[validate(length(min = 10, max = 500))]
    pub text_ka: String,
    #[validate(length(min = 10, max = 500))]
    pub text_en: String,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i16>,
    #[validate(length(max = 500))]
    pub image: Option<String>,
}

/// DTO for moderating a testimonial. All fields optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTestimonial {
    #[validate(length(min = 2, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 2, max = 100))]
    pub name_en: Option<String>,
    #[validate(length(min = 2, max = 100))]
    pub position: Option<String>,
    #[validate(length(min = 2, max = 100))]
    pub position_en: Option<String>,
    #[validate(length(min = 10, max = 500))]
    pub text_ka: Option<String>,
    #[validate(length(min = 10, max = 500))]
    pub text_en: Option<String>,
    #[validate(range(min = 1, max = 5))]
    pub rating: Option<i16>,
    #[validate(length(max = 500))]
    pub image: Option<String>,
    pub is_active: Option<bool>,
}

impl UpdateTestimonial {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.name_en.is_none()
            && self.position.is_none()
            && self.position_en.is_none()
            && self.text_ka.is_none()
            && self.text_en.is_none()
            && self.rating.is_none()
            && self.image.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(rating: Option<i16>) -> CreateTestimonial {
        CreateTestimonial {
            name: "ნინო".to_string(),
            name_en: "Nino".to_string(),
            position: "დიზაინერი".to_string(),
            position_en: "Designer".to_string(),
            text_ka: "ყველა ფოტო აღადგინეს, დიდი მადლობა!".to_string(),
            text_en: "They recovered every photo, thank you!".to_string(),
            rating,
            image: None,
        }
    }

    #[test]
    fn rating_bounds() {
        assert!(submission(None).validate().is_ok());
        assert!(submission(Some(1)).validate().is_ok());
        assert!(submission(Some(5)).validate().is_ok());
        assert!(submission(Some(0)).validate().is_err());
        assert!(submission(Some(6)).validate().is_err());
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // Georgian script is three bytes per character in UTF-8.
        let mut input = submission(None);
        input.name = "ნი".to_string();
        assert!(input.validate().is_ok());
    }

    #[test]
    fn update_emptiness() {
        assert!(UpdateTestimonial::default().is_empty());
        let update = UpdateTestimonial {
            is_active: Some(false),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn update_validates_present_fields_only() {
        assert!(UpdateTestimonial::default().validate().is_ok());
        let update = UpdateTestimonial {
            text_en: Some("short".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
