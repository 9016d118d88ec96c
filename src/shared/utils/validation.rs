use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_title(title: &str) -> Result<(), AppError> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Title cannot be empty".to_string(),
            ));
        }
        if title.len() > 255 {
            return Err(AppError::InvalidInput(
                "Title too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_rating(rating: f32) -> Result<(), AppError> {
        if !(0.0..=10.0).contains(&rating) {
            return Err(AppError::InvalidInput(
                "Rating must be between 0 and 10".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_episode_count(episodes: i32) -> Result<(), AppError> {
        if episodes < 0 {
            return Err(AppError::InvalidInput(
                "Episode count cannot be negative".to_string(),
            ));
        }
        Ok(())
    }

    pub fn validate_episode_progress(watched: i32, total: i32) -> Result<(), AppError> {
        if watched < 0 {
            return Err(AppError::InvalidInput(
                "Episodes watched cannot be negative".to_string(),
            ));
        }
        if total > 0 && watched > total {
            return Err(AppError::InvalidInput(format!(
                "Episodes watched cannot exceed total episodes ({})",
                total
            )));
        }
        Ok(())
    }
}
