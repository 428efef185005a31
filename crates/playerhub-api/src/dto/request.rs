//! Request DTOs with validation.
//!
//! Each body converts into the matching service request once
//! [`crate::extractors::ValidatedJson`] has accepted it.

use serde::Deserialize;
use validator::Validate;

use playerhub_core::types::UserId;
use playerhub_service::achievement::{CreateAchievementRequest, UpdateAchievementRequest};
use playerhub_service::player::{CreatePlayerRequest, UpdatePlayerRequest};
use playerhub_service::user::{RegisterUser, UpdateUserRequest};

/// Login request body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address, or username when it contains no `@`.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Public registration body.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    /// Email.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, max = 128, message = "Password must be 8-128 characters"))]
    pub password: String,
    /// Age in years.
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: i32,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(req: RegisterRequest) -> Self {
        Self {
            username: req.username,
            email: req.email,
            password: req.password,
            age: req.age,
        }
    }
}

/// Partial user update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserBody {
    /// Username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: Option<String>,
    /// Email.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: Option<String>,
    /// Age.
    #[validate(range(min = 1, max = 150, message = "Age must be between 1 and 150"))]
    pub age: Option<i32>,
}

impl From<UpdateUserBody> for UpdateUserRequest {
    fn from(body: UpdateUserBody) -> Self {
        Self {
            username: body.username,
            email: body.email,
            age: body.age,
        }
    }
}

/// New player profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlayerBody {
    /// Nickname.
    #[validate(length(min = 1, max = 50, message = "Nickname must be 1-50 characters"))]
    pub nickname: String,
    /// Avatar URL.
    #[serde(default)]
    #[validate(length(max = 512, message = "Avatar must be at most 512 characters"))]
    pub avatar: String,
    /// Starting level.
    #[validate(range(min = 1, message = "Level must be at least 1"))]
    pub level: Option<i32>,
    /// Starting experience.
    #[validate(range(min = 0, message = "Experience must not be negative"))]
    pub experience: Option<i32>,
    /// Starting points.
    #[validate(range(min = 0, message = "Points must not be negative"))]
    pub points: Option<i32>,
    /// Owner; only admins may name someone other than themselves.
    pub user_id: Option<i64>,
}

impl From<CreatePlayerBody> for CreatePlayerRequest {
    fn from(body: CreatePlayerBody) -> Self {
        Self {
            nickname: body.nickname,
            avatar: body.avatar,
            level: body.level,
            experience: body.experience,
            points: body.points,
            user_id: body.user_id.map(UserId::new),
        }
    }
}

/// Partial player profile update. The owner cannot be changed.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdatePlayerBody {
    /// Nickname.
    #[validate(length(min = 1, max = 50, message = "Nickname must be 1-50 characters"))]
    pub nickname: Option<String>,
    /// Avatar URL.
    #[validate(length(max = 512, message = "Avatar must be at most 512 characters"))]
    pub avatar: Option<String>,
    /// Level.
    #[validate(range(min = 1, message = "Level must be at least 1"))]
    pub level: Option<i32>,
    /// Experience.
    #[validate(range(min = 0, message = "Experience must not be negative"))]
    pub experience: Option<i32>,
    /// Points.
    #[validate(range(min = 0, message = "Points must not be negative"))]
    pub points: Option<i32>,
}

impl From<UpdatePlayerBody> for UpdatePlayerRequest {
    fn from(body: UpdatePlayerBody) -> Self {
        Self {
            nickname: body.nickname,
            avatar: body.avatar,
            level: body.level,
            experience: body.experience,
            points: body.points,
        }
    }
}

/// New achievement.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAchievementBody {
    /// Name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Description.
    #[serde(default)]
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: String,
}

impl From<CreateAchievementBody> for CreateAchievementRequest {
    fn from(body: CreateAchievementBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
        }
    }
}

/// Partial achievement update.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateAchievementBody {
    /// Name.
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    /// Description.
    #[validate(length(max = 1000, message = "Description must be at most 1000 characters"))]
    pub description: Option<String>,
}

impl From<UpdateAchievementBody> for UpdateAchievementRequest {
    fn from(body: UpdateAchievementBody) -> Self {
        Self {
            name: body.name,
            description: body.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_bad_email() {
        let req = RegisterRequest {
            username: "alice".to_string(),
            email: "not-an-email".to_string(),
            password: "correct horse".to_string(),
            age: 30,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_user_all_absent_is_valid() {
        assert!(UpdateUserBody::default().validate().is_ok());
    }

    #[test]
    fn test_create_player_rejects_negative_points() {
        let body: CreatePlayerBody =
            serde_json::from_str(r#"{"nickname":"ace","points":-1}"#).unwrap();
        assert!(body.validate().is_err());
    }

    #[test]
    fn test_create_player_maps_owner() {
        let body: CreatePlayerBody =
            serde_json::from_str(r#"{"nickname":"ace","user_id":9}"#).unwrap();
        let req = CreatePlayerRequest::from(body);
        assert_eq!(req.user_id, Some(UserId(9)));
        assert_eq!(req.avatar, "");
    }
}
