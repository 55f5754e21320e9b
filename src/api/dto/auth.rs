//! DTOs for registration and login.

use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use validator::Validate;

/// Display names may contain inner spaces but not leading or trailing ones.
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\S(.*\S)?$").unwrap());

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(min = 1, message = "Email can not be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password can not be empty"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "Passwords do not match"))]
    pub confirm_password: String,

    #[validate(length(min = 1, max = 64, message = "Name must be 1 to 64 characters"))]
    #[validate(regex(
        path = "*NAME_REGEX",
        message = "Name can not start or end with whitespace"
    ))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email can not be empty"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password can not be empty"))]
    pub password: String,
}
