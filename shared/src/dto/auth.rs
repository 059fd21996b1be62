use serde::{Deserialize, Serialize};

use crate::utils::display_name;

/// Role of an authenticated user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Teacher,
    Admin,
}

impl UserRole {
    /// Coerce a backend role string. Unknown roles become [`UserRole::Student`].
    pub fn from_backend(raw: &str) -> Self {
        match raw {
            "teacher" => UserRole::Teacher,
            "admin" => UserRole::Admin,
            _ => UserRole::Student,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Teacher => "teacher",
            UserRole::Admin => "admin",
        }
    }
}

/// Client-side identity of the signed-in user.
///
/// Stored as a JSON snapshot in the session store under the `user` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Access and refresh token pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

/// Result of a login or signup: who signed in and with which tokens
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthSession {
    pub user: AuthUser,
    pub tokens: AuthTokens,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// User record as the backend sends it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendUser {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role: String,
    pub group: Option<String>,
    pub university: Option<String>,
    pub phone: Option<String>,
    pub timezone: Option<String>,
}

/// Login/signup response as the backend sends it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackendAuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: BackendUser,
}

impl From<BackendUser> for AuthUser {
    fn from(user: BackendUser) -> Self {
        let name = display_name(
            user.first_name.as_deref(),
            user.last_name.as_deref(),
            &user.email,
        );

        AuthUser {
            id: user.id,
            name,
            email: user.email,
            role: UserRole::from_backend(&user.role),
        }
    }
}

impl From<BackendAuthResponse> for AuthSession {
    fn from(response: BackendAuthResponse) -> Self {
        AuthSession {
            tokens: AuthTokens {
                access_token: response.access_token,
                refresh_token: response.refresh_token,
            },
            user: response.user.into(),
        }
    }
}
