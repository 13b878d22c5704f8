use serde::{Deserialize, Serialize};

/// Profile as returned by `GET /profile` and `GET /auth/me`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub bio: Option<String>,
    pub avatar_base64: Option<String>,
}

/// Profile update (`PUT /profile`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub bio: String,
    /// `None` removes the avatar
    pub avatar_base64: Option<String>,
}

/// Profile update acknowledgement
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UpdateProfileResponse {
    pub message: String,
    pub profile: Profile,
}
