//! Profile edit draft.

use shared::dto::{Profile, SessionUser, UpdateProfileRequest};

use crate::core::error::{AppError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub bio: String,
    /// `data:image/...;base64,` URL; `None` once removed
    pub avatar: Option<String>,
}

impl From<&Profile> for ProfileForm {
    fn from(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            email: profile.email.clone(),
            phone: profile.phone.clone().unwrap_or_default(),
            city: profile.city.clone().unwrap_or_default(),
            bio: profile.bio.clone().unwrap_or_default(),
            avatar: profile.avatar_base64.clone().filter(|a| !a.is_empty()),
        }
    }
}

impl ProfileForm {
    pub fn to_request(&self) -> Result<UpdateProfileRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::Validation("Name is required".into()));
        }
        Ok(UpdateProfileRequest {
            name: name.to_string(),
            phone: self.phone.trim().to_string(),
            city: self.city.trim().to_string(),
            bio: self.bio.trim().to_string(),
            avatar_base64: self.avatar.clone(),
        })
    }

    pub fn remove_avatar(&mut self) {
        self.avatar = None;
    }
}

/// Cached session user after a saved profile.
pub fn session_user(profile: &Profile) -> SessionUser {
    SessionUser {
        name: profile.name.clone(),
        email: profile.email.clone(),
        avatar_base64: profile.avatar_base64.clone().filter(|a| !a.is_empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_from_profile_and_back() {
        let profile = Profile {
            name: "Ana".into(),
            email: "ana@shop.com".into(),
            city: Some("Recife".into()),
            avatar_base64: Some("data:image/png;base64,AAAA".into()),
            ..Profile::default()
        };

        let mut form = ProfileForm::from(&profile);
        assert_eq!(form.phone, "");
        assert_eq!(form.city, "Recife");

        form.remove_avatar();
        let request = form.to_request().unwrap();
        assert_eq!(request.avatar_base64, None);
        assert_eq!(request.name, "Ana");
    }

    #[test]
    fn test_name_required() {
        let form = ProfileForm::default();
        assert!(form.to_request().is_err());
    }

    #[test]
    fn test_session_user_drops_empty_avatar() {
        let profile = Profile {
            name: "Ana".into(),
            email: "ana@shop.com".into(),
            avatar_base64: Some(String::new()),
            ..Profile::default()
        };
        assert_eq!(session_user(&profile).avatar_base64, None);
    }
}
