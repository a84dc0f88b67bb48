use std::fmt;

use uuid::Uuid;

use crate::domain::account::models::AccountId;

/// Public-facing details attached to an account (one per account).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub account_id: AccountId,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub company_name: Option<String>,
    pub company_website: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

/// Profile unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProfileId(pub Uuid);

impl ProfileId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProfileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Profile {
    /// Create a profile with every optional field unset.
    pub fn empty(account_id: AccountId) -> Self {
        Self {
            id: ProfileId::new(),
            account_id,
            avatar_url: None,
            bio: None,
            skills: Vec::new(),
            interests: Vec::new(),
            company_name: None,
            company_website: None,
            country: None,
            city: None,
        }
    }

    /// "{city}, {country}" when both are known.
    pub fn location(&self) -> Option<String> {
        match (self.city.as_deref(), self.country.as_deref()) {
            (Some(city), Some(country)) if !city.is_empty() && !country.is_empty() => {
                Some(format!("{}, {}", city, country))
            }
            _ => None,
        }
    }
}

/// Partial profile update. Only provided fields are changed.
#[derive(Debug, Default, Clone)]
pub struct UpdateProfileCommand {
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<Vec<String>>,
    pub interests: Option<Vec<String>>,
    pub company_name: Option<String>,
    pub company_website: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl UpdateProfileCommand {
    /// Apply the provided fields onto `profile`.
    pub fn apply_to(self, profile: &mut Profile) {
        if let Some(avatar_url) = self.avatar_url {
            profile.avatar_url = Some(avatar_url);
        }
        if let Some(bio) = self.bio {
            profile.bio = Some(bio);
        }
        if let Some(skills) = self.skills {
            profile.skills = skills;
        }
        if let Some(interests) = self.interests {
            profile.interests = interests;
        }
        if let Some(company_name) = self.company_name {
            profile.company_name = Some(company_name);
        }
        if let Some(company_website) = self.company_website {
            profile.company_website = Some(company_website);
        }
        if let Some(country) = self.country {
            profile.country = Some(country);
        }
        if let Some(city) = self.city {
            profile.city = Some(city);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_requires_city_and_country() {
        let mut profile = Profile::empty(AccountId::new());
        assert_eq!(profile.location(), None);

        profile.city = Some("Lagos".to_string());
        assert_eq!(profile.location(), None);

        profile.country = Some("Nigeria".to_string());
        assert_eq!(profile.location(), Some("Lagos, Nigeria".to_string()));

        profile.city = Some(String::new());
        assert_eq!(profile.location(), None);
    }

    #[test]
    fn test_apply_only_touches_provided_fields() {
        let mut profile = Profile::empty(AccountId::new());
        profile.bio = Some("old bio".to_string());
        profile.skills = vec!["rust".to_string()];

        UpdateProfileCommand {
            city: Some("Accra".to_string()),
            interests: Some(vec!["climate".to_string()]),
            ..Default::default()
        }
        .apply_to(&mut profile);

        assert_eq!(profile.bio.as_deref(), Some("old bio"));
        assert_eq!(profile.skills, vec!["rust".to_string()]);
        assert_eq!(profile.city.as_deref(), Some("Accra"));
        assert_eq!(profile.interests, vec!["climate".to_string()]);
    }
}
