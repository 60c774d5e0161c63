mod catalog;

pub use catalog::demo_candidates;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Interest used for templating whenever a profile lists none.
pub const FALLBACK_INTEREST: &str = "Life";

/// Tags offered during onboarding; free-form tags are equally valid.
pub const SUGGESTED_INTERESTS: [&str; 12] = [
    "Tech", "Travel", "Art", "Music", "Fitness", "Foodie", "Gaming", "Nature", "Fashion",
    "Movies", "Reading", "Dancing",
];

/// Onboarding keeps at most this many selected interests.
pub const MAX_INTERESTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProfileId(pub String);

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member profile. Created once at catalog load or onboarding completion
/// and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub age: u8,
    pub job: String,
    pub bio: String,
    pub image_url: String,
    pub interests: Vec<String>,
}

impl Profile {
    /// First listed interest, or the shared fallback when none is listed.
    pub fn primary_interest(&self) -> &str {
        self.interests
            .first()
            .map(String::as_str)
            .unwrap_or(FALLBACK_INTEREST)
    }
}

static USER_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_user_id() -> ProfileId {
    let id = USER_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ProfileId(format!("user-{id:06}"))
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OnboardingError {
    #[error("a display name is required")]
    MissingName,
    #[error("a positive age is required")]
    MissingAge,
}

/// Mutable working state for the create-profile form.
///
/// Name and age are required; job, bio, and interests fall back to filler
/// values so an empty form beyond the essentials still yields a usable
/// profile.
#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub name: String,
    pub age: Option<u8>,
    pub job: String,
    pub bio: String,
    pub interests: Vec<String>,
}

impl OnboardingForm {
    pub fn new(name: impl Into<String>, age: Option<u8>) -> Self {
        Self {
            name: name.into(),
            age,
            ..Self::default()
        }
    }

    /// Add or remove a tag, keeping the selection within [`MAX_INTERESTS`].
    pub fn toggle_interest(&mut self, interest: &str) {
        if let Some(position) = self.interests.iter().position(|tag| tag == interest) {
            self.interests.remove(position);
        } else if self.interests.len() < MAX_INTERESTS {
            self.interests.push(interest.to_string());
        }
    }

    /// Validate the form and mint the current-user profile.
    pub fn submit(self) -> Result<Profile, OnboardingError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(OnboardingError::MissingName);
        }
        let age = match self.age {
            Some(age) if age > 0 => age,
            _ => return Err(OnboardingError::MissingAge),
        };

        let job = non_empty_or(self.job, "Dreamer");
        let bio = non_empty_or(self.bio, "Ready to explore.");
        let interests = if self.interests.is_empty() {
            vec!["General".to_string()]
        } else {
            self.interests
        };

        Ok(Profile {
            id: next_user_id(),
            image_url: avatar_url(&name),
            name,
            age,
            job,
            bio,
            interests,
        })
    }
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

fn avatar_url(name: &str) -> String {
    format!("https://ui-avatars.com/api/?name={name}&background=6B21A8&color=fff&size=400")
}
