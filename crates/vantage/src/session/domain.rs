use crate::profiles::{OnboardingError, ProfileId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level screen currently owning the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Landing,
    Onboarding,
    App,
}

impl View {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Onboarding => "onboarding",
            Self::App => "app",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tab selector within the main app view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Discover,
    Matches,
    Profile,
}

impl Tab {
    pub const fn ordered() -> [Self; 3] {
        [Self::Discover, Self::Matches, Self::Profile]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Discover => "discover",
            Self::Matches => "matches",
            Self::Profile => "profile",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Horizontal displacement past which a released drag commits as a swipe.
pub const SWIPE_THRESHOLD: f32 = 100.0;

/// A swipe decision. Drag gestures past the displacement threshold and the
/// explicit buttons are interchangeable sources of the same decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    /// Interpret a released drag by its horizontal offset. Within the
    /// threshold the card snaps back and no decision is recorded.
    pub fn from_drag(offset_x: f32) -> Option<Self> {
        if offset_x > SWIPE_THRESHOLD {
            Some(Self::Right)
        } else if offset_x < -SWIPE_THRESHOLD {
            Some(Self::Left)
        } else {
            None
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Match,
}

impl ChatRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Match => "match",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("cannot {action} from the {from} view")]
    InvalidTransition { from: View, action: &'static str },
    #[error("no candidate remains at the current cursor")]
    NoCandidate,
    #[error("candidates remain to review")]
    CandidatesRemaining,
    #[error("profile '{0}' is not in your matches")]
    UnknownMatch(ProfileId),
    #[error("no chat is open")]
    NoActiveChat,
    #[error(transparent)]
    Onboarding(#[from] OnboardingError),
}
