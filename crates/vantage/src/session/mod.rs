//! The session state machine: navigation, discover deck, chat overlay, and
//! the premium gate, driven by one method per user action so the whole flow
//! is testable without a rendering layer.

pub mod chat;
pub mod discover;
pub mod domain;

pub use chat::{ChatMessage, ChatSession};
pub use discover::{DiscoverDeck, MatchEntry, SwipeOutcome};
pub use domain::{ChatRole, SessionError, SwipeDirection, Tab, View};

use crate::compat::CompatibilityResult;
use crate::payment::TransactionId;
use crate::profiles::{demo_candidates, OnboardingForm, Profile, ProfileId};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What `use_icebreaker` did, so callers can route the follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IcebreakerOutcome {
    /// The stored icebreaker now sits in the compose field.
    Composed(String),
    /// Locked feature; the payment prompt was opened instead.
    PaymentRequired,
    /// Paid, but no verdict was stored for this match.
    Unavailable,
}

/// Compact projection for listings and demo output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchView {
    pub id: ProfileId,
    pub name: String,
    pub score: u8,
}

/// One user's in-process app state. Nothing is persisted; a restart starts
/// over at the landing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    view: View,
    tab: Tab,
    current_user: Option<Profile>,
    deck: DiscoverDeck,
    chat: Option<ChatSession>,
    is_paid: bool,
    payment_open: bool,
}

impl Session {
    pub fn new(candidates: Vec<Profile>) -> Self {
        Self {
            view: View::Landing,
            tab: Tab::Discover,
            current_user: None,
            deck: DiscoverDeck::new(candidates),
            chat: None,
            is_paid: false,
            payment_open: false,
        }
    }

    /// Session over the built-in demo catalog.
    pub fn with_demo_catalog() -> Self {
        Self::new(demo_candidates())
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn current_user(&self) -> Option<&Profile> {
        self.current_user.as_ref()
    }

    pub fn deck(&self) -> &DiscoverDeck {
        &self.deck
    }

    pub fn chat(&self) -> Option<&ChatSession> {
        self.chat.as_ref()
    }

    pub fn is_paid(&self) -> bool {
        self.is_paid
    }

    pub fn payment_prompt_open(&self) -> bool {
        self.payment_open
    }

    pub fn plan_label(&self) -> &'static str {
        if self.is_paid {
            "Premium Member"
        } else {
            "Free Tier"
        }
    }

    pub fn matches(&self) -> &[MatchEntry] {
        self.deck.matches()
    }

    pub fn match_views(&self) -> Vec<MatchView> {
        self.deck
            .matches()
            .iter()
            .map(|entry| MatchView {
                id: entry.profile.id.clone(),
                name: entry.profile.name.clone(),
                score: entry.score(),
            })
            .collect()
    }

    fn require_view(&self, expected: View, action: &'static str) -> Result<(), SessionError> {
        if self.view == expected {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                from: self.view,
                action,
            })
        }
    }

    /// Landing "start" action.
    pub fn begin_onboarding(&mut self) -> Result<(), SessionError> {
        self.require_view(View::Landing, "begin onboarding")?;
        self.view = View::Onboarding;
        Ok(())
    }

    /// Onboarding "complete" action: validate the form, commit the current
    /// user, and enter the app on the discover tab.
    pub fn complete_onboarding(&mut self, form: OnboardingForm) -> Result<&Profile, SessionError> {
        self.require_view(View::Onboarding, "complete onboarding")?;
        let profile = form.submit()?;
        info!(user = %profile.id, "profile created, entering app");
        self.view = View::App;
        self.tab = Tab::Discover;
        Ok(self.current_user.insert(profile))
    }

    pub fn select_tab(&mut self, tab: Tab) -> Result<(), SessionError> {
        self.require_view(View::App, "switch tabs")?;
        self.tab = tab;
        Ok(())
    }

    /// Candidate currently on the discover card.
    pub fn current_candidate(&self) -> Option<&Profile> {
        self.deck.current()
    }

    /// Deliver a resolved compatibility estimate. Safe to call at any time;
    /// a result for a candidate the cursor already passed is dropped.
    pub fn estimate_resolved(&mut self, candidate: &ProfileId, result: CompatibilityResult) -> bool {
        self.deck.record_estimate(candidate, result)
    }

    /// Record a swipe decision for the current candidate.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome, SessionError> {
        self.require_view(View::App, "swipe")?;
        let outcome = self.deck.swipe(direction)?;
        if outcome.matched {
            info!(profile = %outcome.profile.id, "it's a match");
        } else {
            debug!(profile = %outcome.profile.id, "passed");
        }
        Ok(outcome)
    }

    /// Restart the discover pass once the deck is exhausted.
    pub fn review_again(&mut self) -> Result<(), SessionError> {
        self.require_view(View::App, "review profiles again")?;
        self.deck.review_again()
    }

    /// Open the chat overlay for a previously matched profile.
    pub fn open_chat(&mut self, match_id: &ProfileId) -> Result<&ChatSession, SessionError> {
        self.require_view(View::App, "open a chat")?;
        let entry = self
            .deck
            .find_match(match_id)
            .ok_or_else(|| SessionError::UnknownMatch(match_id.clone()))?;
        let opened = ChatSession::open(&entry.profile);
        Ok(self.chat.insert(opened))
    }

    /// Close the chat overlay, discarding its log.
    pub fn close_chat(&mut self) {
        self.chat = None;
    }

    /// Append a user message to the open chat.
    pub fn send_message(&mut self, text: &str) -> Result<Option<ChatMessage>, SessionError> {
        let chat = self.chat.as_mut().ok_or(SessionError::NoActiveChat)?;
        Ok(chat.send(text).cloned())
    }

    /// The gated icebreaker shortcut. Unpaid sessions get the payment
    /// prompt and an untouched compose field; paid sessions get the stored
    /// icebreaker, or nothing when the match has no stored verdict.
    pub fn use_icebreaker(&mut self) -> Result<IcebreakerOutcome, SessionError> {
        let match_id = self
            .chat
            .as_ref()
            .map(|chat| chat.match_id().clone())
            .ok_or(SessionError::NoActiveChat)?;

        if !self.is_paid {
            self.payment_open = true;
            return Ok(IcebreakerOutcome::PaymentRequired);
        }

        let stored = self
            .deck
            .find_match(&match_id)
            .and_then(|entry| entry.compatibility.as_ref())
            .map(|result| result.icebreaker.clone());

        match stored {
            Some(text) => {
                if let Some(chat) = self.chat.as_mut() {
                    chat.set_compose(text.clone());
                }
                Ok(IcebreakerOutcome::Composed(text))
            }
            None => Ok(IcebreakerOutcome::Unavailable),
        }
    }

    /// Explicit "upgrade"/"unlock" action; reachable from any screen.
    pub fn request_upgrade(&mut self) {
        self.payment_open = true;
    }

    pub fn close_payment(&mut self) {
        self.payment_open = false;
    }

    /// Caller-side effect of a successful charge: unlock premium and
    /// dismiss the prompt. The flag never reverts within a session.
    pub fn payment_succeeded(&mut self, transaction: &TransactionId) {
        if !self.is_paid {
            info!(%transaction, "premium unlocked");
        }
        self.is_paid = true;
        self.payment_open = false;
    }
}
