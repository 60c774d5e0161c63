//! Pseudo-AI compatibility scoring.
//!
//! The "model" is a pure function of the two display-name lengths and the
//! candidate's first interest; the estimator only adds an artificial
//! thinking delay on top. Equal-length names with the same first interest
//! therefore produce identical results, which is a property callers rely on.

use crate::config::SimulatorConfig;
use crate::profiles::Profile;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    /// Always within [65, 99].
    pub score: u8,
    pub insight: String,
    pub icebreaker: String,
}

fn insight_lines(viewer: &str, candidate: &str) -> [String; 5] {
    [
        format!(
            "{viewer}, your analytical nature blends interestingly with {candidate}'s creative vibes."
        ),
        format!("Both you and {candidate} seem to value deep connections over small talk."),
        format!("{candidate}'s adventurous spirit might just be the spark you need, {viewer}."),
        format!("High compatibility detected! {viewer} and {candidate} share key core values."),
        format!("Opposites attract: {viewer}'s calm complements {candidate}'s energy."),
    ]
}

fn icebreaker_lines(interest: &str) -> [String; 5] {
    [
        format!("I see you're into {interest}. What's your favorite thing about it?"),
        format!("If we could go do something related to {interest} right now, what would it be?"),
        format!("Rank these from 1-10: Pizza, {interest}, and sleep. Go!"),
        format!("I bet you have a great story about {interest}. Care to share?"),
        format!("How did you first get interested in {interest}?"),
    ]
}

/// Derive the compatibility verdict for a (viewer, candidate) pair.
pub fn analyze(viewer: &Profile, candidate: &Profile) -> CompatibilityResult {
    let viewer_len = viewer.name.chars().count();
    let candidate_len = candidate.name.chars().count();

    let score = (65 + (candidate_len * 3) % 30).min(99) as u8;

    let insights = insight_lines(&viewer.name, &candidate.name);
    let insight = insights[(viewer_len + candidate_len) % insights.len()].clone();

    let icebreakers = icebreaker_lines(candidate.primary_interest());
    let icebreaker = icebreakers[candidate_len % icebreakers.len()].clone();

    CompatibilityResult {
        score,
        insight,
        icebreaker,
    }
}

/// Async wrapper adding the configured "AI thinking" latency to [`analyze`].
#[derive(Debug, Clone)]
pub struct CompatibilityEstimator {
    delay: Duration,
}

impl CompatibilityEstimator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &SimulatorConfig) -> Self {
        Self::new(config.estimator_delay)
    }

    /// Resolve a verdict after the artificial delay. Never fails.
    pub async fn estimate(&self, viewer: &Profile, candidate: &Profile) -> CompatibilityResult {
        tokio::time::sleep(self.delay).await;
        let result = analyze(viewer, candidate);
        debug!(
            candidate = %candidate.id,
            score = result.score,
            "compatibility estimate resolved"
        );
        result
    }
}
