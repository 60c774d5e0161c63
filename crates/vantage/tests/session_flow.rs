//! End-to-end session scenarios: onboarding through discover, matching,
//! chat, and the premium payment gate, driven through the public `Session`
//! facade with instant simulators.

use std::time::Duration;

use vantage::compat::CompatibilityEstimator;
use vantage::payment::{ChanceSource, MobileMoneySimulator};
use vantage::profiles::OnboardingForm;
use vantage::session::{IcebreakerOutcome, Session, SwipeDirection, Tab, View};

/// Scripted chance source so charge outcomes are deterministic.
struct ScriptedChance {
    rolls: Vec<f64>,
    cursor: std::sync::atomic::AtomicUsize,
}

impl ScriptedChance {
    fn new(rolls: Vec<f64>) -> Self {
        Self {
            rolls,
            cursor: std::sync::atomic::AtomicUsize::new(0),
        }
    }
}

impl ChanceSource for ScriptedChance {
    fn roll(&self) -> f64 {
        let index = self
            .cursor
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.rolls[index % self.rolls.len()]
    }
}

fn instant_simulator(rolls: Vec<f64>) -> MobileMoneySimulator {
    MobileMoneySimulator::with_chance(Duration::ZERO, 0.9, Box::new(ScriptedChance::new(rolls)))
}

async fn onboarded_session() -> Session {
    let mut session = Session::with_demo_catalog();
    session.begin_onboarding().expect("start from landing");
    session
        .complete_onboarding(OnboardingForm::new("Amara", Some(26)))
        .expect("name and age provided");
    session
}

#[tokio::test]
async fn full_discover_pass_matches_and_exhausts() {
    let mut session = onboarded_session().await;
    let estimator = CompatibilityEstimator::new(Duration::ZERO);
    let viewer = session.current_user().expect("onboarded").clone();
    let total = session.deck().candidate_count();

    // Swipe right on every candidate, waiting for each estimate.
    for _ in 0..total {
        let candidate = session.current_candidate().expect("candidate present").clone();
        let verdict = estimator.estimate(&viewer, &candidate).await;
        assert!(session.estimate_resolved(&candidate.id, verdict));
        let outcome = session.swipe(SwipeDirection::Right).expect("in app");
        assert!(outcome.matched);
    }

    assert!(session.deck().is_exhausted());
    assert_eq!(session.matches().len(), total);
    assert!(session
        .matches()
        .iter()
        .all(|entry| entry.compatibility.is_some()));

    // Reviewing again restarts the cursor without touching the matches.
    session.review_again().expect("deck exhausted");
    assert_eq!(session.deck().cursor(), 0);
    assert_eq!(session.matches().len(), total);
}

#[tokio::test]
async fn swiping_before_the_estimate_resolves_commits_without_a_verdict() {
    let mut session = onboarded_session().await;
    let viewer = session.current_user().expect("onboarded").clone();
    let candidate = session.current_candidate().expect("candidate present").clone();

    // The user is faster than the 1.5s "AI thinking" timer.
    let outcome = session.swipe(SwipeDirection::Right).expect("in app");
    assert!(outcome.matched);
    assert!(session.matches()[0].compatibility.is_none());

    // The estimate resolving late is dropped, not written anywhere.
    let estimator = CompatibilityEstimator::new(Duration::ZERO);
    let late = estimator.estimate(&viewer, &candidate).await;
    assert!(!session.estimate_resolved(&candidate.id, late));
    assert!(session.matches()[0].compatibility.is_none());
}

#[tokio::test]
async fn chat_greeting_quotes_the_first_interest() {
    let mut session = onboarded_session().await;
    let candidate = session.current_candidate().expect("candidate present").clone();
    session.swipe(SwipeDirection::Right).expect("in app");

    session.select_tab(Tab::Matches).expect("in app");
    let chat = session.open_chat(&candidate.id).expect("matched");
    assert_eq!(chat.messages().len(), 1);
    assert_eq!(
        chat.messages()[0].text,
        format!("Hey! I noticed we both like {}.", candidate.interests[0])
    );

    // Messages do not survive closing the overlay.
    session.send_message("hey there!").expect("chat open");
    session.close_chat();
    let reopened = session.open_chat(&candidate.id).expect("matched");
    assert_eq!(reopened.messages().len(), 1);
}

#[tokio::test]
async fn upgrade_flow_unlocks_the_icebreaker_after_a_failed_attempt() {
    let mut session = onboarded_session().await;
    let viewer = session.current_user().expect("onboarded").clone();
    let candidate = session.current_candidate().expect("candidate present").clone();

    let estimator = CompatibilityEstimator::new(Duration::ZERO);
    let verdict = estimator.estimate(&viewer, &candidate).await;
    let expected_icebreaker = verdict.icebreaker.clone();
    session.estimate_resolved(&candidate.id, verdict);
    session.swipe(SwipeDirection::Right).expect("in app");

    session.open_chat(&candidate.id).expect("matched");

    // Locked: the gate opens the payment prompt and leaves compose alone.
    assert_eq!(
        session.use_icebreaker().expect("chat open"),
        IcebreakerOutcome::PaymentRequired
    );
    assert!(session.payment_prompt_open());

    // First charge attempt declines; the session is untouched.
    let simulator = instant_simulator(vec![0.95, 0.3, 0.5]);
    let declined = simulator.charge("0788123456", 4_900).await;
    assert!(declined.is_err());
    assert!(!session.is_paid());

    // A fresh attempt is fully independent and succeeds.
    let transaction = simulator
        .charge("0788123456", 4_900)
        .await
        .expect("second roll succeeds");
    session.payment_succeeded(&transaction);
    assert!(session.is_paid());
    assert!(!session.payment_prompt_open());

    // Unlocked: the stored icebreaker lands in the compose field.
    assert_eq!(
        session.use_icebreaker().expect("chat open"),
        IcebreakerOutcome::Composed(expected_icebreaker.clone())
    );
    assert_eq!(
        session.chat().expect("chat open").compose(),
        expected_icebreaker
    );

    // And it sends like any typed message.
    let sent = session
        .send_message(&expected_icebreaker)
        .expect("chat open")
        .expect("non-blank");
    assert_eq!(sent.text, expected_icebreaker);
}

#[tokio::test]
async fn navigation_guards_reject_out_of_view_actions() {
    let mut session = Session::with_demo_catalog();
    assert_eq!(session.view(), View::Landing);
    assert!(session.select_tab(Tab::Matches).is_err());
    assert!(session.review_again().is_err());
    assert!(session.send_message("hello").is_err());

    // The upgrade prompt, by contrast, is reachable from anywhere.
    session.request_upgrade();
    assert!(session.payment_prompt_open());
    session.close_payment();
    assert!(!session.payment_prompt_open());
}
