use clap::Args;
use tracing::info;
use vantage::compat::{analyze, CompatibilityEstimator};
use vantage::config::AppConfig;
use vantage::error::AppError;
use vantage::payment::MobileMoneySimulator;
use vantage::profiles::{OnboardingForm, Profile, ProfileId};
use vantage::session::{IcebreakerOutcome, Session, SwipeDirection, Tab};

/// Swipe decisions taken in order during the demo pass, cycled when the
/// deck is longer than the script.
#[derive(Debug, Clone)]
pub(crate) struct SwipeScript(Vec<SwipeDirection>);

impl SwipeScript {
    fn decision(&self, index: usize) -> SwipeDirection {
        self.0[index % self.0.len()]
    }
}

pub(crate) fn parse_swipe_script(raw: &str) -> Result<SwipeScript, String> {
    let mut decisions = Vec::new();
    for symbol in raw.chars() {
        match symbol.to_ascii_lowercase() {
            'r' => decisions.push(SwipeDirection::Right),
            'l' => decisions.push(SwipeDirection::Left),
            other => return Err(format!("unknown swipe '{other}', expected 'r' or 'l'")),
        }
    }
    if decisions.is_empty() {
        return Err("swipe script must contain at least one decision".to_string());
    }
    Ok(SwipeScript(decisions))
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Display name for the onboarded user
    #[arg(long, default_value = "Amara")]
    pub(crate) name: String,
    /// Age for the onboarded user
    #[arg(long, default_value_t = 26)]
    pub(crate) age: u8,
    /// Interest tags to select during onboarding (repeatable)
    #[arg(long = "interest")]
    pub(crate) interests: Vec<String>,
    /// Swipe decisions for the discover pass, e.g. "rlr"
    #[arg(long, default_value = "rlr", value_parser = parse_swipe_script)]
    pub(crate) swipes: SwipeScript,
    /// Phone number charged during the upgrade step
    #[arg(long, default_value = "0788123456")]
    pub(crate) phone: String,
    /// Premium price in minor currency units
    #[arg(long, default_value_t = 4_900)]
    pub(crate) amount: u64,
    /// Skip every artificial delay
    #[arg(long)]
    pub(crate) fast: bool,
}

impl Default for DemoArgs {
    fn default() -> Self {
        Self {
            name: "Amara".to_string(),
            age: 26,
            interests: Vec::new(),
            swipes: SwipeScript(vec![
                SwipeDirection::Right,
                SwipeDirection::Left,
                SwipeDirection::Right,
            ]),
            phone: "0788123456".to_string(),
            amount: 4_900,
            fast: false,
        }
    }
}

pub(crate) async fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let simulators = if args.fast {
        config.simulators.clone().instant()
    } else {
        config.simulators.clone()
    };
    let estimator = CompatibilityEstimator::from_config(&simulators);
    let payments = MobileMoneySimulator::from_config(&simulators);

    println!("Vantage demo");

    // Landing -> onboarding -> app.
    let mut session = Session::with_demo_catalog();
    session.begin_onboarding()?;

    let mut form = OnboardingForm::new(args.name, Some(args.age));
    for interest in &args.interests {
        form.toggle_interest(interest);
    }
    let user = session.complete_onboarding(form)?.clone();
    println!(
        "- Onboarded {} ({}), interests: {}",
        user.name,
        user.age,
        user.interests.join(", ")
    );

    // Discover pass.
    let mut swiped = 0;
    while let Some(candidate) = session.current_candidate().cloned() {
        let verdict = estimator.estimate(&user, &candidate).await;
        session.estimate_resolved(&candidate.id, verdict.clone());

        let direction = args.swipes.decision(swiped);
        let outcome = session.swipe(direction)?;
        swiped += 1;

        if outcome.matched {
            println!(
                "- Swiped right on {} ({}% compatible): {}",
                candidate.name, verdict.score, verdict.insight
            );
        } else {
            println!("- Passed on {}", candidate.name);
        }

        tokio::time::sleep(simulators.swipe_settle).await;
    }
    println!("- You're caught up: every nearby profile has been reviewed");

    // Matches tab.
    session.select_tab(Tab::Matches)?;
    let views = session.match_views();
    if views.is_empty() {
        println!("- No matches this pass; nothing left to demo");
        return Ok(());
    }
    match serde_json::to_string_pretty(&views) {
        Ok(json) => println!("- Matches:\n{json}"),
        Err(err) => println!("- Matches unavailable: {err}"),
    }

    // Chat plus the gated icebreaker.
    let first_match = views[0].id.clone();
    let chat = session.open_chat(&first_match)?;
    println!("- {}: {}", views[0].name, chat.messages()[0].text);

    if session.use_icebreaker()? == IcebreakerOutcome::PaymentRequired {
        println!("- Icebreaker is a premium feature; starting the upgrade flow");
        match payments.charge(&args.phone, args.amount).await {
            Ok(transaction) => {
                session.payment_succeeded(&transaction);
                println!("- Charge approved: {transaction}");
            }
            Err(err) => {
                session.close_payment();
                println!("- Charge declined ({err}); staying on {}", session.plan_label());
                return Ok(());
            }
        }
    }

    match session.use_icebreaker()? {
        IcebreakerOutcome::Composed(text) => {
            let sent = session.send_message(&text)?;
            info!(sent = sent.is_some(), "icebreaker delivered");
            println!("- Sent icebreaker: {text}");
        }
        IcebreakerOutcome::Unavailable => {
            println!("- No stored icebreaker for this match (estimate never resolved)");
        }
        IcebreakerOutcome::PaymentRequired => unreachable!("premium unlocked above"),
    }

    println!("- Plan: {}", session.plan_label());
    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Viewer display name
    #[arg(long)]
    pub(crate) viewer: String,
    /// Candidate display name
    #[arg(long)]
    pub(crate) candidate: String,
    /// Candidate's first interest tag
    #[arg(long)]
    pub(crate) interest: Option<String>,
    /// Skip the artificial thinking delay
    #[arg(long)]
    pub(crate) fast: bool,
}

fn probe_profile(id: &str, name: &str, interest: Option<String>) -> Profile {
    Profile {
        id: ProfileId(id.to_string()),
        name: name.to_string(),
        age: 25,
        job: String::new(),
        bio: String::new(),
        image_url: String::new(),
        interests: interest.into_iter().collect(),
    }
}

pub(crate) async fn run_estimate(config: &AppConfig, args: EstimateArgs) -> Result<(), AppError> {
    let viewer = probe_profile("viewer", &args.viewer, None);
    let candidate = probe_profile("candidate", &args.candidate, args.interest);

    let result = if args.fast {
        analyze(&viewer, &candidate)
    } else {
        CompatibilityEstimator::from_config(&config.simulators)
            .estimate(&viewer, &candidate)
            .await
    };

    match serde_json::to_string_pretty(&result) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("estimate unavailable: {err}"),
    }
    Ok(())
}

#[derive(Args, Debug)]
pub(crate) struct ChargeArgs {
    /// Phone number to push the charge to
    #[arg(long)]
    pub(crate) phone: String,
    /// Amount in minor currency units
    #[arg(long)]
    pub(crate) amount: u64,
    /// Skip the simulated USSD interaction delay
    #[arg(long)]
    pub(crate) fast: bool,
}

pub(crate) async fn run_charge(config: &AppConfig, args: ChargeArgs) -> Result<(), AppError> {
    let simulators = if args.fast {
        config.simulators.clone().instant()
    } else {
        config.simulators.clone()
    };

    let transaction = MobileMoneySimulator::from_config(&simulators)
        .charge(&args.phone, args.amount)
        .await?;
    println!("charge approved: {transaction}");
    Ok(())
}
