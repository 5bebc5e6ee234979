use std::time::Duration;

use chromacheck::{
    captcha::ScoringRule,
    names,
    settings::{Settings, TemplatePreset},
    AppState,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The address to bind to.
    #[arg(short, long, env, default_value = names::DEFAULT_ADDRESS)]
    address: String,

    /// How long to show right/wrong feedback before the next question.
    /// Zero moves on immediately.
    #[arg(long, env, default_value_t = names::DEFAULT_ANSWER_DELAY_MS)]
    answer_delay_ms: u64,

    /// Which list of questions each run is drawn from.
    #[arg(long, env, value_enum, default_value_t = TemplatePreset::Standard)]
    template: TemplatePreset,

    /// Which answers on identical pairs count as a bot signal.
    #[arg(long, env, value_enum, default_value_t = ScoringRule::SameMissIsSuspect)]
    scoring_rule: ScoringRule,

    /// Mark the run cookie `Secure` (serve over HTTPS).
    #[arg(long, env)]
    secure_cookies: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,chromacheck=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let settings = Settings::new(
        args.template,
        args.scoring_rule,
        Duration::from_millis(args.answer_delay_ms),
    );
    tracing::info!(
        "template={:?} rule={:?} thresholds={:?} answer_delay={:?}",
        settings.template,
        settings.classifier.rule,
        settings.classifier.thresholds,
        settings.answer_delay
    );

    let app = chromacheck::router(AppState::new(settings, args.secure_cookies));

    let address = args.address.parse::<std::net::SocketAddr>()?;
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!("listening on {address}");
    axum::serve(listener, app).await?;

    Ok(())
}
