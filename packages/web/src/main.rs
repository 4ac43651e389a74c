use dioxus::prelude::*;

use intake::IntakeConfig;
use ui::views::IntakePage;
use ui::IntakeProvider;

const CONFIG_TOML: &str = include_str!("../intake.toml");

fn main() {
    let parsed = IntakeConfig::from_toml(CONFIG_TOML);
    let level = parsed
        .as_ref()
        .map(|config| config.logging.level)
        .unwrap_or_default();
    if let Err(e) = dioxus::logger::init(level.subscriber_level()) {
        eprintln!("logger already initialised: {e}");
    }

    let config = match parsed {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}; falling back to defaults");
            IntakeConfig::default()
        }
    };
    let config = with_build_script_url(config, option_env!("INTAKE_SCRIPT_URL"));
    tracing::info!(
        maintenance = config.maintenance.enabled,
        ended = config.application.ended,
        "starting intake form"
    );

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// The script URL baked in at build time wins over the embedded file.
fn with_build_script_url(config: IntakeConfig, url: Option<&str>) -> IntakeConfig {
    match url {
        Some(url) if !url.trim().is_empty() => config.with_script_url(url),
        _ => config,
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<IntakeConfig>();

    rsx! {
        document::Title { "AICS Application Form" }
        document::Link { rel: "stylesheet", href: ui::INTAKE_CSS }

        IntakeProvider { config,
            IntakePage {}
        }
    }
}
