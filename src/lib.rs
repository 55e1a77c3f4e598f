pub mod config;
pub mod emitter;
pub mod host;
pub mod interpolate;
pub mod locale;
pub mod messages;
pub mod translator;
pub mod utils;

pub use crate::config::I18nConfig;
pub use crate::host::{Host, MemoryHost, SystemHost};
pub use crate::interpolate::{ParamValue, Params};
pub use crate::locale::{detect_locale, LocaleCode, SupportedLocale};
pub use crate::messages::{LocaleRegistry, MessageTree};
pub use crate::translator::Translator;

use crate::emitter::LOCALE_CHANGED_EVENT;
use crate::utils::logger::LoggerBuilder;
use crate::utils::path::get_config_file_path;
use anyhow::{Context, Result};
use tracing::info;

/// Demo entry point: loads the config, builds a translator on the system
/// host and walks through the supported locales.
pub fn run() -> Result<()> {
    let config = I18nConfig::load_from_file(&get_config_file_path());
    if let Err(e) = LoggerBuilder::new()
        .file_prefix("lingo")
        .default_level(config.log_level.clone())
        .init()
    {
        eprintln!("Warning: failed to initialize logging: {:#}", e);
    }
    info!("Log initialized");

    let host = SystemHost::new();
    host.emitter().listen(LOCALE_CHANGED_EVENT, |event| {
        info!("UI received {}: {}", event.name, event.payload);
    });

    let mut translator =
        Translator::from_config(&config, host).context("Failed to build translator")?;
    info!(
        "Active locale {} (system suggests {})",
        translator.get_locale(),
        translator.detect_locale()
    );

    for supported in translator.get_supported_locales() {
        translator.set_locale(supported.code.as_str());
        println!(
            "[{}] {}: {}",
            supported.code,
            supported.name,
            crate::t!(translator, "greeting.welcome", name = supported.name)
        );
        println!(
            "[{}] {}",
            supported.code,
            crate::t!(translator, "status.progress", done = 3, total = 5)
        );
    }
    Ok(())
}
