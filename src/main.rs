//! Translation audit: loads the site's tables the way the site does, restores
//! the persisted language and reports coverage gaps against the fallback
//! language. Exits with an error when a table is structurally broken.

use anyhow::{bail, Context, Result};
use messu_site::config::Config;
use messu_site::i18n::{LocalizationContext, TranslationTables, TranslationValidator};
use messu_site::preference::FilePreferenceStore;
use messu_site::whatsapp;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("messu_site=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;

    let tables = match &config.locales_dir {
        Some(dir) => {
            info!("Loading translations from {}", dir.display());
            TranslationTables::load_dir(dir)
                .with_context(|| format!("Failed to load translations from {}", dir.display()))?
        }
        None => {
            info!("Using bundled translations");
            TranslationTables::bundled().context("Bundled translations are invalid")?
        }
    };

    let report = TranslationValidator::validate(&tables);

    let store = FilePreferenceStore::new(&config.preference_file);
    let l10n = LocalizationContext::new(tables, Box::new(store));
    let document = l10n.document();
    info!(
        "Document: lang={} dir={} (preference file {})",
        document.lang,
        document.dir.as_str(),
        config.preference_file.display()
    );
    info!("WhatsApp hand-off: {}", whatsapp::chat_url(&config.whatsapp_number));
    let submitter = config.submitter();
    let retry = config.retry();
    info!(
        "Submission channel: {} attempts, simulated delay {:?}",
        retry.max_attempts,
        submitter.delay()
    );

    for key in l10n.tables().keys(l10n.fallback_language()) {
        l10n.resolve(&key);
    }
    let coverage = l10n.metrics().report();
    info!(
        "'{}' coverage: {} direct, {} from '{}', {} missing ({:.1}% degraded)",
        l10n.language(),
        coverage.direct_hits,
        coverage.fallback_hits,
        l10n.fallback_language(),
        coverage.misses,
        coverage.degraded_rate
    );

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for problem in &report.errors {
        error!("{}", problem);
    }

    if report.has_errors() {
        bail!("Translation audit found {} errors", report.errors.len());
    }

    info!(
        "Translation audit passed ({} warnings)",
        report.warnings.len()
    );
    Ok(())
}
