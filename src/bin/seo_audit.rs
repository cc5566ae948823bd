//! SEO audit binary - checks that every routed page has complete metadata
//!
//! Usage:
//!   cargo run --bin seo-audit
//!   SEO_METADATA_FILE=seo.json cargo run --bin seo-audit
//!
//! Optional environment variables:
//! - SEO_METADATA_FILE (JSON merged over the builtin metadata)
//!
//! Exits with a non-zero status when the report contains errors.

use academy_site::config::Config;
use academy_site::i18n::Locale;
use academy_site::routes::RouteTable;
use academy_site::seo::{MetadataValidator, ValidationReport};
use academy_site::web::load_metadata;
use anyhow::Result;

fn print_report(report: &ValidationReport) {
    if report.is_clean() {
        println!("✅ No problems found");
        return;
    }

    if report.has_errors() {
        println!("Errors ({}):", report.errors.len());
        for error in &report.errors {
            println!("  ❌ {}", error);
        }
    }

    if report.has_warnings() {
        println!("Warnings ({}):", report.warnings.len());
        for warning in &report.warnings {
            println!("  ⚠️  {}", warning);
        }
    }
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("academy_site=warn".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let table = load_metadata(&config)?;
    let routes = RouteTable::builtin();

    println!(
        "Auditing {} pages across {} routes in {} locales",
        table.len(),
        routes.len(),
        Locale::ALL.len()
    );
    if let Some(path) = &config.seo_metadata_file {
        println!("Overrides: {}", path);
    }
    println!();

    let report = MetadataValidator::validate(&table, routes);
    print_report(&report);

    if report.has_errors() {
        std::process::exit(1);
    }
    Ok(())
}
