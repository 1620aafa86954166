use clap::Parser;
use discount_facets::utils::error::{ErrorSeverity, FacetError};
use discount_facets::utils::{logger, validation::Validate};
use discount_facets::{CliConfig, DiscountFilter, LocalCatalog, RawSelection, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_log);

    tracing::info!("Starting discount-facets CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(&cli).await {
        tracing::error!(
            "❌ Discount evaluation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> Result<(), FacetError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            TomlConfig::from_file(path)?
        }
        None => TomlConfig::default(),
    };
    cli.apply_overrides(&mut config);

    // 驗證配置
    config.validate()?;
    let catalog_path = discount_facets::utils::validation::validate_required_field(
        "catalog.path",
        &config.catalog.path,
    )?;

    let now = cli.reference_instant()?;
    let catalog = LocalCatalog::new(catalog_path.as_str(), config.catalog_format()?);
    let filter = DiscountFilter::new(&config);
    let raw = RawSelection::from(cli.selection.as_deref());

    tracing::info!(
        "Evaluating '{}' ({}={:?}) at {}",
        filter.name(),
        filter.request_var(),
        cli.selection,
        now
    );

    let state = filter.evaluate_source(&catalog, &raw, now).await?;

    let report = serde_json::json!({
        "filter": {
            "name": filter.name(),
            "request_var": filter.request_var(),
            "reset_value": filter.reset_value(),
        },
        "evaluated_at": state.evaluated_at,
        "selection": state.applied.selection,
        "active_filter": state.active_filter,
        "matched_ids": state.applied.matched_ids,
        "options": state.options(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::info!(
        "✅ {} matching items, {} facet options",
        state.applied.matched_ids.len(),
        state.facets.len()
    );
    Ok(())
}
