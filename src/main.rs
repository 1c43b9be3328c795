use clap::Parser;
use gopkgcp::utils::{logger, validation::Validate};
use gopkgcp::{CliConfig, Extractor, GoModTidy, GoModuleResolver, GodaLister, TidyOutcome};

fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) if e.use_stderr() => {
            let _ = e.print();
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let options = config.to_options();
    let output_dir = options.output_dir.clone();
    let extractor = Extractor::new(GoModuleResolver, GodaLister::default(), GoModTidy, options);

    let report = match extractor.run() {
        Ok(report) => report,
        Err(e) => fail(e),
    };

    println!("✓ {}", report);
    if report.dry_run {
        return;
    }
    if let (Some(module), Some(files)) = (config.new_module(), report.files_rewritten) {
        println!("✓ Replaced module name with {} ({} files)", module, files);
    }
    match &report.tidy {
        TidyOutcome::Completed => println!("✓ go mod tidy completed"),
        TidyOutcome::Failed(reason) => {
            eprintln!("Warning: go mod tidy failed: {}", reason);
            eprintln!(
                "You may need to run it manually: cd {} && go mod tidy",
                output_dir.display()
            );
        }
        TidyOutcome::Skipped => {}
    }
    println!("\n✓ Done! Your extracted package is ready at: {}", output_dir.display());
}

fn fail(e: gopkgcp::ExtractError) -> ! {
    tracing::error!("❌ Extraction failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
