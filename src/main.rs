use clap::Parser;
use quote_widget::domain::ports::FormSurface;
use quote_widget::utils::error::ErrorSeverity;
use quote_widget::utils::validation::{validate_required_field, Validate};
use quote_widget::utils::logger;
use quote_widget::{CliConfig, MemoryForm, MessageBody, QuoteError, QuoteWidget, WidgetConfig};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting quote-widget CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match prepare(&cli) {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };

    let form = Arc::new(MemoryForm::new());
    for (id, value) in cli.field_values(&config) {
        form.set_field(&id, &value);
    }

    let widget = QuoteWidget::connect(config.clone(), form.clone());
    widget.on_page_ready().await;
    print_options(&form, &config);

    let e = &config.elements;
    let has_selection = [&cli.location, &cli.cameras, &cli.resolution, &cli.difficulty]
        .iter()
        .any(|value| value.is_some());

    if has_selection {
        if let Some(response) = widget.workflow().calculate_price().await {
            println!("💰 Total: {}", form.display_value(&e.total_price));
            println!("   Cameras: {}", form.display_value(&e.camera_cost));
            println!("   Labor:   {}", form.display_value(&e.labor_cost));
            println!("   Travel:  {}", form.display_value(&e.travel_fee));
            tracing::debug!("Price response: {:?}", response);
        }
        print_alerts(&form);
    }

    if cli.submit {
        let submitted = widget.workflow().submit_quote().await;
        if let Some(message) = form.message(&e.form_message) {
            match message.body {
                MessageBody::Text(text) | MessageBody::Markup(text) => println!("{}", text),
            }
        }
        if !submitted.map(|r| r.success).unwrap_or(false) {
            std::process::exit(2);
        }
    }

    Ok(())
}

fn prepare(cli: &CliConfig) -> Result<WidgetConfig, QuoteError> {
    let config = cli.widget_config()?;
    config.validate()?;

    if cli.submit {
        validate_required_field("name", &cli.name)?;
        validate_required_field("email", &cli.email)?;
    }

    Ok(config)
}

fn print_options(form: &MemoryForm, config: &WidgetConfig) {
    let e = &config.elements;
    for (title, list) in [
        ("Locations", &e.location),
        ("Resolutions", &e.resolution),
        ("Difficulties", &e.difficulty),
    ] {
        let options = form.options(list);
        if options.is_empty() {
            continue;
        }
        println!("{}:", title);
        for option in options {
            println!("  {:>8}  {}", option.value, option.label);
        }
    }
}

fn print_alerts(form: &MemoryForm) {
    for alert in form.take_alerts() {
        eprintln!("{}", alert);
    }
}

fn exit_with(e: &QuoteError) -> ! {
    tracing::error!(
        "❌ Configuration failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
