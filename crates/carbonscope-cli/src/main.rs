//! CarbonScope command-line host
//!
//! Reads one month of activity data from a JSON file and prints the
//! emission breakdown, the recommendation and the benchmark comparison.

use anyhow::{bail, Context, Result};
use carbonscope_core::config::SETTINGS_FILE_NAME;
use carbonscope_core::prelude::*;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: carbonscope <input.json> [--factors <factors.json>] [--config <settings.json>] [--lang en|nl] [--json] [--strict]";

#[derive(Debug, Default)]
struct Options {
    input: PathBuf,
    factors: Option<PathBuf>,
    config: Option<PathBuf>,
    language: Option<Language>,
    json: bool,
    strict: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut input = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--factors" => {
                let value = iter.next().context("--factors needs a path")?;
                options.factors = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = iter.next().context("--config needs a path")?;
                options.config = Some(PathBuf::from(value));
            }
            "--lang" => {
                let value = iter.next().context("--lang needs a language code")?;
                let language =
                    Language::parse(value).with_context(|| format!("unknown language '{}'", value))?;
                options.language = Some(language);
            }
            "--json" => options.json = true,
            "--strict" => options.strict = true,
            "-h" | "--help" => bail!(USAGE),
            other if other.starts_with("--") => bail!("unknown option '{}'\n{}", other, USAGE),
            other => {
                if input.is_some() {
                    bail!("only one input file may be given\n{}", USAGE);
                }
                input = Some(PathBuf::from(other));
            }
        }
    }

    options.input = input.context(USAGE)?;
    Ok(options)
}

fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("carbonscope").join(SETTINGS_FILE_NAME))
}

fn print_report(assessment: &Assessment) {
    let b = &assessment.breakdown;

    println!("Monthly CO2 footprint: {}", format_tonnes(b.total));
    println!();
    println!("Scope 1 - direct emissions     {:>10}", format_co2(b.scope1.total));
    println!("  gas                          {:>10}", format_co2(b.scope1.gas));
    println!("  vehicles                     {:>10}", format_co2(b.scope1.vehicles));
    println!("Scope 2 - electricity          {:>10}", format_co2(b.scope2.total));
    println!("Scope 3 - indirect emissions   {:>10}", format_co2(b.scope3.total));
    println!("  purchased goods              {:>10}", format_co2(b.scope3.purchased_goods));
    println!("  business travel              {:>10}", format_co2(b.scope3.business_travel));
    println!("  waste                        {:>10}", format_co2(b.scope3.waste));
    println!();
    println!("{}", assessment.advice_text);
    println!();

    let bench = &assessment.benchmark;
    match bench.position {
        Position::Above => println!(
            "{} above the average of {}",
            format_tonnes(bench.magnitude()),
            format_tonnes(bench.average)
        ),
        Position::Below => println!(
            "{} below the average of {}",
            format_tonnes(bench.magnitude()),
            format_tonnes(bench.average)
        ),
        Position::Equal => println!("Equal to the average of {}", format_tonnes(bench.average)),
    }

    if assessment.green_energy_savings > 0.0 {
        println!(
            "Switching to green electricity saves {} per month",
            format_tonnes(assessment.green_energy_savings)
        );
    }
}

fn run(args: &[String]) -> Result<()> {
    let options = parse_args(args)?;

    let settings = match options.config.as_ref() {
        Some(path) => Settings::load(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => match default_settings_path() {
            Some(path) => Settings::load_or_default(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Settings::default(),
        },
    };

    let factors = match options.factors.as_ref() {
        Some(path) => EmissionFactors::from_file(path)
            .with_context(|| format!("Failed to load emission factors from {}", path.display()))?,
        None => settings
            .factors()
            .context("Failed to load emission factors from settings")?,
    };

    let content = fs::read_to_string(&options.input)
        .with_context(|| format!("Failed to read {}", options.input.display()))?;
    let input = ActivityInput::from_json(&content)
        .with_context(|| format!("Failed to parse {}", options.input.display()))?;

    if options.strict {
        input.check().context("Input rejected")?;
    } else {
        for issue in validate(&input).issues {
            tracing::warn!("Negative value for {}: {}", issue.field, issue.value);
        }
    }

    let language = options.language.unwrap_or(settings.language);
    let assessment = Assessment::evaluate(
        &input,
        &factors,
        settings.benchmark_tonnes_per_month,
        language,
    );

    if options.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print_report(&assessment);
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
