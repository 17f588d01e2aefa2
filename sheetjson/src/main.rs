use clap::{Parser, ValueEnum};
use colored::*;
use sheetjson_core::{convert, ConversionReport, ConvertError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetjson")]
#[command(about = "Convert the first sheet of an Excel/ODS workbook to a JSON array of records")]
#[command(version)]
struct Cli {
    /// Path to the input workbook (.xlsx, .xlsm, .ods)
    #[arg(value_name = "INPUT", default_value = "Emotions_6monthsExcel_Data.xlsx")]
    input: PathBuf,

    /// Path for the output JSON file
    #[arg(value_name = "OUTPUT", default_value = "article_emotions_data.json")]
    output: PathBuf,

    /// Output format for the conversion summary
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with next-step guidance
    Human,
    /// JSON summary for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();

    match convert(&cli.input, &cli.output) {
        Ok(report) => match cli.format {
            OutputFormat::Human => print_human(&cli.input, &report),
            OutputFormat::Json => print_json(&report),
        },
        Err(err) => {
            eprintln!("{} {}", "ERROR".red().bold(), err);
            eprintln!("  {}", remediation(&err));
            std::process::exit(1);
        }
    }
}

fn print_human(input: &PathBuf, report: &ConversionReport) {
    println!("{}", format!("Converted: {}", input.display()).bold());

    for key in &report.duplicate_keys {
        println!(
            "{} multiple columns normalize to '{}'; the last column wins",
            "WARN".yellow().bold(),
            key
        );
    }

    println!(
        "{} Wrote {} to {}",
        "✓".green().bold(),
        format!(
            "{} record{}",
            report.records,
            if report.records == 1 { "" } else { "s" }
        ),
        report.output_path.display()
    );
    println!();
    println!("{}", "Next steps:".bold());
    println!(
        "  1. Copy '{}' into your dashboard project directory.",
        report.output_path.display()
    );
    println!(
        "  2. Point your page at it, e.g. const JSON_DATA_PATH = '{}';",
        report.output_path.display()
    );
    println!("  3. Open the dashboard in a browser to view the data.");
}

fn print_json(report: &ConversionReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(err) => {
            eprintln!("{} failed to render report: {}", "ERROR".red().bold(), err);
            std::process::exit(1);
        }
    }
}

/// One actionable hint per failure kind.
fn remediation(err: &ConvertError) -> String {
    match err {
        ConvertError::InputNotFound { path } => format!(
            "Check that '{}' exists, or pass the workbook path as the first argument.",
            path.display()
        ),
        ConvertError::Parse { path, .. } => format!(
            "Check that '{}' is a valid .xlsx, .xlsm, or .ods workbook and is not open in another application.",
            path.display()
        ),
        ConvertError::EmptySheet { .. } => {
            "The first sheet needs a header row plus at least one data row.".to_string()
        }
        ConvertError::Write { path, .. } => format!(
            "Check that the directory of '{}' exists and is writable, and that the disk is not full.",
            path.display()
        ),
    }
}
