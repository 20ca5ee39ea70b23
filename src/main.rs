use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use redflag::analyze::analyze_listing;
use redflag::extract::{self, record_from_raw};
use redflag::models::{AnalysisMode, AnalysisRecord, ListingRecord, UserReport};
use redflag::output::terminal;
use redflag::storage::Store;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "redflag")]
#[command(about = "Analyze job listings for scam red flags")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a job listing from field values or a JSON file
    Analyze {
        /// Job title
        #[arg(long, default_value = "")]
        title: String,

        /// Company name
        #[arg(long, default_value = "")]
        company: String,

        /// Description body
        #[arg(long, default_value = "")]
        description: String,

        /// Salary text
        #[arg(long, default_value = "")]
        salary: String,

        /// Location text
        #[arg(long, default_value = "")]
        location: String,

        /// Read the listing record from a JSON file instead of flags
        #[arg(long)]
        json: Option<PathBuf>,

        /// Listing URL, used for site detection and history
        #[arg(long)]
        url: Option<String>,

        /// Print the verdict as JSON instead of the terminal report
        #[arg(long)]
        json_output: bool,

        /// Skip recording the analysis in the local history
        #[arg(long)]
        no_store: bool,
    },

    /// File a report about a suspicious listing
    Report {
        #[arg(long)]
        url: String,

        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        company: String,

        /// Report category, e.g. scam, spam, misleading
        #[arg(long = "type")]
        report_type: String,

        #[arg(long, default_value = "")]
        comment: String,
    },

    /// List recently filed reports
    Reports,

    /// List recent analyses
    History,

    /// Show or update settings
    Settings {
        /// Enable or disable analysis
        #[arg(long)]
        enabled: Option<bool>,

        /// Show or hide on-page warnings
        #[arg(long)]
        warnings: Option<bool>,

        /// Analysis mode preset (conservative, balanced, aggressive)
        #[arg(long)]
        mode: Option<AnalysisMode>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let store = Store::open_default()?;

    match args.command {
        Command::Analyze {
            title,
            company,
            description,
            salary,
            location,
            json,
            url,
            json_output,
            no_store,
        } => {
            let record = match json {
                Some(path) => load_record(&path)?,
                None => record_from_raw(&title, &company, &description, &salary, &location),
            };
            run_analysis(&store, record, url, json_output, no_store)
        }
        Command::Report {
            url,
            title,
            company,
            report_type,
            comment,
        } => {
            let report = UserReport::new(url, title, company, report_type, comment);
            let id = report.id.clone();
            store.save_report(report)?;
            println!("Report {} saved.", id);
            Ok(())
        }
        Command::Reports => {
            terminal::print_reports(&store.recent_reports()?);
            Ok(())
        }
        Command::History => {
            terminal::print_history(&store.recent_analyses()?);
            Ok(())
        }
        Command::Settings {
            enabled,
            warnings,
            mode,
        } => {
            let mut settings = store.settings()?;
            if enabled.is_none() && warnings.is_none() && mode.is_none() {
                terminal::print_settings(&settings);
                return Ok(());
            }
            if let Some(enabled) = enabled {
                settings.extension_enabled = enabled;
            }
            if let Some(warnings) = warnings {
                settings.show_warnings = warnings;
            }
            if let Some(mode) = mode {
                settings.analysis_mode = mode;
            }
            store.save_settings(&settings)?;
            terminal::print_settings(&settings);
            Ok(())
        }
    }
}

fn load_record(path: &Path) -> Result<ListingRecord> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let record: ListingRecord =
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?;
    Ok(record)
}

fn run_analysis(
    store: &Store,
    record: ListingRecord,
    url: Option<String>,
    json_output: bool,
    no_store: bool,
) -> Result<()> {
    let settings = store.settings()?;
    if !settings.extension_enabled {
        println!("Analysis is disabled. Re-enable with: redflag settings --enabled true");
        return Ok(());
    }

    if record.title.is_empty() {
        println!("No job title found, skipping analysis.");
        return Ok(());
    }

    if let Some(ref url) = url {
        match extract::detect_site(url) {
            Some(site) => println!("Detected site: {}", site.as_str()),
            None => println!("Unsupported site, analyzing anyway."),
        }
    }

    let verdict = analyze_listing(&record);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        terminal::print_verdict(&record, &verdict);
    }

    if !no_store {
        let record = AnalysisRecord::new(
            url.unwrap_or_default(),
            record.title.clone(),
            record.company.clone(),
            verdict,
        );
        store.record_analysis(record)?;
    }

    Ok(())
}
