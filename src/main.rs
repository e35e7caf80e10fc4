use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use pairprobe::arff::InstanceIndex;
use pairprobe::config::{Config, StemmerKind};
use pairprobe::output::terminal;
use pairprobe::overlap::{DifferencePolicy, PairOverlap};
use pairprobe::pairs::parse_pairs;
use pairprobe::pipeline::pairs::OverlapOptions;
use pairprobe::stemming::snowball::SnowballStemmer;
use pairprobe::stemming::traits::{IdentityStemmer, Stemmer};
use pairprobe::syslog::stats::JobStats;
use pairprobe::vectors::files::find_files;
use pairprobe::vectors::record::VectorType;

/// pairprobe: feature-overlap diagnostics for word-pair similarity.
///
/// Explains classifier mistakes by comparing the co-occurrence features of
/// the two words in a pair, and tabulates the map-reduce job statistics of
/// the run that produced them.
#[derive(Parser)]
#[command(name = "pairprobe", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the feature sets of word pairs
    Overlap {
        /// Pairs as `word1,word2`. Defaults to the configured false-positive
        /// and false-negative groups.
        pairs: Vec<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Compare feature sets for classifier instances picked by ARFF id
    Instances {
        /// 1-based instance ids, in ARFF annotation order
        #[arg(required = true)]
        ids: Vec<usize>,

        /// ARFF file (defaults to PAIRPROBE_ARFF_PATH)
        #[arg(long)]
        arff: Option<PathBuf>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Print the word pair behind each classifier instance id
    Resolve {
        #[arg(required = true)]
        ids: Vec<usize>,

        /// ARFF file (defaults to PAIRPROBE_ARFF_PATH)
        #[arg(long)]
        arff: Option<PathBuf>,
    },

    /// Tabulate job statistics from syslog files
    Stats {
        /// Only show this status (e.g. 10files); defaults to every status found
        #[arg(long)]
        status: Option<String>,

        /// Directory holding syslog files (defaults to PAIRPROBE_SYSLOG_DIR)
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Print the parsed statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration and which inputs exist
    Status,
}

/// Options shared by the overlap-reporting commands.
#[derive(Args)]
struct ReportArgs {
    /// Which difference to count next to the common features
    #[arg(long, value_enum, default_value_t = DifferencePolicy::Symmetric)]
    difference: DifferencePolicy,

    /// Only use vector lines of this measure type
    #[arg(long, value_enum)]
    vector_type: Option<VectorType>,

    /// Directory holding `part*` vector files (overrides the config)
    #[arg(long)]
    vector_dir: Option<PathBuf>,

    /// Max shared labels listed per pair (0 = all)
    #[arg(long, default_value = "12")]
    max_labels: usize,

    /// Print the report as JSON instead of tables
    #[arg(long)]
    json: bool,
}

impl ReportArgs {
    fn options(&self) -> OverlapOptions {
        OverlapOptions {
            policy: self.difference,
            vector_type: self.vector_type,
        }
    }

    fn vector_files(&self, config: &Config) -> Result<Vec<PathBuf>> {
        let dir = self.vector_dir.clone().unwrap_or_else(|| config.vector_dir());
        info!(dir = %dir.display(), "Scanning for vector files");
        Ok(find_files(&dir, &config.vector_prefix)?)
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pairprobe=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Overlap { pairs, report } => {
            let stemmer = create_stemmer(config.stemmer);
            let files = report.vector_files(&config)?;

            let groups = if pairs.is_empty() {
                vec![
                    ("False-Positive".to_string(), parse_pairs(&config.false_positives)?),
                    ("False-Negative".to_string(), parse_pairs(&config.false_negatives)?),
                ]
            } else {
                vec![("Requested".to_string(), parse_pairs(&pairs)?)]
            };

            let results = pairprobe::pipeline::pairs::run_groups(
                &groups,
                stemmer.as_ref(),
                &files,
                report.options(),
            )?;

            if report.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                for (title, overlaps) in &results {
                    terminal::display_overlap_group(title, overlaps, report.max_labels);
                }
                print_unseen_hint(results.iter().flat_map(|(_, r)| r));
            }
        }

        Commands::Instances { ids, arff, report } => {
            let arff_path = arff.unwrap_or_else(|| config.arff_path.clone());
            let index = InstanceIndex::from_path(&arff_path)
                .with_context(|| format!("Loading instance annotations from {}", arff_path.display()))?;
            let stemmer = create_stemmer(config.stemmer);
            let files = report.vector_files(&config)?;

            let overlaps = pairprobe::pipeline::instances::run_instances(
                &index,
                &ids,
                stemmer.as_ref(),
                &files,
                report.options(),
            )?;

            if report.json {
                println!("{}", serde_json::to_string_pretty(&overlaps)?);
            } else {
                let title = format!("Instances {}", join_ids(&ids));
                terminal::display_overlap_group(&title, &overlaps, report.max_labels);
                print_unseen_hint(overlaps.iter());
            }
        }

        Commands::Resolve { ids, arff } => {
            let arff_path = arff.unwrap_or_else(|| config.arff_path.clone());
            let index = InstanceIndex::from_path(&arff_path)
                .with_context(|| format!("Loading instance annotations from {}", arff_path.display()))?;

            let resolved = ids
                .iter()
                .map(|&id| index.resolve(id).map(|pair| (id, pair.to_string())))
                .collect::<Result<Vec<_>, _>>()?;
            terminal::display_resolved(&resolved);
        }

        Commands::Stats { status, dir, json } => {
            let dir = dir.unwrap_or_else(|| config.syslog_dir.clone());
            let files = find_files(&dir, &config.syslog_prefix)?;
            let stats = JobStats::load(&files)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
                return Ok(());
            }

            let statuses: Vec<String> = match status {
                Some(s) => vec![s],
                None => stats.statuses().into_iter().map(str::to_string).collect(),
            };
            if statuses.is_empty() {
                println!("No tracked statistics found in {} syslog files.", files.len());
            }
            for status in &statuses {
                terminal::display_job_stats(&stats, status);
            }
        }

        Commands::Status => {
            pairprobe::status::show(&config);
        }
    }

    Ok(())
}

fn create_stemmer(kind: StemmerKind) -> Box<dyn Stemmer> {
    match kind {
        StemmerKind::Snowball => Box::new(SnowballStemmer::english()),
        StemmerKind::None => Box::new(IdentityStemmer),
    }
}

fn join_ids(ids: &[usize]) -> String {
    ids.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
}

/// Remind the user that a zero count may just mean a stem mismatch.
fn print_unseen_hint<'a>(overlaps: impl Iterator<Item = &'a PairOverlap>) {
    let zero = overlaps.filter(|o| o.result.common_count == 0).count();
    if zero > 0 {
        println!(
            "\n{}",
            format!(
                "{zero} pair(s) share no features. If a word was never seen, check the stemmer \
                 (PAIRPROBE_STEMMER) matches the one used by the vector job."
            )
            .dimmed()
        );
    }
}
