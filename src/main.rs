//! Septiscan: sepsis risk report from the command line.
//!
//! # Usage
//!
//! ```bash
//! septiscan --dataset rows.json --record patient.json [--patient-id ID] [--thresholds file.json] [--seed N]
//! septiscan --print-thresholds [--thresholds file.json]
//! ```
//!
//! The dataset is a JSON array of row objects (column → value). Reports and
//! threshold tables are written to stdout as JSON; logs go to stderr unless
//! `SEPTISCAN_LOG_MODE` says otherwise.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use septiscan::adapters::sanitize::SanitizingMakeWriter;
use septiscan::config::EngineConfig;
use septiscan::domain::{DatasetRow, DatasetSummary, PatientRecord};

const USAGE: &str = "Usage: septiscan --dataset <rows.json> --record <record.json> [--patient-id <id>] [--thresholds <file>] [--seed <n>]\n       septiscan --print-thresholds [--thresholds <file>]";

#[derive(Debug, Default)]
struct Args {
    dataset: Option<PathBuf>,
    record: Option<PathBuf>,
    patient_id: Option<String>,
    thresholds: Option<PathBuf>,
    seed: Option<u64>,
    print_thresholds: bool,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        let mut value = |flag: &str| {
            args.next()
                .filter(|v| !v.is_empty())
                .with_context(|| format!("{flag} needs a value\n{USAGE}"))
        };
        match arg.as_str() {
            "--dataset" => parsed.dataset = Some(PathBuf::from(value("--dataset")?)),
            "--record" => parsed.record = Some(PathBuf::from(value("--record")?)),
            "--patient-id" => parsed.patient_id = Some(value("--patient-id")?),
            "--thresholds" => parsed.thresholds = Some(PathBuf::from(value("--thresholds")?)),
            "--seed" => {
                let raw = value("--seed")?;
                parsed.seed = Some(raw.parse().with_context(|| format!("invalid seed {raw:?}"))?);
            }
            "--print-thresholds" => parsed.print_thresholds = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            other => bail!("unknown argument {other:?}\n{USAGE}"),
        }
    }

    Ok(parsed)
}

fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_mode = std::env::var("SEPTISCAN_LOG_MODE").unwrap_or_else(|_| "stderr".to_string());

    let (writer, guard) = match log_mode.as_str() {
        "file" => {
            let log_file = std::env::var("SEPTISCAN_LOG_FILE")
                .unwrap_or_else(|_| "septiscan.log".to_string());
            if let Some(parent) = Path::new(&log_file).parent() {
                // Best-effort: a missing directory surfaces on open below.
                let _ = std::fs::create_dir_all(parent);
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file)
                .with_context(|| format!("cannot open log file {log_file}"))?;
            tracing_appender::non_blocking(file)
        }
        "stdout" => tracing_appender::non_blocking(std::io::stdout()),
        _ => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(SanitizingMakeWriter::new(writer)),
        )
        .init();

    Ok(guard)
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {what} {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("invalid {what} {}", path.display()))
}

fn main() -> Result<()> {
    let _guard = init_logging()?;
    let args = parse_args()?;

    let mut config = EngineConfig::from_env_or_default();
    if args.thresholds.is_some() {
        config.thresholds_file = args.thresholds.clone();
    }
    if args.seed.is_some() {
        config.metrics_seed = args.seed;
    }

    let mut service = config.build_service()?;

    if args.print_thresholds {
        println!("{}", serde_json::to_string_pretty(service.thresholds())?);
        return Ok(());
    }

    let (Some(dataset_path), Some(record_path)) = (&args.dataset, &args.record) else {
        bail!("--dataset and --record are required\n{USAGE}");
    };

    let rows: Vec<DatasetRow> = read_json(dataset_path, "dataset")?;
    let summary = DatasetSummary::from_rows(&rows);
    let mut sampler = config.sampler();
    service.train(summary, &mut sampler);

    let record: PatientRecord = read_json(record_path, "patient record")?;
    let patient_id = args.patient_id.unwrap_or_else(|| "unknown".to_string());
    let report = service.analyze(&record, patient_id)?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
