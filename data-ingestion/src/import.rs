//! The `algolia-import` command.

use chrono::{DateTime, Local, SecondsFormat, TimeZone};
use tracing::info;

use crate::cli::Cli;
use crate::config::{Dependencies, ImportSettings};
use crate::progress::ProgressReporter;
use crate::IngestionError;
use data_ingestion_pipeline::loader::DataLoader;
use data_ingestion_pipeline::{ImportError, Orchestrator};
use data_ingestion_shared::ImportDataSet;

/// Run the import described by `cli`.
///
/// Settings are validated and the client is built before the input file is
/// read. Returns the number of records imported by this run.
pub async fn run(cli: Cli) -> Result<usize, IngestionError> {
    let settings = ImportSettings::from_cli(&cli)?;
    info!(settings = ?settings, "Resolved import settings");

    println!("Current date and time: {}", start_timestamp(&Local::now()));

    let dependencies = Dependencies::new(&settings)?;
    let dataset = load_dataset(&settings)?;

    let reporter = ProgressReporter::new(dataset.len(), settings.resume_from, &settings.index_name);
    import(&dependencies.orchestrator, &dataset, settings.batch_size, &reporter).await
}

/// RFC 3339 timestamp at whole-second precision, with a numeric UTC offset.
pub fn start_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}

/// Load the input file and skip the records before `resume_from`.
pub fn load_dataset(settings: &ImportSettings) -> Result<ImportDataSet, IngestionError> {
    let dataset = DataLoader::new(&settings.file).load()?;

    if settings.resume_from == 0 {
        return Ok(dataset);
    }

    let remaining = dataset.slice(settings.resume_from..).ok_or_else(|| {
        ImportError::invalid_configuration(format!(
            "Cannot resume from record {}: the data set only has {} records",
            settings.resume_from,
            dataset.len()
        ))
    })?;

    info!(
        skipped = settings.resume_from,
        remaining = remaining.len(),
        "Resuming import"
    );

    Ok(remaining)
}

/// Drive `orchestrator` over `dataset`, rendering progress through `reporter`.
pub async fn import(
    orchestrator: &Orchestrator,
    dataset: &ImportDataSet,
    batch_size: usize,
    reporter: &ProgressReporter,
) -> Result<usize, IngestionError> {
    let outcome = orchestrator
        .run(
            dataset,
            batch_size,
            |count| reporter.advance(count),
            |_, _| reporter.batch_failed(),
        )
        .await?;

    reporter.finish(&outcome);

    Ok(outcome.into_result()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use clap::Parser;
    use data_ingestion_repository::{IndexError, RecordIndex};
    use data_ingestion_shared::Record;
    use serde_json::json;
    use std::io::Write;
    use std::sync::Arc;
    use tempfile::NamedTempFile;
    use tokio::sync::Mutex;

    /// Mock index that rejects any batch containing a record with `"bad": true`.
    struct MockIndex {
        saved: Mutex<Vec<Record>>,
    }

    #[async_trait]
    impl RecordIndex for MockIndex {
        fn index_name(&self) -> &str {
            "mock"
        }

        async fn save_records(&self, records: &[Record]) -> Result<(), IndexError> {
            if records.iter().any(|r| r["bad"] == json!(true)) {
                return Err(IndexError::from_status(400, "Mock failure"));
            }
            self.saved.lock().await.extend_from_slice(records);
            Ok(())
        }
    }

    fn input_file(records: &[Record]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(records).unwrap().as_bytes())
            .unwrap();
        file
    }

    fn settings(file: &NamedTempFile, extra: &[&str]) -> ImportSettings {
        let path = file.path().to_string_lossy().into_owned();
        let mut argv = vec![
            "algolia-import",
            "--application-id",
            "APPID",
            "--api-key",
            "key",
            "--index-name",
            "mock",
            "--file",
            path.as_str(),
        ];
        argv.extend_from_slice(extra);
        ImportSettings::from_cli(&Cli::try_parse_from(argv).unwrap()).unwrap()
    }

    fn records(n: usize) -> Vec<Record> {
        (0..n).map(|i| json!({ "id": i })).collect()
    }

    #[tokio::test]
    async fn test_import_all_records() {
        let file = input_file(&records(25));
        let settings = settings(&file, &[]);
        let index = Arc::new(MockIndex {
            saved: Mutex::new(Vec::new()),
        });
        let dependencies = Dependencies::with_index(index.clone());

        let dataset = load_dataset(&settings).unwrap();
        let reporter = ProgressReporter::hidden(dataset.len(), 0, "mock");
        let imported = import(&dependencies.orchestrator, &dataset, settings.batch_size, &reporter)
            .await
            .unwrap();

        assert_eq!(imported, 25);
        assert_eq!(reporter.position(), 25);
        assert_eq!(*index.saved.lock().await, records(25));
    }

    #[tokio::test]
    async fn test_import_failure_reports_offset() {
        let mut data = records(12);
        data[7] = json!({ "id": 7, "bad": true });
        let file = input_file(&data);
        let settings = settings(&file, &["--batch-size", "5"]);
        let index = Arc::new(MockIndex {
            saved: Mutex::new(Vec::new()),
        });
        let dependencies = Dependencies::with_index(index.clone());

        let dataset = load_dataset(&settings).unwrap();
        let reporter = ProgressReporter::hidden(dataset.len(), 0, "mock");
        let result = import(&dependencies.orchestrator, &dataset, settings.batch_size, &reporter).await;

        match result {
            Err(IngestionError::ImportError(ImportError::Upload {
                offset,
                len,
                records_processed,
                ..
            })) => {
                assert_eq!(offset, 5);
                assert_eq!(len, 5);
                assert_eq!(records_processed, 5);
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert_eq!(reporter.position(), 5);
        assert!(reporter.is_finished());
        assert_eq!(index.saved.lock().await.len(), 5);
    }

    #[test]
    fn test_start_timestamp_has_second_precision() {
        let at = chrono::FixedOffset::east_opt(2 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
            .unwrap()
            + chrono::Duration::milliseconds(123);

        assert_eq!(start_timestamp(&at), "2024-03-09T14:05:07+02:00");
        assert_eq!(
            start_timestamp(&at.with_timezone(&chrono::Utc)),
            "2024-03-09T12:05:07+00:00"
        );
    }

    #[test]
    fn test_load_dataset_resume_skips_records() {
        let file = input_file(&records(12));
        let settings = settings(&file, &["--resume-from", "10"]);

        let dataset = load_dataset(&settings).unwrap();

        assert_eq!(dataset.records(), &[json!({ "id": 10 }), json!({ "id": 11 })]);
    }

    #[test]
    fn test_load_dataset_resume_past_end() {
        let file = input_file(&records(3));
        let settings = settings(&file, &["--resume-from", "4"]);

        assert!(matches!(
            load_dataset(&settings),
            Err(IngestionError::ImportError(ImportError::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_load_dataset_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let settings = settings(&file, &[]);

        assert!(matches!(
            load_dataset(&settings),
            Err(IngestionError::ImportError(ImportError::EmptyContent { .. }))
        ));
    }
}
