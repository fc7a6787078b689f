//! Delimited-file batch: read records, redact each in order, write results.
//!
//! The run stops at the first payload no normalization strategy can parse.
//! Rows already written stay in the output; nothing is written for the failed
//! record or any record after it.

use std::fs::File;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use pii_redaction::{
    process_record,
    slog::{IntoRedactedJson, MaskedFields},
    Record,
};
use slog::{debug, info, Logger};

use crate::{config::Config, error::CliError};

/// Column holding the raw payload. Matched case-insensitively.
pub const DATA_COLUMN: &str = "data_json";
/// Column holding the integer record identifier. Matched case-insensitively.
pub const ID_COLUMN: &str = "record_id";
/// Header row of the output file.
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// Counts for a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub records: u64,
    pub pii_records: u64,
}

fn find_column(headers: &StringRecord, column: &'static str) -> Result<usize, CliError> {
    headers
        .iter()
        .position(|name| name.eq_ignore_ascii_case(column))
        .ok_or_else(|| CliError::MissingColumn {
            column,
            available: headers.iter().map(str::to_string).collect(),
        })
}

fn verdict_text(is_pii: bool) -> &'static str {
    if is_pii {
        "True"
    } else {
        "False"
    }
}

fn read_record(
    row: &StringRecord,
    id_column: usize,
    data_column: usize,
) -> Result<Record, CliError> {
    let raw_id = row.get(id_column).unwrap_or_default();
    let id = raw_id
        .trim()
        .parse::<i64>()
        .map_err(|_| CliError::InvalidRecordId {
            line: row.position().map_or(0, csv::Position::line),
            value: raw_id.to_string(),
        })?;
    Ok(Record::new(id, row.get(data_column).unwrap_or_default()))
}

/// Redacts every record of `config.input` into `config.output`.
pub fn run(config: &Config, log: &Logger) -> Result<Summary, CliError> {
    if !config.input.is_file() {
        return Err(CliError::InputNotFound(config.input.clone()));
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(File::open(&config.input)?);
    let headers = reader.headers()?.clone();
    let data_column = find_column(&headers, DATA_COLUMN)?;
    let id_column = find_column(&headers, ID_COLUMN)?;
    debug!(log, "columns resolved";
        "input" => %config.input.display(),
        "data_column" => data_column,
        "id_column" => id_column);

    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(File::create(&config.output)?);
    writer.write_record(OUTPUT_HEADER)?;

    let mut summary = Summary::default();
    for row in reader.records() {
        let record = read_record(&row?, id_column, data_column)?;
        let redacted = match process_record(&record) {
            Ok(redacted) => redacted,
            Err(err) => {
                writer.flush()?;
                return Err(CliError::from_record(err, record.raw_payload));
            }
        };

        debug!(log, "record redacted";
            "record_id" => redacted.id,
            "is_pii" => redacted.is_pii,
            "masked" => MaskedFields(&redacted.masked),
            "payload" => redacted.redacted_json());

        writer.write_record([
            redacted.id.to_string().as_str(),
            redacted.redacted_payload.as_str(),
            verdict_text(redacted.is_pii),
        ])?;
        summary.records += 1;
        if redacted.is_pii {
            summary.pii_records += 1;
        }
    }
    writer.flush()?;

    info!(log, "redaction complete";
        "records" => summary.records,
        "pii_records" => summary.pii_records,
        "output" => %config.output.display());
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::Path};

    use slog::{o, Discard, Level, Logger};
    use tempfile::TempDir;

    use super::{run, Summary};
    use crate::{config::Config, error::CliError};

    fn config_in(dir: &TempDir, input: &str) -> Config {
        Config {
            input: dir.path().join(input),
            output: dir.path().join("out.csv"),
            log_level: Level::Info,
        }
    }

    fn write(path: &Path, contents: &str) {
        fs::write(path, contents).unwrap();
    }

    fn logger() -> Logger {
        Logger::root(Discard, o!())
    }

    #[test]
    fn redacts_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "in.csv");
        write(
            &config.input,
            "record_id,Data_JSON\n\
             1,\"{\"\"phone\"\": \"\"+91-9876543210\"\"}\"\n\
             2,\"{'email': 'john.doe@example.com'}\"\n",
        );

        let summary = run(&config, &logger()).unwrap();
        assert_eq!(
            summary,
            Summary {
                records: 2,
                pii_records: 1
            }
        );

        let output = fs::read_to_string(&config.output).unwrap();
        assert_eq!(
            output,
            "record_id,redacted_data_json,is_pii\r\n\
             1,\"{\"\"phone\"\": \"\"+91-98XXXXXX10\"\"}\",True\r\n\
             2,\"{\"\"email\"\": \"\"john.doe@example.com\"\"}\",False\r\n"
        );
    }

    #[test]
    fn missing_input_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "absent.csv");
        let err = run(&config, &logger()).unwrap_err();
        assert!(matches!(err, CliError::InputNotFound(_)));
        assert!(!config.output.exists());
    }

    #[test]
    fn missing_data_column_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "in.csv");
        write(&config.input, "record_id,payload\n1,{}\n");
        match run(&config, &logger()).unwrap_err() {
            CliError::MissingColumn { column, available } => {
                assert_eq!(column, "data_json");
                assert_eq!(available, ["record_id", "payload"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_integer_record_id_is_reported() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "in.csv");
        write(&config.input, "record_id,data_json\nabc,{}\n");
        match run(&config, &logger()).unwrap_err() {
            CliError::InvalidRecordId { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn broken_payload_stops_the_run_after_earlier_rows() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir, "in.csv");
        write(
            &config.input,
            "record_id,data_json\n\
             1,\"{\"\"passport\"\": \"\"P1234567\"\"}\"\n\
             2,{broken\n\
             3,\"{\"\"phone\"\": \"\"9876543210\"\"}\"\n",
        );

        match run(&config, &logger()).unwrap_err() {
            CliError::InvalidPayload { id, payload, .. } => {
                assert_eq!(id, 2);
                assert_eq!(payload, "{broken");
            }
            other => panic!("unexpected error: {other}"),
        }

        let output = fs::read_to_string(&config.output).unwrap();
        assert!(output.contains("PXXXXXX7"));
        assert!(!output.contains("\r\n2,"));
        assert!(!output.contains("\r\n3,"));
    }
}
