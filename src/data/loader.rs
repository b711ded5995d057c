use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord};

/// Columns every launch CSV must carry.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("requesting dataset: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("dataset server answered {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV missing '{0}' column")]
    MissingColumn(String),

    /// `row` counts data rows from 1, header excluded.
    #[error("data row {row}: class must be 0 or 1, got {value}")]
    InvalidClass { row: usize, value: i64 },
}

// ---------------------------------------------------------------------------
// Dataset source
// ---------------------------------------------------------------------------

/// Where the launch table comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Url(String),
    Path(PathBuf),
}

impl DatasetSource {
    /// `http://` and `https://` locations are fetched, anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DatasetSource::Url(location.to_string())
        } else {
            DatasetSource::Path(PathBuf::from(location))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::Url(url) => write!(f, "{url}"),
            DatasetSource::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the launch dataset once. Any failure is final: no retry, no partial table.
pub fn load_dataset(source: &DatasetSource, timeout: Duration) -> Result<LaunchDataset, LoadError> {
    log::info!("Loading launch dataset from {source}");
    let dataset = match source {
        DatasetSource::Url(url) => fetch_url(url, timeout)?,
        DatasetSource::Path(path) => {
            let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            load_csv(file)?
        }
    };
    log::info!(
        "Loaded {} launches from {} sites",
        dataset.len(),
        dataset.sites.len()
    );
    Ok(dataset)
}

fn fetch_url(url: &str, timeout: Duration) -> Result<LaunchDataset, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("spacex-dash/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let response = client.get(url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.bytes()?;
    load_csv(body.as_ref())
}

// ---------------------------------------------------------------------------
// CSV parsing
// ---------------------------------------------------------------------------

/// One CSV row. Unknown columns (e.g. the unnamed pandas index) are ignored.
#[derive(Debug, Deserialize)]
struct CsvLaunch {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    class: i64,
    #[serde(rename = "Booster Version Category")]
    booster_category: String,
    #[serde(rename = "Flight Number", default)]
    flight_number: Option<i64>,
    #[serde(rename = "Booster Version", default)]
    booster_version: Option<String>,
}

/// Parse a launch table from any CSV reader.
pub fn load_csv<R: Read>(input: R) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CsvLaunch>().enumerate() {
        let row = result?;
        let class = match row.class {
            0 | 1 => row.class as u8,
            value => {
                return Err(LoadError::InvalidClass {
                    row: row_no + 1,
                    value,
                })
            }
        };
        records.push(LaunchRecord {
            flight_number: row.flight_number,
            booster_version: row.booster_version.filter(|v| !v.is_empty()),
            ..LaunchRecord::new(
                row.launch_site,
                row.payload_mass_kg,
                class,
                row.booster_category,
            )
        });
    }

    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
,Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category
0,1,CCAFS LC-40,0,0.0,F9 v1.0  B0003,v1.0
1,2,CCAFS LC-40,0,0.0,F9 v1.0  B0004,v1.0
2,3,VAFB SLC-4E,1,500.0,F9 v1.1  B1003,v1.1
3,4,KSC LC-39A,1,5300.0,F9 FT B1031.1,FT
";

    #[test]
    fn parses_real_column_layout() {
        let ds = load_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(ds.len(), 4);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A"]);

        let first = &ds.records[0];
        assert_eq!(first.flight_number, Some(1));
        assert_eq!(first.booster_version.as_deref(), Some("F9 v1.0  B0003"));
        assert_eq!(first.class, 0);

        let bounds = ds.payload_bounds.unwrap();
        assert_eq!(bounds.low, 0.0);
        assert_eq!(bounds.high, 5300.0);
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC,100,1,B5\n";
        let ds = load_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records[0].flight_number, None);
        assert_eq!(ds.records[0].booster_version, None);
        assert_eq!(ds.records[0].payload_mass_kg, 100.0);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let csv = "Launch Site,class,Booster Version Category\nKSC,1,B5\n";
        match load_csv(csv.as_bytes()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "Payload Mass (kg)"),
            other => panic!("expected missing column, got {other:?}"),
        }
    }

    #[test]
    fn bad_class_value_is_fatal() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC,100,1,B5\nKSC,200,2,B5\n";
        match load_csv(csv.as_bytes()) {
            Err(e @ LoadError::InvalidClass { row: 2, value: 2 }) => {
                assert_eq!(e.to_string(), "data row 2: class must be 0 or 1, got 2");
            }
            other => panic!("expected invalid class, got {other:?}"),
        }
    }

    #[test]
    fn unparsable_payload_is_fatal() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\nKSC,heavy,1,B5\n";
        assert!(matches!(load_csv(csv.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn header_only_gives_empty_dataset() {
        let csv = "Launch Site,Payload Mass (kg),class,Booster Version Category\n";
        let ds = load_csv(csv.as_bytes()).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let source = DatasetSource::Path(PathBuf::from("/definitely/not/here.csv"));
        match load_dataset(&source, Duration::from_secs(1)) {
            Err(LoadError::Io { path, .. }) => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.csv"))
            }
            other => panic!("expected io error, got {other:?}"),
        }
    }

    #[test]
    fn source_kind_from_location() {
        assert_eq!(
            DatasetSource::parse("HTTPS://example.com/a.csv"),
            DatasetSource::Url("HTTPS://example.com/a.csv".into())
        );
        assert_eq!(
            DatasetSource::parse("data/launches.csv"),
            DatasetSource::Path(PathBuf::from("data/launches.csv"))
        );
    }
}
