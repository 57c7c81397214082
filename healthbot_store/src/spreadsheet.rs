//! Workbook fallback source.
//!
//! The first row of the sheet is the header. Columns are located by name so
//! their order in the workbook does not matter:
//! - `Name` (or `disease_name`) is required
//! - `Symptom Description` (or `description`) is optional
//! - `Precaution 1..3` (or `symptom1..3`) are the optional notes

use async_trait::async_trait;
use calamine::{Data, Reader, open_workbook_auto};
use healthbot_core::{DiseaseRecord, LoadError, NOTE_SLOTS, RecordSource};
use std::path::{Path, PathBuf};
use tracing::debug;

const NAME_HEADERS: &[&str] = &["name", "disease_name"];
const DESCRIPTION_HEADERS: &[&str] = &["symptom description", "description"];
const NOTE_HEADERS: [&[&str]; NOTE_SLOTS] = [
    &["precaution 1", "symptom1"],
    &["precaution 2", "symptom2"],
    &["precaution 3", "symptom3"],
];

/// Positions of the known columns in a header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    pub name: usize,
    pub description: Option<usize>,
    pub notes: [Option<usize>; NOTE_SLOTS],
}

impl ColumnMap {
    pub fn from_header(header: &[Data]) -> Result<Self, LoadError> {
        let labels: Vec<String> = header
            .iter()
            .map(|cell| cell.to_string().trim().to_lowercase())
            .collect();
        let find = |aliases: &[&str]| labels.iter().position(|l| aliases.contains(&l.as_str()));

        Ok(Self {
            name: find(NAME_HEADERS).ok_or(LoadError::MissingColumn("Name"))?,
            description: find(DESCRIPTION_HEADERS),
            notes: NOTE_HEADERS.map(find),
        })
    }

    fn record(&self, row: &[Data]) -> Option<DiseaseRecord> {
        let cell = |index: Option<usize>| index.and_then(|i| row.get(i)).and_then(cell_text);

        DiseaseRecord::try_new(cell(Some(self.name)))
            .ok()
            .map(|record| {
                record
                    .with_description(cell(self.description))
                    .with_notes(self.notes.map(cell))
            })
    }
}

fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Turn sheet rows, header first, into records in sheet order.
///
/// Rows without a name are skipped. A sheet with no rows yields no records.
pub fn records_from_rows<'a, I>(rows: I) -> Result<Vec<DiseaseRecord>, LoadError>
where
    I: IntoIterator<Item = &'a [Data]>,
{
    let mut rows = rows.into_iter();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let columns = ColumnMap::from_header(header)?;

    let mut records = Vec::new();
    for (index, row) in rows.enumerate() {
        match columns.record(row) {
            Some(record) => records.push(record),
            // +2: one for the header, one for 1-based row numbers
            None => debug!("Skipping spreadsheet row {} without a name", index + 2),
        }
    }
    Ok(records)
}

pub struct SpreadsheetSource {
    path: PathBuf,
    sheet: Option<String>,
}

impl SpreadsheetSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet: None,
        }
    }

    #[must_use]
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(path: &Path, sheet: Option<&str>) -> Result<Vec<DiseaseRecord>, LoadError> {
        if !path.exists() {
            return Err(LoadError::MissingFile(path.to_path_buf()));
        }

        let mut workbook =
            open_workbook_auto(path).map_err(|e| LoadError::Spreadsheet(e.to_string()))?;

        let range = match sheet {
            Some(name) => workbook.worksheet_range(name),
            None => workbook
                .worksheet_range_at(0)
                .ok_or_else(|| LoadError::Spreadsheet("workbook has no sheets".to_string()))?,
        }
        .map_err(|e| LoadError::Spreadsheet(e.to_string()))?;

        records_from_rows(range.rows())
    }
}

#[async_trait]
impl RecordSource for SpreadsheetSource {
    fn name(&self) -> &str {
        "spreadsheet"
    }

    async fn load(&self) -> Result<Vec<DiseaseRecord>, LoadError> {
        let path = self.path.clone();
        let sheet = self.sheet.clone();

        tokio::task::spawn_blocking(move || Self::read(&path, sheet.as_deref()))
            .await
            .map_err(|e| LoadError::Spreadsheet(e.to_string()))?
    }
}
