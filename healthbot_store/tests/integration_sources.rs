//! Integration tests for the record sources.
//!
//! These tests verify that:
//! - Database rows load in id order and nameless rows are skipped
//! - A disabled database source reports `LoadError::Disabled`
//! - Spreadsheet rows map through the header and normalize missing cells
//! - The fallback chain picks the spreadsheet when the database is disabled

use calamine::Data;
use healthbot_core::{Chatbot, LoadError, Lookup, RecordSource, RecordStore, SinkOutcome};
use healthbot_entities::diseases;
use healthbot_store::{DatabaseSource, SpreadsheetSource, records_from_rows};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use std::sync::Arc;
use std::time::Duration;

fn disease(id: i32, name: Option<&str>, description: &str, notes: [&str; 3]) -> diseases::Model {
    let [symptom1, symptom2, symptom3] = notes.map(|n| Some(n.to_string()));
    diseases::Model {
        id,
        name: name.map(str::to_string),
        description: Some(description.to_string()),
        symptom1,
        symptom2,
        symptom3,
    }
}

fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

#[tokio::test]
async fn test_database_source_loads_rows_and_skips_nameless() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![
            disease(1, Some("Flu"), "Viral infection", ["fever", "cough", ""]),
            disease(2, None, "orphan row", ["", "", ""]),
            disease(3, Some("  "), "blank name", ["", "", ""]),
            disease(4, Some("Malaria"), "Parasitic disease", ["nan", "", "use nets"]),
        ]])
        .into_connection();

    let source = DatabaseSource::from_connection(db);
    let records = source.load().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name(), "Flu");
    assert_eq!(records[1].name(), "Malaria");
    assert_eq!(records[1].notes().collect::<Vec<_>>(), ["use nets"]);

    let store = RecordStore::new(records);
    assert_eq!(
        store.respond("flu"),
        Lookup::Found("Viral infection\n\nSymptoms:\n• fever\n• cough".to_string())
    );
}

#[tokio::test]
async fn test_disabled_database_source() {
    let source = DatabaseSource::new("mysql://root:@localhost:3306/healthbot", Duration::from_secs(1))
        .enabled(false);

    assert!(matches!(source.load().await, Err(LoadError::Disabled)));
    assert!(source.connection().is_none());
    assert!(source.query_sink().is_none());
}

#[tokio::test]
async fn test_query_sink_records_unmatched_query() {
    let db = MockDatabase::new(DatabaseBackend::MySql)
        .append_query_results([vec![disease(1, Some("Flu"), "Viral infection", ["", "", ""])]])
        .append_exec_results([MockExecResult {
            last_insert_id: 1,
            rows_affected: 1,
        }])
        .into_connection();

    let source = DatabaseSource::from_connection(db);
    let store = RecordStore::new(source.load().await.unwrap());
    let sink = source.query_sink().unwrap();

    assert_eq!(
        healthbot_core::record_best_effort(&sink, "measles").await,
        SinkOutcome::Recorded
    );

    // The exec buffer is now empty, so the next write fails; the reply must not.
    let bot = Chatbot::new(store).with_sink(Arc::new(sink));
    assert_eq!(
        bot.reply("measles").await.text(),
        "Sorry, I don't have information on that disease."
    );
}

#[test]
fn test_spreadsheet_rows_follow_header() {
    let rows = vec![
        vec![
            text("Name"),
            text("Symptom Description"),
            text("Precaution 1"),
            text("Precaution 2"),
            text("Precaution 3"),
        ],
        vec![
            text("Flu"),
            text("Viral infection"),
            text("rest"),
            Data::Empty,
            text("drink fluids"),
        ],
        vec![Data::Empty, text("no name"), Data::Empty, Data::Empty, Data::Empty],
        vec![text("Acne"), text("Skin condition")],
    ];

    let records = records_from_rows(rows.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].reply_text(),
        "Viral infection\n\nSymptoms:\n• rest\n• drink fluids"
    );
    assert_eq!(records[1].reply_text(), "Skin condition\n\n");
}

#[test]
fn test_spreadsheet_numeric_cells_render_as_text() {
    let rows = vec![
        vec![text("Name"), text("Precaution 1")],
        vec![text("Dehydration"), Data::Float(2.5)],
    ];

    let records = records_from_rows(rows.iter().map(Vec::as_slice)).unwrap();

    assert_eq!(records[0].notes().collect::<Vec<_>>(), ["2.5"]);
}

#[test]
fn test_empty_sheet_has_no_records() {
    let rows: Vec<Vec<Data>> = Vec::new();
    assert!(records_from_rows(rows.iter().map(Vec::as_slice)).unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_workbook_is_a_load_error() {
    let source = SpreadsheetSource::new(std::env::temp_dir().join("healthbot-no-such-sheet.xlsx"));
    assert!(matches!(source.load().await, Err(LoadError::MissingFile(_))));
}

#[tokio::test]
async fn test_fallback_chain_ends_empty_when_nothing_loads() {
    let database = DatabaseSource::new("mysql://unused", Duration::from_secs(1)).enabled(false);
    let spreadsheet =
        SpreadsheetSource::new(std::env::temp_dir().join("healthbot-no-such-sheet.xlsx"));

    let store = RecordStore::load_first_available(&[&database, &spreadsheet]).await;

    assert!(store.is_empty());
    assert_eq!(store.respond("flu"), Lookup::DataUnavailable);
}
