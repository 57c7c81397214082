//! Schema creation and spreadsheet import for the MySQL store.

use healthbot_core::{DiseaseRecord, LoadError};
use healthbot_entities::{diseases, precautions, unknown_queries};
use sea_orm::sea_query::Table;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseConnection, DbErr, Schema, Set, TransactionTrait,
};
use thiserror::Error;
use tracing::info;

use crate::convert::note_column;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("could not read source data: {0}")]
    Load(#[from] LoadError),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Rows written by [`seed_records`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub diseases: usize,
    pub precautions: usize,
}

/// Create `diseases`, `precautions` and `unknown_queries` if they are missing.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let statements = [
        schema
            .create_table_from_entity(diseases::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(precautions::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(unknown_queries::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for stmt in &statements {
        db.execute_unprepared(&backend.build(stmt).to_string())
            .await?;
    }

    info!("Schema ready");
    Ok(())
}

/// Drop all healthbot tables, dependents first.
pub async fn drop_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();

    let statements = [
        Table::drop().table(precautions::Entity).if_exists().to_owned(),
        Table::drop().table(unknown_queries::Entity).if_exists().to_owned(),
        Table::drop().table(diseases::Entity).if_exists().to_owned(),
    ];

    for stmt in &statements {
        db.execute_unprepared(&backend.build(stmt).to_string())
            .await?;
    }

    info!("Dropped existing tables");
    Ok(())
}

/// Insert records in order inside a single transaction.
///
/// Notes go to `symptom1..3` and each non-empty note also becomes a
/// `precautions` row linked to its disease.
pub async fn seed_records(
    db: &DatabaseConnection,
    records: &[DiseaseRecord],
) -> Result<SeedReport, SeedError> {
    let txn = db.begin().await?;
    let mut report = SeedReport::default();

    for record in records {
        let disease = diseases::ActiveModel {
            name: Set(Some(record.name().to_string())),
            description: Set(record.description().map(str::to_string)),
            symptom1: Set(note_column(record, 0)),
            symptom2: Set(note_column(record, 1)),
            symptom3: Set(note_column(record, 2)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        report.diseases += 1;

        for note in record.notes() {
            precautions::ActiveModel {
                disease_id: Set(disease.id),
                precaution_text: Set(note.to_string()),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            report.precautions += 1;
        }
    }

    txn.commit().await?;

    info!(
        "Imported {} diseases with {} precautions",
        report.diseases, report.precautions
    );
    Ok(report)
}
