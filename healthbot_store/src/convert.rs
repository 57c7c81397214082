use healthbot_core::{DiseaseRecord, InvalidRecord};
use healthbot_entities::diseases;

pub fn record_from_model(m: diseases::Model) -> Result<DiseaseRecord, InvalidRecord> {
    Ok(DiseaseRecord::try_new(m.name)?
        .with_description(m.description)
        .with_notes([m.symptom1, m.symptom2, m.symptom3]))
}

/// Note slot `index` as an owned column value.
pub fn note_column(record: &DiseaseRecord, index: usize) -> Option<String> {
    record.note_slots().get(index).cloned().flatten()
}
