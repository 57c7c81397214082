//! Disease records as handed over by a backing source.

use thiserror::Error;

/// Number of auxiliary note columns a record carries.
pub const NOTE_SLOTS: usize = 3;

/// Placeholder some loaders emit for missing cells.
const MISSING_SENTINEL: &str = "nan";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidRecord {
    #[error("record has no usable name")]
    MissingName,
}

/// Normalize an optional cell value.
///
/// Whitespace is trimmed; blank cells and the `nan` placeholder become `None`.
#[must_use]
pub fn normalize_field(value: Option<String>) -> Option<String> {
    let value = value?;
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(MISSING_SENTINEL) {
        return None;
    }
    if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}

/// One known disease or condition.
///
/// The notes are three optional auxiliary texts. Depending on where the data
/// came from they hold symptoms or precautions; they are rendered the same way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseRecord {
    name: String,
    /// Lowercased name used for matching.
    key: String,
    description: Option<String>,
    notes: [Option<String>; NOTE_SLOTS],
}

impl DiseaseRecord {
    /// Create a record, rejecting rows without a name.
    pub fn try_new(name: Option<String>) -> Result<Self, InvalidRecord> {
        let name = normalize_field(name).ok_or(InvalidRecord::MissingName)?;
        let key = name.to_lowercase();
        Ok(Self {
            name,
            key,
            description: None,
            notes: Default::default(),
        })
    }

    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = normalize_field(description);
        self
    }

    /// Set the auxiliary notes. Values past the third are ignored.
    #[must_use]
    pub fn with_notes<I>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = Option<String>>,
    {
        self.notes = Default::default();
        for (slot, note) in self.notes.iter_mut().zip(notes) {
            *slot = normalize_field(note);
        }
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Non-empty notes, in column order.
    pub fn notes(&self) -> impl Iterator<Item = &str> {
        self.notes.iter().filter_map(Option::as_deref)
    }

    /// Raw note slots, including empty ones.
    #[must_use]
    pub const fn note_slots(&self) -> &[Option<String>; NOTE_SLOTS] {
        &self.notes
    }

    /// Whether an already normalized query selects this record.
    ///
    /// Exact and substring matches are both accepted.
    #[must_use]
    pub fn matches(&self, normalized_query: &str) -> bool {
        self.key.contains(normalized_query)
    }

    /// Reply text shown to the user for this record.
    #[must_use]
    pub fn reply_text(&self) -> String {
        let mut reply = format!("{}\n\n", self.description().unwrap_or_default());

        let bullets: Vec<String> = self.notes().map(|note| format!("• {note}")).collect();
        if !bullets.is_empty() {
            reply.push_str("Symptoms:\n");
            reply.push_str(&bullets.join("\n"));
        }

        reply
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn blank_and_sentinel_fields_are_absent() {
        assert_eq!(normalize_field(None), None);
        assert_eq!(normalize_field(s("   ")), None);
        assert_eq!(normalize_field(s("nan")), None);
        assert_eq!(normalize_field(s(" NaN ")), None);
        assert_eq!(normalize_field(s(" fever ")), s("fever"));
    }

    #[test]
    fn nameless_rows_are_rejected() {
        assert_eq!(DiseaseRecord::try_new(None), Err(InvalidRecord::MissingName));
        assert_eq!(DiseaseRecord::try_new(s("  ")), Err(InvalidRecord::MissingName));
        assert_eq!(DiseaseRecord::try_new(s("nan")), Err(InvalidRecord::MissingName));
    }

    #[test]
    fn reply_lists_non_empty_notes_in_order() {
        let record = DiseaseRecord::try_new(s("Flu"))
            .unwrap()
            .with_description(s("Viral infection"))
            .with_notes([s("fever"), s("cough"), s("")]);

        assert_eq!(
            record.reply_text(),
            "Viral infection\n\nSymptoms:\n• fever\n• cough"
        );
    }

    #[test]
    fn gaps_between_notes_leave_no_blank_bullet() {
        let record = DiseaseRecord::try_new(s("Malaria"))
            .unwrap()
            .with_description(s("Parasitic disease"))
            .with_notes([None, s("nan"), s("use nets")]);

        assert_eq!(
            record.reply_text(),
            "Parasitic disease\n\nSymptoms:\n• use nets"
        );
    }

    #[test]
    fn reply_without_notes_has_no_header() {
        let record = DiseaseRecord::try_new(s("Acne"))
            .unwrap()
            .with_description(s("Skin condition"));

        assert_eq!(record.reply_text(), "Skin condition\n\n");
    }

    #[test]
    fn missing_description_renders_empty() {
        let record = DiseaseRecord::try_new(s("Gout"))
            .unwrap()
            .with_notes([s("rest")]);

        assert_eq!(record.reply_text(), "\n\nSymptoms:\n• rest");
    }

    #[test]
    fn extra_notes_are_dropped() {
        let record = DiseaseRecord::try_new(s("x"))
            .unwrap()
            .with_notes([s("a"), s("b"), s("c"), s("d")]);

        assert_eq!(record.notes().collect::<Vec<_>>(), ["a", "b", "c"]);
    }

    #[test]
    fn matching_is_case_insensitive_on_the_name() {
        let record = DiseaseRecord::try_new(s("Influenza-Like Illness")).unwrap();
        assert!(record.matches("flu"));
        assert!(record.matches("influenza-like illness"));
        assert!(!record.matches("measles"));
    }
}
