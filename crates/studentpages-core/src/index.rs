//! The student index: one entry per unique `niat_id`.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::ProficiencyRecord;

/// What the generator needs to know about a student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentEntry {
    pub student_name: String,
    /// Trimmed `user_id`, used by the practice page to filter questions.
    pub user_id: String,
}

/// Immutable lookup from trimmed student id to [`StudentEntry`].
///
/// Iteration follows first-seen order in the source array.
#[derive(Debug, Clone, Default)]
pub struct StudentIndex {
    entries: Vec<(String, StudentEntry)>,
    positions: HashMap<String, usize>,
}

impl StudentIndex {
    /// Build the index. The first usable record for an id wins; later records
    /// with the same id are ignored even when their name or user id differ.
    /// Records with a blank id or no `user_id` are skipped.
    pub fn build(records: &[ProficiencyRecord]) -> Self {
        let mut index = StudentIndex::default();
        let mut skipped = 0usize;

        for record in records {
            let Some(id) = record.student_id() else {
                skipped += 1;
                continue;
            };
            if index.positions.contains_key(id) {
                continue;
            }
            let Some(user_id) = record.user_id.as_deref() else {
                tracing::debug!(student = id, "record has no user_id, skipping");
                skipped += 1;
                continue;
            };

            index.positions.insert(id.to_string(), index.entries.len());
            index.entries.push((
                id.to_string(),
                StudentEntry {
                    student_name: record.student_name.clone().unwrap_or_default(),
                    user_id: user_id.trim().to_string(),
                },
            ));
        }

        tracing::debug!(
            students = index.entries.len(),
            records = records.len(),
            skipped,
            "built student index"
        );
        index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, student_id: &str) -> Option<&StudentEntry> {
        self.positions
            .get(student_id)
            .map(|&i| &self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudentEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: Option<&str>, name: &str, user: Option<&str>) -> ProficiencyRecord {
        ProficiencyRecord {
            niat_id: id.map(String::from),
            student_name: Some(name.into()),
            user_id: user.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn first_seen_wins() {
        let records = vec![
            record(Some("S1"), "Alice", Some("U1")),
            record(Some("S1"), "Alicia", Some("U9")),
            record(Some("S2"), "Bob", Some("U2")),
        ];
        let index = StudentIndex::build(&records);

        assert_eq!(index.len(), 2);
        let alice = index.get("S1").unwrap();
        assert_eq!(alice.student_name, "Alice");
        assert_eq!(alice.user_id, "U1");
    }

    #[test]
    fn ids_are_trimmed_and_merged() {
        let records = vec![
            record(Some(" S1 "), "Alice", Some(" U1 ")),
            record(Some("S1"), "Other", Some("U2")),
        ];
        let index = StudentIndex::build(&records);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("S1").unwrap().user_id, "U1");
        assert!(index.get(" S1 ").is_none());
    }

    #[test]
    fn iteration_keeps_source_order() {
        let records = vec![
            record(Some("S3"), "C", Some("U3")),
            record(Some("S1"), "A", Some("U1")),
            record(Some("S2"), "B", Some("U2")),
        ];
        let index = StudentIndex::build(&records);
        let ids: Vec<&str> = index.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["S3", "S1", "S2"]);
    }

    #[test]
    fn unusable_records_are_skipped() {
        let records = vec![
            record(None, "Nobody", Some("U0")),
            record(Some("  "), "Blank", Some("U0")),
            record(Some("S1"), "No user", None),
            record(Some("S1"), "Alice", Some("U1")),
        ];
        let index = StudentIndex::build(&records);

        assert_eq!(index.len(), 1);
        assert_eq!(index.get("S1").unwrap().student_name, "Alice");
    }

    #[test]
    fn missing_name_is_empty() {
        let records = vec![ProficiencyRecord {
            niat_id: Some("S1".into()),
            user_id: Some("U1".into()),
            ..Default::default()
        }];
        let index = StudentIndex::build(&records);
        assert_eq!(index.get("S1").unwrap().student_name, "");
    }
}
