//! Proficiency grid: topic rows by difficulty columns.
//!
//! The report page computes this grid in the browser; this is the same
//! computation on the Rust side, used by the CLI preview and tests.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::{Difficulty, ProficiencyRecord};

/// Topics shown on a report, in display order.
pub const ORDERED_TOPICS: [&str; 18] = [
    "IO_BASICS",
    "OPERATORS",
    "ARITHMETIC_OPERATORS",
    "ARITHMETIC_OPERATIONS",
    "CONDITIONAL_STATEMENTS_IF_ELSE",
    "LOOPS_FOR",
    "NESTED_LOOPS",
    "PATTERNS",
    "FUNCTIONS",
    "BUILT_IN_FUNCTIONS",
    "DATA_TYPE_STRING",
    "STRING_METHODS",
    "STRING_OPERATIONS",
    "STRING_MANIPULATION",
    "DATA_TYPE_LIST",
    "LISTS",
    "DATA_TYPE_SET",
    "DATA_TYPE_DICTIONARY",
];

/// State of one topic/difficulty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellStatus {
    Passed,
    Failed,
    #[default]
    NoData,
}

impl CellStatus {
    pub fn symbol(self) -> &'static str {
        match self {
            CellStatus::Passed => "✅",
            CellStatus::Failed => "❌",
            CellStatus::NoData => "-",
        }
    }

    /// CSS class used by the report page stylesheet.
    pub fn css_class(self) -> &'static str {
        match self {
            CellStatus::Passed => "green",
            CellStatus::Failed => "red",
            CellStatus::NoData => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridRow {
    pub topic: &'static str,
    pub easy: CellStatus,
    pub medium: CellStatus,
    pub hard: CellStatus,
}

impl GridRow {
    fn empty(topic: &'static str) -> Self {
        Self {
            topic,
            easy: CellStatus::NoData,
            medium: CellStatus::NoData,
            hard: CellStatus::NoData,
        }
    }

    pub fn cell(&self, difficulty: Difficulty) -> CellStatus {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn cell_mut(&mut self, difficulty: Difficulty) -> &mut CellStatus {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// One row per entry of [`ORDERED_TOPICS`].
#[derive(Debug, Clone, Serialize)]
pub struct ProficiencyGrid {
    rows: Vec<GridRow>,
}

impl ProficiencyGrid {
    /// Build the grid for `student_id` from the full dataset.
    ///
    /// Records for other students, for topics outside the list, or with an
    /// unrecognized difficulty leave the grid untouched. When a student has
    /// several records for the same cell the last one decides.
    pub fn for_student(records: &[ProficiencyRecord], student_id: &str) -> Self {
        let mut rows: Vec<GridRow> = ORDERED_TOPICS.iter().map(|&t| GridRow::empty(t)).collect();
        let positions: HashMap<&str, usize> = ORDERED_TOPICS
            .iter()
            .enumerate()
            .map(|(i, t)| (*t, i))
            .collect();

        for record in records
            .iter()
            .filter(|r| r.student_id() == Some(student_id))
        {
            let Some(&row) = record.sub_topic.as_deref().and_then(|t| positions.get(t)) else {
                continue;
            };
            let Some(difficulty) = record.difficulty() else {
                continue;
            };
            *rows[row].cell_mut(difficulty) = if record.percentage_of_questions_solved.passes() {
                CellStatus::Passed
            } else {
                CellStatus::Failed
            };
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn cell(&self, topic: &str, difficulty: Difficulty) -> Option<CellStatus> {
        self.rows
            .iter()
            .find(|r| r.topic == topic)
            .map(|r| r.cell(difficulty))
    }

    /// Number of cells that have a measurement.
    pub fn measured_cells(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|r| Difficulty::ALL.map(|d| r.cell(d)))
            .filter(|c| *c != CellStatus::NoData)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::percentage::Percentage;

    fn record(id: &str, topic: &str, difficulty: &str, pct: Percentage) -> ProficiencyRecord {
        ProficiencyRecord {
            niat_id: Some(id.into()),
            student_name: Some("Alice".into()),
            user_id: Some("U1".into()),
            sub_topic: Some(topic.into()),
            difficulty: Some(difficulty.into()),
            percentage_of_questions_solved: pct,
        }
    }

    #[test]
    fn single_record_marks_one_cell() {
        let records = vec![record("S1", "LOOPS_FOR", "EASY", 0.7.into())];
        let grid = ProficiencyGrid::for_student(&records, "S1");

        assert_eq!(grid.rows().len(), 18);
        assert_eq!(
            grid.cell("LOOPS_FOR", Difficulty::Easy),
            Some(CellStatus::Passed)
        );
        assert_eq!(
            grid.cell("LOOPS_FOR", Difficulty::Medium),
            Some(CellStatus::NoData)
        );
        assert_eq!(grid.measured_cells(), 1);
    }

    #[test]
    fn unknown_student_is_all_neutral() {
        let records = vec![record("S1", "LOOPS_FOR", "EASY", 0.7.into())];
        let grid = ProficiencyGrid::for_student(&records, "S404");

        assert_eq!(grid.rows().len(), 18);
        assert_eq!(grid.measured_cells(), 0);
        assert!(grid
            .rows()
            .iter()
            .all(|r| r.easy.symbol() == "-" && r.hard.css_class() == "neutral"));
    }

    #[test]
    fn unrecognized_difficulty_fills_no_column() {
        let records = vec![record("S1", "PATTERNS", "EXPERT", 1.0.into())];
        let grid = ProficiencyGrid::for_student(&records, "S1");

        for d in Difficulty::ALL {
            assert_eq!(grid.cell("PATTERNS", d), Some(CellStatus::NoData));
        }
    }

    #[test]
    fn failing_and_textual_percentages() {
        let records = vec![
            record("S1", "LISTS", "HARD", "20%".into()),
            record("S1", "LISTS", "MEDIUM", 0.2.into()),
            record("S1", "LISTS", "EASY", "55%".into()),
        ];
        let grid = ProficiencyGrid::for_student(&records, "S1");

        // "20%" reads as 20, which clears the 50% bar.
        assert_eq!(grid.cell("LISTS", Difficulty::Hard), Some(CellStatus::Passed));
        assert_eq!(grid.cell("LISTS", Difficulty::Medium), Some(CellStatus::Failed));
        assert_eq!(grid.cell("LISTS", Difficulty::Easy), Some(CellStatus::Passed));
        assert_eq!(CellStatus::Failed.symbol(), "❌");
    }

    #[test]
    fn unlisted_topics_are_ignored_and_last_record_wins() {
        let records = vec![
            record("S1", "RECURSION", "EASY", 1.0.into()),
            record("S1", "FUNCTIONS", "EASY", 1.0.into()),
            record("S1", "FUNCTIONS", "EASY", 0.1.into()),
        ];
        let grid = ProficiencyGrid::for_student(&records, "S1");

        assert_eq!(grid.cell("RECURSION", Difficulty::Easy), None);
        assert_eq!(
            grid.cell("FUNCTIONS", Difficulty::Easy),
            Some(CellStatus::Failed)
        );
    }
}
