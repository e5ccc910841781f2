//! Recommended questions grouped by difficulty.

use crate::model::{Difficulty, QuestionRecord};

/// A user's recommended questions in the three fixed buckets.
#[derive(Debug, Clone, Default)]
pub struct QuestionBuckets {
    easy: Vec<QuestionRecord>,
    medium: Vec<QuestionRecord>,
    hard: Vec<QuestionRecord>,
}

impl QuestionBuckets {
    /// Keep the questions whose trimmed `user_id` equals `user_id` exactly,
    /// in dataset order. Questions with an unrecognized difficulty are dropped.
    pub fn for_user(questions: &[QuestionRecord], user_id: &str) -> Self {
        let mut buckets = QuestionBuckets::default();
        for question in questions.iter().filter(|q| q.matches_user(user_id)) {
            match question.difficulty() {
                Some(d) => buckets.bucket_mut(d).push(question.clone()),
                None => tracing::debug!(
                    user = user_id,
                    difficulty = ?question.difficulty,
                    "dropping question with unrecognized difficulty"
                ),
            }
        }
        buckets
    }

    pub fn bucket(&self, difficulty: Difficulty) -> &[QuestionRecord] {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    fn bucket_mut(&mut self, difficulty: Difficulty) -> &mut Vec<QuestionRecord> {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Buckets that would be rendered as sections, in EASY, MEDIUM, HARD order.
    pub fn non_empty(&self) -> impl Iterator<Item = (Difficulty, &[QuestionRecord])> {
        Difficulty::ALL
            .into_iter()
            .map(|d| (d, self.bucket(d)))
            .filter(|(_, qs)| !qs.is_empty())
    }

    pub fn total(&self) -> usize {
        self.easy.len() + self.medium.len() + self.hard.len()
    }
}
