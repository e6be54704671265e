use crate::quiz::model::{AnswerSheet, AnswerValue, Question, Section, total_questions};

/// Outcome of recording an answer.
#[derive(Clone, Debug, PartialEq)]
pub enum Advance {
    /// More questions remain; the sequencer already moved to the next one.
    Next,
    /// That was the last question. Carries the completed sheet.
    Complete(AnswerSheet),
}

/// Walks the static section tables one question at a time, section by
/// section. Cloned into yew state on every answer, so it stays a plain
/// value type.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionSequencer {
    sections: &'static [Section],
    section_idx: usize,
    question_idx: usize,
    sheet: AnswerSheet,
}

impl QuestionSequencer {
    pub fn new(sections: &'static [Section]) -> Self {
        Self {
            sections,
            section_idx: 0,
            question_idx: 0,
            sheet: AnswerSheet::new(),
        }
    }

    pub fn current_section(&self) -> &'static Section {
        &self.sections[self.section_idx]
    }

    pub fn current_question(&self) -> &'static Question {
        &self.sections[self.section_idx].questions[self.question_idx]
    }

    pub fn section_number(&self) -> usize {
        self.section_idx + 1
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// 1-based rank of the current question across all sections.
    pub fn question_number(&self) -> usize {
        self.sections[..self.section_idx]
            .iter()
            .map(|s| s.questions.len())
            .sum::<usize>()
            + self.question_idx
            + 1
    }

    pub fn total_questions(&self) -> usize {
        total_questions(self.sections)
    }

    /// Answered count over total, as displayed by the progress bar. Counts
    /// questions, not points, so half-point answers fill it the same as
    /// full ones.
    pub fn progress_percent(&self) -> f32 {
        let total = self.total_questions();
        if total == 0 {
            return 0.0;
        }
        self.sheet.answered() as f32 / total as f32 * 100.0
    }

    pub fn sheet(&self) -> &AnswerSheet {
        &self.sheet
    }

    /// Records the answer for the current question and steps forward.
    /// Values the question's kind does not offer are ignored (the UI only
    /// renders legal buttons, so this is belt and braces for tests).
    pub fn answer(&mut self, value: AnswerValue) -> Advance {
        let question = self.current_question();
        if !question.kind.allows(value) {
            return Advance::Next;
        }
        self.sheet.record(question.id, question.points_for(value));

        if self.question_idx + 1 < self.current_section().questions.len() {
            self.question_idx += 1;
            Advance::Next
        } else if self.section_idx + 1 < self.sections.len() {
            self.section_idx += 1;
            self.question_idx = 0;
            Advance::Next
        } else {
            Advance::Complete(self.sheet.clone())
        }
    }

    /// Discards the attempt. Used by the funnel-level back control and the
    /// "refaire le diagnostic" action.
    pub fn reset(&mut self) {
        self.section_idx = 0;
        self.question_idx = 0;
        self.sheet.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::Question;

    static SECTIONS: [Section; 2] = [
        Section {
            id: "a",
            title: "A",
            icon: "📊",
            description: "",
            questions: &[
                Question::yes_partial_no("a1", "q", "y", "p", "n", 1),
                Question::yes_partial_no("a2", "q", "y", "p", "n", 1),
            ],
        },
        Section {
            id: "b",
            title: "B",
            icon: "📈",
            description: "",
            questions: &[Question::yes_no("b1", "q", "y", "n", 2)],
        },
    ];

    #[test]
    fn visits_every_question_once_in_order() {
        let mut seq = QuestionSequencer::new(&SECTIONS);
        assert_eq!(seq.current_question().id, "a1");
        assert_eq!(seq.question_number(), 1);
        assert_eq!(seq.answer(AnswerValue::Yes), Advance::Next);
        assert_eq!(seq.current_question().id, "a2");
        assert_eq!(seq.answer(AnswerValue::Partial), Advance::Next);
        assert_eq!(seq.current_question().id, "b1");
        assert_eq!(seq.question_number(), 3);
        assert_eq!(seq.section_number(), 2);

        match seq.answer(AnswerValue::No) {
            Advance::Complete(sheet) => {
                assert_eq!(sheet.answered(), 3);
                assert_eq!(sheet.total(), 1.5);
            }
            Advance::Next => panic!("expected completion after the last question"),
        }
    }

    #[test]
    fn completion_only_after_last_question() {
        let mut seq = QuestionSequencer::new(&SECTIONS);
        assert_eq!(seq.answer(AnswerValue::No), Advance::Next);
        assert_eq!(seq.answer(AnswerValue::No), Advance::Next);
        assert!(matches!(seq.answer(AnswerValue::No), Advance::Complete(_)));
    }

    #[test]
    fn progress_counts_questions_not_points() {
        let mut seq = QuestionSequencer::new(&SECTIONS);
        assert_eq!(seq.progress_percent(), 0.0);
        seq.answer(AnswerValue::Partial);
        let expected = 100.0 / 3.0;
        assert!((seq.progress_percent() - expected).abs() < 1e-4);
    }

    #[test]
    fn illegal_value_for_kind_is_ignored() {
        let mut seq = QuestionSequencer::new(&SECTIONS);
        seq.answer(AnswerValue::Yes);
        seq.answer(AnswerValue::Yes);
        // b1 is yes/no; Partial must not record or advance
        assert_eq!(seq.answer(AnswerValue::Partial), Advance::Next);
        assert_eq!(seq.current_question().id, "b1");
        assert_eq!(seq.sheet().answered(), 2);
    }

    #[test]
    fn reset_discards_the_attempt() {
        let mut seq = QuestionSequencer::new(&SECTIONS);
        seq.answer(AnswerValue::Yes);
        seq.answer(AnswerValue::Yes);
        seq.reset();
        assert_eq!(seq.current_question().id, "a1");
        assert!(seq.sheet().is_empty());
        assert_eq!(seq.progress_percent(), 0.0);
    }
}
