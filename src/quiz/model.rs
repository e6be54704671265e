use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Which answer buttons a question offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnswerKind {
    YesNo,
    YesPartialNo,
    YesNoUnknown,
}

/// A validated answer. "Je ne sais pas" scores like a no.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnswerValue {
    Yes,
    Partial,
    No,
    Unknown,
}

impl AnswerValue {
    pub fn points(self) -> f32 {
        match self {
            AnswerValue::Yes => 1.0,
            AnswerValue::Partial => 0.5,
            AnswerValue::No | AnswerValue::Unknown => 0.0,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AnswerValue::Yes => "✅",
            AnswerValue::Partial => "⚠️",
            AnswerValue::No => "❌",
            AnswerValue::Unknown => "🤷",
        }
    }
}

impl AnswerKind {
    pub fn allows(self, value: AnswerValue) -> bool {
        match self {
            AnswerKind::YesNo => matches!(value, AnswerValue::Yes | AnswerValue::No),
            AnswerKind::YesPartialNo => {
                matches!(value, AnswerValue::Yes | AnswerValue::Partial | AnswerValue::No)
            }
            AnswerKind::YesNoUnknown => {
                matches!(value, AnswerValue::Yes | AnswerValue::No | AnswerValue::Unknown)
            }
        }
    }

    /// Buttons in display order, with the default labels. Questions may
    /// override the labels (see [`Question::labels`]).
    pub fn values(self) -> &'static [AnswerValue] {
        match self {
            AnswerKind::YesNo => &[AnswerValue::Yes, AnswerValue::No],
            AnswerKind::YesPartialNo => {
                &[AnswerValue::Yes, AnswerValue::Partial, AnswerValue::No]
            }
            AnswerKind::YesNoUnknown => {
                &[AnswerValue::Yes, AnswerValue::No, AnswerValue::Unknown]
            }
        }
    }

    pub fn default_label(self, value: AnswerValue) -> &'static str {
        match value {
            AnswerValue::Yes => "Oui ✓",
            AnswerValue::Partial => "Partiellement",
            AnswerValue::No => "Non ✗",
            AnswerValue::Unknown => "Je ne sais pas",
        }
    }
}

/// How the recorded points relate to the question's answer buttons, used to
/// pick the right feedback text on the results screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Response {
    Yes,
    Partial,
    No,
}

impl Response {
    pub fn value(self) -> AnswerValue {
        match self {
            Response::Yes => AnswerValue::Yes,
            Response::Partial => AnswerValue::Partial,
            Response::No => AnswerValue::No,
        }
    }
}

/// One quiz question. Tables are static per guide; `weight` scales the
/// points so guides with different maxima (17, 31, 48, 50…) share one
/// aggregator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub kind: AnswerKind,
    pub weight: f32,
    pub feedback_yes: &'static str,
    pub feedback_partial: Option<&'static str>,
    pub feedback_no: &'static str,
    pub chapter: u8,
    /// Custom labels for [Yes, Partial, No], in that order. Guides with
    /// graded options (daf-pme) word each button per question.
    pub labels: Option<[&'static str; 3]>,
}

impl Question {
    pub const fn yes_no(
        id: &'static str,
        text: &'static str,
        feedback_yes: &'static str,
        feedback_no: &'static str,
        chapter: u8,
    ) -> Self {
        Self {
            id,
            text,
            kind: AnswerKind::YesNo,
            weight: 1.0,
            feedback_yes,
            feedback_partial: None,
            feedback_no,
            chapter,
            labels: None,
        }
    }

    pub const fn yes_partial_no(
        id: &'static str,
        text: &'static str,
        feedback_yes: &'static str,
        feedback_partial: &'static str,
        feedback_no: &'static str,
        chapter: u8,
    ) -> Self {
        Self {
            id,
            text,
            kind: AnswerKind::YesPartialNo,
            weight: 1.0,
            feedback_yes,
            feedback_partial: Some(feedback_partial),
            feedback_no,
            chapter,
            labels: None,
        }
    }

    pub const fn yes_no_unknown(
        id: &'static str,
        text: &'static str,
        feedback_yes: &'static str,
        feedback_no: &'static str,
        chapter: u8,
    ) -> Self {
        Self {
            id,
            text,
            kind: AnswerKind::YesNoUnknown,
            weight: 1.0,
            feedback_yes,
            feedback_partial: None,
            feedback_no,
            chapter,
            labels: None,
        }
    }

    /// Graded question: three options worded per question, scored
    /// weight / weight÷2 / 0.
    pub const fn scaled(
        id: &'static str,
        text: &'static str,
        weight: f32,
        labels: [&'static str; 3],
        feedback_yes: &'static str,
        feedback_partial: &'static str,
        feedback_no: &'static str,
        chapter: u8,
    ) -> Self {
        Self {
            id,
            text,
            kind: AnswerKind::YesPartialNo,
            weight,
            feedback_yes,
            feedback_partial: Some(feedback_partial),
            feedback_no,
            chapter,
            labels: Some(labels),
        }
    }

    pub const fn weighted(mut self, weight: f32) -> Self {
        self.weight = weight;
        self
    }

    pub fn points_for(&self, value: AnswerValue) -> f32 {
        value.points() * self.weight
    }

    pub fn max_points(&self) -> f32 {
        self.weight
    }

    pub fn label_for(&self, value: AnswerValue) -> &'static str {
        match (self.labels, value) {
            (Some(labels), AnswerValue::Yes) => labels[0],
            (Some(labels), AnswerValue::Partial) => labels[1],
            (Some(labels), AnswerValue::No) => labels[2],
            _ => self.kind.default_label(value),
        }
    }

    /// Classifies recorded points back into yes/partial/no for feedback
    /// lookup. Unknown scores zero and reads as a no, like the original
    /// "Je ne sais pas" option.
    pub fn response(&self, points: f32) -> Response {
        if points == self.weight {
            Response::Yes
        } else if self.feedback_partial.is_some() && points == self.weight * 0.5 {
            Response::Partial
        } else {
            Response::No
        }
    }

    pub fn feedback(&self, points: f32) -> &'static str {
        match self.response(points) {
            Response::Yes => self.feedback_yes,
            Response::Partial => self.feedback_partial.unwrap_or(self.feedback_no),
            Response::No => self.feedback_no,
        }
    }
}

/// A titled group of questions ("bloc", "axe" or "section" depending on the
/// guide).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub questions: &'static [Question],
}

impl Section {
    pub fn max_points(&self) -> f32 {
        self.questions.iter().map(Question::max_points).sum()
    }
}

pub fn total_questions(sections: &[Section]) -> usize {
    sections.iter().map(|s| s.questions.len()).sum()
}

pub fn max_score(sections: &[Section]) -> f32 {
    sections.iter().map(Section::max_points).sum()
}

/// Accumulated answers, keyed by question id. Re-answering a question
/// overwrites; every total is re-derived from the map so nothing is counted
/// twice.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnswerSheet {
    entries: BTreeMap<&'static str, f32>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, question_id: &'static str, points: f32) {
        self.entries.insert(question_id, points);
    }

    pub fn get(&self, question_id: &str) -> Option<f32> {
        self.entries.get(question_id).copied()
    }

    pub fn answered(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f32 {
        self.entries.values().sum()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f32)> + '_ {
        self.entries.iter().map(|(id, pts)| (*id, *pts))
    }
}

/// Lead contact data collected before a quiz starts. Immutable once it
/// leaves the form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub employees: String,
}

/// Which optional fields a given funnel promotes to required.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Requirements {
    pub email: bool,
    pub company: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub company: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.company.is_none()
    }
}

impl UserInfo {
    pub fn validate(&self, req: Requirements) -> FieldErrors {
        let mut errors = FieldErrors::default();
        if self.first_name.trim().is_empty() {
            errors.first_name = Some("Le prénom est requis");
        }
        if self.last_name.trim().is_empty() {
            errors.last_name = Some("Le nom est requis");
        }
        if req.email {
            if self.email.trim().is_empty() {
                errors.email = Some("L'email est requis");
            } else if !is_valid_email(self.email.trim()) {
                errors.email = Some("Email invalide");
            }
        }
        if req.company && self.company.trim().is_empty() {
            errors.company = Some("Le nom de l'entreprise est requis");
        }
        errors
    }
}

/// Same shape test as `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            if local.is_empty() {
                return false;
            }
            match domain.rsplit_once('.') {
                Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
                None => false,
            }
        }
        _ => false,
    }
}

/// The four steps every standard guide funnel walks through. Guide variants
/// with extra screens (intro, part 2, confirmation) define their own enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FunnelStep {
    Content,
    Form,
    Quiz,
    Results,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(first: &str, last: &str, email: &str, company: &str) -> UserInfo {
        UserInfo {
            first_name: first.into(),
            last_name: last.into(),
            email: email.into(),
            company: company.into(),
            ..Default::default()
        }
    }

    #[test]
    fn answer_values_score_as_documented() {
        assert_eq!(AnswerValue::Yes.points(), 1.0);
        assert_eq!(AnswerValue::Partial.points(), 0.5);
        assert_eq!(AnswerValue::No.points(), 0.0);
        assert_eq!(AnswerValue::Unknown.points(), 0.0);
    }

    #[test]
    fn kinds_reject_foreign_values() {
        assert!(!AnswerKind::YesNo.allows(AnswerValue::Partial));
        assert!(!AnswerKind::YesNo.allows(AnswerValue::Unknown));
        assert!(!AnswerKind::YesPartialNo.allows(AnswerValue::Unknown));
        assert!(!AnswerKind::YesNoUnknown.allows(AnswerValue::Partial));
        assert!(AnswerKind::YesNoUnknown.allows(AnswerValue::Unknown));
    }

    #[test]
    fn weighted_question_scales_points() {
        let q = Question::yes_partial_no("q1", "t", "y", "p", "n", 1).weighted(5.0);
        assert_eq!(q.points_for(AnswerValue::Yes), 5.0);
        assert_eq!(q.points_for(AnswerValue::Partial), 2.5);
        assert_eq!(q.points_for(AnswerValue::No), 0.0);
        assert_eq!(q.max_points(), 5.0);
    }

    #[test]
    fn response_maps_points_back_to_feedback() {
        let q = Question::yes_partial_no("q1", "t", "oui!", "bof", "non.", 1).weighted(2.0);
        assert_eq!(q.feedback(2.0), "oui!");
        assert_eq!(q.feedback(1.0), "bof");
        assert_eq!(q.feedback(0.0), "non.");

        let unknown = Question::yes_no_unknown("q2", "t", "oui!", "non.", 1);
        assert_eq!(unknown.response(0.0), Response::No);
        assert_eq!(unknown.feedback(0.0), "non.");
    }

    #[test]
    fn sheet_total_is_sum_of_values_and_overwrite_does_not_double_count() {
        let mut sheet = AnswerSheet::new();
        sheet.record("q1", 1.0);
        sheet.record("q2", 0.5);
        sheet.record("q1", 0.0);
        assert_eq!(sheet.answered(), 2);
        assert_eq!(sheet.total(), 0.5);
    }

    #[test]
    fn validation_requires_names() {
        let errors = info("", "Dupont", "", "").validate(Requirements::default());
        assert!(errors.first_name.is_some());
        assert!(errors.last_name.is_none());

        let ok = info("Jean", "Dupont", "", "").validate(Requirements::default());
        assert!(ok.is_empty());
    }

    #[test]
    fn validation_checks_email_when_required() {
        let req = Requirements { email: true, company: false };
        assert!(info("Jean", "Dupont", "jean@exemple.fr", "").validate(req).is_empty());
        assert!(info("Jean", "Dupont", "", "").validate(req).email.is_some());
        assert!(info("Jean", "Dupont", "pas-un-email", "").validate(req).email.is_some());
        // not required: empty or malformed email passes
        assert!(info("Jean", "Dupont", "pas-un-email", "")
            .validate(Requirements::default())
            .is_empty());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jean.dupont@sous.domaine.fr"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@b@c.d"));
    }
}
