use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::quiz::model::{AnswerSheet, UserInfo};
use crate::quiz::score::ScoreBreakdown;

pub const RESULT_KEY: &str = "daf_diagnostic_result";

/// Completed diagnostic snapshot, written to local storage when the daf-pme
/// quiz finishes. The app never reads it back; it exists for the visitor
/// (and support) to find after the fact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub id: String,
    pub date: String,
    pub total_score: f32,
    pub axe_scores: BTreeMap<String, f32>,
    pub answers: BTreeMap<String, f32>,
    pub user_info: UserInfo,
}

impl DiagnosticResult {
    pub fn new(
        id: String,
        breakdown: &ScoreBreakdown,
        sheet: &AnswerSheet,
        user_info: UserInfo,
    ) -> Self {
        Self {
            id,
            date: Utc::now().to_rfc3339(),
            total_score: breakdown.total,
            axe_scores: breakdown
                .per_section
                .iter()
                .map(|s| (s.section.id.to_string(), s.points))
                .collect(),
            answers: sheet.iter().map(|(id, pts)| (id.to_string(), pts)).collect(),
            user_info,
        }
    }
}

/// `diag_{timestamp}_{random}` like the original result ids.
pub fn fresh_id() -> String {
    let now = js_sys::Date::now() as u64;
    let rand = (js_sys::Math::random() * 1e9) as u64;
    format!("diag_{now}_{rand:09}")
}

/// Where completed diagnostics go. The browser build uses local storage;
/// tests swap in [`MemoryStore`].
pub trait ResultStore {
    fn save(&self, result: &DiagnosticResult) -> Result<(), String>;
    fn load(&self) -> Option<DiagnosticResult>;
}

/// Writes under [`RESULT_KEY`]. A browser with storage disabled makes this
/// a no-op error; callers log and move on, the diagnostic itself is not
/// affected.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl ResultStore for LocalStorageStore {
    fn save(&self, result: &DiagnosticResult) -> Result<(), String> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| "local storage unavailable".to_string())?;
        let json = serde_json::to_string(result).map_err(|e| e.to_string())?;
        storage
            .set_item(RESULT_KEY, &json)
            .map_err(|_| "local storage write failed".to_string())
    }

    fn load(&self) -> Option<DiagnosticResult> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        let json = storage.get_item(RESULT_KEY).ok().flatten()?;
        serde_json::from_str(&json).ok()
    }
}

#[cfg(test)]
pub struct MemoryStore(pub std::cell::RefCell<Option<DiagnosticResult>>);

#[cfg(test)]
impl ResultStore for MemoryStore {
    fn save(&self, result: &DiagnosticResult) -> Result<(), String> {
        *self.0.borrow_mut() = Some(result.clone());
        Ok(())
    }

    fn load(&self) -> Option<DiagnosticResult> {
        self.0.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::{Question, Section};
    use crate::quiz::score::tally;

    static SECTIONS: [Section; 1] = [Section {
        id: "axe1",
        title: "Pilotage",
        icon: "🧭",
        description: "",
        questions: &[
            Question::yes_no("q1", "t", "y", "n", 1),
            Question::yes_no("q2", "t", "y", "n", 1),
        ],
    }];

    fn sample() -> DiagnosticResult {
        let mut sheet = AnswerSheet::new();
        sheet.record("q1", 1.0);
        sheet.record("q2", 0.0);
        let breakdown = tally(&sheet, &SECTIONS);
        DiagnosticResult::new(
            "diag_1_000000001".into(),
            &breakdown,
            &sheet,
            UserInfo {
                first_name: "Jean".into(),
                last_name: "Dupont".into(),
                email: "jean@exemple.fr".into(),
                company: "Exemple SARL".into(),
                role: "DAF".into(),
                employees: "10-50".into(),
            },
        )
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"totalScore\":1.0"));
        assert!(json.contains("\"axeScores\""));
        assert!(json.contains("\"firstName\":\"Jean\""));
        assert!(!json.contains("total_score"));
    }

    #[test]
    fn round_trips_through_json() {
        let result = sample();
        let json = serde_json::to_string(&result).unwrap();
        let back: DiagnosticResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }

    #[test]
    fn memory_store_saves_and_loads() {
        let store = MemoryStore(std::cell::RefCell::new(None));
        assert!(store.load().is_none());
        let result = sample();
        store.save(&result).unwrap();
        assert_eq!(store.load().unwrap().id, result.id);
    }

    #[test]
    fn result_snapshot_mirrors_the_breakdown() {
        let result = sample();
        assert_eq!(result.total_score, 1.0);
        assert_eq!(result.axe_scores.get("axe1"), Some(&1.0));
        assert_eq!(result.answers.len(), 2);
    }
}
