use crate::quiz::model::{AnswerSheet, Section};

/// One section's share of the tally.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionScore {
    pub section: &'static Section,
    pub points: f32,
    pub max: f32,
}

impl SectionScore {
    pub fn percentage(&self) -> f32 {
        if self.max == 0.0 {
            return 0.0;
        }
        self.points / self.max * 100.0
    }

    pub fn band(&self) -> SectionBand {
        SectionBand::from_percentage(self.percentage())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoreBreakdown {
    pub total: f32,
    pub per_section: Vec<SectionScore>,
}

/// Pure tally over the static tables. Unanswered questions count zero, so
/// calling this on a partial sheet never panics.
pub fn tally(sheet: &AnswerSheet, sections: &'static [Section]) -> ScoreBreakdown {
    let per_section: Vec<SectionScore> = sections
        .iter()
        .map(|section| SectionScore {
            section,
            points: section
                .questions
                .iter()
                .filter_map(|q| sheet.get(q.id))
                .sum(),
            max: section.max_points(),
        })
        .collect();
    let total = per_section.iter().map(|s| s.points).sum();
    ScoreBreakdown { total, per_section }
}

/// Sections sorted weakest first, the improvement plan order. Stable sort,
/// so ties keep table order.
pub fn priority_order(breakdown: &ScoreBreakdown, take: usize) -> Vec<&SectionScore> {
    let mut scores: Vec<&SectionScore> = breakdown.per_section.iter().collect();
    scores.sort_by(|a, b| {
        a.percentage()
            .partial_cmp(&b.percentage())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scores.truncate(take);
    scores
}

/// Per-section reading of the percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionBand {
    Low,
    Mid,
    High,
}

impl SectionBand {
    pub fn from_percentage(pct: f32) -> Self {
        if pct <= 33.0 {
            SectionBand::Low
        } else if pct <= 66.0 {
            SectionBand::Mid
        } else {
            SectionBand::High
        }
    }
}

/// One maturity bracket. Tables are ordered, non-overlapping and cover the
/// whole score domain of their guide.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaturityTier {
    pub min: f32,
    pub max: f32,
    pub label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub recommendation: &'static str,
}

impl MaturityTier {
    pub fn contains(&self, score: f32) -> bool {
        score >= self.min && score <= self.max
    }
}

/// First tier containing the score. A score outside every range (a table
/// mistake) resolves to the lowest tier; only an empty table yields `None`.
pub fn tier_for(score: f32, tiers: &'static [MaturityTier]) -> Option<&'static MaturityTier> {
    tiers
        .iter()
        .find(|t| t.contains(score))
        .or_else(|| tiers.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::Question;

    static SECTIONS: [Section; 2] = [
        Section {
            id: "s1",
            title: "Un",
            icon: "📊",
            description: "",
            questions: &[
                Question::yes_partial_no("q1", "t", "y", "p", "n", 1),
                Question::yes_partial_no("q2", "t", "y", "p", "n", 1),
            ],
        },
        Section {
            id: "s2",
            title: "Deux",
            icon: "📈",
            description: "",
            questions: &[
                Question::yes_no("q3", "t", "y", "n", 2),
                Question::yes_no("q4", "t", "y", "n", 2),
            ],
        },
    ];

    static TIERS: [MaturityTier; 3] = [
        MaturityTier {
            min: 0.0,
            max: 1.0,
            label: "Bas",
            emoji: "🔴",
            description: "",
            recommendation: "",
        },
        MaturityTier {
            min: 1.5,
            max: 3.0,
            label: "Moyen",
            emoji: "🟡",
            description: "",
            recommendation: "",
        },
        MaturityTier {
            min: 3.5,
            max: 4.0,
            label: "Haut",
            emoji: "🟢",
            description: "",
            recommendation: "",
        },
    ];

    fn sheet(entries: &[(&'static str, f32)]) -> AnswerSheet {
        let mut s = AnswerSheet::new();
        for (id, pts) in entries {
            s.record(id, *pts);
        }
        s
    }

    #[test]
    fn section_sums_add_up_to_total() {
        let b = tally(&sheet(&[("q1", 1.0), ("q2", 0.5), ("q3", 1.0), ("q4", 0.0)]), &SECTIONS);
        assert_eq!(b.total, 2.5);
        let section_sum: f32 = b.per_section.iter().map(|s| s.points).sum();
        assert_eq!(section_sum, b.total);
        assert_eq!(b.per_section[0].points, 1.5);
        assert_eq!(b.per_section[1].points, 1.0);
    }

    #[test]
    fn partial_sheet_counts_missing_answers_as_zero() {
        let b = tally(&sheet(&[("q1", 1.0)]), &SECTIONS);
        assert_eq!(b.total, 1.0);
        assert_eq!(b.per_section[1].points, 0.0);
    }

    #[test]
    fn bands_split_at_33_and_66() {
        assert_eq!(SectionBand::from_percentage(0.0), SectionBand::Low);
        assert_eq!(SectionBand::from_percentage(33.0), SectionBand::Low);
        assert_eq!(SectionBand::from_percentage(33.4), SectionBand::Mid);
        assert_eq!(SectionBand::from_percentage(66.0), SectionBand::Mid);
        assert_eq!(SectionBand::from_percentage(66.7), SectionBand::High);
        assert_eq!(SectionBand::from_percentage(100.0), SectionBand::High);
    }

    #[test]
    fn exactly_one_tier_matches_each_score() {
        for score in [0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 3.5, 4.0] {
            let matching = TIERS.iter().filter(|t| t.contains(score)).count();
            assert_eq!(matching, 1, "score {score} matched {matching} tiers");
        }
        assert_eq!(tier_for(2.0, &TIERS).unwrap().label, "Moyen");
    }

    #[test]
    fn out_of_range_score_falls_back_to_lowest_tier() {
        // 1.25 sits in the gap the table leaves between 1.0 and 1.5
        assert_eq!(tier_for(1.25, &TIERS).unwrap().label, "Bas");
        assert_eq!(tier_for(99.0, &TIERS).unwrap().label, "Bas");
    }

    #[test]
    fn empty_table_yields_none_instead_of_panicking() {
        static EMPTY: [MaturityTier; 0] = [];
        assert!(tier_for(0.0, &EMPTY).is_none());
    }

    #[test]
    fn priority_sorts_weakest_sections_first() {
        let b = tally(&sheet(&[("q1", 1.0), ("q2", 1.0), ("q3", 0.0), ("q4", 1.0)]), &SECTIONS);
        let priorities = priority_order(&b, 2);
        assert_eq!(priorities[0].section.id, "s2");
        assert_eq!(priorities[1].section.id, "s1");

        let top_only = priority_order(&b, 1);
        assert_eq!(top_only.len(), 1);
    }
}
