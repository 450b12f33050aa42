//! Everything the page needs to draw itself, derived from one snapshot.

use crate::models::{CategoryTotal, Expense, Filter, TrackerState};
use crate::select::select_visible;
use crate::stats::{category_breakdown, monthly_total, total_expenses, weekly_total};
use crate::ui::CATEGORIES;
use crate::util::{format_date, today};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total: f64,
    pub weekly: f64,
    pub monthly: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Add,
    Update,
}

impl FormMode {
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Add => "Add Transaction",
            Self::Update => "Update Expense",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub mode: FormMode,
    pub button_label: &'static str,
    /// Prefill for the form; absent when the edit target no longer exists.
    pub editing: Option<Expense>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerView {
    pub today: String,
    pub expenses: Vec<Expense>,
    pub summary: Summary,
    pub breakdown: Vec<CategoryTotal>,
    pub form: FormView,
    pub filter: Filter,
    pub categories: &'static [&'static str],
}

pub fn build_view(state: &TrackerState) -> TrackerView {
    build_view_at(today(), state)
}

pub fn build_view_at(today: NaiveDate, state: &TrackerState) -> TrackerView {
    let visible = select_visible(state);

    let summary = Summary {
        total: total_expenses(&visible),
        weekly: weekly_total(&visible, today),
        monthly: monthly_total(&visible, today),
    };
    let breakdown = category_breakdown(&visible);

    let mode = if state.editing_id.is_some() {
        FormMode::Update
    } else {
        FormMode::Add
    };

    TrackerView {
        today: format_date(today),
        expenses: visible,
        summary,
        breakdown,
        form: FormView {
            mode,
            button_label: mode.button_label(),
            editing: state.editing().cloned(),
        },
        filter: state.filter.clone(),
        categories: &CATEGORIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::{apply_category_filter, start_editing};

    fn state() -> TrackerState {
        let expense = |id: &str, amount: f64, date: &str, category: &str| Expense {
            id: id.to_string(),
            description: id.to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
        };
        TrackerState {
            expenses: vec![
                expense("a", 100.0, "2024-03-01", "food"),
                expense("b", 50.0, "2024-03-15", "transport"),
                expense("c", 20.0, "2024-02-28", "food"),
            ],
            ..TrackerState::default()
        }
    }

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn summary_uses_reference_day() {
        let view = build_view_at(march_15(), &state());
        assert_eq!(view.today, "2024-03-15");
        assert_eq!(view.summary.total, 170.0);
        assert_eq!(view.summary.monthly, 150.0);
        assert_eq!(view.summary.weekly, 50.0);
        assert_eq!(view.expenses.len(), 3);
        assert_eq!(view.form.mode, FormMode::Add);
        assert_eq!(view.form.button_label, "Add Transaction");
    }

    #[test]
    fn empty_summary_serializes_as_plain_zero() {
        let view = build_view_at(march_15(), &TrackerState::default());
        let json = serde_json::to_string(&view.summary).unwrap();
        assert_eq!(json, r#"{"total":0.0,"weekly":0.0,"monthly":0.0}"#);
    }

    #[test]
    fn aggregates_follow_the_visible_list() {
        let state = apply_category_filter(&state(), "food");
        let view = build_view_at(march_15(), &state);
        assert_eq!(view.summary.total, 120.0);
        assert_eq!(view.summary.monthly, 100.0);
        assert_eq!(view.breakdown.len(), 1);
        assert_eq!(view.breakdown[0].category, "food");
        assert_eq!(view.filter.category.as_deref(), Some("food"));
    }

    #[test]
    fn editing_switches_form_mode_and_prefills() {
        let view = build_view_at(march_15(), &start_editing(&state(), "b"));
        assert_eq!(view.form.mode, FormMode::Update);
        assert_eq!(view.form.button_label, "Update Expense");
        assert_eq!(view.form.editing.map(|expense| expense.id), Some("b".to_string()));

        let stale = build_view_at(march_15(), &start_editing(&state(), "zzz"));
        assert_eq!(stale.form.mode, FormMode::Update);
        assert!(stale.form.editing.is_none());
    }
}
