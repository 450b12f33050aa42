use crate::models::{Expense, TrackerState};
use crate::stats::in_range;

/// The expenses the page should show: date range and category filters
/// combined with AND, or everything when no filter is set.
pub fn select_visible(state: &TrackerState) -> Vec<Expense> {
    let filter = &state.filter;
    state
        .expenses
        .iter()
        .filter(|expense| filter.date_range.as_ref().is_none_or(|range| in_range(expense, range)))
        .filter(|expense| {
            filter
                .category
                .as_deref()
                .is_none_or(|category| expense.category == category)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DateRange;
    use crate::reducer::{apply_category_filter, apply_date_range_filter};
    use crate::stats::total_expenses;
    use chrono::NaiveDate;

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
                expense("c", 30.0, "2024-03-20", "food"),
                expense("d", 9.0, "", "food"),
            ],
            ..TrackerState::default()
        }
    }

    fn late_march() -> DateRange {
        DateRange::new(
            NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
    }

    #[test]
    fn no_filter_returns_everything() {
        let state = state();
        assert_eq!(select_visible(&state), state.expenses);
    }

    #[test]
    fn date_range_filter_narrows_and_totals() {
        let mut state = state();
        state.expenses.truncate(2);
        let state = apply_date_range_filter(&state, late_march());
        let visible = select_visible(&state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "b");
        assert_eq!(total_expenses(&visible), 50.0);
    }

    #[test]
    fn filters_compose_with_and() {
        let state = apply_category_filter(&state(), "food");
        let ids: Vec<_> = select_visible(&state).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["a", "c", "d"]);

        let state = apply_date_range_filter(&state, late_march());
        let ids: Vec<_> = select_visible(&state).into_iter().map(|e| e.id).collect();
        assert_eq!(ids, ["c"]);
    }
}
