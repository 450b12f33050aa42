//! State transitions. Each function reads a snapshot and returns a new one.

use crate::models::{DateRange, Expense, ExpensePatch, Filter, TrackerState};

pub fn add_expense(state: &TrackerState, expense: Expense) -> TrackerState {
    let mut expenses = state.expenses.clone();
    expenses.push(expense);
    TrackerState {
        expenses,
        ..state.clone()
    }
}

/// Rewrites the expense currently being edited. Without a matching
/// `editing_id` the list comes back unchanged.
pub fn update_expense(state: &TrackerState, patch: &ExpensePatch) -> TrackerState {
    let Some(editing_id) = state.editing_id.as_deref() else {
        return state.clone();
    };

    let expenses = state
        .expenses
        .iter()
        .map(|expense| {
            if expense.id == editing_id {
                expense.patched(patch)
            } else {
                expense.clone()
            }
        })
        .collect();

    TrackerState {
        expenses,
        ..state.clone()
    }
}

pub fn delete_expense(state: &TrackerState, id: &str) -> TrackerState {
    TrackerState {
        expenses: state
            .expenses
            .iter()
            .filter(|expense| expense.id != id)
            .cloned()
            .collect(),
        ..state.clone()
    }
}

pub fn start_editing(state: &TrackerState, id: &str) -> TrackerState {
    TrackerState {
        editing_id: Some(id.to_string()),
        ..state.clone()
    }
}

pub fn stop_editing(state: &TrackerState) -> TrackerState {
    TrackerState {
        editing_id: None,
        ..state.clone()
    }
}

pub fn apply_date_range_filter(state: &TrackerState, range: DateRange) -> TrackerState {
    TrackerState {
        filter: Filter {
            date_range: Some(range),
            ..state.filter.clone()
        },
        ..state.clone()
    }
}

pub fn apply_category_filter(state: &TrackerState, category: &str) -> TrackerState {
    TrackerState {
        filter: Filter {
            category: Some(category.to_string()),
            ..state.filter.clone()
        },
        ..state.clone()
    }
}

pub fn clear_filters(state: &TrackerState) -> TrackerState {
    TrackerState {
        filter: Filter::default(),
        ..state.clone()
    }
}

/// Drops every expense. Filters survive; the edit target cannot.
pub fn reset_expenses(state: &TrackerState) -> TrackerState {
    TrackerState {
        expenses: Vec::new(),
        editing_id: None,
        filter: state.filter.clone(),
    }
}

pub fn with_expenses(state: &TrackerState, expenses: Vec<Expense>) -> TrackerState {
    TrackerState {
        expenses,
        ..state.clone()
    }
}
