use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded expense, stored exactly in this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

impl Expense {
    pub fn new(id: String, patch: ExpensePatch) -> Self {
        Self {
            id,
            description: patch.description,
            amount: patch.amount,
            category: patch.category,
            date: patch.date,
        }
    }

    /// Returns a copy with every data field taken from `patch`; the id is kept.
    pub fn patched(&self, patch: &ExpensePatch) -> Self {
        Self {
            id: self.id.clone(),
            description: patch.description.clone(),
            amount: patch.amount,
            category: patch.category.clone(),
            date: patch.date.clone(),
        }
    }
}

/// The validated data fields of an expense, without an id.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpensePatch {
    pub description: String,
    pub amount: f64,
    pub category: String,
    pub date: String,
}

/// An unvalidated add/edit submission as it arrives from the form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExpenseDraft {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amount: Option<AmountInput>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}

/// Form inputs send the amount either as a JSON number or as the raw field text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Filter {
    pub date_range: Option<DateRange>,
    pub category: Option<String>,
}

impl Filter {
    pub fn is_active(&self) -> bool {
        self.date_range.is_some() || self.category.is_some()
    }
}

/// A complete snapshot of the tracker. Transitions in `reducer` build new
/// snapshots; nothing mutates one after it has been committed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackerState {
    pub expenses: Vec<Expense>,
    pub editing_id: Option<String>,
    pub filter: Filter,
}

impl TrackerState {
    pub fn find(&self, id: &str) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn editing(&self) -> Option<&Expense> {
        self.editing_id.as_deref().and_then(|id| self.find(id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct DateRangeRequest {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    #[serde(default)]
    pub category: Option<String>,
}
