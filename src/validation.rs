use crate::models::{AmountInput, ExpenseDraft, ExpensePatch};
use crate::stats::parse_date;
use crate::util::format_date;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidField {
    Description,
    Amount,
    Category,
    Date,
}

impl InvalidField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Description => "description",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
        }
    }
}

/// Every field of a submission that failed its check, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<InvalidField>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.fields.iter().map(|field| field.as_str()).collect();
        write!(f, "invalid expense fields: {}", names.join(", "))
    }
}

impl std::error::Error for ValidationError {}

pub fn validate(draft: &ExpenseDraft) -> Result<ExpensePatch, ValidationError> {
    let description = draft.description.trim();
    let category = draft.category.trim();
    let date = parse_date(&draft.date);
    let amount = draft.amount.as_ref().and_then(parse_amount);

    let mut fields = Vec::new();
    if description.is_empty() {
        fields.push(InvalidField::Description);
    }
    if amount.is_none() {
        fields.push(InvalidField::Amount);
    }
    if category.is_empty() {
        fields.push(InvalidField::Category);
    }
    if date.is_none() {
        fields.push(InvalidField::Date);
    }

    match (amount, date) {
        (Some(amount), Some(date)) if fields.is_empty() => Ok(ExpensePatch {
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date: format_date(date),
        }),
        _ => Err(ValidationError { fields }),
    }
}

/// A usable amount is finite and strictly positive.
fn parse_amount(input: &AmountInput) -> Option<f64> {
    let value = match input {
        AmountInput::Number(value) => *value,
        AmountInput::Text(text) => text.trim().parse::<f64>().ok()?,
    };
    (value.is_finite() && value > 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(description: &str, amount: Option<AmountInput>, category: &str, date: &str) -> ExpenseDraft {
        ExpenseDraft {
            description: description.to_string(),
            amount,
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn accepts_and_trims_valid_input() {
        let patch = validate(&draft(
            "  lunch ",
            Some(AmountInput::Text(" 12.50".into())),
            "food",
            "2024-03-01",
        ))
        .unwrap();
        assert_eq!(patch.description, "lunch");
        assert_eq!(patch.amount, 12.5);
        assert_eq!(patch.category, "food");
        assert_eq!(patch.date, "2024-03-01");
    }

    #[test]
    fn rejects_non_positive_or_non_numeric_amounts() {
        for amount in [
            None,
            Some(AmountInput::Number(0.0)),
            Some(AmountInput::Number(-3.0)),
            Some(AmountInput::Text("abc".into())),
            Some(AmountInput::Text("".into())),
            Some(AmountInput::Text("NaN".into())),
        ] {
            let err = validate(&draft("lunch", amount, "food", "2024-03-01")).unwrap_err();
            assert_eq!(err.fields, [InvalidField::Amount]);
        }
    }

    #[test]
    fn reports_every_failing_field() {
        let err = validate(&ExpenseDraft::default()).unwrap_err();
        assert_eq!(
            err.fields,
            [
                InvalidField::Description,
                InvalidField::Amount,
                InvalidField::Category,
                InvalidField::Date,
            ]
        );
        assert_eq!(
            err.to_string(),
            "invalid expense fields: description, amount, category, date"
        );
    }

    #[test]
    fn date_must_be_a_calendar_day() {
        for date in ["soon", "2024-13-01", "2024-02-30", "01/03/2024"] {
            let err = validate(&draft("lunch", Some(AmountInput::Number(5.0)), "food", date)).unwrap_err();
            assert_eq!(err.fields, [InvalidField::Date], "{date}");
        }
    }

    #[test]
    fn date_is_stored_trimmed() {
        let patch = validate(&draft("lunch", Some(AmountInput::Number(5.0)), "food", " 2024-03-05 ")).unwrap();
        assert_eq!(patch.date, "2024-03-05");
    }

    #[test]
    fn whitespace_only_text_is_empty() {
        let err = validate(&draft("   ", Some(AmountInput::Number(5.0)), " ", "2024-03-01")).unwrap_err();
        assert_eq!(err.fields, [InvalidField::Description, InvalidField::Category]);
    }
}
