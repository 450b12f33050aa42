use crate::models::{CategoryTotal, DateRange, Expense};
use chrono::{Datelike, Duration, NaiveDate};

pub fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().fold(0.0, |sum, expense| sum + expense.amount)
}

/// Expenses dated within `[start, end]`. Entries whose stored date does not
/// parse never match.
pub fn expenses_by_date_range(expenses: &[Expense], start: NaiveDate, end: NaiveDate) -> Vec<Expense> {
    let range = DateRange::new(start, end);
    expenses
        .iter()
        .filter(|expense| in_range(expense, &range))
        .cloned()
        .collect()
}

pub fn monthly_total(expenses: &[Expense], reference: NaiveDate) -> f64 {
    let range = month_bounds(reference);
    sum_in_range(expenses, &range)
}

pub fn weekly_total(expenses: &[Expense], reference: NaiveDate) -> f64 {
    let range = week_bounds(reference);
    sum_in_range(expenses, &range)
}

/// Summed amount per category, in the order each category first appears.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut breakdown: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        match breakdown.iter_mut().find(|item| item.category == expense.category) {
            Some(item) => item.amount += expense.amount,
            None => breakdown.push(CategoryTotal {
                category: expense.category.clone(),
                amount: expense.amount,
            }),
        }
    }
    breakdown
}

/// First to last day of the calendar month containing `date`.
pub fn month_bounds(date: NaiveDate) -> DateRange {
    let start = date - Duration::days(i64::from(date.day0()));
    let next_month = if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    };
    let end = next_month
        .and_then(|first| first.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    DateRange::new(start, end)
}

/// Sunday to Saturday week containing `date`.
pub fn week_bounds(date: NaiveDate) -> DateRange {
    let start = date - Duration::days(i64::from(date.weekday().num_days_from_sunday()));
    DateRange::new(start, start + Duration::days(6))
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub(crate) fn in_range(expense: &Expense, range: &DateRange) -> bool {
    parse_date(&expense.date).is_some_and(|date| range.contains(date))
}

fn sum_in_range(expenses: &[Expense], range: &DateRange) -> f64 {
    expenses
        .iter()
        .filter(|expense| in_range(expense, range))
        .fold(0.0, |sum, expense| sum + expense.amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: &str, amount: f64, date: &str, category: &str) -> Expense {
        Expense {
            id: id.to_string(),
            description: format!("expense {id}"),
            amount,
            category: category.to_string(),
            date: date.to_string(),
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn march_list() -> Vec<Expense> {
        vec![
            expense("a", 100.0, "2024-03-01", "food"),
            expense("b", 50.0, "2024-03-15", "transport"),
        ]
    }

    #[test]
    fn total_of_empty_list_is_zero() {
        assert_eq!(total_expenses(&[]), 0.0);
        assert!(!total_expenses(&[]).is_sign_negative());
    }

    #[test]
    fn windows_without_matches_are_positive_zero() {
        let list = march_list();
        let june = day(2024, 6, 12);
        assert!(!weekly_total(&list, june).is_sign_negative());
        assert!(!monthly_total(&list, june).is_sign_negative());
        assert!(!weekly_total(&[], june).is_sign_negative());
        assert!(!monthly_total(&[], june).is_sign_negative());
    }

    #[test]
    fn monthly_total_covers_whole_month() {
        let list = march_list();
        assert_eq!(monthly_total(&list, day(2024, 3, 20)), 150.0);
        assert_eq!(monthly_total(&list, day(2024, 4, 1)), 0.0);
    }

    #[test]
    fn month_bounds_handle_december_and_leap_years() {
        let dec = month_bounds(day(2023, 12, 9));
        assert_eq!(dec.start, day(2023, 12, 1));
        assert_eq!(dec.end, day(2023, 12, 31));

        let feb = month_bounds(day(2024, 2, 29));
        assert_eq!(feb.start, day(2024, 2, 1));
        assert_eq!(feb.end, day(2024, 2, 29));
    }

    #[test]
    fn week_runs_sunday_to_saturday() {
        // 2024-03-13 is a Wednesday.
        let week = week_bounds(day(2024, 3, 13));
        assert_eq!(week.start, day(2024, 3, 10));
        assert_eq!(week.end, day(2024, 3, 16));

        let sunday = week_bounds(day(2024, 3, 10));
        assert_eq!(sunday.start, day(2024, 3, 10));
    }

    #[test]
    fn weekly_total_only_counts_reference_week() {
        let mut list = march_list();
        list.push(expense("c", 20.0, "2024-03-16", "food"));
        list.push(expense("d", 7.5, "2024-03-17", "food"));
        assert_eq!(weekly_total(&list, day(2024, 3, 13)), 70.0);
    }

    #[test]
    fn date_range_is_inclusive_and_skips_bad_dates() {
        let mut list = march_list();
        list.push(expense("c", 5.0, "not a date", "food"));
        let hits = expenses_by_date_range(&list, day(2024, 3, 1), day(2024, 3, 15));
        assert_eq!(hits.len(), 2);

        let hits = expenses_by_date_range(&list, day(2024, 3, 2), day(2024, 3, 14));
        assert!(hits.is_empty());
    }

    #[test]
    fn breakdown_keeps_first_seen_order() {
        let list = vec![
            expense("a", 10.0, "2024-03-01", "transport"),
            expense("b", 5.0, "2024-03-02", "food"),
            expense("c", 2.5, "2024-03-03", "transport"),
        ];
        let breakdown = category_breakdown(&list);
        let categories: Vec<_> = breakdown.iter().map(|item| item.category.as_str()).collect();
        assert_eq!(categories, ["transport", "food"]);
        assert_eq!(breakdown[0].amount, 12.5);
        assert_eq!(breakdown[1].amount, 5.0);
    }

    #[test]
    fn breakdown_sums_to_total() {
        let list = vec![
            expense("a", 100.0, "2024-03-01", "food"),
            expense("b", 50.0, "2024-03-15", "transport"),
            expense("c", 25.0, "2024-02-11", "food"),
        ];
        let from_breakdown: f64 = category_breakdown(&list).iter().map(|item| item.amount).sum();
        assert_eq!(from_breakdown, total_expenses(&list));
        assert_eq!(
            category_breakdown(&march_list()),
            vec![
                CategoryTotal { category: "food".into(), amount: 100.0 },
                CategoryTotal { category: "transport".into(), amount: 50.0 },
            ]
        );
    }
}
