use chrono::{Local, NaiveDate};
use uuid::Uuid;

pub const ID_LENGTH: usize = 8;

/// Short random token for a new expense. Collisions are not checked; the
/// dataset is a single user's local list.
pub fn generate_id() -> String {
    let mut id = Uuid::new_v4().simple().to_string();
    id.truncate(ID_LENGTH);
    id
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn today_string() -> String {
    format_date(today())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
