/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Today's date in the local timezone
///
/// Callers that need a testable boundary (e.g. the reservation date check)
/// should take the date as a parameter and use this only at the call site.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
