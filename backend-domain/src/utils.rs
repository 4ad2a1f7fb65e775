use chrono::{DateTime, Local, LocalResult, TimeZone};
use time::OffsetDateTime;

pub fn millis_to_utc(ms: i64) -> OffsetDateTime {
    let nanos = i128::from(ms).saturating_mul(1_000_000);
    OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or_else(|_| OffsetDateTime::now_utc())
}

pub fn utc_to_millis(value: OffsetDateTime) -> i64 {
    (value.unix_timestamp_nanos() / 1_000_000) as i64
}

pub fn current_millis() -> i64 {
    utc_to_millis(OffsetDateTime::now_utc())
}

/// Local midnight of the day containing `now`, in epoch milliseconds.
/// A midnight skipped by a DST jump resolves to the first valid local instant.
pub fn start_of_local_day<Tz: TimeZone>(now: &DateTime<Tz>) -> i64 {
    let Some(midnight) = now.date_naive().and_hms_opt(0, 0, 0) else {
        return now.timestamp_millis();
    };
    match now.timezone().from_local_datetime(&midnight) {
        LocalResult::Single(value) => value.timestamp_millis(),
        LocalResult::Ambiguous(earliest, _) => earliest.timestamp_millis(),
        LocalResult::None => {
            let mut candidate = midnight;
            for _ in 0..24 * 4 {
                candidate += chrono::Duration::minutes(15);
                if let Some(value) = now.timezone().from_local_datetime(&candidate).earliest() {
                    return value.timestamp_millis();
                }
            }
            now.timestamp_millis()
        }
    }
}

pub fn start_of_today_millis() -> i64 {
    start_of_local_day(&Local::now())
}
