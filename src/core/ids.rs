use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

/// Generates a time-ordered identifier for `at` for which `is_taken` returns
/// false. UUID v7 embeds the millisecond timestamp and fills the rest with
/// random bits, so a retry only happens on an actual clash.
pub fn next_id(at: DateTime<Utc>, is_taken: impl Fn(&str) -> bool) -> String {
    let seconds = u64::try_from(at.timestamp()).unwrap_or(0);
    let nanos = at.timestamp_subsec_nanos();
    loop {
        let candidate = Uuid::new_v7(Timestamp::from_unix(NoContext, seconds, nanos)).to_string();
        if !is_taken(&candidate) {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_for_the_same_instant() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let ids: HashSet<String> = (0..64).map(|_| next_id(at, |_| false)).collect();
        assert_eq!(ids.len(), 64);
    }

    #[test]
    fn ids_sort_by_creation_time() {
        let earlier = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 2, 9, 30, 0).unwrap();
        assert!(next_id(earlier, |_| false) < next_id(later, |_| false));
    }

    #[test]
    fn taken_ids_are_skipped() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let first = next_id(at, |_| false);
        let second = next_id(at, |candidate| candidate == first);
        assert_ne!(first, second);
    }
}
