//! Check-in operations and calendar-day bucketing.

use std::ops::Range;

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};

use crate::models::{Checkin, NewCheckin};
use crate::LeadStore;

/// The UTC instants spanning the local calendar day that contains `now`:
/// `[midnight, next midnight)`.
pub fn day_bounds<Tz: TimeZone>(now: &DateTime<Tz>) -> Range<DateTime<Utc>> {
    let tz = now.timezone();
    let today = now.date_naive();
    let start = midnight(&tz, today);
    let end = match today.succ_opt() {
        Some(tomorrow) => midnight(&tz, tomorrow),
        None => start + Duration::days(1),
    };
    start..end
}

/// First instant of `date` in `tz`.
///
/// On days where a DST shift skips midnight, the day starts one hour later.
fn midnight<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| tz.from_local_datetime(&(naive + Duration::hours(1))).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

impl LeadStore {
    /// Store a check-in under a fresh ID.
    pub async fn create_checkin(&self, new_checkin: NewCheckin) -> Checkin {
        let mut tables = self.tables().write().await;
        let id = tables.allocate_checkin_id();
        let checkin = new_checkin.into_checkin(id);
        tables.checkins.insert(id, checkin.clone());

        tracing::debug!(checkin_id = id, "Created check-in");
        checkin
    }

    /// The check-in recorded during the current local day, if any.
    pub async fn todays_checkin(&self) -> Option<Checkin> {
        self.checkin_for_day(&Local::now()).await
    }

    /// The first stored check-in falling on the local day containing `now`.
    ///
    /// When several share the day, the earliest-created one is returned.
    pub async fn checkin_for_day<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<Checkin> {
        let bounds = day_bounds(now);
        self.tables()
            .read()
            .await
            .checkins
            .values()
            .find(|checkin| bounds.contains(&checkin.date))
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CheckinAnswers;
    use chrono::FixedOffset;
    use chrono_tz::America::{New_York, Santiago};

    const YES_NO_YES: CheckinAnswers = CheckinAnswers {
        confident: 1,
        took_action: 0,
        ready_to_connect: 1,
    };

    fn plus_two() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn test_day_bounds_use_local_midnight() {
        let now = plus_two().with_ymd_and_hms(2026, 5, 10, 1, 30, 0).unwrap();

        let bounds = day_bounds(&now);

        assert_eq!(bounds.start, Utc.with_ymd_and_hms(2026, 5, 9, 22, 0, 0).unwrap());
        assert_eq!(bounds.end, Utc.with_ymd_and_hms(2026, 5, 10, 22, 0, 0).unwrap());
    }

    #[test]
    fn test_day_bounds_in_utc() {
        let now = Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap();

        let bounds = day_bounds(&now);

        assert_eq!(bounds.start, Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap());
        assert_eq!(bounds.end, Utc.with_ymd_and_hms(2027, 1, 1, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_day_bounds_when_dst_skips_midnight() {
        // Santiago springs forward at 00:00, so 2024-09-08 starts at 01:00 -03
        let now = Santiago.with_ymd_and_hms(2024, 9, 8, 12, 0, 0).unwrap();

        let bounds = day_bounds(&now);

        assert_eq!(bounds.start, Utc.with_ymd_and_hms(2024, 9, 8, 4, 0, 0).unwrap());
        assert_eq!(bounds.end, Utc.with_ymd_and_hms(2024, 9, 9, 3, 0, 0).unwrap());
        assert_eq!(bounds.end - bounds.start, Duration::hours(23));
    }

    #[test]
    fn test_day_before_skipped_midnight_ends_at_shift() {
        let now = Santiago.with_ymd_and_hms(2024, 9, 7, 22, 0, 0).unwrap();

        let bounds = day_bounds(&now);

        assert_eq!(bounds.start, Utc.with_ymd_and_hms(2024, 9, 7, 4, 0, 0).unwrap());
        assert_eq!(bounds.end, Utc.with_ymd_and_hms(2024, 9, 8, 4, 0, 0).unwrap());
    }

    #[test]
    fn test_day_bounds_on_short_and_long_days() {
        let spring = New_York.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let bounds = day_bounds(&spring);
        assert_eq!(bounds.start, Utc.with_ymd_and_hms(2024, 3, 10, 5, 0, 0).unwrap());
        assert_eq!(bounds.end - bounds.start, Duration::hours(23));

        let fall = New_York.with_ymd_and_hms(2024, 11, 3, 12, 0, 0).unwrap();
        let bounds = day_bounds(&fall);
        assert_eq!(bounds.start, Utc.with_ymd_and_hms(2024, 11, 3, 4, 0, 0).unwrap());
        assert_eq!(bounds.end, Utc.with_ymd_and_hms(2024, 11, 4, 5, 0, 0).unwrap());
        assert_eq!(bounds.end - bounds.start, Duration::hours(25));
    }

    #[tokio::test]
    async fn test_checkin_in_repeated_hour_stays_on_its_day() {
        let store = LeadStore::new();
        // 01:30 EST, the second pass through the repeated hour
        let late = store
            .create_checkin(NewCheckin::stamped(
                YES_NO_YES,
                Utc.with_ymd_and_hms(2024, 11, 3, 6, 30, 0).unwrap(),
            ))
            .await;

        let fall = New_York.with_ymd_and_hms(2024, 11, 3, 23, 0, 0).unwrap();
        assert_eq!(store.checkin_for_day(&fall).await, Some(late));

        let next = New_York.with_ymd_and_hms(2024, 11, 4, 0, 30, 0).unwrap();
        assert!(store.checkin_for_day(&next).await.is_none());
    }

    #[tokio::test]
    async fn test_checkin_found_only_within_day() {
        let store = LeadStore::new();
        let now = plus_two().with_ymd_and_hms(2026, 5, 10, 9, 0, 0).unwrap();

        assert!(store.checkin_for_day(&now).await.is_none());

        // 23:30 local on the previous day
        let yesterday = Utc.with_ymd_and_hms(2026, 5, 9, 21, 30, 0).unwrap();
        store
            .create_checkin(NewCheckin::stamped(YES_NO_YES, yesterday))
            .await;
        assert!(store.checkin_for_day(&now).await.is_none());

        // 00:00 local, the first instant of the day
        let midnight = Utc.with_ymd_and_hms(2026, 5, 9, 22, 0, 0).unwrap();
        let stored = store
            .create_checkin(NewCheckin::stamped(YES_NO_YES, midnight))
            .await;

        assert_eq!(store.checkin_for_day(&now).await, Some(stored));
    }

    #[tokio::test]
    async fn test_next_midnight_is_excluded() {
        let store = LeadStore::new();
        let now = Utc.with_ymd_and_hms(2026, 5, 10, 12, 0, 0).unwrap();

        store
            .create_checkin(NewCheckin::stamped(
                YES_NO_YES,
                Utc.with_ymd_and_hms(2026, 5, 11, 0, 0, 0).unwrap(),
            ))
            .await;

        assert!(store.checkin_for_day(&now).await.is_none());
    }

    #[tokio::test]
    async fn test_first_checkin_of_day_wins() {
        let store = LeadStore::new();
        let now = Utc.with_ymd_and_hms(2026, 5, 10, 18, 0, 0).unwrap();

        let first = store
            .create_checkin(NewCheckin::stamped(
                YES_NO_YES,
                Utc.with_ymd_and_hms(2026, 5, 10, 8, 0, 0).unwrap(),
            ))
            .await;
        store
            .create_checkin(NewCheckin::stamped(
                CheckinAnswers {
                    confident: 0,
                    took_action: 0,
                    ready_to_connect: 0,
                },
                Utc.with_ymd_and_hms(2026, 5, 10, 17, 0, 0).unwrap(),
            ))
            .await;

        assert_eq!(store.checkin_for_day(&now).await.map(|c| c.id), Some(first.id));
    }

    #[tokio::test]
    async fn test_todays_checkin_sees_fresh_record() {
        let store = LeadStore::new();
        let checkin = store
            .create_checkin(NewCheckin::stamped(YES_NO_YES, Utc::now()))
            .await;

        assert_eq!(checkin.id, 1);
        assert_eq!(store.todays_checkin().await, Some(checkin));
    }
}
