use crate::domain::error::CheckerError;
use crate::domain::models::METADATA_SUFFIX;
use crate::services::clock::Clock;
use chrono::{Days, NaiveDate};
use globset::{Glob, GlobMatcher};
use std::ffi::OsString;
use std::path::Path;

const DAY_PREFIX_LEN: usize = "YYYY-MM-DD".len();

fn list_entry_names(dir: &Path) -> Result<Vec<OsString>, CheckerError> {
    let io_err = |source| CheckerError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        names.push(entry.map_err(io_err)?.file_name());
    }
    names.sort();
    Ok(names)
}

fn day_prefix_matcher() -> Result<GlobMatcher, CheckerError> {
    Ok(Glob::new("[0-9][0-9][0-9][0-9]-[0-9][0-9]-[0-9][0-9]*")?.compile_matcher())
}

/// First day of the window ending `today`; saturates at the earliest
/// representable date.
pub fn window_start(today: NaiveDate, days: u32) -> NaiveDate {
    today
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}

/// Publication day encoded in a collection name, if it has one.
fn publish_day(matcher: &GlobMatcher, name: &str) -> Option<NaiveDate> {
    if !matcher.is_match(name) {
        return None;
    }
    NaiveDate::parse_from_str(name.get(..DAY_PREFIX_LEN)?, "%Y-%m-%d").ok()
}

/// Collections in `publish_log` published within the last `days` days
/// (UTC, inclusive of today), oldest first.
pub fn published_collections(
    publish_log: &Path,
    days: u32,
    clock: &impl Clock,
) -> Result<Vec<String>, CheckerError> {
    let today = clock.now().date_naive();
    let start = window_start(today, days);
    tracing::info!(start_date = %start.format("%Y-%m-%d"), "getting list of published collections");

    let matcher = day_prefix_matcher()?;
    let mut collections = Vec::new();
    for name in list_entry_names(publish_log)? {
        let in_window = {
            let shown = name.to_string_lossy();
            !shown.ends_with(METADATA_SUFFIX)
                && publish_day(&matcher, &shown).is_some_and(|day| start <= day && day <= today)
        };
        if !in_window {
            continue;
        }
        let name = name.into_string().map_err(|raw| CheckerError::NonUtf8Name {
            path: publish_log.join(raw),
        })?;
        collections.push(name);
    }

    tracing::info!(
        collection_count = collections.len(),
        "found published collections"
    );
    Ok(collections)
}

#[cfg(test)]
mod tests {
    use super::{published_collections, window_start};
    use crate::domain::error::CheckerError;
    use crate::services::clock::FixedClock;
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::fs;
    use tempfile::TempDir;

    fn clock() -> FixedClock {
        FixedClock(Utc.with_ymd_and_hms(2023, 2, 9, 11, 0, 0).unwrap())
    }

    fn fixture() -> TempDir {
        let tmp = TempDir::new().unwrap();
        for dir in [
            "2023-02-06-08-50-col0test",
            "2023-02-07-08-50-col1test",
            "2023-02-08-11-17-col3test",
            "2023-02-08-08-50-col2test",
            "2023-02-09-12-13-collection4",
            "2023-02-10-12-13-collection5",
        ] {
            fs::create_dir_all(tmp.path().join(dir)).unwrap();
            fs::write(tmp.path().join(format!("{dir}.json")), "{}").unwrap();
        }
        tmp
    }

    #[test]
    fn window_is_inclusive() {
        let today = NaiveDate::from_ymd_opt(2023, 2, 9).unwrap();
        assert_eq!(window_start(today, 0), today);
        assert_eq!(window_start(today, 2), NaiveDate::from_ymd_opt(2023, 2, 7).unwrap());
        assert_eq!(window_start(today, u32::MAX), NaiveDate::MIN);
    }

    #[test]
    fn only_collections_in_range_oldest_first() {
        let tmp = fixture();
        let cols = published_collections(tmp.path(), 2, &clock()).unwrap();
        assert_eq!(
            cols,
            vec![
                "2023-02-07-08-50-col1test",
                "2023-02-08-08-50-col2test",
                "2023-02-08-11-17-col3test",
                "2023-02-09-12-13-collection4",
            ]
        );
    }

    #[test]
    fn zero_day_window_is_today_only() {
        let tmp = fixture();
        let cols = published_collections(tmp.path(), 0, &clock()).unwrap();
        assert_eq!(cols, vec!["2023-02-09-12-13-collection4"]);
    }

    #[test]
    fn huge_window_lists_everything_up_to_today() {
        let tmp = fixture();
        fs::create_dir_all(tmp.path().join("notes")).unwrap();
        fs::create_dir_all(tmp.path().join("2023-13-40-bad-date")).unwrap();

        let cols = published_collections(tmp.path(), u32::MAX, &clock()).unwrap();
        assert_eq!(
            cols,
            vec![
                "2023-02-06-08-50-col0test",
                "2023-02-07-08-50-col1test",
                "2023-02-08-08-50-col2test",
                "2023-02-08-11-17-col3test",
                "2023-02-09-12-13-collection4",
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_in_window_is_fatal() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = fixture();
        let odd = OsStr::from_bytes(b"2023-02-09-13-00-col\xff");
        fs::create_dir_all(tmp.path().join(odd)).unwrap();

        let err = published_collections(tmp.path(), 1, &clock()).unwrap_err();
        assert!(matches!(err, CheckerError::NonUtf8Name { .. }), "{err}");
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_name_outside_window_is_ignored() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let tmp = fixture();
        fs::create_dir_all(tmp.path().join(OsStr::from_bytes(b"2022-01-01-col\xff"))).unwrap();

        let cols = published_collections(tmp.path(), 0, &clock()).unwrap();
        assert_eq!(cols, vec!["2023-02-09-12-13-collection4"]);
    }

    #[test]
    fn missing_publish_log_is_fatal() {
        let tmp = TempDir::new().unwrap();
        assert!(published_collections(&tmp.path().join("nope"), 1, &clock()).is_err());
    }
}
