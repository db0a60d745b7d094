//! Pure formatting helpers shared by every front end.

use crate::model::Note;
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

const MS_PER_DAY: u64 = 24 * 60 * 60 * 1000;
const CALENDAR_FORMAT: &str = "%b %-d, %Y";

/// Human label for how long ago `timestamp` was, relative to `now`.
///
/// The distance is counted in started days (`ceil(|now - timestamp| / 1 day)`),
/// so anything within the last 24 hours is "Today". Older than a week falls
/// back to a calendar date in `now`'s time zone.
pub fn relative_label<Tz>(timestamp: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let diff_ms = (now.timestamp_millis() - timestamp.timestamp_millis()).unsigned_abs();
    let days = diff_ms.div_ceil(MS_PER_DAY);

    match days {
        0 | 1 => "Today".to_string(),
        2 => "Yesterday".to_string(),
        3..=7 => format!("{} days ago", days - 1),
        _ => timestamp
            .with_timezone(&now.timezone())
            .format(CALENDAR_FORMAT)
            .to_string(),
    }
}

/// "Created ..." for untouched notes, "Updated ..." once edited.
pub fn date_label<Tz>(note: &Note, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    if note.was_edited() {
        format!("Updated {}", relative_label(&note.updated_at, now))
    } else {
        format!("Created {}", relative_label(&note.created_at, now))
    }
}

pub fn total_label(count: usize) -> String {
    match count {
        1 => "1 note".to_string(),
        n => format!("{} notes", n),
    }
}

/// Neutralize markup characters so note text is always displayed literally.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Terminal counterpart of [`escape`]: control characters other than newline
/// and tab could move the cursor or recolor output, so they are replaced.
pub fn escape_terminal(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() && c != '\n' && c != '\t' {
                char::REPLACEMENT_CHARACTER
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NoteDraft, NoteId};
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    #[test]
    fn relative_labels() {
        let now = now();
        assert_eq!(relative_label(&(now - Duration::hours(3)), &now), "Today");
        assert_eq!(relative_label(&(now - Duration::hours(24)), &now), "Today");
        assert_eq!(
            relative_label(&(now - Duration::hours(48)), &now),
            "Yesterday"
        );
        assert_eq!(
            relative_label(&(now - Duration::days(5)), &now),
            "4 days ago"
        );
        assert_eq!(
            relative_label(&(now - Duration::days(7)), &now),
            "6 days ago"
        );
        assert_eq!(
            relative_label(&(now - Duration::days(30)), &now),
            "Sep 19, 2026"
        );
    }

    #[test]
    fn same_instant_is_today() {
        let now = now();
        assert_eq!(relative_label(&now, &now), "Today");
    }

    #[test]
    fn a_day_and_a_bit_is_yesterday() {
        let now = now();
        let ts = now - Duration::hours(25);
        assert_eq!(relative_label(&ts, &now), "Yesterday");
    }

    #[test]
    fn calendar_date_uses_now_time_zone() {
        let ts = Utc.with_ymd_and_hms(2026, 1, 31, 23, 30, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = Utc
            .with_ymd_and_hms(2026, 3, 1, 0, 0, 0)
            .unwrap()
            .with_timezone(&tokyo);
        assert_eq!(relative_label(&ts, &now), "Feb 1, 2026");
    }

    #[test]
    fn future_timestamps_use_absolute_distance() {
        let now = now();
        assert_eq!(
            relative_label(&(now + Duration::hours(30)), &now),
            "Yesterday"
        );
    }

    #[test]
    fn date_label_prefers_update() {
        let now = now();
        let draft = NoteDraft::parse("T", "c").unwrap();
        let mut note = Note::new(NoteId::from("a"), draft.clone(), now - Duration::days(10));
        assert_eq!(date_label(&note, &now), "Created Oct 9, 2026");

        note.apply(draft, now - Duration::hours(1));
        assert_eq!(date_label(&note, &now), "Updated Today");
    }

    #[test]
    fn total_labels() {
        assert_eq!(total_label(0), "0 notes");
        assert_eq!(total_label(1), "1 note");
        assert_eq!(total_label(12), "12 notes");
    }

    #[test]
    fn escape_neutralizes_markup() {
        let escaped = escape("<b>hi & bye</b>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(escaped.contains("&amp;"));
        assert_eq!(escaped, "&lt;b&gt;hi &amp; bye&lt;/b&gt;");
    }

    #[test]
    fn escape_quotes() {
        assert_eq!(escape(r#"a "b" 'c'"#), "a &quot;b&quot; &#39;c&#39;");
        assert_eq!(escape("plain"), "plain");
    }

    #[test]
    fn escape_terminal_replaces_control_characters() {
        assert_eq!(escape_terminal("a\u{1b}[2Jb"), "a\u{fffd}[2Jb");
        assert_eq!(escape_terminal("line\n\tindented"), "line\n\tindented");
        assert_eq!(escape_terminal("<b>&</b>"), "<b>&</b>");
    }
}
