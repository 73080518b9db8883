use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::warn;

/// Date predicate applied to a record's timestamp.
///
/// `Today` and `Yesterday` compare calendar days of the caller-supplied local
/// `now`. `ThisWeek` has no upper bound. `Between` is inclusive on both ends
/// and either end may be open. `Invalid` is produced by unparseable input and
/// matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DateRange {
    #[default]
    All,
    Today,
    Yesterday,
    ThisWeek,
    Between {
        from: Option<NaiveDateTime>,
        to: Option<NaiveDateTime>,
    },
    Invalid,
}

impl DateRange {
    /// Builds a range from the `date`, `from` and `to` query values.
    ///
    /// `from`/`to` select a custom range when no keyword is given (or the
    /// keyword is `custom`). Blank values are ignored. Unknown keywords and
    /// unparseable dates produce [`DateRange::Invalid`] and a warning.
    pub fn from_query(keyword: Option<&str>, from: Option<&str>, to: Option<&str>) -> Self {
        let keyword = non_blank(keyword).map(|k| k.to_ascii_lowercase());
        let from = non_blank(from);
        let to = non_blank(to);

        match keyword.as_deref() {
            None | Some("custom") | Some("between") if from.is_some() || to.is_some() => {
                Self::between_strs(from, to)
            }
            None | Some("all") | Some("custom") | Some("between") => DateRange::All,
            Some("today") => DateRange::Today,
            Some("yesterday") => DateRange::Yesterday,
            Some("week") | Some("this-week") | Some("thisweek") | Some("this_week") => {
                DateRange::ThisWeek
            }
            Some(other) => {
                warn!(keyword = other, "Unknown date range keyword; matching nothing");
                DateRange::Invalid
            }
        }
    }

    fn between_strs(from: Option<&str>, to: Option<&str>) -> Self {
        let from = match from.map(|raw| parse_bound(raw, BoundSide::Start)) {
            Some(None) => return DateRange::Invalid,
            Some(Some(at)) => Some(at),
            None => None,
        };
        let to = match to.map(|raw| parse_bound(raw, BoundSide::End)) {
            Some(None) => return DateRange::Invalid,
            Some(Some(at)) => Some(at),
            None => None,
        };
        DateRange::Between { from, to }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, DateRange::All)
    }

    /// Whether `timestamp` satisfies the range relative to `now`.
    pub fn matches(&self, timestamp: Option<NaiveDateTime>, now: NaiveDateTime) -> bool {
        if let DateRange::All = self {
            return true;
        }
        let Some(ts) = timestamp else {
            return false;
        };
        match self {
            DateRange::All => true,
            DateRange::Today => ts.date() == now.date(),
            DateRange::Yesterday => now
                .date()
                .pred_opt()
                .map(|yesterday| ts.date() == yesterday)
                .unwrap_or(false),
            DateRange::ThisWeek => ts >= now - Duration::days(7),
            DateRange::Between { from, to } => {
                from.map_or(true, |from| ts >= from) && to.map_or(true, |to| ts <= to)
            }
            DateRange::Invalid => false,
        }
    }
}

#[derive(Clone, Copy)]
enum BoundSide {
    Start,
    End,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Accepts `YYYY-MM-DD` (expanded to the start or end of that day) or a full
/// `YYYY-MM-DDTHH:MM[:SS]` timestamp.
fn parse_bound(raw: &str, side: BoundSide) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let time = match side {
            BoundSide::Start => NaiveTime::MIN,
            BoundSide::End => NaiveTime::from_hms_milli_opt(23, 59, 59, 999)?,
        };
        return Some(date.and_time(time));
    }

    let parsed = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"));
    match parsed {
        Ok(at) => Some(at),
        Err(err) => {
            warn!(value = raw, error = %err, "Unparseable date filter; matching nothing");
            None
        }
    }
}
