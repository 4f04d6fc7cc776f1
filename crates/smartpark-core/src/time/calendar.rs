//! Calendar helpers: section labels, format conversion and timestamp fields.

use super::Locale;
use crate::error::{Result, SmartParkError};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fmt::Write;

/// Group label used by the booking history list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLabel {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    MonthYear { month: u32, year: i32 },
}

impl DateLabel {
    pub fn format(&self, locale: Locale) -> String {
        match (self, locale) {
            (DateLabel::Today, Locale::Vi) => "Hôm nay".to_string(),
            (DateLabel::Yesterday, Locale::Vi) => "Hôm qua".to_string(),
            (DateLabel::ThisWeek, Locale::Vi) => "Tuần này".to_string(),
            (DateLabel::ThisMonth, Locale::Vi) => "Tháng này".to_string(),
            (DateLabel::Today, Locale::En) => "Today".to_string(),
            (DateLabel::Yesterday, Locale::En) => "Yesterday".to_string(),
            (DateLabel::ThisWeek, Locale::En) => "This week".to_string(),
            (DateLabel::ThisMonth, Locale::En) => "This month".to_string(),
            (DateLabel::MonthYear { month, year }, _) => format!("{:02}/{}", month, year),
        }
    }
}

/// Labels `date` relative to `today`. Weeks start on Monday.
pub fn date_format_label(date: NaiveDate, today: NaiveDate) -> DateLabel {
    if date == today {
        DateLabel::Today
    } else if today.pred_opt() == Some(date) {
        DateLabel::Yesterday
    } else if date.iso_week() == today.iso_week() {
        DateLabel::ThisWeek
    } else if date.year() == today.year() && date.month() == today.month() {
        DateLabel::ThisMonth
    } else {
        DateLabel::MonthYear {
            month: date.month(),
            year: date.year(),
        }
    }
}

/// Reparses `input` with `input_format` and renders it with `output_format`.
///
/// Formats use chrono's strftime syntax. Time-only inputs are placed on the
/// current local date.
pub fn calc_time(input: &str, input_format: &str, output_format: &str) -> Result<String> {
    let parsed = NaiveDateTime::parse_from_str(input, input_format)
        .or_else(|_| {
            NaiveDate::parse_from_str(input, input_format)
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .or_else(|_| {
            NaiveTime::parse_from_str(input, input_format)
                .map(|time| Local::now().date_naive().and_time(time))
        })?;

    let mut output = String::new();
    write!(output, "{}", parsed.format(output_format)).map_err(|_| SmartParkError::Serialization {
        format: "datetime".to_string(),
        message: format!("cannot render with format '{}'", output_format),
    })?;
    Ok(output)
}

/// A timestamp field pulled out of a loosely typed JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeField {
    /// `None` for an empty string.
    Single(Option<DateTime<Utc>>),
    List(Vec<Option<DateTime<Utc>>>),
}

/// Parses the named fields of `object` as RFC 3339 timestamps.
///
/// Missing keys and non-string values are skipped; empty strings become
/// `None`.
pub fn parse_datetime_fields(
    object: &Map<String, Value>,
    keys: &[&str],
) -> Result<HashMap<String, DateTimeField>> {
    let mut fields = HashMap::new();
    for key in keys {
        let field = match object.get(*key) {
            Some(Value::String(raw)) => DateTimeField::Single(parse_optional(raw)?),
            Some(Value::Array(items)) => DateTimeField::List(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(raw) => parse_optional(raw),
                        _ => Ok(None),
                    })
                    .collect::<Result<Vec<_>>>()?,
            ),
            _ => continue,
        };
        fields.insert((*key).to_string(), field);
    }
    Ok(fields)
}

fn parse_optional(raw: &str) -> Result<Option<DateTime<Utc>>> {
    if raw.is_empty() {
        return Ok(None);
    }
    Ok(Some(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Months};
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2021, 7, 24).unwrap()
    }

    #[test]
    fn test_label_today() {
        let label = date_format_label(today(), today());
        assert_eq!(label.format(Locale::Vi), "Hôm nay");
    }

    #[test]
    fn test_label_yesterday() {
        let label = date_format_label(today() - Duration::days(1), today());
        assert_eq!(label.format(Locale::Vi), "Hôm qua");
    }

    #[test]
    fn test_label_this_week() {
        let label = date_format_label(today() - Duration::days(3), today());
        assert_eq!(label.format(Locale::Vi), "Tuần này");
    }

    #[test]
    fn test_label_this_month() {
        let label = date_format_label(today() - Duration::weeks(1), today());
        assert_eq!(label.format(Locale::Vi), "Tháng này");
    }

    #[test]
    fn test_label_month_year() {
        let date = today().checked_sub_months(Months::new(2)).unwrap();
        assert_eq!(date_format_label(date, today()).format(Locale::Vi), "05/2021");
    }

    #[test]
    fn test_calc_time_full_timestamp() {
        let result = calc_time(
            "2021-01-23T04:34:57.465029Z",
            "%Y-%m-%dT%H:%M:%S%.fZ",
            "%H:%M, %d/%m/%Y",
        )
        .unwrap();
        assert_eq!(result, "04:34, 23/01/2021");
    }

    #[test]
    fn test_calc_time_time_only() {
        assert_eq!(calc_time("04:34", "%H:%M", "%I:%M %p").unwrap(), "04:34 AM");
    }

    #[test]
    fn test_calc_time_bad_input() {
        assert!(calc_time("not a time", "%H:%M", "%H:%M").is_err());
    }

    #[test]
    fn test_parse_datetime_fields() {
        let sample = "2020-10-05T08:00:00.000Z";
        let data = json!({
            "time": sample,
            "extend_at": [sample, ""],
            "empty": "",
            "count": 3
        });
        let fields = parse_datetime_fields(
            data.as_object().unwrap(),
            &["time", "extend_at", "empty", "count", "missing"],
        )
        .unwrap();

        let expected: DateTime<Utc> = sample.parse().unwrap();
        assert_eq!(fields["time"], DateTimeField::Single(Some(expected)));
        assert_eq!(fields["extend_at"], DateTimeField::List(vec![Some(expected), None]));
        assert_eq!(fields["empty"], DateTimeField::Single(None));
        assert!(!fields.contains_key("count"));
        assert!(!fields.contains_key("missing"));
    }

    #[test]
    fn test_parse_datetime_fields_rejects_garbage() {
        let data = json!({"time": "yesterday"});
        assert!(parse_datetime_fields(data.as_object().unwrap(), &["time"]).is_err());
    }
}
