// dtos/admindtos.rs
use chrono::{DateTime, Days, NaiveDate, NaiveTime, ParseError, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    service::reports::{ClientSpend, ProfessionEarnings},
    utils::decimal::BigDecimalHelpers,
};

#[derive(Debug, Deserialize)]
pub struct ReportRangeQueryDto {
    pub start: Option<String>,
    pub end: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BestProfessionDto {
    pub profession: String,

    #[serde(rename = "totalEarnings")]
    pub total_earnings: f64,
}

impl From<ProfessionEarnings> for BestProfessionDto {
    fn from(earnings: ProfessionEarnings) -> Self {
        BestProfessionDto {
            profession: earnings.profession,
            total_earnings: earnings.total_earnings.to_f64_or_zero(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BestClientDto {
    pub id: Uuid,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub paid: f64,
}

impl From<ClientSpend> for BestClientDto {
    fn from(spend: ClientSpend) -> Self {
        BestClientDto {
            id: spend.id,
            full_name: spend.full_name,
            paid: spend.paid.to_f64_or_zero(),
        }
    }
}

/// Parses `YYYY-MM-DD` bounds into a half-open UTC interval that covers the
/// end date in full, so the caller-facing range stays inclusive.
pub fn parse_date_range(start: &str, end: &str) -> Result<(DateTime<Utc>, DateTime<Utc>), ParseError> {
    let start_day = NaiveDate::parse_from_str(start, "%Y-%m-%d")?;
    let end_day = NaiveDate::parse_from_str(end, "%Y-%m-%d")?;

    let start_at = start_day.and_time(NaiveTime::MIN).and_utc();
    let end_at = end_day
        .checked_add_days(Days::new(1))
        .unwrap_or(end_day)
        .and_time(NaiveTime::MIN)
        .and_utc();

    Ok((start_at, end_at))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn range_covers_the_end_date_inclusively() {
        let (start, end) = parse_date_range("2020-01-01", "2020-01-31").unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2020, 2, 1, 0, 0, 0).unwrap());

        let paid_late_on_last_day = Utc.with_ymd_and_hms(2020, 1, 31, 23, 59, 59).unwrap();
        assert!(paid_late_on_last_day >= start && paid_late_on_last_day < end);
    }

    #[test]
    fn malformed_dates_are_rejected() {
        assert!(parse_date_range("2020-13-01", "2020-01-31").is_err());
        assert!(parse_date_range("not-a-date", "2020-01-31").is_err());
        assert!(parse_date_range("2020-01-01", "31/01/2020").is_err());
    }
}
