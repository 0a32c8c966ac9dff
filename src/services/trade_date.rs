use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Weekday};

/// Hour (local time) after which today's bhavcopy is expected to be published.
pub const PUBLISH_HOUR: u32 = 20;

/// The exchange business date whose end-of-day file should exist.
///
/// Holidays are not known here: a weekday holiday resolves to itself and
/// the download for it fails upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeDate {
    date: NaiveDate,
}

impl TradeDate {
    /// Resolves the trade date for a local wall-clock time.
    ///
    /// Before 20:00 the previous day is used; a Saturday or Sunday then rolls
    /// back to the preceding Friday.
    pub fn resolve(now: NaiveDateTime) -> Self {
        let mut date = now.date();
        if now.time().hour() < PUBLISH_HOUR {
            date -= Duration::days(1);
        }

        date = match date.weekday() {
            Weekday::Sun => date - Duration::days(2),
            Weekday::Sat => date - Duration::days(1),
            _ => date,
        };

        Self { date }
    }

    pub fn now_local() -> Self {
        Self::resolve(chrono::Local::now().naive_local())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `YYYY-MM-DD`
    pub fn iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Zero-padded month, `01`..`12`.
    pub fn month(&self) -> String {
        format!("{:02}", self.date.month())
    }

    /// Zero-padded day of month, `01`..`31`.
    pub fn day(&self) -> String {
        format!("{:02}", self.date.day())
    }

    /// `YYYYMMDD`, as used in bhavcopy file names.
    pub fn stamp(&self) -> String {
        format!("{}{}{}", self.year(), self.month(), self.day())
    }
}

impl From<NaiveDate> for TradeDate {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}
