use std::str::FromStr;

use bigdecimal::BigDecimal;
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use tracing::warn;

use crate::models::PriceSnapshot;
use crate::services::trade_date::TradeDate;
use crate::services::tracked_securities::is_tracked;

/// Columns read from a bhavcopy. Both the current (`TckrSymb`, `FinInstrmNm`)
/// and legacy (`SC_CODE`, `SECURITY`) layouts are accepted; unknown columns
/// are ignored.
#[derive(Debug, Default, Deserialize)]
struct BhavcopyRecord {
    #[serde(rename = "SC_CODE")]
    sc_code: Option<String>,
    #[serde(rename = "TckrSymb")]
    ticker_symbol: Option<String>,
    #[serde(rename = "FinInstrmNm")]
    instrument_name: Option<String>,
    #[serde(rename = "SECURITY")]
    security: Option<String>,
    #[serde(rename = "OpnPric")]
    open: Option<String>,
    #[serde(rename = "HghPric")]
    high: Option<String>,
    #[serde(rename = "LwPric")]
    low: Option<String>,
    #[serde(rename = "ClsPric")]
    close: Option<String>,
    #[serde(rename = "TOTTRDVAL")]
    total_traded_value: Option<String>,
    #[serde(rename = "VOLUME")]
    volume: Option<String>,
}

#[derive(Debug, Default, PartialEq)]
pub struct ParseOutcome {
    pub snapshots: Vec<PriceSnapshot>,
    pub rows_read: usize,
    pub rows_skipped: usize,
}

fn first_present<'a>(primary: &'a Option<String>, fallback: &'a Option<String>) -> &'a str {
    [primary, fallback]
        .into_iter()
        .flatten()
        .map(|s| s.trim())
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

/// Missing or unparseable prices become 0.
pub fn parse_price(raw: Option<&str>) -> BigDecimal {
    raw.map(str::trim)
        .and_then(|s| BigDecimal::from_str(s).ok())
        .unwrap_or_else(|| BigDecimal::from(0))
}

/// Missing or unparseable volumes become 0; fractional values are truncated.
pub fn parse_volume(raw: Option<&str>) -> i64 {
    let Some(s) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return 0;
    };
    if let Ok(v) = s.parse::<i64>() {
        return v;
    }
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.trunc() as i64)
        .unwrap_or(0)
}

impl BhavcopyRecord {
    fn into_snapshot(self, trade_date: &TradeDate) -> Option<PriceSnapshot> {
        let symbol = first_present(&self.sc_code, &self.ticker_symbol);
        let name = first_present(&self.instrument_name, &self.security);

        if symbol.is_empty() || name.is_empty() || !is_tracked(name) {
            return None;
        }

        let volume_raw = first_present(&self.total_traded_value, &self.volume);

        Some(PriceSnapshot {
            trade_date: trade_date.date(),
            symbol: symbol.to_string(),
            name: name.to_string(),
            open: parse_price(self.open.as_deref()),
            high: parse_price(self.high.as_deref()),
            low: parse_price(self.low.as_deref()),
            close: parse_price(self.close.as_deref()),
            volume: parse_volume(Some(volume_raw)),
        })
    }
}

/// Parses a bhavcopy CSV, keeping only rows for tracked securities.
pub fn parse_bhavcopy(data: &[u8], trade_date: &TradeDate) -> ParseOutcome {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data);

    let mut outcome = ParseOutcome::default();

    for (line_num, result) in reader.deserialize::<BhavcopyRecord>().enumerate() {
        outcome.rows_read += 1;
        match result {
            Ok(record) => match record.into_snapshot(trade_date) {
                Some(snapshot) => outcome.snapshots.push(snapshot),
                None => outcome.rows_skipped += 1,
            },
            Err(e) => {
                warn!("Skipping bhavcopy line {}: {}", line_num + 2, e);
                outcome.rows_skipped += 1;
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn trade_date() -> TradeDate {
        TradeDate::from(NaiveDate::from_ymd_opt(2025, 9, 5).unwrap())
    }

    const CURRENT_LAYOUT: &str = "\
TradDt,SC_CODE,TckrSymb,FinInstrmNm,OpnPric,HghPric,LwPric,ClsPric,TtlTradgVol,TOTTRDVAL
2025-09-05,500325,RELIANCE,RELIANCE INDUSTRIES LTD.,2500,2575.5,2490.25,2550,10000,25500000
2025-09-05,999999,NOBODY,SOME UNLISTED COMPANY LTD.,10,11,9,10.5,100,1050
2025-09-05,500180,HDFCBANK,HDFC BANK LTD.,1600,1620,1590,1610,5000,8050000
";

    #[test]
    fn test_allowlisted_row_is_mapped() {
        let outcome = parse_bhavcopy(CURRENT_LAYOUT.as_bytes(), &trade_date());

        let reliance = &outcome.snapshots[0];
        assert_eq!(reliance.symbol, "500325");
        assert_eq!(reliance.name, "RELIANCE INDUSTRIES LTD.");
        assert_eq!(reliance.open, BigDecimal::from(2500));
        assert_eq!(reliance.close, BigDecimal::from(2550));
        assert_eq!(reliance.high, BigDecimal::from_str("2575.5").unwrap());
        assert_eq!(reliance.volume, 25_500_000);
        assert_eq!(reliance.trade_date, trade_date().date());
    }

    #[test]
    fn test_untracked_names_are_dropped() {
        let outcome = parse_bhavcopy(CURRENT_LAYOUT.as_bytes(), &trade_date());

        assert_eq!(outcome.rows_read, 3);
        assert_eq!(outcome.rows_skipped, 1);
        assert_eq!(outcome.snapshots.len(), 2);
        assert!(outcome.snapshots.iter().all(|s| is_tracked(&s.name)));
    }

    #[test]
    fn test_legacy_columns_and_whitespace() {
        let csv = "\
SC_CODE,SECURITY,OpnPric,ClsPric,VOLUME
  532540 ,  TATA CONSULTANCY SERVICES LTD. ,3100,3125.75,1234.9
";
        let outcome = parse_bhavcopy(csv.as_bytes(), &trade_date());

        assert_eq!(outcome.snapshots.len(), 1);
        let tcs = &outcome.snapshots[0];
        assert_eq!(tcs.symbol, "532540");
        assert_eq!(tcs.name, "TATA CONSULTANCY SERVICES LTD.");
        assert_eq!(tcs.high, BigDecimal::from(0));
        assert_eq!(tcs.low, BigDecimal::from(0));
        assert_eq!(tcs.volume, 1234);
    }

    #[test]
    fn test_ticker_symbol_used_when_code_missing() {
        let csv = "\
TckrSymb,FinInstrmNm,ClsPric
INFY,INFOSYS LTD.,1500
";
        let outcome = parse_bhavcopy(csv.as_bytes(), &trade_date());
        assert_eq!(outcome.snapshots[0].symbol, "INFY");
    }

    #[test]
    fn test_rows_without_symbol_or_name_are_dropped() {
        let csv = "\
SC_CODE,FinInstrmNm,ClsPric
,INFOSYS LTD.,1500
500209,,1500
";
        let outcome = parse_bhavcopy(csv.as_bytes(), &trade_date());
        assert!(outcome.snapshots.is_empty());
        assert_eq!(outcome.rows_skipped, 2);
    }

    #[test]
    fn test_numeric_coercion_defaults_to_zero() {
        assert_eq!(parse_price(None), BigDecimal::from(0));
        assert_eq!(parse_price(Some("")), BigDecimal::from(0));
        assert_eq!(parse_price(Some("n/a")), BigDecimal::from(0));
        assert_eq!(parse_price(Some(" 12.50 ")), BigDecimal::from_str("12.50").unwrap());

        assert_eq!(parse_volume(None), 0);
        assert_eq!(parse_volume(Some("-")), 0);
        assert_eq!(parse_volume(Some("42")), 42);
        assert_eq!(parse_volume(Some("42.99")), 42);
    }

    #[test]
    fn test_empty_file_yields_nothing() {
        let outcome = parse_bhavcopy(b"", &trade_date());
        assert_eq!(outcome, ParseOutcome::default());
    }
}
