use futures::future::join_all;
use tracing::warn;

use crate::external::quote_provider::QuoteProvider;
use crate::models::IndexQuote;

/// Symbols shown on the dashboard ticker.
pub const INDEX_SYMBOLS: [(&str, &str); 20] = [
    ("AAPL", "Apple"),
    ("GOOGL", "Alphabet (Google)"),
    ("MSFT", "Microsoft"),
    ("AMZN", "Amazon"),
    ("TSLA", "Tesla"),
    ("META", "Meta (Facebook)"),
    ("NFLX", "Netflix"),
    ("NVDA", "NVIDIA"),
    ("INTC", "Intel"),
    ("IBM", "IBM"),
    ("ADBE", "Adobe"),
    ("ORCL", "Oracle"),
    ("CRM", "Salesforce"),
    ("PYPL", "PayPal"),
    ("PEP", "PepsiCo"),
    ("KO", "Coca-Cola"),
    ("NKE", "Nike"),
    ("MCD", "McDonald's"),
    ("WMT", "Walmart"),
    ("DIS", "Walt Disney"),
];

/// Quotes every dashboard symbol concurrently. A symbol whose quote fails is
/// returned with empty price fields; the batch itself never fails.
pub async fn fetch_index_quotes(provider: &dyn QuoteProvider) -> Vec<IndexQuote> {
    let requests = INDEX_SYMBOLS.iter().map(|&(symbol, name)| async move {
        match provider.fetch_quote(symbol).await {
            Ok(quote) => IndexQuote {
                name: name.to_string(),
                symbol: symbol.to_string(),
                price: quote.current,
                change: quote.change,
                percent_change: quote.percent_change,
            },
            Err(e) => {
                warn!("Quote for {} unavailable: {}", symbol, e);
                IndexQuote::unavailable(symbol, name)
            }
        }
    });

    join_all(requests).await
}
