use serde::Deserialize;

use crate::api_client;

/// NSE market suffix that users habitually paste along with the symbol.
const MARKET_SUFFIX: &str = ".NS";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Prediction {
    /// Echoed by the service; the dashboard overwrites it with the
    /// normalized symbol it actually asked about.
    #[serde(default)]
    pub ticker: String,
    /// 1 for up, anything else counts as down.
    pub prediction: u8,
    /// Probability-like score in [0, 1].
    pub confidence: f64,
}

impl Prediction {
    pub fn direction(&self) -> Direction {
        if self.prediction == 1 {
            Direction::Up
        } else {
            Direction::Down
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Direction::Up => "△",
            Direction::Down => "▽",
        }
    }

    /// DaisyUI color token for badges, alerts and progress fills.
    pub fn color_token(&self) -> &'static str {
        match self {
            Direction::Up => "success",
            Direction::Down => "error",
        }
    }
}

/// Normalizes raw ticker input: trims whitespace, strips one ".NS" market
/// suffix in any case, upper-cases the rest. Returns `None` when nothing
/// usable remains, in which case no request should be issued.
pub fn normalize_ticker(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.to_uppercase().replacen(MARKET_SUFFIX, "", 1);
    if normalized.is_empty() {
        return None;
    }

    Some(normalized)
}

/// Formats a [0, 1] confidence score as a percentage with one decimal place.
pub fn confidence_percent(confidence: f64) -> String {
    format!("{:.1}%", confidence * 100.0)
}

pub async fn get_prediction(ticker: &str) -> Result<Prediction, String> {
    log::trace!("Fetching prediction for ticker: {}", ticker);
    let result = api_client::get::<Prediction>(&format!("/predict/{}", ticker)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch prediction for {}: {}", ticker, e);
    } else {
        log::info!("Successfully fetched prediction for {}", ticker);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_strips_suffix_and_uppercases() {
        assert_eq!(normalize_ticker("tcs.ns").as_deref(), Some("TCS"));
        assert_eq!(normalize_ticker("TCS.NS").as_deref(), Some("TCS"));
        assert_eq!(normalize_ticker("Tcs.Ns").as_deref(), Some("TCS"));
        assert_eq!(normalize_ticker("RELIANCE").as_deref(), Some("RELIANCE"));
        assert_eq!(normalize_ticker("  infy  ").as_deref(), Some("INFY"));
    }

    #[test]
    fn normalization_strips_the_suffix_once() {
        assert_eq!(normalize_ticker("tcs.ns.ns").as_deref(), Some("TCS.NS"));
    }

    #[test]
    fn empty_and_suffix_only_input_is_rejected() {
        assert_eq!(normalize_ticker(""), None);
        assert_eq!(normalize_ticker("   "), None);
        assert_eq!(normalize_ticker(".ns"), None);
    }

    #[test]
    fn direction_follows_the_numeric_prediction() {
        let up = Prediction {
            ticker: "TCS".to_string(),
            prediction: 1,
            confidence: 0.8734,
        };
        assert_eq!(up.direction(), Direction::Up);
        assert_eq!(up.direction().label(), "UP");
        assert_eq!(up.direction().glyph(), "△");
        assert_eq!(up.direction().color_token(), "success");

        let down = Prediction {
            ticker: "TCS".to_string(),
            prediction: 0,
            confidence: 0.05,
        };
        assert_eq!(down.direction(), Direction::Down);
        assert_eq!(down.direction().label(), "DOWN");
        assert_eq!(down.direction().glyph(), "▽");
        assert_eq!(down.direction().color_token(), "error");
    }

    #[test]
    fn confidence_renders_with_one_decimal_place() {
        assert_eq!(confidence_percent(0.8734), "87.3%");
        assert_eq!(confidence_percent(0.05), "5.0%");
        assert_eq!(confidence_percent(1.0), "100.0%");
        assert_eq!(confidence_percent(0.0), "0.0%");
    }

    #[test]
    fn extra_service_fields_are_tolerated() {
        let prediction: Prediction = serde_json::from_str(
            r#"{"ticker": "RELIANCE", "prediction": 0, "confidence": 0.61, "direction": "DOWN"}"#,
        )
        .unwrap();
        assert_eq!(prediction.direction(), Direction::Down);
    }
}
