use serde::Deserialize;

use crate::api_client;

/// Fixed model-feature labels, in the order the service reports scores.
/// The service is trusted to return exactly one score per label.
pub const FEATURE_LABELS: [&str; 9] = [
    "Price", "Sentiment", "USD/INR", "Repo", "Unemp", "NextEv", "SinceEv", "Window", "Impact",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportanceVector {
    pub importances: Vec<f64>,
}

/// Fetches feature importances, ticker-scoped when a symbol is given and
/// the model-wide defaults otherwise.
pub async fn get_feature_importances(ticker: Option<&str>) -> Result<ImportanceVector, String> {
    let endpoint = match ticker {
        Some(symbol) => format!("/feature_importances/{}", symbol),
        None => "/feature_importances".to_string(),
    };
    log::trace!("Fetching feature importances from {}", endpoint);

    let result = api_client::get::<ImportanceVector>(&endpoint).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch feature importances: {}", e);
    } else {
        log::info!("Successfully fetched feature importances ({})", endpoint);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_shape_decodes_in_order() {
        let vector: ImportanceVector = serde_json::from_str(
            r#"{"importances": [0.3, 0.1, 0.15, 0.14, 0.1, 0.05, 0.05, 0.06, 0.05]}"#,
        )
        .unwrap();
        assert_eq!(
            vector.importances,
            vec![0.3, 0.1, 0.15, 0.14, 0.1, 0.05, 0.05, 0.06, 0.05]
        );
        assert_eq!(vector.importances.len(), FEATURE_LABELS.len());
    }

    #[test]
    fn labels_are_the_fixed_nine() {
        assert_eq!(
            FEATURE_LABELS,
            [
                "Price", "Sentiment", "USD/INR", "Repo", "Unemp", "NextEv", "SinceEv", "Window",
                "Impact"
            ]
        );
    }
}
