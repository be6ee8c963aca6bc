use plotly::common::{Marker, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::api_client::importance::{get_feature_importances, FEATURE_LABELS};

#[wasm_bindgen]
extern "C" {
    // Plotly.react redraws an existing plot in place instead of recreating it.
    #[wasm_bindgen(js_namespace = Plotly)]
    fn react(div_id: &str, data: JsValue, layout: JsValue);
}

const CHART_DIV_ID: &str = "importanceChart";
const TRANSITION_MS: u32 = 1000;
const CHART_HEIGHT: usize = 360;

#[derive(Debug, Properties, PartialEq)]
pub struct Props {
    /// Ticker scope for the importance fetch; `None` loads the model-wide
    /// default vector.
    #[prop_or_default]
    pub ticker: Option<String>,
    /// Bumped on every successful prediction. Repeating a ticker leaves the
    /// scope equal, so this is what forces the refetch for it.
    #[prop_or_default]
    pub refresh: u64,
}

/// Bar chart of the 9 feature-importance scores. Refetches on every change
/// of its ticker scope or refresh counter; any fetch failure keeps the last
/// rendered bars.
#[function_component(ImportanceChart)]
pub fn importance_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with(
        (container_ref.clone(), props.ticker.clone(), props.refresh),
        move |(container_ref, ticker, _refresh)| {
            if let Some(element) = container_ref.cast::<HtmlElement>() {
                element.set_id(CHART_DIV_ID);

                let ticker = ticker.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    match get_feature_importances(ticker.as_deref()).await {
                        Ok(vector) => render_bars(&vector.importances),
                        Err(e) => log::error!("Failed to load feature importances: {}", e),
                    }
                });
            }
            || ()
        },
    );

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div ref={container_ref} style={format!("width: 100%; height: {}px;", CHART_HEIGHT)}></div>
            </div>
        </div>
    }
}

/// Builds the serializable figure for a bar update: one trace over the fixed
/// label set and a layout with the importance axis clamped to [0, 0.5].
fn bar_figure(importances: &[f64]) -> (serde_json::Value, serde_json::Value) {
    let labels: Vec<String> = FEATURE_LABELS.iter().map(|label| label.to_string()).collect();

    let trace = Bar::new(labels, importances.to_vec())
        .name("Feature Importance")
        .marker(Marker::new().color("rgba(75, 192, 192, 0.6)"));

    let layout = Layout::new()
        .title(Title::with_text("Feature Importance Analysis"))
        .x_axis(Axis::new().title(Title::with_text("Features")))
        .y_axis(
            Axis::new()
                .title(Title::with_text("Importance Score"))
                .range(vec![0.0, 0.5]),
        )
        .height(CHART_HEIGHT);

    let trace_value = serde_json::to_value(&trace).unwrap();
    let mut layout_value = serde_json::to_value(&layout).unwrap();

    // The plotly builder has no transition knob, so it is spliced into the
    // serialized layout before handing it to Plotly.react.
    if let Some(layout_obj) = layout_value.as_object_mut() {
        layout_obj.insert(
            "transition".to_string(),
            serde_json::json!({"duration": TRANSITION_MS, "easing": "cubic-in-out"}),
        );
    }

    (trace_value, layout_value)
}

fn render_bars(importances: &[f64]) {
    let (trace_value, layout_value) = bar_figure(importances);

    let trace_js = js_sys::JSON::parse(&trace_value.to_string()).unwrap();
    let data_js = js_sys::Array::new();
    data_js.push(&trace_js);

    let layout_js = js_sys::JSON::parse(&layout_value.to_string()).unwrap();

    react(CHART_DIV_ID, data_js.into(), layout_js);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_keeps_label_and_score_order() {
        let scores = [0.3, 0.1, 0.15, 0.14, 0.1, 0.05, 0.05, 0.06, 0.05];
        let (trace, _) = bar_figure(&scores);

        assert_eq!(trace["type"], "bar");

        let xs: Vec<&str> = trace["x"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(xs, FEATURE_LABELS);

        let ys: Vec<f64> = trace["y"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_f64().unwrap())
            .collect();
        assert_eq!(ys, scores);
    }

    #[test]
    fn repeated_ticker_with_new_refresh_changes_the_fetch_key() {
        // The fetch effect re-runs only when its props compare unequal, so
        // submitting the same ticker twice must still produce a distinct
        // key via the refresh counter.
        let first = Props {
            ticker: Some("TCS".to_string()),
            refresh: 1,
        };
        let second = Props {
            ticker: Some("TCS".to_string()),
            refresh: 2,
        };
        assert_ne!(first, second);
        assert_eq!(
            first,
            Props {
                ticker: Some("TCS".to_string()),
                refresh: 1,
            }
        );
    }

    #[test]
    fn layout_clamps_the_importance_axis() {
        let (_, layout) = bar_figure(&[0.1; 9]);

        assert_eq!(layout["yaxis"]["range"], serde_json::json!([0.0, 0.5]));
        assert_eq!(layout["yaxis"]["title"]["text"], "Importance Score");
        assert_eq!(layout["xaxis"]["title"]["text"], "Features");
        assert_eq!(layout["title"]["text"], "Feature Importance Analysis");
        assert_eq!(layout["transition"]["duration"], TRANSITION_MS);
    }
}
