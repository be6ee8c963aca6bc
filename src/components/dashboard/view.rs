use yew::prelude::*;

use super::chart::ImportanceChart;
use super::prediction_card::PredictionCard;
use super::ticker_form::TickerForm;
use crate::api_client::prediction::{get_prediction, Prediction};
use crate::hooks::FetchState;

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let prediction = use_state(|| FetchState::<Prediction>::NotStarted);
    // Ticker scope of the chart; set only after a successful prediction so
    // a failed request never touches the chart. The refresh counter forces
    // a refetch even when the same ticker is predicted again.
    let chart_ticker = use_state(|| None::<String>);
    let chart_refresh = use_state(|| 0u64);
    let last_ticker = use_state(|| None::<String>);
    // Monotonic sequence over in-flight predictions. A response is dropped
    // when a newer request was issued while it was in flight, so the panel
    // always reflects the latest submission.
    let request_seq = use_mut_ref(|| 0u64);

    let on_predict = {
        let prediction = prediction.clone();
        let chart_ticker = chart_ticker.clone();
        let chart_refresh = chart_refresh.clone();
        let last_ticker = last_ticker.clone();
        let request_seq = request_seq.clone();

        Callback::from(move |ticker: String| {
            let prediction = prediction.clone();
            let chart_ticker = chart_ticker.clone();
            let chart_refresh = chart_refresh.clone();
            let request_seq = request_seq.clone();

            let seq = *request_seq.borrow() + 1;
            *request_seq.borrow_mut() = seq;

            last_ticker.set(Some(ticker.clone()));
            prediction.set(FetchState::Loading);

            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Requesting prediction for {}", ticker);
                let result = get_prediction(&ticker).await;

                if *request_seq.borrow() != seq {
                    log::debug!("Dropping stale prediction response for {}", ticker);
                    return;
                }

                match result {
                    Ok(mut fetched) => {
                        // Display always shows the normalized symbol that was
                        // asked about, whatever the service echoed back.
                        fetched.ticker = ticker.clone();
                        prediction.set(FetchState::Success(fetched));
                        chart_ticker.set(Some(ticker));
                        chart_refresh.set(seq);
                    }
                    Err(e) => {
                        log::error!("Prediction for {} failed: {}", ticker, e);
                        prediction.set(FetchState::Error(e));
                    }
                }
            });
        })
    };

    let on_retry = {
        let on_predict = on_predict.clone();
        let last_ticker = last_ticker.clone();
        Callback::from(move |_| {
            if let Some(ticker) = (*last_ticker).clone() {
                on_predict.emit(ticker);
            }
        })
    };

    html! {
        <div class="container mx-auto p-4">
            <h1 class="text-3xl font-bold mb-4">{"Stock Prediction Dashboard"}</h1>
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="flex flex-col gap-6">
                    <TickerForm on_predict={on_predict.clone()} busy={prediction.is_loading()} />
                    <PredictionCard state={(*prediction).clone()} on_retry={Some(on_retry)} />
                </div>
                <ImportanceChart ticker={(*chart_ticker).clone()} refresh={*chart_refresh} />
            </div>
        </div>
    }
}
