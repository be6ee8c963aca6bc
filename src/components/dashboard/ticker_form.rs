use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api_client::prediction::normalize_ticker;

/// Preset NSE large-caps shown as one-click badges.
const PRESET_TICKERS: [&str; 5] = ["RELIANCE", "TCS", "INFY", "HDFCBANK", "ICICIBANK"];

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Fired with the normalized ticker symbol; never fired for empty input.
    pub on_predict: Callback<String>,
    #[prop_or_default]
    pub busy: bool,
}

#[function_component(TickerForm)]
pub fn ticker_form(props: &Props) -> Html {
    let ticker = use_state(String::new);

    let submit = {
        let on_predict = props.on_predict.clone();
        Callback::from(move |raw: String| match normalize_ticker(&raw) {
            Some(normalized) => {
                log::debug!("Submitting prediction for normalized ticker: {}", normalized);
                on_predict.emit(normalized);
            }
            None => {
                log::warn!("Prediction requested with empty ticker input");
                if let Some(window) = web_sys::window() {
                    let _ = window.alert_with_message("Please enter a ticker symbol");
                }
            }
        })
    };

    let on_input = {
        let ticker = ticker.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            ticker.set(value);
        })
    };

    let on_predict_click = {
        let submit = submit.clone();
        let ticker = ticker.clone();
        Callback::from(move |_| submit.emit((*ticker).clone()))
    };

    let on_keydown = {
        let submit = submit.clone();
        let ticker = ticker.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                submit.emit((*ticker).clone());
            }
        })
    };

    html! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h2 class="card-title">{"Stock Direction"}</h2>
                <div class="join w-full">
                    <input
                        id="ticker"
                        class="input input-bordered join-item w-full"
                        placeholder="Ticker symbol (e.g. TCS or TCS.NS)"
                        value={(*ticker).clone()}
                        oninput={on_input}
                        onkeydown={on_keydown}
                    />
                    <button
                        id="predictBtn"
                        class="btn btn-primary join-item"
                        onclick={on_predict_click}
                        disabled={props.busy}
                    >
                        {if props.busy {
                            html! { <span class="loading loading-spinner loading-sm"></span> }
                        } else {
                            html! { {"Predict"} }
                        }}
                    </button>
                </div>
                <div class="flex flex-wrap gap-2 mt-2">
                    {for PRESET_TICKERS.into_iter().map(|symbol| {
                        let ticker = ticker.clone();
                        let submit = submit.clone();
                        let onclick = Callback::from(move |_| {
                            // Badge click behaves like typing the symbol and
                            // pressing predict.
                            ticker.set(symbol.to_string());
                            submit.emit(symbol.to_string());
                        });
                        html! {
                            <button class="badge badge-outline stock-badge cursor-pointer" {onclick}>
                                {symbol}
                            </button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
