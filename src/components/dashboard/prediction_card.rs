use yew::prelude::*;

use crate::api_client::prediction::{confidence_percent, Prediction};
use crate::common::error::ErrorDisplay;
use crate::common::loading::LoadingSpinner;
use crate::hooks::FetchState;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub state: FetchState<Prediction>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
}

/// Result panel for the latest prediction request.
#[function_component(PredictionCard)]
pub fn prediction_card(props: &Props) -> Html {
    html! {
        <div id="result">
            {match &props.state {
                FetchState::NotStarted => html! {},
                FetchState::Loading => html! { <LoadingSpinner /> },
                FetchState::Error(message) => html! {
                    <ErrorDisplay message={message.clone()} on_retry={props.on_retry.clone()} />
                },
                FetchState::Success(prediction) => {
                    let direction = prediction.direction();
                    let color = direction.color_token();
                    let percent = confidence_percent(prediction.confidence);
                    html! {
                        <div class={classes!("alert", format!("alert-{}", color))}>
                            <div class="w-full">
                                <div class="flex justify-between items-center">
                                    <h3 class="text-2xl font-bold">{&prediction.ticker}</h3>
                                    <div class={classes!("badge", "badge-lg", format!("badge-{}", color))}>
                                        <span class="text-lg">{direction.glyph()}</span>
                                        <span class="ml-1">{direction.label()}</span>
                                    </div>
                                </div>
                                <div class="mt-3">
                                    <span class="label-text">{"Confidence Level"}</span>
                                    <div class="w-full bg-base-200 rounded h-6 mt-1">
                                        <div
                                            class={classes!(
                                                "h-6", "rounded", "text-center", "text-sm",
                                                "text-base-100", format!("bg-{}", color)
                                            )}
                                            style={format!("width: {};", percent)}
                                        >
                                            {percent.clone()}
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }
            }}
        </div>
    }
}
