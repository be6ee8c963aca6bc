use yew::prelude::*;

/// Centered loading spinner
#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex justify-center items-center py-8">
            <span class="loading loading-spinner loading-lg"></span>
        </div>
    }
}
