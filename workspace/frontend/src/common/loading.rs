use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    #[prop_or_default]
    pub text: Option<String>,
}

/// Inline loading indicator with an optional caption
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="flex flex-col justify-center items-center py-12 gap-4" data-testid="loading">
            <span class="loading loading-spinner loading-md"></span>
            if let Some(text) = &props.text {
                <p class="text-center text-gray-500">{text}</p>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpinnerProps {
    /// Fill the viewport instead of the parent
    #[prop_or_default]
    pub fullscreen: bool,
}

/// Centered loading spinner without text
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &SpinnerProps) -> Html {
    let height = if props.fullscreen { "h-screen" } else { "py-12" };

    html! {
        <div class={classes!("flex", "justify-center", "items-center", height)} data-testid="spinner">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}
