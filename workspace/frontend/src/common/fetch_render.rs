use yew::prelude::*;
use crate::hooks::FetchState;
use super::loading::Loading;
use super::error::ErrorDisplay;

/// Renders a list-valued `FetchState`:
/// - Loading: loading indicator, previous items hidden
/// - Error: error display with optional retry
/// - Success: empty message, or `render_item` for each item inside `container_class`
#[derive(Properties)]
pub struct FetchRenderListProps<T: Clone + PartialEq + 'static> {
    pub state: FetchState<Vec<T>>,
    pub render_item: Callback<T, Html>,
    #[prop_or_default]
    pub on_retry: Option<Callback<()>>,
    #[prop_or_default]
    pub loading_text: Option<String>,
    #[prop_or_default]
    pub error_title: Option<AttrValue>,
    #[prop_or_default]
    pub empty_message: Option<String>,
    #[prop_or_default]
    pub container_class: Option<String>,
}

impl<T: Clone + PartialEq + 'static> PartialEq for FetchRenderListProps<T> {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
            && self.loading_text == other.loading_text
            && self.error_title == other.error_title
            && self.empty_message == other.empty_message
            && self.container_class == other.container_class
    }
}

#[function_component(FetchRenderList)]
pub fn fetch_render_list<T>(props: &FetchRenderListProps<T>) -> Html
where
    T: Clone + PartialEq + 'static,
{
    match &props.state {
        FetchState::NotStarted => html! {},
        FetchState::Loading => html! { <Loading text={props.loading_text.clone()} /> },
        FetchState::Error(err) => {
            let title = props
                .error_title
                .clone()
                .unwrap_or(AttrValue::Static("Something went wrong"));
            html! {
                <ErrorDisplay {title} message={err.clone()} on_retry={props.on_retry.clone()} />
            }
        }
        FetchState::Success(items) if items.is_empty() => {
            let message = props
                .empty_message
                .clone()
                .unwrap_or_else(|| "No items found.".to_string());
            html! { <p class="text-center text-gray-500 py-8" data-testid="empty">{message}</p> }
        }
        FetchState::Success(items) => {
            let container_class = props
                .container_class
                .clone()
                .unwrap_or_else(|| "grid grid-cols-1 gap-4".to_string());
            html! {
                <div class={container_class}>
                    { for items.iter().map(|item| props.render_item.emit(item.clone())) }
                </div>
            }
        }
    }
}
