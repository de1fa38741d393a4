//! Loading placeholder shown while stations are being fetched.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading data...".to_string())]
    pub message: String,
}

/// Full-height placeholder with a short message.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; height: 100%; min-height: 400px; background: #e2e8f0; border-radius: 8px; color: #64748b;",
            p { "{props.message}" }
        }
    }
}
