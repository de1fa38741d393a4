//! Inline notice for a panel section that could not be drawn.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Muted red notice that keeps the surrounding panel usable.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "margin-top: 16px; padding: 12px 16px; border-radius: 8px; border: 1px solid #fecaca; background: #fef2f2; color: #991b1b; font-size: 14px;",
            "{props.message}"
        }
    }
}
