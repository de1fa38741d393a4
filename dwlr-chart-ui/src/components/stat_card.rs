//! Small labelled value card.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct StatCardProps {
    pub label: String,
    pub value: String,
    /// Unit shown after the value (e.g., "m", "mm/yr")
    #[props(default = String::new())]
    pub unit: String,
}

/// A label over a value, optionally followed by a unit.
#[component]
pub fn StatCard(props: StatCardProps) -> Element {
    rsx! {
        div {
            style: "background: #f1f5f9; padding: 12px; border-radius: 8px; text-align: center;",
            p {
                style: "margin: 0; font-size: 12px; color: #64748b; font-weight: 500; text-transform: uppercase;",
                "{props.label}"
            }
            p {
                style: "margin: 0; font-size: 20px; font-weight: 600; color: #1e293b;",
                "{props.value} "
                if !props.unit.is_empty() {
                    span {
                        style: "font-size: 14px; font-weight: 400; color: #475569;",
                        "{props.unit}"
                    }
                }
            }
        }
    }
}
