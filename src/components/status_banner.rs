use dioxus::prelude::*;

/// Message shown above the table after an action
#[derive(Debug, Clone, PartialEq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

#[component]
pub fn StatusBanner(message: StatusMessage, on_dismiss: EventHandler<()>) -> Element {
    let (class, text) = match &message {
        StatusMessage::Info(text) => ("status status-info", text.clone()),
        StatusMessage::Error(text) => ("status status-error", text.clone()),
    };

    rsx! {
        div { class: "{class}",
            span { "{text}" }
            button {
                class: "status-dismiss",
                onclick: move |_| on_dismiss.call(()),
                "×"
            }
        }
    }
}
