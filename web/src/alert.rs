use dioxus::prelude::*;
use ui::{Toast, ToastKind};

use crate::Route;

/// Structured error information for display
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ErrorInfo {
    pub message: String,
    pub chain: Vec<String>,
    pub backtrace: Option<String>,
}

impl ErrorInfo {
    pub fn from_message(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            chain: vec![message.clone()],
            message,
            backtrace: None,
        }
    }

    /// Parse a ServerFnError to extract structured error info
    pub fn from_server_error(err: &ServerFnError) -> Self {
        let ServerFnError::ServerError {
            message, details, ..
        } = err
        else {
            return Self::from_message(err.to_string());
        };

        let Some(details) = details else {
            return Self::from_message(message.clone());
        };

        let chain = details
            .get("chain")
            .and_then(|c| c.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|v| v.as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_else(|| vec![message.clone()]);
        let backtrace = details
            .get("backtrace")
            .and_then(|b| b.as_str())
            .map(String::from);

        Self {
            message: message.clone(),
            chain,
            backtrace,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Alert {
    Success { title: String, text: String },
    Error(ErrorInfo),
}

/// The toast currently on screen. Use `use_alert()` to reach it.
#[derive(Clone, Copy)]
pub struct AlertState(Signal<Option<Alert>>);

impl AlertState {
    pub fn new() -> Self {
        Self(Signal::new(None))
    }

    pub fn success(&mut self, title: impl Into<String>, text: impl Into<String>) {
        self.0.set(Some(Alert::Success {
            title: title.into(),
            text: text.into(),
        }));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.0.set(Some(Alert::Error(ErrorInfo::from_message(message))));
    }

    pub fn set_server_error(&mut self, err: &ServerFnError) {
        // Session gone: back to the login screen.
        if let ServerFnError::ServerError { code: 401, message, .. } = err {
            navigator().push(Route::Login {
                error: Some(message.clone()),
            });
            return;
        }
        self.0
            .set(Some(Alert::Error(ErrorInfo::from_server_error(err))));
    }

    pub fn clear(&mut self) {
        self.0.set(None);
    }
}

pub fn use_alert() -> AlertState {
    use_context::<AlertState>()
}

/// Keep only frames from this workspace's crates.
fn filter_backtrace(backtrace: &str) -> String {
    const CRATES: [&str; 4] = ["web::", "api::", "server::", "types::"];

    backtrace
        .lines()
        .filter(|line| {
            let line = line.trim_start();
            let frame = line
                .split_once(": ")
                .map_or(line, |(_, symbol)| symbol);
            CRATES.iter().any(|name| frame.starts_with(name))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[component]
pub fn AlertToast() -> Element {
    let mut state = use_alert();
    let alert = state.0.read();

    match alert.as_ref() {
        Some(Alert::Success { title, text }) => rsx! {
            Toast {
                kind: ToastKind::Success,
                title: title.clone(),
                on_close: move |_| state.clear(),
                p { class: "toast-text", "{text}" }
            }
        },
        Some(Alert::Error(err)) => {
            let has_chain = err.chain.len() > 1;
            let backtrace = err
                .backtrace
                .as_deref()
                .map(filter_backtrace)
                .filter(|bt| !bt.is_empty());

            rsx! {
                Toast {
                    kind: ToastKind::Error,
                    title: err.message.clone(),
                    on_close: move |_| state.clear(),
                    if has_chain || backtrace.is_some() {
                        div { class: "error-details",
                            if has_chain {
                                div { class: "error-chain",
                                    h4 { class: "error-section-title", "Error Chain" }
                                    ol { class: "error-chain-list",
                                        for (i, msg) in err.chain.iter().enumerate() {
                                            li {
                                                key: "{i}",
                                                class: "error-chain-item",
                                                "{msg}"
                                            }
                                        }
                                    }
                                }
                            }
                            if let Some(backtrace) = backtrace {
                                div { class: "error-backtrace",
                                    h4 { class: "error-section-title", "Backtrace" }
                                    pre { class: "error-backtrace-content", "{backtrace}" }
                                }
                            }
                        }
                    }
                }
            }
        }
        None => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_chain_and_backtrace_from_details() {
        let err = ServerFnError::ServerError {
            message: "remote returned 500".into(),
            code: 500,
            details: Some(json!({
                "chain": ["could not list employees", "remote returned 500"],
                "backtrace": "0: server::sipandu::checked",
            })),
        };

        let info = ErrorInfo::from_server_error(&err);
        assert_eq!(info.message, "remote returned 500");
        assert_eq!(info.chain.len(), 2);
        assert_eq!(info.backtrace.as_deref(), Some("0: server::sipandu::checked"));
    }

    #[test]
    fn missing_details_fall_back_to_message() {
        let err = ServerFnError::ServerError {
            message: "Name is required.".into(),
            code: 400,
            details: None,
        };

        assert_eq!(
            ErrorInfo::from_server_error(&err),
            ErrorInfo::from_message("Name is required.")
        );
    }

    #[test]
    fn backtrace_keeps_workspace_frames() {
        let backtrace = "\
   0: std::backtrace::Backtrace::capture
   1: server::sipandu::checked
   2: tokio::runtime::task::harness
   3: api::list_employees";

        assert_eq!(
            filter_backtrace(backtrace),
            "   1: server::sipandu::checked\n   3: api::list_employees"
        );
    }
}
