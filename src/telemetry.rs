//! Optional response logging
//!
//! One POST per answer, fire-and-forget: no retry, no response handling,
//! and the UI never waits on it. With no base URL configured the whole
//! thing is a no-op.

use serde::Serialize;

use crate::device::DeviceType;

/// The user's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

/// Wire payload for `POST {base}/api/response`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEvent {
    pub answer: Answer,
    pub device_type: DeviceType,
    /// ISO-8601, e.g. "2026-08-24T10:15:30.000Z"
    pub timestamp: String,
}

/// Telemetry endpoint configuration
#[derive(Debug, Clone)]
pub struct Telemetry {
    base_url: Option<String>,
}

impl Telemetry {
    /// Name of the `<meta>` tag the base URL is read from
    pub const META_NAME: &'static str = "analytics-base-url";

    pub fn new(base_url: Option<String>) -> Self {
        let base_url = base_url
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty());
        Self { base_url }
    }

    /// Disabled telemetry: every send is skipped
    pub fn disabled() -> Self {
        Self { base_url: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.base_url.is_some()
    }

    /// Full endpoint URL, or `None` when logging is disabled
    pub fn endpoint(&self) -> Option<String> {
        self.base_url
            .as_deref()
            .map(|base| format!("{base}/api/response"))
    }

    /// Read configuration from `<meta name="analytics-base-url" content="…">`
    #[cfg(target_arch = "wasm32")]
    pub fn from_document(document: &web_sys::Document) -> Self {
        let content = document
            .query_selector(&format!("meta[name=\"{}\"]", Self::META_NAME))
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("content"));
        Self::new(content)
    }

    /// Fire-and-forget POST of the given answer. Returns immediately; any
    /// network failure is logged and swallowed.
    #[cfg(target_arch = "wasm32")]
    pub fn send(&self, answer: Answer, device: DeviceType) {
        use wasm_bindgen::JsValue;
        use wasm_bindgen_futures::JsFuture;

        let Some(endpoint) = self.endpoint() else {
            return;
        };

        let event = ResponseEvent {
            answer,
            device_type: device,
            timestamp: js_sys::Date::new_0().to_iso_string().into(),
        };
        let body = match serde_json::to_string(&event) {
            Ok(body) => body,
            Err(err) => {
                log::warn!("Telemetry payload serialization failed: {err}");
                return;
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = async {
                let opts = web_sys::RequestInit::new();
                opts.set_method("POST");
                opts.set_mode(web_sys::RequestMode::Cors);
                opts.set_body(&JsValue::from_str(&body));

                let request = web_sys::Request::new_with_str_and_init(&endpoint, &opts)?;
                request.headers().set("Content-Type", "application/json")?;

                let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
                JsFuture::from(window.fetch_with_request(&request)).await
            }
            .await;

            if let Err(err) = result {
                log::warn!("Logging failed: {err:?}");
            }
        });
    }

    /// Native builds have no browser fetch; sends are skipped.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn send(&self, _answer: Answer, _device: DeviceType) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_base_url_disables_sends() {
        assert!(!Telemetry::new(None).is_enabled());
        assert!(!Telemetry::new(Some(String::new())).is_enabled());
        assert!(!Telemetry::new(Some("   ".into())).is_enabled());
        assert!(Telemetry::disabled().endpoint().is_none());
    }

    #[test]
    fn test_endpoint_join() {
        let t = Telemetry::new(Some("https://example.com".into()));
        assert_eq!(t.endpoint().unwrap(), "https://example.com/api/response");

        // Trailing slash doesn't double up
        let t = Telemetry::new(Some("https://example.com/".into()));
        assert_eq!(t.endpoint().unwrap(), "https://example.com/api/response");
    }

    #[test]
    fn test_event_wire_format() {
        let event = ResponseEvent {
            answer: Answer::Yes,
            device_type: DeviceType::Desktop,
            timestamp: "2026-08-24T10:15:30.000Z".into(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            "{\"answer\":\"yes\",\"deviceType\":\"desktop\",\"timestamp\":\"2026-08-24T10:15:30.000Z\"}"
        );
    }

    #[test]
    fn test_no_answer_wire_format() {
        assert_eq!(serde_json::to_string(&Answer::No).unwrap(), "\"no\"");
    }

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn test_native_send_is_noop() {
        // Must not panic or touch the network regardless of configuration
        Telemetry::new(Some("https://example.com".into())).send(Answer::No, DeviceType::Desktop);
        Telemetry::disabled().send(Answer::Yes, DeviceType::Mobile);
    }
}
