//! WhatsApp share-link construction
//!
//! Nothing is exchanged with the messaging service beyond a pre-filled URL
//! opened in a new browsing context.

/// Invitation line prepended to the shared page URL
pub const SHARE_TEXT: &str = "I'm planning a Goa escape! 🌴✨ Wanna join me?";

/// Message body for the share sheet: invitation plus the page link
pub fn share_message(page_url: &str) -> String {
    format!("{SHARE_TEXT}\n\nCheck this out: {page_url}")
}

/// WhatsApp deep link carrying an already URI-encoded message
pub fn whatsapp_share_url(encoded_text: &str) -> String {
    format!("https://wa.me/?text={encoded_text}")
}

/// Encode the share message for the current page and open WhatsApp in a
/// new tab. Popup-blocker refusals are logged and ignored.
#[cfg(target_arch = "wasm32")]
pub fn open_whatsapp_share(window: &web_sys::Window) {
    let page_url = match window.location().href() {
        Ok(href) => href,
        Err(err) => {
            log::warn!("Could not read page URL for sharing: {err:?}");
            return;
        }
    };
    let encoded: String = js_sys::encode_uri_component(&share_message(&page_url)).into();
    let url = whatsapp_share_url(&encoded);
    if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
        log::warn!("Share window failed to open: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_carries_page_url() {
        let msg = share_message("https://example.com/goa");
        assert!(msg.starts_with(SHARE_TEXT));
        assert!(msg.ends_with("https://example.com/goa"));
    }

    #[test]
    fn test_whatsapp_url_shape() {
        let url = whatsapp_share_url("hello%20world");
        assert_eq!(url, "https://wa.me/?text=hello%20world");
    }
}
