//! Pre-filled chat deep links for the "ask the organizer" buttons.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHAT_BASE_URL: &str = "https://wa.me";
pub const DEFAULT_MESSAGE_TEMPLATE: &str = "Hi! I'm interested in booking tickets for {event}. Can you help me?";

/// Everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped, as in a browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatLinkBuilder {
    pub base_url: String,
    /// `{event}` is replaced with the event name
    pub message_template: String,
}

impl Default for ChatLinkBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CHAT_BASE_URL.to_string(),
            message_template: DEFAULT_MESSAGE_TEMPLATE.to_string(),
        }
    }
}

impl ChatLinkBuilder {
    pub fn new(base_url: impl Into<String>, message_template: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            message_template: message_template.into(),
        }
    }

    pub fn message(&self, event_name: &str) -> String {
        self.message_template.replace("{event}", event_name)
    }

    /// `{base}/{number}?text={message}`. Only the first `+` of the contact is dropped.
    pub fn link(&self, contact: &str, event_name: &str) -> String {
        let number = contact.replacen('+', "", 1);
        format!(
            "{}/{}?text={}",
            self.base_url.trim_end_matches('/'),
            number,
            encode_uri_component(&self.message(event_name))
        )
    }
}

/// Percent-encodes the UTF-8 bytes of `input` outside the unreserved set.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_link() {
        let link = ChatLinkBuilder::default().link("+918446522752", "Neon Nights Festival");
        assert_eq!(
            link,
            "https://wa.me/918446522752?text=Hi!%20I'm%20interested%20in%20booking%20tickets%20for%20\
             Neon%20Nights%20Festival.%20Can%20you%20help%20me%3F"
        );
    }

    #[test]
    fn test_only_first_plus_is_removed() {
        let builder = ChatLinkBuilder::new("https://chat.example/", "{event}");
        assert_eq!(builder.link("++91", "A&B"), "https://chat.example/+91?text=A%26B");
    }

    #[test]
    fn test_encodes_utf8_bytes() {
        assert_eq!(encode_uri_component("₹1,299"), "%E2%82%B91%2C299");
        assert_eq!(encode_uri_component("a-b_c.d!e~f*g'h(i)"), "a-b_c.d!e~f*g'h(i)");
    }
}
