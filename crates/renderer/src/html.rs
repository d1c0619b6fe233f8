use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone
const COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// HTML-escape a string for text and attribute positions
///
/// Escapes: & < > " '
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode one URL component
pub fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, COMPONENT_ENCODE_SET).to_string()
}

/// Display form of a phone number: ten digits become `(xxx) xxx-xxxx`,
/// anything else is shown as entered.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 10 {
        return phone.trim().to_string();
    }
    format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
}

/// `tel:` target with only the characters a dialer understands
pub fn phone_link(phone: &str) -> String {
    let dialable: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    format!("tel:{}", dialable)
}

/// `mailto:` link with optional subject and body; `#` without an address
pub fn email_link(email: Option<&str>, subject: &str, body: &str) -> String {
    let Some(email) = email.map(str::trim).filter(|e| !e.is_empty()) else {
        return "#".to_string();
    };

    let mut params = Vec::new();
    if !subject.is_empty() {
        params.push(format!("subject={}", encode_component(subject)));
    }
    if !body.is_empty() {
        params.push(format!("body={}", encode_component(body)));
    }

    if params.is_empty() {
        format!("mailto:{}", email)
    } else {
        format!("mailto:{}?{}", email, params.join("&"))
    }
}

/// WhatsApp chat link with an optional prefilled message; `#` without a number
pub fn whatsapp_link(phone: Option<&str>, message: &str) -> String {
    let digits: String = phone
        .unwrap_or_default()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        return "#".to_string();
    }

    if message.is_empty() {
        format!("https://wa.me/{}", digits)
    } else {
        format!("https://wa.me/{}?text={}", digits, encode_component(message))
    }
}
