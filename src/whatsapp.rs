/// Company WhatsApp number, international format without `+`.
pub const DEFAULT_NUMBER: &str = "31626625190";

/// Keep only the digits of a phone number, as `wa.me` expects.
fn normalize_number(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

/// Link that opens a chat with `number`.
pub fn chat_url(number: &str) -> String {
    format!("https://wa.me/{}", normalize_number(number))
}

/// Link that opens a chat with `number` and `message` pre-filled.
pub fn message_url(number: &str, message: &str) -> String {
    format!("{}?text={}", chat_url(number), urlencoding::encode(message))
}
