/// Turns a request error into something short enough for a snackbar.
///
/// Strips the transport prefixes the request layer adds and, when the
/// server answered with a JSON error body, keeps only its message.
pub fn format_error_message(error: &str) -> String {
    let mut message = error.trim();
    for prefix in ["Network error: ", "Error parsing JSON: ", "Error: "] {
        if let Some(rest) = message.strip_prefix(prefix) {
            message = rest.trim_start();
        }
    }

    if let Ok(body) = serde_json::from_str::<serde_json::Value>(message) {
        let detail = body
            .get("message")
            .or_else(|| body.get("detail"))
            .and_then(|value| value.as_str());
        if let Some(detail) = detail {
            return detail.to_string();
        }
    }

    message.to_string()
}
