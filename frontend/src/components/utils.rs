use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::NodeRef;

/// Reads an integer field the way `parseInt` does: leading whitespace is
/// skipped, an optional sign is honored, and parsing stops at the first
/// non-digit. `None` stands in for NaN and serializes as JSON `null`.
pub fn parse_int_value(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    let value = digits.parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// A tri-state select contributes `true` only for the literal value
/// `"true"`; `"false"` and the empty placeholder both read as `false`.
pub fn flag_from_select(value: &str) -> bool {
    value == "true"
}

pub fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value())
        .unwrap_or_default()
}

pub fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}
