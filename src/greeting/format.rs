// Greeting formatter

pub const SALUTATION: &str = "Vanakam";
pub const DEFAULT_NAME: &str = "World";

/// Compose the greeting message.
///
/// Both names present: `"Vanakam {last}, {first}"`, trimmed. Otherwise the
/// default `"Vanakam World"`. Empty strings count as absent.
pub fn compose_message(first_name: Option<&str>, last_name: Option<&str>) -> String {
    fn present(name: Option<&str>) -> Option<&str> {
        name.filter(|n| !n.is_empty())
    }

    match (present(first_name), present(last_name)) {
        (Some(first), Some(last)) => format!("{SALUTATION} {last}, {first}").trim().to_string(),
        _ => format!("{SALUTATION} {DEFAULT_NAME}"),
    }
}
