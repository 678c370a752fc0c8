//! # Request Normalizer
//!
//! Turns raw `(name, value)` form fields into a [`TradeRequest`].
//!
//! Rules, applied per field:
//!
//! - Values are trimmed; empty values are dropped.
//! - `s`, `t`, `d` and `c` must parse as a non-negative integer; anything
//!   else is dropped.
//! - A recognized flag name is set only when its value is exactly `true`.
//! - Any other field name is dropped.
//! - When a name repeats, the last usable value wins.
//!
//! A request with no surviving field is [`ApplicationError::EmptyRequest`].

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::TradeRequest;
use crate::domain::value_objects::ResourceKind;
use std::collections::BTreeSet;
use tracing::debug;

/// The only value that sets a flag.
pub const TRUE_TOKEN: &str = "true";

/// Normalizes raw form fields into a trade request.
///
/// # Arguments
///
/// * `fields` - Raw `(name, value)` pairs, in submission order
/// * `recognized_flags` - Flag names the solver understands
///
/// # Errors
///
/// Returns `ApplicationError::EmptyRequest` if no field survives.
pub fn normalize<I, K, V>(
    fields: I,
    recognized_flags: &BTreeSet<String>,
) -> ApplicationResult<TradeRequest>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut request = TradeRequest::new();

    for (name, value) in fields {
        let name = name.as_ref().trim();
        let value = value.as_ref().trim();

        if value.is_empty() {
            debug!(field = name, "dropping empty field");
            continue;
        }

        if let Some(kind) = ResourceKind::from_field_name(name) {
            match parse_count(value) {
                Some(count) => request.set_holding(kind, count),
                None => debug!(field = name, value, "dropping unparseable count"),
            }
        } else if recognized_flags.contains(name) {
            if value == TRUE_TOKEN {
                request.set_flag(name);
            } else {
                debug!(field = name, value, "dropping flag without true value");
            }
        } else {
            debug!(field = name, "dropping unrecognized field");
        }
    }

    if request.is_empty() {
        return Err(ApplicationError::EmptyRequest);
    }
    Ok(request)
}

/// Parses a plain decimal count. Signs, fractions and exponents are refused.
fn parse_count(value: &str) -> Option<u32> {
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn flags() -> BTreeSet<String> {
        ["shell_modifier", "tool_modifier"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    mod holdings {
        use super::*;

        #[test]
        fn parses_counts() {
            let request = normalize([("s", "3"), ("t", "2"), ("d", "0")], &flags()).unwrap();
            assert_eq!(request.holding(ResourceKind::Shard), Some(3));
            assert_eq!(request.holding(ResourceKind::Tool), Some(2));
            assert_eq!(request.holding(ResourceKind::Demon), Some(0));
            assert_eq!(request.holding(ResourceKind::Crystal), None);
        }

        #[test]
        fn trims_whitespace() {
            let request = normalize([(" c ", " 4 ")], &flags()).unwrap();
            assert_eq!(request.holding(ResourceKind::Crystal), Some(4));
        }

        #[test]
        fn drops_unparseable_counts() {
            let request =
                normalize([("s", "3.5"), ("t", "-1"), ("d", "+2"), ("c", "two"), ("s", "1")], &flags())
                    .unwrap();
            assert_eq!(request.holding(ResourceKind::Shard), Some(1));
            assert_eq!(request.field_count(), 1);
        }

        #[test]
        fn drops_overflowing_count() {
            let err = normalize([("s", "99999999999")], &flags()).unwrap_err();
            assert_eq!(err, ApplicationError::EmptyRequest);
        }

        #[test]
        fn last_value_wins() {
            let request = normalize([("s", "1"), ("s", "5"), ("s", "")], &flags()).unwrap();
            assert_eq!(request.holding(ResourceKind::Shard), Some(5));
        }
    }

    mod flags {
        use super::*;

        #[test]
        fn true_sets_flag() {
            let request = normalize([("tool_modifier", "true")], &flags()).unwrap();
            assert!(request.has_flag("tool_modifier"));
            assert!(!request.has_flag("shell_modifier"));
        }

        #[test]
        fn other_values_are_dropped() {
            let err = normalize(
                [("tool_modifier", "false"), ("shell_modifier", "TRUE"), ("shell_modifier", "1")],
                &flags(),
            )
            .unwrap_err();
            assert_eq!(err, ApplicationError::EmptyRequest);
        }

        #[test]
        fn unrecognized_flag_is_dropped() {
            let request = normalize([("turbo", "true"), ("d", "2")], &flags()).unwrap();
            assert!(!request.has_flag("turbo"));
            assert_eq!(request.field_count(), 1);
        }
    }

    #[test]
    fn empty_input_is_empty_request() {
        let fields: Vec<(String, String)> = Vec::new();
        assert_eq!(
            normalize(fields, &flags()).unwrap_err(),
            ApplicationError::EmptyRequest
        );
    }

    #[test]
    fn blank_values_only_is_empty_request() {
        let err = normalize([("s", ""), ("t", "   ")], &flags()).unwrap_err();
        assert_eq!(err, ApplicationError::EmptyRequest);
    }

    #[test]
    fn owned_strings_are_accepted() {
        let fields = vec![("s".to_string(), "2".to_string())];
        let request = normalize(fields, &flags()).unwrap();
        assert_eq!(request.holding(ResourceKind::Shard), Some(2));
    }
}
