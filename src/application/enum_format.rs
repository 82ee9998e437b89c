// src/application/enum_format.rs
use std::fmt::Display;

pub const ENUM_SEPARATOR: &str = "|";

/// Join the labels of `values` with `|`, keeping their order.
///
/// Labels are not escaped: a label that itself contains `|` renders
/// ambiguously.
pub fn enum_format<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(ENUM_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_labels_in_input_order() {
        assert_eq!(enum_format(["B", "A", "C"]), "B|A|C");
    }

    #[test]
    fn single_label_has_no_separator() {
        assert_eq!(enum_format(["ONLY"]), "ONLY");
    }

    #[test]
    fn labels_containing_separator_are_not_escaped() {
        assert_eq!(enum_format(["a|b", "c"]), "a|b|c");
    }

    #[test]
    fn empty_input_yields_empty_string() {
        assert_eq!(enum_format(Vec::<String>::new()), "");
    }

    #[test]
    fn uses_display_form() {
        assert_eq!(enum_format([1, 20, 3]), "1|20|3");
    }
}
