//! Composite identifier parsing.

/// Id prefix of a composite `"<id>:<rest>"` identifier, such as the
/// `"5:Plate"` values the browser uses for object types.
///
/// Input without a colon is returned unchanged.
pub fn id_from(composite: &str) -> &str {
    composite
        .split_once(':')
        .map_or(composite, |(id, _)| id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_before_first_colon() {
        assert_eq!(id_from("5:Plate"), "5");
        assert_eq!(id_from("12:96 Well: Plate"), "12");
    }

    #[test]
    fn test_no_colon_passes_through() {
        assert_eq!(id_from("noColon"), "noColon");
        assert_eq!(id_from(""), "");
    }

    #[test]
    fn test_leading_colon_gives_empty_id() {
        assert_eq!(id_from(":rest"), "");
    }
}
