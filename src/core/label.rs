use crate::core::errors::{Error, Result};

/*-------------------------------------------------------------------------------------------------
  Location Labels
-------------------------------------------------------------------------------------------------*/

/// A feed location label of the form `"<code> : <human name>"`, split into its parts.
///
/// Region and datacenter keys in the feed both use this form (e.g. `"1 : Americas"`,
/// `"10 : Atlanta II"`). Name-based filtering and all rendered output use the human name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Label<'a> {
    pub code: &'a str,
    pub name: &'a str,
}

/// Parse a location label. A label without the `" : "` separator is malformed input; the feed
/// guarantees the separator, so absence means the tree cannot be processed.
pub fn parse(label: &str) -> Result<Label<'_>> {
    let mut fields = label.splitn(3, " : ");
    match (fields.next(), fields.next()) {
        (Some(code), Some(name)) => Ok(Label { code, name }),
        _ => Err(Error::MalformedLabel(label.to_string())),
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label() {
        let label = parse("1 : Americas").unwrap();
        assert_eq!(label.code, "1");
        assert_eq!(label.name, "Americas");
    }

    #[test]
    fn test_parse_label_name_with_spaces() {
        let label = parse("142 : Atlanta II").unwrap();
        assert_eq!(label.code, "142");
        assert_eq!(label.name, "Atlanta II");
    }

    #[test]
    fn test_parse_label_multiple_separators() {
        // The name is the second ` : `-delimited field, matching the feed contract.
        let label = parse("1 : Americas : Extra").unwrap();
        assert_eq!(label.code, "1");
        assert_eq!(label.name, "Americas");
    }

    #[test]
    fn test_parse_label_missing_separator() {
        let error = parse("Americas").unwrap_err();
        assert!(matches!(error, Error::MalformedLabel(_)));
        assert!(error.to_string().contains("Americas"));
    }

    #[test]
    fn test_parse_label_plain_colon_is_not_a_separator() {
        assert!(parse("1:Americas").is_err());
    }
}
