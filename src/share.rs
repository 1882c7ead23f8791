use crate::selection::SelectionSet;

/// Query-parameter name carrying a shared selection.
pub const SELECTED_PARAM: &str = "selected";

/// Encode a selection as the `selected` parameter value. An empty selection
/// encodes to `None`: the parameter is omitted from the link entirely, never
/// present with an empty value.
pub fn encode(selection: &SelectionSet) -> Option<String> {
    if selection.is_empty() {
        return None;
    }
    let parts: Vec<String> = selection.ids().iter().map(|id| id.to_string()).collect();
    Some(parts.join(","))
}

/// Decode an incoming `selected` parameter value. Tokens that fail to parse
/// as ids are dropped; decoding never fails, a value with zero valid tokens
/// yields an empty selection, and an absent parameter means no selection.
pub fn decode(raw: Option<&str>) -> SelectionSet {
    let mut selection = SelectionSet::new();
    if let Some(raw) = raw {
        selection.replace_all(
            raw.split(',')
                .filter_map(|token| token.trim().parse::<i64>().ok()),
        );
    }
    selection
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_selection_omits_the_parameter() {
        assert_eq!(encode(&SelectionSet::new()), None);
        assert!(decode(None).is_empty());
    }

    #[test]
    fn encode_is_ascending_and_stable() {
        let mut sel = SelectionSet::new();
        sel.toggle(7);
        sel.toggle(2);
        sel.toggle(19);
        assert_eq!(encode(&sel), Some("2,7,19".to_string()));

        // Same membership reached by a different toggle order encodes
        // identically, so the host only rewrites the link on real change.
        let mut other = SelectionSet::new();
        other.replace_all([19, 7, 2]);
        assert_eq!(encode(&other), encode(&sel));
    }

    #[test]
    fn decode_drops_garbage_tokens() {
        let sel = decode(Some("3,foo,7,"));
        assert_eq!(sel.ids(), vec![3, 7]);
    }

    #[test]
    fn decode_tolerates_whitespace() {
        let sel = decode(Some(" 4 , 11"));
        assert_eq!(sel.ids(), vec![4, 11]);
    }

    #[test]
    fn all_garbage_decodes_to_empty() {
        assert!(decode(Some("a,b,,")).is_empty());
        assert!(decode(Some("")).is_empty());
    }

    #[test]
    fn roundtrip_preserves_membership() {
        let mut sel = SelectionSet::new();
        sel.replace_all([1, 5, 1000000, 42]);
        let encoded = encode(&sel).expect("non-empty encode");
        assert_eq!(decode(Some(&encoded)), sel);
    }
}
