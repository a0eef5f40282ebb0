//! Layered header merging.
//!
//! Layers are applied lowest precedence first. A later layer replaces any
//! earlier header with the same name (ASCII case-insensitive); the position
//! of the replaced header is kept so output order stays stable.

/// A set of headers in insertion order.
pub type Headers = Vec<(String, String)>;

/// Merges `overrides` on top of `base`.
pub fn merge_headers(base: &[(String, String)], overrides: &[(String, String)]) -> Headers {
    let mut result: Headers = base.to_vec();
    for (key, value) in overrides {
        set_header(&mut result, key, value);
    }
    result
}

/// Folds any number of layers, lowest precedence first.
pub fn merge_layers<'a, I>(layers: I) -> Headers
where
    I: IntoIterator<Item = &'a [(String, String)]>,
{
    layers
        .into_iter()
        .fold(Vec::new(), |acc, layer| merge_headers(&acc, layer))
}

/// Inserts or replaces a single header.
pub fn set_header(headers: &mut Headers, key: &str, value: &str) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(key)) {
        Some(slot) => *slot = (key.to_string(), value.to_string()),
        None => headers.push((key.to_string(), value.to_string())),
    }
}

/// Removes a header regardless of case.
pub fn remove_header(headers: &mut Headers, key: &str) {
    headers.retain(|(k, _)| !k.eq_ignore_ascii_case(key));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn h(pairs: &[(&str, &str)]) -> Headers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn later_layers_win() {
        let client = h(&[("X", "1")]);
        let verb = h(&[("X", "2"), ("Y", "1")]);
        let call = h(&[("Y", "2")]);
        let merged = merge_layers([client.as_slice(), verb.as_slice(), call.as_slice()]);
        assert_eq!(merged, h(&[("X", "2"), ("Y", "2")]));
    }

    #[test]
    fn names_compare_case_insensitively() {
        let merged = merge_headers(
            &h(&[("Content-Type", "text/plain")]),
            &h(&[("content-type", "application/json")]),
        );
        assert_eq!(merged, h(&[("content-type", "application/json")]));
    }

    #[test]
    fn empty_layers_are_noops() {
        let base = h(&[("A", "1")]);
        assert_eq!(merge_headers(&base, &[]), base);
        assert_eq!(merge_layers(std::iter::empty()), Headers::new());
    }

    #[test]
    fn remove_ignores_case() {
        let mut headers = h(&[("Authorization", "Bearer x"), ("Accept", "*/*")]);
        remove_header(&mut headers, "authorization");
        assert_eq!(headers, h(&[("Accept", "*/*")]));
    }
}
