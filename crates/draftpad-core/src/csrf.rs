//! CSRF token lookup over the page's form inputs.

/// Name of the hidden input the backend renders the token into.
pub const CSRF_FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Request header carrying the token.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Find the token among `(name, value)` pairs of input elements.
///
/// Takes the first input named `csrfmiddlewaretoken`. Returns an empty
/// string when there is none; the backend decides whether that is acceptable.
pub fn find_csrf_token<I, N, V>(inputs: I) -> String
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: Into<String>,
{
    inputs
        .into_iter()
        .find(|(name, _)| name.as_ref() == CSRF_FIELD_NAME)
        .map(|(_, value)| value.into())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_token() {
        let inputs = [
            ("title", "My post"),
            ("csrfmiddlewaretoken", "abc123"),
            ("published_at", ""),
        ];
        assert_eq!(find_csrf_token(inputs), "abc123");
    }

    #[test]
    fn test_first_match_wins() {
        let inputs = [("csrfmiddlewaretoken", "first"), ("csrfmiddlewaretoken", "second")];
        assert_eq!(find_csrf_token(inputs), "first");
    }

    #[test]
    fn test_missing_token_is_empty() {
        let inputs: [(&str, &str); 1] = [("title", "x")];
        assert_eq!(find_csrf_token(inputs), "");
        assert_eq!(find_csrf_token(Vec::<(String, String)>::new()), "");
    }
}
