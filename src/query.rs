/// Launch query string parsing
///
/// The viewer accepts an optional query string as its first command-line
/// argument, e.g. `image-fetcher "image=5"` or `image-fetcher "?imagelink=true"`.
/// Two parameters are recognized:
/// - `image`: index of the image to fetch as raw bytes
/// - `imagelink`: fetch through the link API instead (takes precedence)

/// The two optional parameters read once at startup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    pub image: Option<String>,
    pub imagelink: Option<String>,
}

/// Which fetch (if any) the query string selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchPlan {
    /// Fetch a URL from the link API, then display it
    Link(String),
    /// Fetch raw image bytes directly
    Image(String),
    /// No parameters: show the Spacebar prompt
    Idle,
}

/// Parse a query string into its recognized parameters.
///
/// A leading `?` is tolerated. A key without `=` counts as present with an
/// empty value. The first occurrence of a key wins; unknown keys are ignored.
pub fn parse(query: &str) -> QueryParams {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut params = QueryParams::default();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, value),
            None => (pair, ""),
        };
        match key {
            "image" if params.image.is_none() => params.image = Some(value.to_string()),
            "imagelink" if params.imagelink.is_none() => {
                params.imagelink = Some(value.to_string())
            }
            _ => {}
        }
    }

    params
}

impl QueryParams {
    /// Decide which fetch the parameters select.
    ///
    /// `imagelink` presence (with any value, even empty) beats `image`;
    /// an empty `image` value selects nothing.
    pub fn plan(&self) -> FetchPlan {
        if let Some(value) = &self.imagelink {
            return FetchPlan::Link(value.clone());
        }
        match &self.image {
            Some(value) if !value.is_empty() => FetchPlan::Image(value.clone()),
            _ => FetchPlan::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_param() {
        let params = parse("image=5");
        assert_eq!(params.image.as_deref(), Some("5"));
        assert_eq!(params.imagelink, None);
    }

    #[test]
    fn test_parse_tolerates_leading_question_mark() {
        let params = parse("?image=3");
        assert_eq!(params.image.as_deref(), Some("3"));
    }

    #[test]
    fn test_bare_key_counts_as_present() {
        let params = parse("imagelink");
        assert_eq!(params.imagelink.as_deref(), Some(""));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = parse("image=1&image=2");
        assert_eq!(params.image.as_deref(), Some("1"));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params = parse("foo=bar&image=7&baz");
        assert_eq!(params.image.as_deref(), Some("7"));
        assert_eq!(params.imagelink, None);
    }

    #[test]
    fn test_empty_query_is_idle() {
        assert_eq!(parse("").plan(), FetchPlan::Idle);
        assert_eq!(parse("?").plan(), FetchPlan::Idle);
    }

    #[test]
    fn test_image_param_selects_binary_fetch() {
        assert_eq!(parse("image=5").plan(), FetchPlan::Image("5".to_string()));
    }

    #[test]
    fn test_imagelink_takes_precedence_over_image() {
        let plan = parse("image=5&imagelink=true").plan();
        assert_eq!(plan, FetchPlan::Link("true".to_string()));
    }

    #[test]
    fn test_imagelink_alone_selects_link_fetch() {
        assert_eq!(
            parse("imagelink=1").plan(),
            FetchPlan::Link("1".to_string())
        );
    }

    #[test]
    fn test_empty_image_value_is_idle() {
        assert_eq!(parse("image=").plan(), FetchPlan::Idle);
    }
}
