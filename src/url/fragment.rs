//! Splitting and joining hash-route fragments (`#/route?query`).

/// A location fragment split into its route and query parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Route portion, without the leading `#` (e.g. `/` or `/map`).
    pub route: String,
    /// Query portion after the first `?`, without the `?` itself.
    pub query: String,
}

impl Fragment {
    /// Splits a raw fragment. The leading `#` is optional; a fragment with
    /// no `?` has an empty query.
    pub fn parse(raw: &str) -> Self {
        let body = raw.strip_prefix('#').unwrap_or(raw);
        match body.split_once('?') {
            Some((route, query)) => Self {
                route: route.to_string(),
                query: query.to_string(),
            },
            None => Self {
                route: body.to_string(),
                query: String::new(),
            },
        }
    }

    /// Rebuilds the fragment string, substituting `default_route` when the
    /// route is empty. The `?` is omitted when the query is empty.
    pub fn to_fragment_string(&self, default_route: &str) -> String {
        let route = if self.route.is_empty() {
            default_route
        } else {
            &self.route
        };

        if self.query.is_empty() {
            format!("#{}", route)
        } else {
            format!("#{}?{}", route, self.query)
        }
    }
}
