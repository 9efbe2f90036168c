//! Ordered route table

use std::borrow::Cow;
use std::cmp::Ordering;

use super::error::{RouteError, RouteResult};
use super::pattern::{Params, RoutePattern};

/// An ordered list of `(pattern, handler)` pairs, most specific first
#[derive(Debug, Clone)]
pub struct RouteTable<T> {
    entries: Vec<(RoutePattern, T)>,
}

/// The entry that answered a path, with its captured parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'a, T> {
    pub pattern: &'a RoutePattern,
    pub handler: &'a T,
    pub params: Params,
}

impl<T> Default for RouteTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> RouteTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern, keeping the table in precedence order
    ///
    /// Among patterns of equal precedence, earlier registrations stay first.
    pub fn insert(&mut self, pattern: &str, handler: T) -> RouteResult<()> {
        let pattern = RoutePattern::parse(pattern)?;

        if let Some((existing, _)) = self.entries.iter().find(|(p, _)| p.same_shape(&pattern)) {
            return Err(RouteError::Ambiguous {
                new: pattern.as_str().to_string(),
                existing: existing.as_str().to_string(),
            });
        }

        let position = self
            .entries
            .partition_point(|(p, _)| p.precedence(&pattern) != Ordering::Greater);
        self.entries.insert(position, (pattern, handler));
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn route(mut self, pattern: &str, handler: T) -> RouteResult<Self> {
        self.insert(pattern, handler)?;
        Ok(self)
    }

    /// First entry matching `path`
    ///
    /// Query string and fragment are ignored, as are empty segments.
    /// Segments are percent-decoded before comparison; a segment that does
    /// not decode to UTF-8 matches nothing.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch<'_, T>> {
        let segments = split_path(path)?;

        self.entries.iter().find_map(|(pattern, handler)| {
            pattern.matches(&segments).map(|params| RouteMatch {
                pattern,
                handler,
                params,
            })
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Split a request path into decoded, non-empty segments
fn split_path(path: &str) -> Option<Vec<Cow<'_, str>>> {
    let path = path
        .split(|c: char| c == '?' || c == '#')
        .next()
        .unwrap_or_default();

    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| urlencoding::decode(segment).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::new()
            .route("/", "home")
            .unwrap()
            .route("/projects/:id", "detail")
            .unwrap()
            .route("/projects", "list")
            .unwrap()
            .route("/projects/new", "new")
            .unwrap()
    }

    #[test]
    fn test_exact_match() {
        let table = table();
        assert_eq!(*table.match_path("/").unwrap().handler, "home");
        assert_eq!(*table.match_path("/projects").unwrap().handler, "list");
    }

    #[test]
    fn test_literal_wins_regardless_of_insertion_order() {
        let table = table();
        let matched = table.match_path("/projects/new").unwrap();
        assert_eq!(*matched.handler, "new");
        assert!(matched.params.is_empty());

        let matched = table.match_path("/projects/trex").unwrap();
        assert_eq!(*matched.handler, "detail");
        assert_eq!(matched.params.get("id"), Some("trex"));
    }

    #[test]
    fn test_patterns_sorted_most_specific_first() {
        let table = table();
        let order: Vec<_> = table.entries.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(order, vec!["/", "/projects", "/projects/new", "/projects/:id"]);
    }

    #[test]
    fn test_ambiguous_pattern_rejected() {
        let mut table = table();
        let err = table.insert("/projects/:slug", "other").unwrap_err();
        assert_eq!(
            err,
            RouteError::Ambiguous {
                new: "/projects/:slug".to_string(),
                existing: "/projects/:id".to_string(),
            }
        );

        assert!(table.insert("/projects/", "again").is_err());
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn test_path_normalization() {
        let table = table();
        assert_eq!(*table.match_path("/projects/").unwrap().handler, "list");
        assert_eq!(*table.match_path("//projects").unwrap().handler, "list");
        assert_eq!(*table.match_path("/projects?page=2").unwrap().handler, "list");
        assert_eq!(*table.match_path("/projects#top").unwrap().handler, "list");
        assert_eq!(*table.match_path("").unwrap().handler, "home");
    }

    #[test]
    fn test_params_are_percent_decoded() {
        let table = table();
        let matched = table.match_path("/projects/t%20rex").unwrap();
        assert_eq!(matched.params.get("id"), Some("t rex"));

        assert!(table.match_path("/projects/%FF").is_none());
    }

    #[test]
    fn test_unmatched() {
        let table = table();
        assert!(table.match_path("/nope").is_none());
        assert!(table.match_path("/projects/trex/edit").is_none());
        assert!(RouteTable::<()>::new().match_path("/").is_none());
    }
}
