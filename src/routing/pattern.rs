//! Route patterns and captured parameters

use std::borrow::Cow;
use std::cmp::Ordering;

use super::error::{RouteError, RouteResult};

/// One path segment of a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly
    Literal(String),
    /// Captures the path segment under this name
    Param(String),
}

impl Segment {
    fn is_param(&self) -> bool {
        matches!(self, Segment::Param(_))
    }
}

/// A parsed pattern such as `/projects/:id`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parse a pattern; empty segments are ignored, so `/about/` == `/about`
    pub fn parse(raw: &str) -> RouteResult<Self> {
        let rest = raw
            .strip_prefix('/')
            .ok_or_else(|| RouteError::MissingLeadingSlash(raw.to_string()))?;

        let mut segments: Vec<Segment> = Vec::new();
        for part in rest.split('/').filter(|s| !s.is_empty()) {
            match part.strip_prefix(':') {
                Some("") => return Err(RouteError::EmptyParam(raw.to_string())),
                Some(name) => {
                    let repeated = segments
                        .iter()
                        .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                    if repeated {
                        return Err(RouteError::DuplicateParam {
                            pattern: raw.to_string(),
                            name: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// True when both patterns match exactly the same set of paths
    pub fn same_shape(&self, other: &RoutePattern) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    (Segment::Param(_), Segment::Param(_)) => true,
                    _ => false,
                })
    }

    /// Precedence order: `Less` means `self` is tried first
    ///
    /// At the first position where one pattern has a literal and the other
    /// a parameter, the literal wins. Otherwise the shorter pattern sorts
    /// first; patterns of different lengths never match the same path.
    pub fn precedence(&self, other: &RoutePattern) -> Ordering {
        let mine = self.segments.iter().map(Segment::is_param);
        let theirs = other.segments.iter().map(Segment::is_param);
        mine.cmp(theirs)
    }

    /// Match already-split, decoded path segments
    pub fn matches(&self, path: &[Cow<'_, str>]) -> Option<Params> {
        if path.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::default();
        for (segment, value) in self.segments.iter().zip(path) {
            match segment {
                Segment::Literal(literal) if literal.as_str() == &**value => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => params.push(name, value.as_ref()),
            }
        }

        Some(params)
    }
}

impl std::fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parameters captured by a match, in pattern order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    fn push(&mut self, name: &str, value: &str) {
        self.0.push((name.to_string(), value.to_string()));
    }

    /// Value bound to `name`, if the pattern declared it
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(parts: &[&'static str]) -> Vec<Cow<'static, str>> {
        parts.iter().map(|p| Cow::Borrowed(*p)).collect()
    }

    #[test]
    fn test_parse_root() {
        let pattern = RoutePattern::parse("/").unwrap();
        assert!(pattern.segments().is_empty());
        assert_eq!(pattern.as_str(), "/");
    }

    #[test]
    fn test_parse_param() {
        let pattern = RoutePattern::parse("/projects/:id").unwrap();
        assert_eq!(
            pattern.segments(),
            &[
                Segment::Literal("projects".to_string()),
                Segment::Param("id".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            RoutePattern::parse("about"),
            Err(RouteError::MissingLeadingSlash("about".to_string()))
        );
        assert_eq!(
            RoutePattern::parse("/projects/:"),
            Err(RouteError::EmptyParam("/projects/:".to_string()))
        );
        assert!(matches!(
            RoutePattern::parse("/:id/:id"),
            Err(RouteError::DuplicateParam { .. })
        ));
    }

    #[test]
    fn test_matches_captures_params() {
        let pattern = RoutePattern::parse("/projects/:id").unwrap();

        let params = pattern.matches(&segments(&["projects", "trex"])).unwrap();
        assert_eq!(params.get("id"), Some("trex"));
        assert_eq!(params.len(), 1);

        assert!(pattern.matches(&segments(&["projects"])).is_none());
        assert!(pattern.matches(&segments(&["about", "trex"])).is_none());
        assert!(pattern
            .matches(&segments(&["projects", "trex", "extra"]))
            .is_none());
    }

    #[test]
    fn test_same_shape() {
        let a = RoutePattern::parse("/projects/:id").unwrap();
        let b = RoutePattern::parse("/projects/:slug").unwrap();
        let c = RoutePattern::parse("/projects/new").unwrap();

        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&c));
    }

    #[test]
    fn test_literal_precedes_param() {
        let exact = RoutePattern::parse("/projects/new").unwrap();
        let param = RoutePattern::parse("/projects/:id").unwrap();

        assert_eq!(exact.precedence(&param), Ordering::Less);
        assert_eq!(param.precedence(&exact), Ordering::Greater);

        let left = RoutePattern::parse("/a/:b").unwrap();
        let right = RoutePattern::parse("/:a/b").unwrap();
        assert_eq!(left.precedence(&right), Ordering::Less);
    }
}
