//! Route patterns such as `/:tenantId/instance`

use super::RouteError;
use std::collections::BTreeMap;
use std::fmt;

/// Parameters captured from a path, keyed by placeholder name
pub type RouteParams = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern
///
/// Segments are separated by `/`. A segment starting with `:` captures exactly
/// one non-empty path segment; any other segment must match literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, RouteError> {
        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(RouteError::InvalidPattern(format!(
                "{}: must start with '/'",
                pattern
            )));
        };

        let mut segments = Vec::new();
        for part in rest.split('/') {
            match part.strip_prefix(':') {
                Some("") => {
                    return Err(RouteError::InvalidPattern(format!(
                        "{}: empty placeholder name",
                        pattern
                    )));
                }
                Some(name) => {
                    if segments.contains(&Segment::Param(name.to_string())) {
                        return Err(RouteError::InvalidPattern(format!(
                            "{}: placeholder :{} used twice",
                            pattern, name
                        )));
                    }
                    segments.push(Segment::Param(name.to_string()));
                }
                None => segments.push(Segment::Literal(part.to_string())),
            }
        }

        Ok(Self {
            raw: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether the pattern declares the given placeholder
    pub fn has_param(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Param(p) if p == name))
    }

    /// Match a normalized path, returning the captured parameters
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let rest = path.strip_prefix('/')?;
        let parts: Vec<&str> = rest.split('/').collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(literal) => {
                    if literal != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if part.is_empty() {
                        return None;
                    }
                    let value = urlencoding::decode(part)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| part.to_string());
                    params.insert(name.clone(), value);
                }
            }
        }
        Some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Strip query string, fragment and a single trailing slash from a path
pub fn normalize_path(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = path[..end].trim();

    let path = match path.strip_suffix('/') {
        Some(stripped) if !stripped.is_empty() => stripped,
        _ => path,
    };

    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rejects_relative_pattern() {
        assert!(RoutePattern::parse("tenant/:tenantId").is_err());
        assert!(RoutePattern::parse("/:/instance").is_err());
        assert!(RoutePattern::parse("/:a/:a").is_err());
    }

    #[test]
    fn test_match_captures_and_decodes() {
        let pattern = RoutePattern::parse("/:tenantId/instance").unwrap();
        assert!(pattern.has_param("tenantId"));

        let params = pattern.matches("/acme/instance").unwrap();
        assert_eq!(params.get("tenantId").map(String::as_str), Some("acme"));

        let params = pattern.matches("/acme%20corp/instance").unwrap();
        assert_eq!(params["tenantId"], "acme corp");
    }

    #[test]
    fn test_match_is_exact() {
        let pattern = RoutePattern::parse("/:tenantId/instance").unwrap();
        assert!(pattern.matches("/instance").is_none());
        assert!(pattern.matches("//instance").is_none());
        assert!(pattern.matches("/acme/Instance").is_none());
        assert!(pattern.matches("/acme/instance/extra").is_none());
        assert!(pattern.matches("/acme/instances").is_none());
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/acme/instance/"), "/acme/instance");
        assert_eq!(normalize_path("acme/cluster?x=1#top"), "/acme/cluster");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
    }
}
