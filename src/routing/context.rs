use super::pattern::RouteParams;
use super::TENANT_PARAM;

/// CSS-style class templates use to highlight the active section
pub const ACTIVE_CLASS: &str = "active";

/// Immutable view of the current location handed to controllers and views
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteContext {
    path: String,
    params: RouteParams,
}

impl RouteContext {
    pub fn new(path: impl Into<String>, params: RouteParams) -> Self {
        Self {
            path: path.into(),
            params,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.param(TENANT_PARAM)
    }

    /// Whether `name` occurs in the current path, ignoring case
    pub fn is_active(&self, name: &str) -> bool {
        self.path.to_lowercase().contains(&name.to_lowercase())
    }

    /// `"active"` for the current section, nothing otherwise
    pub fn class_for(&self, name: &str) -> Option<&'static str> {
        self.is_active(name).then_some(ACTIVE_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(path: &str) -> RouteContext {
        RouteContext::new(path, RouteParams::new())
    }

    #[test]
    fn test_is_active_substring() {
        let ctx = context("/acme/instance");
        assert!(ctx.is_active("instance"));
        assert!(ctx.is_active("INSTANCE"));
        assert!(ctx.is_active("acme"));
        assert!(!ctx.is_active("cluster"));
    }

    #[test]
    fn test_class_for() {
        let ctx = context("/Acme/Cluster");
        assert_eq!(ctx.class_for("cluster"), Some("active"));
        assert_eq!(ctx.class_for("instance"), None);
    }

    #[test]
    fn test_tenant_id() {
        let mut params = RouteParams::new();
        params.insert("tenantId".to_string(), "acme".to_string());
        let ctx = RouteContext::new("/acme/instance", params);
        assert_eq!(ctx.tenant_id(), Some("acme"));
        assert_eq!(context("/").tenant_id(), None);
    }
}
