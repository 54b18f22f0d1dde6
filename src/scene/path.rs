//! USD-style prim paths
//!
//! Hierarchy lives in the path itself: `/car/wheel_fl/geo` is a direct
//! child of `/car/wheel_fl`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Absolute, `/`-separated path to a prim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrimPath(String);

impl PrimPath {
    /// The pseudo-root above all prims.
    pub fn root() -> Self {
        PrimPath("/".to_string())
    }

    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        debug_assert!(path.starts_with('/'), "prim paths are absolute: {}", path);
        PrimPath(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last path component; empty for the pseudo-root.
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Parent path, or `None` for the pseudo-root.
    pub fn parent(&self) -> Option<PrimPath> {
        if self.0 == "/" {
            return None;
        }
        match self.0.rfind('/') {
            Some(0) => Some(PrimPath::root()),
            Some(idx) => Some(PrimPath(self.0[..idx].to_string())),
            None => None,
        }
    }

    /// Path of a direct child with the given name.
    pub fn child(&self, name: &str) -> PrimPath {
        if self.0 == "/" {
            PrimPath(format!("/{}", name))
        } else {
            PrimPath(format!("{}/{}", self.0, name))
        }
    }

    /// Whether `self` is `ancestor` or lies somewhere underneath it.
    pub fn has_prefix(&self, ancestor: &PrimPath) -> bool {
        if ancestor.0 == "/" {
            return true;
        }
        match self.0.strip_prefix(ancestor.0.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl fmt::Display for PrimPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PrimPath {
    fn from(path: &str) -> Self {
        PrimPath::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_parent() {
        let path = PrimPath::new("/model/wheel/geo");
        assert_eq!(path.name(), "geo");
        assert_eq!(path.parent(), Some(PrimPath::new("/model/wheel")));
        assert_eq!(PrimPath::new("/model").parent(), Some(PrimPath::root()));
        assert_eq!(PrimPath::root().parent(), None);
    }

    #[test]
    fn test_child() {
        assert_eq!(PrimPath::root().child("model"), PrimPath::new("/model"));
        assert_eq!(
            PrimPath::new("/model").child("geo_xform"),
            PrimPath::new("/model/geo_xform")
        );
    }

    #[test]
    fn test_has_prefix() {
        let leaf = PrimPath::new("/model/wheel/geo");
        assert!(leaf.has_prefix(&PrimPath::new("/model/wheel")));
        assert!(leaf.has_prefix(&PrimPath::new("/model/wheel/geo")));
        assert!(leaf.has_prefix(&PrimPath::root()));
        // Sibling with a common name prefix is not an ancestor
        assert!(!leaf.has_prefix(&PrimPath::new("/model/whee")));
        assert!(!PrimPath::new("/model").has_prefix(&leaf));
    }
}
