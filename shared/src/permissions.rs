//! Permission Definitions
//!
//! Named capabilities gating UI actions and navigation. The backend is
//! the authorization truth; this catalog exists so the client can gate
//! screens without re-deriving role logic at each call site.

/// All known permission names
pub const ALL_PERMISSIONS: &[&str] = &[
    "view_dashboard",
    "manage_products",
    "manage_sales",
    "view_analytics",
    "manage_users",
    "manage_settings",
    "pos_access",
    "view_reports",
];

/// Fixed role enumeration
pub const ROLES: &[&str] = &["admin", "manager", "staff"];

/// Admin role default permissions (everything)
pub const DEFAULT_ADMIN_PERMISSIONS: &[&str] = ALL_PERMISSIONS;

/// Manager role default permissions (no user or settings administration)
pub const DEFAULT_MANAGER_PERMISSIONS: &[&str] = &[
    "view_dashboard",
    "manage_products",
    "manage_sales",
    "view_analytics",
    "pos_access",
    "view_reports",
];

/// Staff role default permissions (checkout only)
pub const DEFAULT_STAFF_PERMISSIONS: &[&str] = &["view_dashboard", "pos_access"];

/// Get default permissions for a role name
pub fn default_permissions(role: &str) -> Vec<String> {
    let defaults: &[&str] = match role {
        "admin" => DEFAULT_ADMIN_PERMISSIONS,
        "manager" => DEFAULT_MANAGER_PERMISSIONS,
        "staff" => DEFAULT_STAFF_PERMISSIONS,
        _ => &[],
    };
    defaults.iter().map(|s| s.to_string()).collect()
}

/// Validate if a permission string is known
pub fn is_valid_permission(permission: &str) -> bool {
    ALL_PERMISSIONS.contains(&permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_permissions_per_role() {
        assert_eq!(default_permissions("admin").len(), ALL_PERMISSIONS.len());
        assert!(default_permissions("manager").contains(&"pos_access".to_string()));
        assert!(!default_permissions("manager").contains(&"manage_users".to_string()));
        assert_eq!(
            default_permissions("staff"),
            vec!["view_dashboard".to_string(), "pos_access".to_string()]
        );
        assert!(default_permissions("unknown").is_empty());
    }

    #[test]
    fn test_is_valid_permission() {
        assert!(is_valid_permission("manage_products"));
        assert!(!is_valid_permission("manage_everything"));
    }

    #[test]
    fn test_role_defaults_are_valid() {
        for role in ROLES {
            for permission in default_permissions(role) {
                assert!(is_valid_permission(&permission), "{role}: {permission}");
            }
        }
    }
}
