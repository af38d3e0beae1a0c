//! Authentication and capability table tests

use shared::types::{capabilities, Action, Resource, Role};
use shared::validation::{validate_email, validate_password};

// ============================================================================
// Capability Table
// ============================================================================

#[test]
fn admin_has_every_capability() {
    for resource in [
        Resource::Product,
        Resource::Store,
        Resource::User,
        Resource::Stock,
        Resource::Sale,
        Resource::Distribution,
        Resource::Report,
    ] {
        for action in [Action::View, Action::Create, Action::Edit, Action::Delete] {
            assert!(
                Role::Admin.permits(resource, action),
                "admin denied {:?}:{:?}",
                resource,
                action
            );
        }
    }
}

#[test]
fn sales_records_sales_but_cannot_administer() {
    assert!(Role::Sales.permits(Resource::Sale, Action::Create));
    assert!(Role::Sales.permits(Resource::Report, Action::View));
    assert!(!Role::Sales.permits(Resource::User, Action::View));
    assert!(!Role::Sales.permits(Resource::Product, Action::Create));
    assert!(!Role::Sales.permits(Resource::Distribution, Action::Create));
}

#[test]
fn warehouse_moves_stock_but_cannot_sell() {
    assert!(Role::Warehouse.permits(Resource::Distribution, Action::Create));
    assert!(Role::Warehouse.permits(Resource::Stock, Action::Edit));
    assert!(!Role::Warehouse.permits(Resource::Sale, Action::Create));
    assert!(!Role::Warehouse.permits(Resource::User, Action::Create));
}

#[test]
fn outlet_is_read_only() {
    let caps = capabilities(Role::Outlet);
    for cap in caps {
        assert_eq!(
            cap.actions,
            vec![Action::View],
            "outlet has non-view action on {:?}",
            cap.resource
        );
    }
}

#[test]
fn only_admin_manages_users() {
    for role in [Role::Sales, Role::Outlet, Role::Warehouse] {
        assert!(!role.permits(Resource::User, Action::Create));
        assert!(!role.permits(Resource::User, Action::Delete));
    }
    assert!(Role::Admin.permits(Resource::User, Action::Create));
}

#[test]
fn roles_parse_from_storage_form() {
    for role in [Role::Admin, Role::Sales, Role::Outlet, Role::Warehouse] {
        assert_eq!(Role::parse(role.as_str()), Some(role));
    }
    assert_eq!(Role::parse("superuser"), None);
    assert_eq!(Role::parse(""), None);
}

// ============================================================================
// Credential Validation
// ============================================================================

#[test]
fn email_validation() {
    assert!(validate_email("admin@example.com").is_ok());
    assert!(validate_email("a@b.c").is_ok());
    assert!(validate_email("no-at-sign.com").is_err());
    assert!(validate_email("x@y").is_err());
}

#[test]
fn password_strength() {
    assert!(validate_password("longenough").is_ok());
    assert!(validate_password("short").is_err());
    assert!(validate_password("").is_err());
}
