//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// User roles, fixed at account creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Sales,
    Outlet,
    Warehouse,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Sales => "sales",
            Role::Outlet => "outlet",
            Role::Warehouse => "warehouse",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "admin" => Some(Role::Admin),
            "sales" => Some(Role::Sales),
            "outlet" => Some(Role::Outlet),
            "warehouse" => Some(Role::Warehouse),
            _ => None,
        }
    }

    /// Check whether this role may perform an action on a resource
    pub fn permits(&self, resource: Resource, action: Action) -> bool {
        capabilities(*self)
            .iter()
            .any(|p| p.resource == resource && p.actions.contains(&action))
    }
}

/// Resources that can be accessed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Product,
    Store,
    User,
    Stock,
    Sale,
    Distribution,
    Report,
}

/// Actions that can be performed on resources
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    View,
    Create,
    Edit,
    Delete,
}

/// A capability granting a set of actions on a resource
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Capability {
    pub resource: Resource,
    pub actions: Vec<Action>,
}

const ALL_ACTIONS: [Action; 4] = [Action::View, Action::Create, Action::Edit, Action::Delete];

/// Static role-to-capability table
///
/// Role gating is data, not code branches: handlers consult this table through
/// a single `require` check instead of matching on roles per route.
pub fn capabilities(role: Role) -> Vec<Capability> {
    fn cap(resource: Resource, actions: &[Action]) -> Capability {
        Capability {
            resource,
            actions: actions.to_vec(),
        }
    }

    match role {
        Role::Admin => [
            Resource::Product,
            Resource::Store,
            Resource::User,
            Resource::Stock,
            Resource::Sale,
            Resource::Distribution,
            Resource::Report,
        ]
        .into_iter()
        .map(|r| cap(r, &ALL_ACTIONS))
        .collect(),
        Role::Sales => vec![
            cap(Resource::Product, &[Action::View]),
            cap(Resource::Store, &[Action::View]),
            cap(Resource::Stock, &[Action::View]),
            cap(Resource::Sale, &[Action::View, Action::Create]),
            cap(Resource::Report, &[Action::View]),
        ],
        Role::Outlet => vec![
            cap(Resource::Product, &[Action::View]),
            cap(Resource::Store, &[Action::View]),
            cap(Resource::Stock, &[Action::View]),
            cap(Resource::Sale, &[Action::View]),
            cap(Resource::Distribution, &[Action::View]),
        ],
        Role::Warehouse => vec![
            cap(Resource::Product, &[Action::View]),
            cap(Resource::Store, &[Action::View]),
            cap(Resource::Stock, &[Action::View, Action::Edit]),
            cap(Resource::Distribution, &[Action::View, Action::Create, Action::Edit]),
        ],
    }
}

/// Distribution lifecycle status
///
/// The state machine is {pending -> completed}; completed is terminal and
/// there is no cancellation or reversal path.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DistributionStatus {
    Pending,
    Completed,
}

impl DistributionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DistributionStatus::Pending => "pending",
            DistributionStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<DistributionStatus> {
        match s {
            "pending" => Some(DistributionStatus::Pending),
            "completed" => Some(DistributionStatus::Completed),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DistributionStatus::Completed)
    }

    /// Whether a transition from this status to `to` is allowed
    pub fn can_transition_to(&self, to: DistributionStatus) -> bool {
        matches!(
            (self, to),
            (DistributionStatus::Pending, DistributionStatus::Completed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trip() {
        for role in [Role::Admin, Role::Sales, Role::Outlet, Role::Warehouse] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("gudang"), None);
    }

    #[test]
    fn status_transitions() {
        assert!(DistributionStatus::Pending.can_transition_to(DistributionStatus::Completed));
        assert!(!DistributionStatus::Completed.can_transition_to(DistributionStatus::Pending));
        assert!(!DistributionStatus::Completed.can_transition_to(DistributionStatus::Completed));
        assert!(DistributionStatus::Completed.is_terminal());
        assert!(!DistributionStatus::Pending.is_terminal());
    }
}
