//! Role-gated review moderation rules.
//!
//! The gates here mirror what the server enforces so the client can refuse
//! stale double-submissions without a round trip. They are not a security
//! boundary; the API performs the real authorization.

use crate::config::Role;
use crate::review::ReviewStatus;

/// Actions a tenant can take on their own review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TenantAction {
    Edit,
    Delete,
}

/// Owner moderation verbs, mapped to `/api/owner/reviews/{id}/{verb}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnerAction {
    Hide,
    Unhide,
}

/// Admin moderation verbs, mapped to `/api/admin/reviews/{id}/{verb}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    Hide,
    Unhide,
    Remove,
    Restore,
}

impl TenantAction {
    pub fn permitted(self, status: ReviewStatus) -> bool {
        match self {
            TenantAction::Edit => status == ReviewStatus::Published,
            TenantAction::Delete => {
                matches!(status, ReviewStatus::Published | ReviewStatus::Hidden)
            }
        }
    }
}

impl OwnerAction {
    pub fn permitted(self, status: ReviewStatus) -> bool {
        match self {
            OwnerAction::Hide => status == ReviewStatus::Published,
            OwnerAction::Unhide => status == ReviewStatus::Hidden,
        }
    }

    pub fn segment(self) -> &'static str {
        match self {
            OwnerAction::Hide => "hide",
            OwnerAction::Unhide => "unhide",
        }
    }

    /// The visibility toggle an owner gets for a review in `status`, if any.
    pub fn toggle_for(status: ReviewStatus) -> Option<OwnerAction> {
        match status {
            ReviewStatus::Published => Some(OwnerAction::Hide),
            ReviewStatus::Hidden => Some(OwnerAction::Unhide),
            ReviewStatus::Removed | ReviewStatus::RemovedByTenant => None,
        }
    }
}

impl AdminAction {
    pub fn permitted(self, status: ReviewStatus) -> bool {
        match self {
            AdminAction::Hide => status == ReviewStatus::Published,
            AdminAction::Unhide => status == ReviewStatus::Hidden,
            // REMOVED_BY_TENANT is terminal: nothing transitions out of it.
            AdminAction::Remove => {
                matches!(status, ReviewStatus::Published | ReviewStatus::Hidden)
            }
            AdminAction::Restore => status == ReviewStatus::Removed,
        }
    }

    pub fn segment(self) -> &'static str {
        match self {
            AdminAction::Hide => "hide",
            AdminAction::Unhide => "unhide",
            AdminAction::Remove => "remove",
            AdminAction::Restore => "restore",
        }
    }
}

/// Any moderation-workflow action, tagged by the role it belongs to. Used by
/// the UI to render the action row for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Tenant(TenantAction),
    Owner(OwnerAction),
    Admin(AdminAction),
}

impl ReviewAction {
    pub fn label(self) -> &'static str {
        match self {
            ReviewAction::Tenant(TenantAction::Edit) => "edit",
            ReviewAction::Tenant(TenantAction::Delete) => "delete",
            ReviewAction::Owner(OwnerAction::Hide) | ReviewAction::Admin(AdminAction::Hide) => {
                "hide"
            }
            ReviewAction::Owner(OwnerAction::Unhide)
            | ReviewAction::Admin(AdminAction::Unhide) => "unhide",
            ReviewAction::Admin(AdminAction::Remove) => "remove",
            ReviewAction::Admin(AdminAction::Restore) => "restore",
        }
    }
}

/// The actions `role` may take on a review in `status`.
pub fn available_actions(role: Role, status: ReviewStatus) -> Vec<ReviewAction> {
    match role {
        Role::Tenant => [TenantAction::Edit, TenantAction::Delete]
            .into_iter()
            .filter(|action| action.permitted(status))
            .map(ReviewAction::Tenant)
            .collect(),
        Role::Owner => [OwnerAction::Hide, OwnerAction::Unhide]
            .into_iter()
            .filter(|action| action.permitted(status))
            .map(ReviewAction::Owner)
            .collect(),
        Role::Admin => [
            AdminAction::Hide,
            AdminAction::Unhide,
            AdminAction::Remove,
            AdminAction::Restore,
        ]
        .into_iter()
        .filter(|action| action.permitted(status))
        .map(ReviewAction::Admin)
        .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::review::ReviewStatus::*;

    #[test]
    fn tenant_edits_only_published() {
        assert!(TenantAction::Edit.permitted(Published));
        assert!(!TenantAction::Edit.permitted(Hidden));
        assert!(!TenantAction::Edit.permitted(Removed));
        assert!(!TenantAction::Edit.permitted(RemovedByTenant));
    }

    #[test]
    fn tenant_deletes_published_or_hidden() {
        assert!(TenantAction::Delete.permitted(Published));
        assert!(TenantAction::Delete.permitted(Hidden));
        assert!(!TenantAction::Delete.permitted(Removed));
        assert!(!TenantAction::Delete.permitted(RemovedByTenant));
    }

    #[test]
    fn owner_toggle_matches_current_status() {
        assert_eq!(OwnerAction::toggle_for(Published), Some(OwnerAction::Hide));
        assert_eq!(OwnerAction::toggle_for(Hidden), Some(OwnerAction::Unhide));
        assert_eq!(OwnerAction::toggle_for(Removed), None);
        assert_eq!(OwnerAction::toggle_for(RemovedByTenant), None);
    }

    #[test]
    fn admin_restore_only_from_removed() {
        assert!(AdminAction::Restore.permitted(Removed));
        assert!(!AdminAction::Restore.permitted(Published));
        assert!(!AdminAction::Restore.permitted(Hidden));
        assert!(!AdminAction::Restore.permitted(RemovedByTenant));
    }

    #[test]
    fn removed_by_tenant_is_terminal_for_every_role() {
        for role in [Role::Tenant, Role::Owner, Role::Admin] {
            assert!(available_actions(role, RemovedByTenant).is_empty());
        }
    }

    #[test]
    fn action_table_matches_state_machine() {
        assert_eq!(
            available_actions(Role::Admin, Published),
            vec![
                ReviewAction::Admin(AdminAction::Hide),
                ReviewAction::Admin(AdminAction::Remove)
            ]
        );
        assert_eq!(
            available_actions(Role::Admin, Hidden),
            vec![
                ReviewAction::Admin(AdminAction::Unhide),
                ReviewAction::Admin(AdminAction::Remove)
            ]
        );
        assert_eq!(
            available_actions(Role::Admin, Removed),
            vec![ReviewAction::Admin(AdminAction::Restore)]
        );
        assert_eq!(
            available_actions(Role::Owner, Published),
            vec![ReviewAction::Owner(OwnerAction::Hide)]
        );
        assert_eq!(
            available_actions(Role::Tenant, Published),
            vec![
                ReviewAction::Tenant(TenantAction::Edit),
                ReviewAction::Tenant(TenantAction::Delete)
            ]
        );
        assert_eq!(
            available_actions(Role::Tenant, Hidden),
            vec![ReviewAction::Tenant(TenantAction::Delete)]
        );
    }
}
