use crate::auth::application::domain::entities::{Principal, UserRole};
use crate::media::application::domain::entities::MediaRecord;
use crate::media::application::ports::outgoing::authorization::AuthorizationPolicy;

/// Role/ownership decisions for the media resource.
///
/// Read scope equals write scope: an author only ever sees their own
/// records. Widening reads to all authors is a policy change here, not a
/// service change.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleMediaAccessPolicy;

impl RoleMediaAccessPolicy {
    pub fn new() -> Self {
        Self
    }

    fn owns(principal: &Principal, record: &MediaRecord) -> bool {
        principal.id == record.owner_id
    }
}

impl AuthorizationPolicy for RoleMediaAccessPolicy {
    fn can_write(&self, principal: &Principal, record: Option<&MediaRecord>) -> bool {
        match principal.role {
            UserRole::Admin => true,
            UserRole::Author => match record {
                // Creation: any author may add media
                None => true,
                Some(record) => Self::owns(principal, record),
            },
            UserRole::Guest => false,
        }
    }

    fn can_read(&self, principal: &Principal, record: &MediaRecord) -> bool {
        match principal.role {
            UserRole::Admin => true,
            UserRole::Author => Self::owns(principal, record),
            UserRole::Guest => false,
        }
    }

    fn can_list(&self, principal: &Principal) -> bool {
        matches!(principal.role, UserRole::Admin | UserRole::Author)
    }

    fn can_view_all(&self, principal: &Principal) -> bool {
        matches!(principal.role, UserRole::Admin)
    }
}
