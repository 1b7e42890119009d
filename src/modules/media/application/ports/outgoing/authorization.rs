use crate::auth::application::domain::entities::Principal;
use crate::media::application::domain::entities::MediaRecord;

/// Permit/deny decisions for the media resource.
///
/// Decisions are pure functions of principal role and record ownership, so
/// the port is synchronous. Every use case consults it before touching
/// either store.
pub trait AuthorizationPolicy: Send + Sync {
    /// May the principal create (`record == None`) or mutate/remove the
    /// given record?
    fn can_write(&self, principal: &Principal, record: Option<&MediaRecord>) -> bool;

    /// May the principal view the given record?
    fn can_read(&self, principal: &Principal, record: &MediaRecord) -> bool;

    /// May the principal call the listing operation at all?
    fn can_list(&self, principal: &Principal) -> bool;

    /// Does the principal's listing span every owner?
    fn can_view_all(&self, principal: &Principal) -> bool;
}
