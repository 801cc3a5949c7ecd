use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one isolated account session.
///
/// Always positive. Serializes as a bare integer so the registry file stays
/// `{"ids":[3,7]}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(u32);

impl SessionId {
    /// The first identifier handed out when no session exists yet.
    pub const FIRST: SessionId = SessionId(1);

    /// Wrap a raw value. Returns `None` for zero.
    pub fn new(raw: u32) -> Option<Self> {
        (raw > 0).then_some(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Name of the storage partition backing this session.
    pub fn partition_name(self) -> String {
        format!("session-{}", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocate the identifier for a new session: `max(existing) + 1`, or
/// [`SessionId::FIRST`] when there are none. `None` once `u32::MAX` is taken.
pub fn next_session_id<'a, I>(existing: I) -> Option<SessionId>
where
    I: IntoIterator<Item = &'a SessionId>,
{
    match existing.into_iter().map(|id| id.0).max() {
        Some(max) => max.checked_add(1).map(SessionId),
        None => Some(SessionId::FIRST),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u32]) -> Vec<SessionId> {
        raw.iter().filter_map(|r| SessionId::new(*r)).collect()
    }

    #[test]
    fn zero_is_not_a_session_id() {
        assert!(SessionId::new(0).is_none());
        assert_eq!(SessionId::new(4).map(SessionId::get), Some(4));
    }

    #[test]
    fn next_id_after_existing_is_max_plus_one() {
        assert_eq!(next_session_id(&ids(&[3, 7])).map(SessionId::get), Some(8));
        assert_eq!(next_session_id(&ids(&[7, 3])).map(SessionId::get), Some(8));
    }

    #[test]
    fn next_id_with_no_sessions_is_one() {
        assert_eq!(next_session_id(&ids(&[])), Some(SessionId::FIRST));
    }

    #[test]
    fn next_id_never_reissues_the_largest_id() {
        assert_eq!(next_session_id(&ids(&[2, u32::MAX])), None);
        assert_eq!(
            next_session_id(&ids(&[u32::MAX - 1])).map(SessionId::get),
            Some(u32::MAX)
        );
    }

    #[test]
    fn next_id_ignores_gaps() {
        // Removed ids are not reissued while a higher one is alive.
        assert_eq!(next_session_id(&ids(&[1, 5])).map(SessionId::get), Some(6));
    }

    #[test]
    fn serializes_as_bare_integer() {
        let id = SessionId::new(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
        let parsed: SessionId = serde_json::from_str("12").unwrap();
        assert_eq!(parsed.get(), 12);
    }

    #[test]
    fn partition_name_is_keyed_by_id() {
        assert_eq!(SessionId::new(9).unwrap().partition_name(), "session-9");
    }
}
