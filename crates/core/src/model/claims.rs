use crate::model::UserId;

/// The two session-token claims the client reads.
///
/// Everything else in the token is opaque here; issuance and signature
/// verification happen on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaims {
    expires_at_ms: i64,
    subject: UserId,
}

impl SessionClaims {
    #[must_use]
    pub fn new(expires_at_ms: i64, subject: UserId) -> Self {
        Self {
            expires_at_ms,
            subject,
        }
    }

    /// Absolute expiry instant in Unix epoch milliseconds.
    #[must_use]
    pub fn expires_at_ms(&self) -> i64 {
        self.expires_at_ms
    }

    #[must_use]
    pub fn subject(&self) -> &UserId {
        &self.subject
    }

    /// A token expiring exactly at `now_ms` is already expired.
    #[must_use]
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        self.expires_at_ms <= now_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_boundary_is_inclusive() {
        let claims = SessionClaims::new(1_000, UserId::new("u1").unwrap());
        assert!(!claims.is_expired_at(999));
        assert!(claims.is_expired_at(1_000));
        assert!(claims.is_expired_at(2_000));
    }
}
