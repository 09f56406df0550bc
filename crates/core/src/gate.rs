//! Render-or-redirect decisions for protected and guest pages.

use tracing::debug;

use crate::model::SessionClaims;
use crate::token::TokenDecoder;

/// Symbolic navigation targets; the router maps them onto views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    SignIn,
    Home,
    Onboarding,
}

/// Outcome of gating a protected page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Allow(SessionClaims),
    Redirect(Destination),
}

impl GateDecision {
    #[must_use]
    pub fn claims(&self) -> Option<&SessionClaims> {
        match self {
            GateDecision::Allow(claims) => Some(claims),
            GateDecision::Redirect(_) => None,
        }
    }
}

/// Outcome of gating a guest-only page (sign-in, create profile).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestDecision {
    Stay,
    Redirect(Destination),
}

/// Decides from the persisted token alone, without a network call.
pub struct SessionGate<'a> {
    decoder: &'a dyn TokenDecoder,
}

impl<'a> SessionGate<'a> {
    #[must_use]
    pub fn new(decoder: &'a dyn TokenDecoder) -> Self {
        Self { decoder }
    }

    /// Gate a protected page. Absent, malformed and expired tokens all
    /// redirect to sign-in.
    #[must_use]
    pub fn evaluate(&self, raw_token: Option<&str>, now_ms: i64) -> GateDecision {
        match self.valid_claims(raw_token, now_ms) {
            Some(claims) => GateDecision::Allow(claims),
            None => GateDecision::Redirect(Destination::SignIn),
        }
    }

    /// Gate a guest page: viewers with a live session go home.
    #[must_use]
    pub fn guest(&self, raw_token: Option<&str>, now_ms: i64) -> GuestDecision {
        match self.valid_claims(raw_token, now_ms) {
            Some(_) => GuestDecision::Redirect(Destination::Home),
            None => GuestDecision::Stay,
        }
    }

    fn valid_claims(&self, raw_token: Option<&str>, now_ms: i64) -> Option<SessionClaims> {
        let raw = raw_token.filter(|raw| !raw.trim().is_empty())?;
        let claims = match self.decoder.decode(raw) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(error = %err, "session token rejected");
                return None;
            }
        };
        if claims.is_expired_at(now_ms) {
            debug!(
                expires_at_ms = claims.expires_at_ms(),
                now_ms, "session token expired"
            );
            return None;
        }
        Some(claims)
    }
}

/// Where a gated viewer goes once the server says whether onboarding is due.
#[must_use]
pub fn route_after_onboarding(requires_onboarding: bool) -> Destination {
    if requires_onboarding {
        Destination::Onboarding
    } else {
        Destination::Home
    }
}

/// The quiz page is only for users who have not finished it yet.
#[must_use]
pub fn route_for_quiz(has_finished_quiz: bool) -> Option<Destination> {
    has_finished_quiz.then_some(Destination::Home)
}
