// src/infrastructure/security/claims.rs
use crate::domain::session::{Session, SessionUser};
use biscuit_auth::builder::{Fact, Predicate, Term};
use chrono::{DateTime, Utc};

/// Decode the session facts of a verified token. Unknown facts are ignored and
/// no fact is mandatory: a token without `user(..)` yields a userless session.
pub fn parse_session(facts: Vec<Fact>) -> Session {
    let mut ctx = ClaimsContext::default();
    for fact in facts {
        ctx.apply_predicate(fact.predicate);
    }
    ctx.into_session()
}

#[derive(Default)]
struct ClaimsContext {
    user_id: Option<String>,
    saw_user: bool,
    session_id: Option<String>,
    expires_at: Option<DateTime<Utc>>,
}

impl ClaimsContext {
    fn apply_predicate(&mut self, predicate: Predicate) {
        match predicate.name.as_str() {
            "user" => self.handle_user(&predicate),
            "session" => self.handle_session(&predicate),
            "expires_at" => self.handle_expires_at(&predicate),
            _ => {}
        }
    }

    fn handle_user(&mut self, predicate: &Predicate) {
        self.saw_user = true;
        if let Some(Term::Str(id)) = predicate.terms.first() {
            self.user_id = Some(id.clone());
        }
    }

    fn handle_session(&mut self, predicate: &Predicate) {
        if let Some(Term::Str(sid)) = predicate.terms.first() {
            self.session_id = Some(sid.clone());
        }
    }

    fn handle_expires_at(&mut self, predicate: &Predicate) {
        if let Some(Term::Date(seconds)) = predicate.terms.first() {
            self.expires_at = i64::try_from(*seconds)
                .ok()
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
        }
    }

    fn into_session(self) -> Session {
        let user = self.saw_user.then(|| SessionUser { id: self.user_id });
        Session {
            user,
            session_id: self.session_id,
            expires_at: self.expires_at,
        }
    }
}
