//! The opaque session handle and deferred queries.
//!
//! Form construction never touches the database. What a relationship field
//! or a uniqueness validator needs is the *ability* to query later: a
//! [`DeferredQuery`] captures the session handle and the target model name
//! and hands both to the embedding layer, which resolves the query when the
//! form is actually rendered or validated.

use std::sync::Arc;

/// A cheap, cloneable handle to the shared database session.
///
/// The session's engine, connection pool, and query API belong to the
/// mapping layer; this handle only identifies the bind so deferred queries
/// stay attached to the right database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    bind: Arc<String>,
}

impl Session {
    /// Creates a handle identified by the given bind name.
    pub fn new(bind: impl Into<String>) -> Self {
        Self {
            bind: Arc::new(bind.into()),
        }
    }

    /// The bind this session is attached to.
    pub fn bind(&self) -> &str {
        &self.bind
    }
}

/// A query source that has not been evaluated.
///
/// Equivalent to a zero-argument closure over `(session, model)`; kept as
/// an explicit type so schemas stay inspectable and serializable-adjacent
/// rather than hiding state in a boxed closure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredQuery {
    session: Session,
    model: String,
}

impl DeferredQuery {
    /// Captures a session and a target model for later evaluation.
    pub fn new(session: &Session, model: impl Into<String>) -> Self {
        Self {
            session: session.clone(),
            model: model.into(),
        }
    }

    /// The session the query will run against.
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// The model the query will select.
    pub fn model(&self) -> &str {
        &self.model
    }
}
