//! Change notifications for input surfaces that prefer callbacks over
//! return values.

use super::state::CardValidity;
use crate::issuers::{CardNetwork, IssuerDefinition};

/// Receives notifications from [`CardNumberEngine::apply_observed`].
///
/// Both methods default to doing nothing. Nothing is reported for edits that
/// were no-ops (insert into a full buffer, delete from an empty one).
///
/// [`CardNumberEngine::apply_observed`]: super::CardNumberEngine::apply_observed
pub trait EngineObserver {
    /// The identified network changed.
    fn network_changed(&mut self, _definition: &IssuerDefinition) {}

    /// Validity after an applied edit. Called once per applied edit, after
    /// any `network_changed`.
    fn state_reported(&mut self, _validity: CardValidity) {}
}

/// Observer that ignores everything.
impl EngineObserver for () {}

/// Recorded notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineNotification {
    /// From `network_changed`.
    NetworkChanged(CardNetwork),
    /// From `state_reported`.
    State(CardValidity),
}

/// Records notifications in order.
impl EngineObserver for Vec<EngineNotification> {
    fn network_changed(&mut self, definition: &IssuerDefinition) {
        self.push(EngineNotification::NetworkChanged(definition.network));
    }

    fn state_reported(&mut self, validity: CardValidity) {
        self.push(EngineNotification::State(validity));
    }
}
