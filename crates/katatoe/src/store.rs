//! Explicitly owned state holder.
//!
//! A `Store` owns the one live `ApplicationState` and the random source
//! used for new games. Dispatching an action runs the reducer and either
//! replaces the state whole or leaves it untouched.

use super::action::{Action, TapError};
use super::reducer::reduce;
use super::state::ApplicationState;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, warn};

/// Callback invoked with each new state.
pub type Listener = Box<dyn FnMut(&ApplicationState)>;

/// Holds the current state and dispatches actions against it.
pub struct Store<R = ChaCha8Rng> {
    state: ApplicationState,
    rng: R,
    listeners: Vec<Listener>,
    dispatched: u64,
}

impl Store<ChaCha8Rng> {
    /// Deterministic store; the same seed always yields the same first players.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Store seeded from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Store<R> {
    /// Creates a store whose initial state has a random first player and zero scores.
    #[instrument(skip(rng))]
    pub fn new(mut rng: R) -> Self {
        let state = ApplicationState::random(&mut rng);
        debug!(first = %state.turn(), "Store created");
        Self {
            state,
            rng,
            listeners: Vec::new(),
            dispatched: 0,
        }
    }

    /// Creates a store around an existing state.
    pub fn with_state(state: ApplicationState, rng: R) -> Self {
        Self {
            state,
            rng,
            listeners: Vec::new(),
            dispatched: 0,
        }
    }

    /// Returns the current state.
    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    /// Number of actions that changed the state.
    pub fn dispatched(&self) -> u64 {
        self.dispatched
    }

    /// Registers a callback run after every successful dispatch.
    pub fn subscribe(&mut self, listener: impl FnMut(&ApplicationState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Runs `action` through the reducer.
    ///
    /// On success the state is replaced and listeners are notified. On
    /// error the state is unchanged and no listener runs.
    #[instrument(skip(self), fields(seq = self.dispatched))]
    pub fn dispatch(&mut self, action: Action) -> Result<&ApplicationState, TapError> {
        let next = reduce(&self.state, action, &mut self.rng).inspect_err(|e| {
            warn!(%action, error = %e, "Action rejected");
        })?;

        self.state = next;
        self.dispatched += 1;
        for listener in &mut self.listeners {
            listener(&self.state);
        }

        Ok(&self.state)
    }

    /// Consumes the store, returning the current state.
    pub fn into_state(self) -> ApplicationState {
        self.state
    }
}

impl<R> std::fmt::Debug for Store<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .field("dispatched", &self.dispatched)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_seeded_store_is_deterministic() {
        assert_eq!(Store::seeded(11).state(), Store::seeded(11).state());
    }

    #[test]
    fn test_rejected_tap_keeps_state() {
        let mut store = Store::with_state(
            ApplicationState::new(Player::One),
            ChaCha8Rng::seed_from_u64(0),
        );
        store.dispatch(Action::PlayerTapped(4)).unwrap();
        let before = store.state().clone();

        let err = store.dispatch(Action::PlayerTapped(4)).unwrap_err();
        assert!(matches!(err, TapError::CellOccupied(_)));
        assert_eq!(store.state(), &before);
        assert_eq!(store.dispatched(), 1);
    }

    #[test]
    fn test_listeners_see_each_new_state() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::seeded(2);
        let sink = Rc::clone(&seen);
        store.subscribe(move |state| sink.borrow_mut().push(state.board().occupied()));

        store.dispatch(Action::PlayerTapped(0)).unwrap();
        store.dispatch(Action::PlayerTapped(1)).unwrap();
        let _ = store.dispatch(Action::PlayerTapped(1));
        store.dispatch(Action::NewGame).unwrap();

        assert_eq!(*seen.borrow(), vec![1, 2, 0]);
    }
}
