// MIT/Apache2 License

use super::{DispatchTable, GlDispatch};
use crate::{Error, LoaderConfig};
use std::sync::Arc;

#[cfg(feature = "async")]
use super::AsyncGlDispatch;

/// Observable state of a [`Dispatcher`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LoadState {
    Unloaded,
    /// A load is in progress.
    ///
    /// Loading borrows the dispatcher mutably until it finishes or is dropped, so this is
    /// only observable if an [`initialize_async`](Dispatcher::initialize_async) future is
    /// leaked with `mem::forget` after being polled. It then stays in this state for good.
    Loading,
    Loaded,
}

enum State {
    Unloaded,
    Loading,
    Loaded(Arc<DispatchTable>),
}

/// Owns the dispatch table of one binding context.
///
/// The table is only handed out once it is fully built, as an `Arc` that readers on any
/// thread can hold on to. Tearing the dispatcher down does not invalidate tables that
/// have already been handed out, but it does make the next [`initialize`] build a fresh
/// one.
///
/// [`initialize`]: Dispatcher::initialize
pub struct Dispatcher {
    state: State,
    config: LoaderConfig,
}

impl Default for Dispatcher {
    #[inline]
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl Dispatcher {
    #[inline]
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            state: State::Unloaded,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> LoadState {
        match self.state {
            State::Unloaded => LoadState::Unloaded,
            State::Loading => LoadState::Loading,
            State::Loaded(_) => LoadState::Loaded,
        }
    }

    /// The loaded table, if there is one.
    #[inline]
    pub fn table(&self) -> Option<&Arc<DispatchTable>> {
        match self.state {
            State::Loaded(ref table) => Some(table),
            _ => None,
        }
    }

    /// Load the table for the binding's current context.
    pub fn initialize<D: GlDispatch + ?Sized>(
        &mut self,
        binding: &mut D,
    ) -> crate::Result<Arc<DispatchTable>> {
        let (guard, config) = self.begin()?;
        let table = Arc::new(DispatchTable::load(binding, config)?);
        guard.publish(table.clone());
        Ok(table)
    }

    /// Load the table for the binding's current context, asynchronously.
    ///
    /// Dropping the returned future before it completes leaves the dispatcher unloaded.
    #[cfg(feature = "async")]
    pub async fn initialize_async<D: AsyncGlDispatch + ?Sized>(
        &mut self,
        binding: &mut D,
    ) -> crate::Result<Arc<DispatchTable>> {
        let (guard, config) = self.begin()?;
        let table = Arc::new(DispatchTable::load_async(binding, config).await?);
        guard.publish(table.clone());
        Ok(table)
    }

    /// Drop the loaded table, returning the dispatcher to the unloaded state.
    #[inline]
    pub fn teardown(&mut self) -> Option<Arc<DispatchTable>> {
        match std::mem::replace(&mut self.state, State::Unloaded) {
            State::Loaded(table) => {
                log::trace!("Dispatcher torn down");
                Some(table)
            }
            _ => None,
        }
    }

    fn begin(&mut self) -> crate::Result<(LoadingGuard<'_>, &LoaderConfig)> {
        let Dispatcher { state, config } = self;
        match state {
            State::Unloaded => {}
            State::Loading => return Err(Error::Loading),
            State::Loaded(_) => return Err(Error::AlreadyLoaded),
        }

        *state = State::Loading;
        Ok((LoadingGuard { state }, config))
    }
}

/// Puts the dispatcher back into the unloaded state if loading does not finish.
struct LoadingGuard<'a> {
    state: &'a mut State,
}

impl<'a> LoadingGuard<'a> {
    #[inline]
    fn publish(self, table: Arc<DispatchTable>) {
        *self.state = State::Loaded(table);
    }
}

impl<'a> Drop for LoadingGuard<'a> {
    #[inline]
    fn drop(&mut self) {
        if let State::Loading = self.state {
            *self.state = State::Unloaded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem;

    #[test]
    fn test_dropped_load_resets() {
        let mut dispatcher = Dispatcher::default();
        {
            let (_guard, _) = dispatcher.begin().unwrap();
        }
        assert_eq!(dispatcher.state(), LoadState::Unloaded);
        assert!(dispatcher.begin().is_ok());
    }

    #[test]
    fn test_leaked_load_stays_loading() {
        let mut dispatcher = Dispatcher::default();
        let (guard, _) = dispatcher.begin().unwrap();
        mem::forget(guard);

        assert_eq!(dispatcher.state(), LoadState::Loading);
        assert!(matches!(dispatcher.begin(), Err(Error::Loading)));
        assert!(dispatcher.teardown().is_none());
        assert_eq!(dispatcher.state(), LoadState::Unloaded);
    }
}
