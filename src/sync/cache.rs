// ABOUTME: Container cache: the current set of container views plus change observers.
// ABOUTME: Reloads rebuild the whole set and swap it in atomically.

use super::subscriber::Subscription;
use crate::runtime::{ContainerError, ContainerOps};
use crate::view::{self, ContainerView};
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

type Observer = Arc<dyn Fn() + Send + Sync>;

/// Handle returned by [`ContainerCache::observe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

pub struct ContainerCache<R> {
    runtime: Arc<R>,
    views: RwLock<Arc<[ContainerView]>>,
    observers: Mutex<Vec<(ObserverId, Observer)>>,
    next_observer: AtomicU64,
}

impl<R: ContainerOps> ContainerCache<R> {
    pub fn new(runtime: Arc<R>) -> Self {
        Self {
            runtime,
            views: RwLock::new(Arc::from(Vec::new())),
            observers: Mutex::new(Vec::new()),
            next_observer: AtomicU64::new(0),
        }
    }

    /// Re-query every container, rebuild and sort the views, swap them in
    /// and notify observers.
    ///
    /// On failure the previous snapshot stays in place and nobody is notified.
    pub async fn reload(&self) -> Result<(), ContainerError> {
        let records = self.runtime.list_containers(true).await?;
        let views: Arc<[ContainerView]> = view::build_views(&records).into();
        tracing::debug!("reloaded {} containers", views.len());

        *self.views.write() = views;
        self.notify();
        Ok(())
    }

    /// The current snapshot, in status-table order.
    pub fn views(&self) -> Arc<[ContainerView]> {
        self.views.read().clone()
    }

    /// Look up a container in the current snapshot by name or id.
    pub fn find(&self, name: &str) -> Option<ContainerView> {
        self.views
            .read()
            .iter()
            .find(|v| v.name == name || v.id.as_str() == name)
            .cloned()
    }

    /// Query a single container directly, bypassing the snapshot.
    pub async fn get(&self, name: &str) -> Result<ContainerView, ContainerError> {
        let record = self.runtime.inspect_container(name).await?;
        Ok(ContainerView::from_record(&record))
    }

    /// Register a callback run after every successful reload.
    pub fn observe<F>(&self, callback: F) -> ObserverId
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = ObserverId(self.next_observer.fetch_add(1, Ordering::Relaxed));
        self.observers.lock().push((id, Arc::new(callback)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unobserve(&self, id: ObserverId) -> bool {
        let mut observers = self.observers.lock();
        let before = observers.len();
        observers.retain(|(observer, _)| *observer != id);
        observers.len() != before
    }

    /// Reload after each burst of invalidations until the subscription ends.
    /// Signals already queued when a reload starts are folded into it.
    ///
    /// Failed reloads are logged and the loop keeps going.
    pub async fn follow(&self, subscription: &mut Subscription) {
        while let Some(signal) = subscription.next().await {
            let mut pending = 1;
            while subscription.try_next().is_some() {
                pending += 1;
            }
            tracing::debug!(
                "invalidated by container {} ({} pending signals)",
                signal.container.short(),
                pending
            );
            if let Err(e) = self.reload().await {
                tracing::warn!("reload after event failed: {}", e);
            }
        }
    }

    fn notify(&self) {
        // Snapshot so callbacks may (un)register observers.
        let observers: Vec<Observer> = self
            .observers
            .lock()
            .iter()
            .map(|(_, cb)| Arc::clone(cb))
            .collect();
        for callback in observers {
            callback();
        }
    }
}
