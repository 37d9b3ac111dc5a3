use crate::api::client::{ApiError, DashboardSource};
use crate::api::models::{Category, Place};
use std::sync::Arc;
use tokio::{
    sync::{mpsc, oneshot},
    task::JoinHandle,
};

/// Result of one endpoint fetch, tagged with the mount that requested it.
#[derive(Debug)]
pub enum LoadEvent {
    Categories {
        generation: u64,
        result: Result<Vec<Category>, ApiError>,
    },
    Places {
        generation: u64,
        result: Result<Vec<Place>, ApiError>,
    },
}

impl LoadEvent {
    pub fn generation(&self) -> u64 {
        match self {
            LoadEvent::Categories { generation, .. } | LoadEvent::Places { generation, .. } => {
                *generation
            }
        }
    }
}

/// In-flight fetches for one mount of the dashboard.
#[derive(Debug, Default)]
pub struct Loader {
    tasks: Vec<JoinHandle<()>>,
    cancel_txs: Vec<oneshot::Sender<()>>,
}

impl Loader {
    /// Starts both fetches concurrently. Each sends a single event on `tx`.
    pub fn mount<S: DashboardSource>(
        source: Arc<S>,
        generation: u64,
        tx: mpsc::UnboundedSender<LoadEvent>,
    ) -> Self {
        let mut loader = Loader::default();

        let src = Arc::clone(&source);
        loader.spawn(tx.clone(), async move {
            LoadEvent::Categories {
                generation,
                result: src.categories().await,
            }
        });

        loader.spawn(tx, async move {
            LoadEvent::Places {
                generation,
                result: source.places().await,
            }
        });

        loader
    }

    fn spawn<F>(&mut self, tx: mpsc::UnboundedSender<LoadEvent>, fetch: F)
    where
        F: std::future::Future<Output = LoadEvent> + Send + 'static,
    {
        let (cancel_tx, mut cancel_rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(async move {
            tokio::select! {
                event = fetch => {
                    // Receiver gone means the screen is torn down.
                    let _ = tx.send(event);
                }
                _ = &mut cancel_rx => {}
            }
        });
        self.tasks.push(handle);
        self.cancel_txs.push(cancel_tx);
    }

    pub fn is_finished(&self) -> bool {
        self.tasks.iter().all(|t| t.is_finished())
    }

    pub fn cancel(&mut self) {
        for tx in self.cancel_txs.drain(..) {
            let _ = tx.send(());
        }
        for h in self.tasks.drain(..) {
            h.abort();
        }
    }
}

impl Drop for Loader {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::Phone;
    use std::future::Future;
    use tokio::sync::Notify;

    struct Gated {
        release_categories: Notify,
    }

    impl DashboardSource for Gated {
        fn categories(&self) -> impl Future<Output = Result<Vec<Category>, ApiError>> + Send {
            async move {
                self.release_categories.notified().await;
                Ok(vec![Category { id: 1, name: "Food".into(), icon: None }])
            }
        }

        fn places(&self) -> impl Future<Output = Result<Vec<Place>, ApiError>> + Send {
            async move {
                Ok(vec![Place {
                    id: 1,
                    name: "Cafe".into(),
                    address: "Main St".into(),
                    phone: Phone::Number(5551234),
                    avatar_photo: None,
                    phone_numbers: None,
                }])
            }
        }
    }

    #[tokio::test]
    async fn places_arrive_while_categories_are_pending() {
        let source = Arc::new(Gated { release_categories: Notify::new() });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _loader = Loader::mount(Arc::clone(&source), 3, tx);

        match rx.recv().await {
            Some(LoadEvent::Places { generation: 3, result: Ok(p) }) => assert_eq!(p.len(), 1),
            other => panic!("expected places first, got {other:?}"),
        }

        source.release_categories.notify_one();
        match rx.recv().await {
            Some(LoadEvent::Categories { generation: 3, result: Ok(c) }) => {
                assert_eq!(c[0].name, "Food")
            }
            other => panic!("expected categories, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cancel_drops_pending_fetch() {
        let source = Arc::new(Gated { release_categories: Notify::new() });
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut loader = Loader::mount(Arc::clone(&source), 1, tx);

        assert!(matches!(rx.recv().await, Some(LoadEvent::Places { .. })));
        loader.cancel();
        source.release_categories.notify_one();

        // Every sender was owned by a task, so the channel closes once they are gone.
        assert!(rx.recv().await.is_none());
    }
}
