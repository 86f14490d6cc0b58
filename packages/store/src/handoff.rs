//! # Catalog-ready signal
//!
//! The booking page loads the movie list and resolves a pending selection
//! concurrently. The selection can only be resolved once the list is in, so
//! the loader publishes the outcome on a [`tokio::sync::watch`] channel and the
//! resolver awaits it directly:
//!
//! ```text
//! loader:   list_movies().await ──► CatalogPublisher::publish(movies)
//!                                              │
//! resolver: take_pending_movie() ─► CatalogReady::wait().await ─► select_movie(id)
//! ```
//!
//! A failed load publishes [`CatalogPublisher::fail`]. Dropping the publisher
//! without publishing counts as a failure too, so a waiter never hangs on a
//! loader that died with its page.

use std::sync::Arc;

use tokio::sync::watch;

use crate::models::Movie;

#[derive(Clone, Debug, PartialEq)]
enum CatalogSignal {
    Pending,
    Ready(Arc<Vec<Movie>>),
    Failed,
}

/// Create a connected publisher/waiter pair.
pub fn catalog_channel() -> (CatalogPublisher, CatalogReady) {
    let (tx, rx) = watch::channel(CatalogSignal::Pending);
    (CatalogPublisher { tx: Arc::new(tx) }, CatalogReady { rx })
}

/// Loader side of the catalog-ready signal.
#[derive(Clone, Debug)]
pub struct CatalogPublisher {
    tx: Arc<watch::Sender<CatalogSignal>>,
}

impl CatalogPublisher {
    pub fn publish(&self, movies: Vec<Movie>) {
        self.tx.send_replace(CatalogSignal::Ready(Arc::new(movies)));
    }

    pub fn fail(&self) {
        self.tx.send_replace(CatalogSignal::Failed);
    }
}

/// Waiter side of the catalog-ready signal.
#[derive(Clone, Debug)]
pub struct CatalogReady {
    rx: watch::Receiver<CatalogSignal>,
}

impl CatalogReady {
    /// Wait until the catalog has loaded. `None` if loading failed.
    pub async fn wait(&mut self) -> Option<Arc<Vec<Movie>>> {
        let signal = self
            .rx
            .wait_for(|s| !matches!(s, CatalogSignal::Pending))
            .await
            .ok()?;
        match &*signal {
            CatalogSignal::Ready(movies) => Some(Arc::clone(movies)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u64) -> Movie {
        serde_json::from_value(serde_json::json!({"id": id, "title": format!("M{id}")})).unwrap()
    }

    #[tokio::test]
    async fn test_wait_sees_published_movies() {
        let (publisher, mut ready) = catalog_channel();
        publisher.publish(vec![movie(1), movie(2)]);
        let movies = ready.wait().await.unwrap();
        assert_eq!(movies.len(), 2);
    }

    #[tokio::test]
    async fn test_wait_before_publish() {
        let (publisher, mut ready) = catalog_channel();
        let (movies, ()) = tokio::join!(ready.wait(), async {
            tokio::task::yield_now().await;
            publisher.publish(vec![movie(9)]);
        });
        assert_eq!(movies.unwrap()[0].id, 9);
    }

    #[tokio::test]
    async fn test_failure_and_dropped_publisher() {
        let (publisher, mut ready) = catalog_channel();
        publisher.fail();
        assert!(ready.wait().await.is_none());

        let (publisher, mut ready) = catalog_channel();
        drop(publisher);
        assert!(ready.wait().await.is_none());
    }
}
