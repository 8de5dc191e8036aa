/*!
 * Serialized streaming state.
 *
 * Several model streams can be in flight at once, each targeting one section
 * of shared output (e.g. one work-experience description among many). Every
 * update carries an explicit section index and is applied by a single reducer
 * task, so concurrent streams never race on the same slot.
 */

use log::warn;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::task::JoinHandle;

/// One streamed chunk addressed to a specific output section
#[derive(Debug, Clone)]
pub struct SectionUpdate {
    /// Index of the section this chunk belongs to
    pub index: usize,
    /// Text to append to that section
    pub chunk: String,
}

/// Write handle for one section. Cheap to clone, safe to move into a stream
/// callback; pushes are forwarded to the owning reducer.
#[derive(Debug, Clone)]
pub struct SectionSink {
    index: usize,
    tx: UnboundedSender<SectionUpdate>,
}

impl SectionSink {
    /// Append a chunk to this sink's section.
    pub fn push(&self, chunk: impl Into<String>) {
        // Send only fails after the reducer has been shut down; late chunks
        // from an abandoned stream are dropped on purpose.
        let _ = self.tx.send(SectionUpdate {
            index: self.index,
            chunk: chunk.into(),
        });
    }

    /// The section this sink writes to.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Owns a fixed set of text sections and applies streamed updates to them
/// through a single consumer task.
pub struct StreamReducer {
    slots: Arc<Mutex<Vec<String>>>,
    tx: UnboundedSender<SectionUpdate>,
    worker: JoinHandle<()>,
}

impl StreamReducer {
    /// Create a reducer with `sections` empty slots and start its consumer
    /// task. Must be called within a tokio runtime.
    pub fn new(sections: usize) -> Self {
        let slots = Arc::new(Mutex::new(vec![String::new(); sections]));
        let (tx, mut rx) = mpsc::unbounded_channel::<SectionUpdate>();

        let state = Arc::clone(&slots);
        let worker = tokio::spawn(async move {
            while let Some(update) = rx.recv().await {
                let mut slots = state.lock();
                match slots.get_mut(update.index) {
                    Some(slot) => slot.push_str(&update.chunk),
                    None => warn!(
                        "Dropping stream update for out-of-range section {}",
                        update.index
                    ),
                }
            }
        });

        Self { slots, tx, worker }
    }

    /// Number of sections this reducer manages.
    pub fn sections(&self) -> usize {
        self.slots.lock().len()
    }

    /// Create a write handle for section `index`.
    pub fn sink(&self, index: usize) -> SectionSink {
        SectionSink {
            index,
            tx: self.tx.clone(),
        }
    }

    /// Snapshot of one section's accumulated text.
    pub fn section(&self, index: usize) -> Option<String> {
        self.slots.lock().get(index).cloned()
    }

    /// Close the reducer and return the final sections.
    ///
    /// Waits until every outstanding [`SectionSink`] has been dropped and all
    /// pending updates have been applied.
    pub async fn finish(self) -> Vec<String> {
        drop(self.tx);
        let _ = self.worker.await;
        let slots = self.slots.lock();
        slots.clone()
    }
}
