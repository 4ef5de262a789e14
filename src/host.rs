use crate::error::{Error, Result};
use birb_material_core::{NVTree, Transaction};
use crossbeam::channel::{self, Receiver, Sender, TryRecvError};

/// Hands transactions from widgets to a [`Host`].
#[derive(Debug, Clone)]
pub struct Compositor {
    sender: Sender<Transaction>,
}

impl Compositor {
    /// Creates a compositor along with the receiving end, for renderers that don’t use a
    /// [`Host`].
    pub fn channel() -> (Compositor, Receiver<Transaction>) {
        let (sender, receiver) = channel::unbounded();
        (Compositor { sender }, receiver)
    }

    /// Queues a transaction. Empty transactions are dropped.
    pub fn commit(&self, transaction: Transaction) -> Result<()> {
        if transaction.is_empty() {
            return Ok(());
        }
        self.sender
            .send(transaction)
            .map_err(|_| Error::Disconnected)
    }
}

/// Connects widgets to the native-view tree.
#[derive(Debug)]
pub struct Host {
    pub tree: NVTree,
    sender: Sender<Transaction>,
    transaction_recv: Receiver<Transaction>,
}

impl Host {
    /// Creates a new Host with an empty tree.
    ///
    /// Nothing is applied until you call `poll`.
    pub fn new() -> Host {
        let (compositor, transaction_recv) = Compositor::channel();

        Host {
            tree: NVTree::new(),
            sender: compositor.sender,
            transaction_recv,
        }
    }

    /// Returns a compositor handle for a widget.
    pub fn compositor(&self) -> Compositor {
        Compositor {
            sender: self.sender.clone(),
        }
    }

    /// Applies all queued transactions in order and returns how many were applied.
    ///
    /// Stops at the first transaction that fails to apply; that transaction is dropped and the
    /// remaining ones stay queued.
    pub fn poll(&mut self) -> Result<usize> {
        let mut applied = 0;
        loop {
            match self.transaction_recv.try_recv() {
                Ok(transaction) => {
                    tracing::trace!(
                        patches = transaction.len(),
                        duration = transaction.duration(),
                        "applying transaction"
                    );
                    self.tree.apply(&transaction)?;
                    applied += 1;
                }
                Err(TryRecvError::Empty) => break,
                // the host holds a sender itself
                Err(TryRecvError::Disconnected) => unreachable!("host sender dropped"),
            }
        }
        Ok(applied)
    }
}

impl Default for Host {
    fn default() -> Self {
        Host::new()
    }
}
