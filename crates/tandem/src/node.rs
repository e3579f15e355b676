//! Node wiring: genesis bootstrap, local appends, session attachment, and
//! the operator loops.

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;

use tandem_chain::SharedLedger;
use tandem_core::Record;
use tandem_sync::{PublishHandle, SessionHandle, SyncConfig, SyncEvent, SyncSession};

use crate::clock::Clock;
use crate::error::Result;
use crate::io::{OperatorDisplay, OperatorInput};
use crate::render;

/// Configuration for a node.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// Session behavior for every attached peer connection.
    pub sync: SyncConfig,
}

/// One peer of the two-node ledger pair.
///
/// Owns the shared ledger and the clock; sessions and operator loops reach
/// both through it. The ledger is bootstrapped once, at construction, with
/// a genesis record stamped by the clock.
pub struct Node<C: Clock> {
    ledger: SharedLedger,
    clock: C,
    config: NodeConfig,
}

impl<C: Clock> Node<C> {
    /// Create a node with a freshly bootstrapped genesis ledger.
    pub fn new(config: NodeConfig, clock: C) -> Self {
        let ledger = SharedLedger::with_genesis(clock.now());
        Self {
            ledger,
            clock,
            config,
        }
    }

    /// Handle to the shared ledger.
    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    /// Stamp, construct, validate, and append one record.
    pub async fn append(&self, payload: i64) -> Result<Record> {
        let record = self.ledger.append(payload, self.clock.now()).await?;
        tracing::debug!("Appended record at position {}", record.position);
        Ok(record)
    }

    /// Attach an open peer connection and start its session tasks.
    pub fn attach<S>(&self, stream: S) -> SessionHandle
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        SyncSession::new(self.ledger.clone(), self.config.sync.clone()).spawn(stream)
    }

    /// Drive the operator input loop until input ends.
    ///
    /// One line per iteration. A line that does not parse as an integer is
    /// reported to the display and the loop re-prompts. A parsed payload
    /// becomes an append attempt, and afterwards, whether or not the
    /// append succeeded, the loop triggers one immediate publish and
    /// renders the current ledger as a structural dump.
    pub async fn run_input_loop<I, D>(
        &self,
        input: &mut I,
        display: &D,
        publisher: &PublishHandle,
    ) -> Result<()>
    where
        I: OperatorInput,
        D: OperatorDisplay,
    {
        while let Some(line) = input.read_line().await? {
            let payload = match line.trim().parse::<i64>() {
                Ok(payload) => payload,
                Err(_) => {
                    display.show(&format!("not an integer: {line:?}"));
                    continue;
                }
            };

            if let Err(e) = self.append(payload).await {
                // Dropped locally; nothing is sent or shown for it.
                tracing::warn!("Rejected local record: {}", e);
            }

            publisher.publish_now();
            display.show(&render::dump(&self.ledger.snapshot().await));
        }
        Ok(())
    }

    /// Consume session events: render adopted snapshots, log closures.
    ///
    /// Returns when the session's event stream ends, which happens once
    /// both session tasks are gone.
    pub async fn run_session_events<D>(&self, mut events: mpsc::Receiver<SyncEvent>, display: &D)
    where
        D: OperatorDisplay,
    {
        while let Some(event) = events.recv().await {
            match event {
                SyncEvent::Adopted { length } => {
                    tracing::debug!("Peer snapshot adopted, length {}", length);
                    display.show(&render::adopted(&self.ledger.snapshot().await));
                }
                SyncEvent::InboundClosed(reason) => {
                    tracing::warn!("Inbound direction closed: {:?}", reason);
                }
                SyncEvent::OutboundClosed(reason) => {
                    tracing::warn!("Outbound direction closed: {:?}", reason);
                }
            }
        }
    }
}
