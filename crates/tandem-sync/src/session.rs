//! The per-connection session: inbound listener and outbound publisher.
//!
//! A session owns one duplex stream. The read half belongs to the inbound
//! listener; the write half belongs to the single outbound publisher, the
//! only task that ever writes frame bytes. Both tasks run until the stream
//! closes, a fatal error occurs, or (for the publisher) every
//! [`PublishHandle`] is dropped.

use std::time::Duration;

use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use tandem_chain::{verify_records, Reconciliation, SharedLedger};

use crate::error::SyncError;
use crate::wire::{self, Frame};

/// How the inbound listener treats a frame that fails strict decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedFramePolicy {
    /// Log, drop the frame, keep reading. The default.
    #[default]
    DropFrame,
    /// Close the inbound direction with the decode error.
    Disconnect,
}

/// Configuration for session behavior.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Cadence of unprompted full-snapshot broadcasts. The first broadcast
    /// fires one full interval after the session starts.
    pub broadcast_interval: Duration,
    /// Whether to re-validate the whole candidate chain before longer-wins
    /// reconciliation. `false` adopts any strictly longer snapshot on
    /// length alone.
    pub verify_inbound: bool,
    /// Treatment of frames that fail strict decoding.
    pub on_malformed: MalformedFramePolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            broadcast_interval: Duration::from_secs(5),
            verify_inbound: true,
            on_malformed: MalformedFramePolicy::DropFrame,
        }
    }
}

/// Why a session direction ended.
#[derive(Debug)]
pub enum CloseReason {
    /// Clean end of stream from the peer.
    PeerDisconnected,
    /// The direction failed with an error.
    Failed(SyncError),
    /// Every publish handle was dropped; the owning node detached.
    Detached,
}

/// Notifications emitted by the session tasks.
///
/// Observability only: reconciliation has already happened by the time an
/// [`SyncEvent::Adopted`] arrives, so consumers snapshot the ledger rather
/// than trust the event to carry state.
#[derive(Debug)]
pub enum SyncEvent {
    /// An inbound snapshot replaced the local ledger.
    Adopted { length: usize },
    /// The inbound listener ended.
    InboundClosed(CloseReason),
    /// The outbound publisher ended.
    OutboundClosed(CloseReason),
}

/// Requests an immediate snapshot emission from the outbound publisher.
///
/// Requests coalesce: every emission snapshots current state, so a full
/// queue already implies a pending publish that will carry this change.
#[derive(Clone)]
pub struct PublishHandle {
    tx: mpsc::Sender<()>,
}

impl PublishHandle {
    /// Ask the publisher to emit a snapshot now.
    ///
    /// Never blocks. A full queue coalesces with the pending request; a
    /// closed queue means the publisher is gone and there is nobody to
    /// tell.
    pub fn publish_now(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Handles to a running session.
pub struct SessionHandle {
    /// Triggers immediate outbound emissions.
    pub publisher: PublishHandle,
    /// Adoption and close notifications, in task order.
    pub events: mpsc::Receiver<SyncEvent>,
    /// Join handle of the inbound listener task.
    pub inbound: JoinHandle<()>,
    /// Join handle of the outbound publisher task.
    pub outbound: JoinHandle<()>,
}

/// One peer connection's worth of synchronization.
pub struct SyncSession {
    ledger: SharedLedger,
    config: SyncConfig,
}

impl SyncSession {
    /// Create a session over the shared ledger.
    pub fn new(ledger: SharedLedger, config: SyncConfig) -> Self {
        Self { ledger, config }
    }

    /// Split `stream` and start the inbound listener and outbound
    /// publisher tasks.
    ///
    /// The tasks hold no cancellation or timeout machinery: the listener
    /// runs until EOF, a read error, or a `Disconnect`-policy decode
    /// failure; the publisher until a write error or every
    /// [`PublishHandle`] is dropped.
    pub fn spawn<S>(self, stream: S) -> SessionHandle
    where
        S: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (read_half, write_half) = io::split(stream);
        let (event_tx, events) = mpsc::channel(32);
        let (publish_tx, publish_rx) = mpsc::channel(8);

        let inbound = tokio::spawn(run_inbound(
            read_half,
            self.ledger.clone(),
            self.config.clone(),
            event_tx.clone(),
        ));
        let outbound = tokio::spawn(run_outbound(
            write_half,
            self.ledger,
            self.config,
            publish_rx,
            event_tx,
        ));

        SessionHandle {
            publisher: PublishHandle { tx: publish_tx },
            events,
            inbound,
            outbound,
        }
    }
}

/// Inbound listener: one frame per line until the stream ends.
async fn run_inbound<R>(
    read_half: R,
    ledger: SharedLedger,
    config: SyncConfig,
    events: mpsc::Sender<SyncEvent>,
) where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(read_half);
    let mut line = String::new();

    let reason = loop {
        line.clear();
        match reader.read_line(&mut line).await {
            Ok(0) => break CloseReason::PeerDisconnected,
            Ok(_) => {}
            Err(e) => break CloseReason::Failed(SyncError::Io(e)),
        }

        let candidate = match wire::decode_frame(&line) {
            Ok(Frame::Heartbeat) => continue,
            Ok(Frame::Snapshot(records)) => records,
            Err(e) => match config.on_malformed {
                MalformedFramePolicy::DropFrame => {
                    tracing::warn!("Dropping malformed frame: {}", e);
                    continue;
                }
                MalformedFramePolicy::Disconnect => break CloseReason::Failed(e),
            },
        };

        // Candidate verification runs on local data only, outside the
        // ledger lock.
        if config.verify_inbound {
            if let Err(e) = verify_records(&candidate) {
                tracing::warn!("Rejecting invalid candidate chain: {}", e);
                continue;
            }
        }

        if let Reconciliation::Adopted { length } = ledger.adopt_if_longer(candidate).await {
            tracing::debug!("Adopted peer snapshot, length {}", length);
            let _ = events.send(SyncEvent::Adopted { length }).await;
        }
    };

    let _ = events.send(SyncEvent::InboundClosed(reason)).await;
}

/// Outbound publisher: the single writer to the stream.
///
/// Emits one full snapshot per interval tick or publish request. Each
/// emission is snapshot, encode, write, flush, in that order; the snapshot
/// is taken under the ledger lock, the rest happens outside it.
async fn run_outbound<W>(
    write_half: W,
    ledger: SharedLedger,
    config: SyncConfig,
    mut publish_rx: mpsc::Receiver<()>,
    events: mpsc::Sender<SyncEvent>,
) where
    W: AsyncWrite + Unpin,
{
    let mut writer = write_half;
    let first_tick = Instant::now() + config.broadcast_interval;
    let mut ticker = time::interval_at(first_tick, config.broadcast_interval);
    // A stalled write does not owe catch-up broadcasts afterwards.
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let reason = loop {
        tokio::select! {
            _ = ticker.tick() => {}
            request = publish_rx.recv() => {
                if request.is_none() {
                    break CloseReason::Detached;
                }
            }
        }

        let snapshot = ledger.snapshot().await;
        let frame = match wire::encode_frame(&snapshot) {
            Ok(frame) => frame,
            Err(e) => break CloseReason::Failed(e),
        };
        if let Err(e) = writer.write_all(&frame).await {
            break CloseReason::Failed(SyncError::Io(e));
        }
        if let Err(e) = writer.flush().await {
            break CloseReason::Failed(SyncError::Io(e));
        }
    };

    let _ = events.send(SyncEvent::OutboundClosed(reason)).await;
}
