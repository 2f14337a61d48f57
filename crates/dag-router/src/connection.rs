//! # Connection Driver
//!
//! Pumps a duplex byte stream through a [`Router`].
//!
//! ## Wire format
//!
//! Every envelope on the wire is length-prefixed:
//!
//! ```text
//! [4 bytes: body length (u32-be)] [N bytes: bincode Envelope]
//! ```
//!
//! The reader validates the length against `MAX_MESSAGE_PAYLOAD` before
//! reading the body. A body that fails to decode is skipped; frame
//! boundaries are intact so the connection stays usable. An oversized
//! prefix cannot be skipped safely and ends the connection.

use crate::errors::RouterError;
use crate::router::Router;
use dag_telemetry::{metric_inc, CONVERSION_ERRORS};
use dag_wire::limits::MAX_MESSAGE_PAYLOAD;
use dag_wire::{ConversionError, Envelope};
use std::sync::Arc;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// The reader and writer tasks of one connection.
#[derive(Debug)]
pub struct ConnectionHandle {
    reader: JoinHandle<Result<(), RouterError>>,
    writer: JoinHandle<Result<(), RouterError>>,
}

impl ConnectionHandle {
    /// Wait for both tasks. Returns the first transport error, if any.
    pub async fn join(self) -> Result<(), RouterError> {
        let (reader, writer) = tokio::join!(self.reader, self.writer);
        let reader = reader.map_err(std::io::Error::from)?;
        let writer = writer.map_err(std::io::Error::from)?;
        reader.and(writer)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.reader.is_finished() && self.writer.is_finished()
    }
}

/// Spawn the reader and writer tasks for `stream`.
///
/// Either side ending closes the router, which in turn ends the other side.
pub fn run_connection<S>(router: Arc<Router>, stream: S) -> ConnectionHandle
where
    S: AsyncRead + AsyncWrite + Send + 'static,
{
    let (read_half, write_half) = tokio::io::split(stream);
    debug!(router = %router.name(), "Connection started");

    ConnectionHandle {
        reader: tokio::spawn(read_loop(Arc::clone(&router), read_half)),
        writer: tokio::spawn(write_loop(router, write_half)),
    }
}

/// Read one frame body. `Ok(None)` means the peer closed cleanly between
/// frames.
pub async fn read_frame<R>(reader: &mut R) -> Result<Option<Vec<u8>>, RouterError>
where
    R: AsyncRead + Unpin,
{
    let len = match reader.read_u32().await {
        Ok(len) => len,
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    if u64::from(len) > MAX_MESSAGE_PAYLOAD {
        return Err(ConversionError::OutOfRange {
            what: "frame length",
            value: u64::from(len),
            max: MAX_MESSAGE_PAYLOAD,
        }
        .into());
    }

    let mut body = vec![0u8; len as usize];
    reader.read_exact(&mut body).await?;
    Ok(Some(body))
}

/// Write one length-prefixed frame and flush.
pub async fn write_frame<W>(writer: &mut W, body: &[u8]) -> Result<(), RouterError>
where
    W: AsyncWrite + Unpin,
{
    let len = body.len() as u64;
    if len > MAX_MESSAGE_PAYLOAD {
        return Err(ConversionError::OutOfRange {
            what: "frame length",
            value: len,
            max: MAX_MESSAGE_PAYLOAD,
        }
        .into());
    }

    writer.write_u32(len as u32).await?;
    writer.write_all(body).await?;
    writer.flush().await?;
    Ok(())
}

async fn read_loop<R>(router: Arc<Router>, mut reader: R) -> Result<(), RouterError>
where
    R: AsyncRead + Unpin,
{
    let result = loop {
        let frame = tokio::select! {
            _ = router.closed() => break Ok(()),
            frame = read_frame(&mut reader) => frame,
        };

        let body = match frame {
            Ok(Some(body)) => body,
            Ok(None) => {
                debug!(router = %router.name(), "Peer closed connection");
                break Ok(());
            }
            Err(e) => {
                warn!(router = %router.name(), error = %e, "Connection read failed");
                break Err(e);
            }
        };

        let envelope = match Envelope::from_bytes(&body) {
            Ok(envelope) => envelope,
            Err(e) => {
                metric_inc!(CONVERSION_ERRORS);
                warn!(router = %router.name(), error = %e, "Dropping undecodable frame");
                continue;
            }
        };

        // Dispatch already logged and counted the drop.
        if let Err(e) = router.dispatch(envelope) {
            if e.is_closed() {
                break Ok(());
            }
            debug!(router = %router.name(), error = %e, "Inbound message dropped");
        }
    };

    router.close();
    result
}

async fn write_loop<W>(router: Arc<Router>, mut writer: W) -> Result<(), RouterError>
where
    W: AsyncWrite + Unpin,
{
    let outgoing = router.outgoing_queue();

    let result = loop {
        let Ok(envelope) = outgoing.dequeue().await else {
            break Ok(());
        };

        let command = envelope.command();
        let written = match envelope.to_bytes() {
            Ok(body) => write_frame(&mut writer, &body).await,
            Err(e) => Err(e.into()),
        };

        match written {
            Ok(()) => {}
            Err(RouterError::Conversion(e)) => {
                warn!(router = %router.name(), command = ?command, error = %e, "Dropping unencodable message");
            }
            Err(e) => {
                warn!(router = %router.name(), error = %e, "Connection write failed");
                break Err(e);
            }
        }
    };

    router.close();
    if let Err(e) = writer.shutdown().await {
        debug!(router = %router.name(), error = %e, "Shutdown of write half failed");
    }
    debug!(router = %router.name(), "Connection writer stopped");
    result
}
