//! # Router
//!
//! Owns the outgoing queue and an immutable Command→Route table.
//!
//! Only [`Router::dispatch`] pushes to inbound routes and only
//! [`Router::build`] creates them. Callers hold `Arc<Route<_>>` handles and
//! dequeue from them directly.

use crate::errors::RouterError;
use crate::route::Route;
use dag_telemetry::{metric_inc, CONVERSION_ERRORS, MESSAGES_DISPATCHED, UNKNOWN_COMMANDS};
use dag_wire::{decode, encode, Command, ConversionError, DomainMessage, Envelope, Message};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;
use tracing::{debug, warn};

/// Demultiplexer for one connection.
#[derive(Debug)]
pub struct Router {
    name: String,
    routes: HashMap<Command, Arc<Route<DomainMessage>>>,
    outgoing: Arc<Route<Envelope>>,
    closed: AtomicBool,
    shutdown: Notify,
}

impl Router {
    /// Build a router with one route per Command.
    ///
    /// The list is the complete set of inbound kinds this router accepts;
    /// anything else is rejected by [`Router::dispatch`].
    pub fn build(
        name: impl Into<String>,
        commands: impl IntoIterator<Item = Command>,
    ) -> Result<Self, RouterError> {
        let name = name.into();
        let mut routes = HashMap::new();
        for command in commands {
            if routes
                .insert(command, Arc::new(Route::for_command(command)))
                .is_some()
            {
                return Err(RouterError::DuplicateCommand(command));
            }
        }

        debug!(router = %name, routes = routes.len(), "Router built");

        Ok(Self {
            name,
            routes,
            outgoing: Arc::new(Route::outgoing()),
            closed: AtomicBool::new(false),
            shutdown: Notify::new(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The single queue drained by the connection writer.
    #[must_use]
    pub fn outgoing_queue(&self) -> Arc<Route<Envelope>> {
        Arc::clone(&self.outgoing)
    }

    /// The inbound route for `command`.
    pub fn route(&self, command: Command) -> Result<Arc<Route<DomainMessage>>, RouterError> {
        self.routes
            .get(&command)
            .cloned()
            .ok_or(RouterError::RouteNotFound(command))
    }

    /// Commands this router accepts, in no particular order.
    pub fn commands(&self) -> impl Iterator<Item = Command> + '_ {
        self.routes.keys().copied()
    }

    /// Decode an inbound envelope and queue it on its route.
    ///
    /// Unknown commands and malformed payloads are logged, counted and
    /// dropped. The error is returned so the driver can decide what to do,
    /// but neither affects any other route.
    pub fn dispatch(&self, envelope: Envelope) -> Result<(), RouterError> {
        let Some(command) = envelope.command() else {
            metric_inc!(CONVERSION_ERRORS);
            warn!(router = %self.name, "Dropping empty envelope");
            return Err(ConversionError::NilField("Envelope.payload").into());
        };

        let Some(route) = self.routes.get(&command) else {
            metric_inc!(UNKNOWN_COMMANDS);
            warn!(router = %self.name, command = %command, "Dropping message with no route");
            return Err(RouterError::Protocol(command));
        };

        let message = decode(envelope).map_err(|e| {
            metric_inc!(CONVERSION_ERRORS);
            warn!(
                router = %self.name,
                command = %command,
                error = %e,
                "Dropping message that failed conversion"
            );
            RouterError::Conversion(e)
        })?;

        route.enqueue(message)?;
        metric_inc!(MESSAGES_DISPATCHED, &[command.dialect().as_str()]);
        Ok(())
    }

    /// Encode a message and queue it for the writer.
    pub fn send<M: Message>(&self, message: M) -> Result<(), RouterError> {
        self.send_message(message.into())
    }

    /// Untyped form of [`Router::send`].
    pub fn send_message(&self, message: DomainMessage) -> Result<(), RouterError> {
        let envelope = encode(message)?;
        self.outgoing.enqueue(envelope)?;
        Ok(())
    }

    /// Close every route and the outgoing queue.
    ///
    /// Returns `false` if the router was already closed.
    pub fn close(&self) -> bool {
        if self.closed.swap(true, Ordering::SeqCst) {
            return false;
        }

        for route in self.routes.values() {
            route.close();
        }
        self.outgoing.close();
        self.shutdown.notify_waiters();

        debug!(router = %self.name, "Router closed");
        true
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Resolves once [`Router::close`] has been called.
    pub async fn closed(&self) {
        let notified = self.shutdown.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        if self.is_closed() {
            return;
        }
        notified.await;
    }
}

impl Drop for Router {
    fn drop(&mut self) {
        // Routes may outlive the router through Arc handles.
        self.close();
    }
}
