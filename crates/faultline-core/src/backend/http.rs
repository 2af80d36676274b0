use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use flume::{Receiver, Sender, TrySendError};
use tracing::{debug, warn};

use super::{BackendConnector, Dsn, ErrorBackend};
use crate::errors::{FaultlineError, Result};
use crate::event::ErrorEvent;

pub const DEFAULT_QUEUE_CAPACITY: usize = 100;
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const WORKER_THREAD_NAME: &str = "faultline-backend";
const CLIENT_NAME: &str = concat!("faultline/", env!("CARGO_PKG_VERSION"));

/// Delivery counters shared between the backend handle and its worker
#[derive(Debug, Default)]
pub struct BackendStats {
    submitted: AtomicU64,
    delivered: AtomicU64,
    dropped: AtomicU64,
}

impl BackendStats {
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }
}

/// Connects `HttpBackend`s for Sentry DSNs
#[derive(Debug, Clone)]
pub struct HttpConnector {
    queue_capacity: usize,
    request_timeout: Duration,
}

impl Default for HttpConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpConnector {
    pub fn new() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity.max(1);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

impl BackendConnector for HttpConnector {
    fn connect(&self, endpoint: &str, environment: &str) -> Result<Arc<dyn ErrorBackend>> {
        let dsn = Dsn::parse(endpoint)?;
        let backend = HttpBackend::start(&dsn, self.queue_capacity, self.request_timeout)?;
        debug!(
            host = dsn.host(),
            project_id = dsn.project_id(),
            environment,
            "error backend started"
        );
        Ok(Arc::new(backend))
    }
}

enum Envelope {
    Event(Box<ErrorEvent>),
    Drain(Sender<()>),
}

/// Sentry store client fed through a bounded queue
///
/// Submissions never block: when the queue is full the event is dropped
/// and counted. A single worker thread owns the blocking HTTP client and
/// handles envelopes in FIFO order, which is what makes `drain` work.
pub struct HttpBackend {
    sender: Sender<Envelope>,
    stats: Arc<BackendStats>,
}

impl HttpBackend {
    /// Spawn the worker thread for `dsn`
    ///
    /// # Errors
    ///
    /// Returns `FaultlineError::BackendInit` if the worker thread cannot be
    /// spawned.
    pub fn start(dsn: &Dsn, queue_capacity: usize, request_timeout: Duration) -> Result<Self> {
        let (sender, receiver) = flume::bounded::<Envelope>(queue_capacity.max(1));
        let stats = Arc::new(BackendStats::default());

        let delivery_thread = DeliveryThread {
            receiver,
            stats: Arc::clone(&stats),
            store_url: dsn.store_url(),
            auth_header: dsn.auth_header(CLIENT_NAME),
            request_timeout,
        };

        let _detached_thread = std::thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || delivery_thread.run_to_end())
            .map_err(|e| FaultlineError::BackendInit {
                reason: format!("failed to spawn backend worker: {e}"),
            })?;

        Ok(Self { sender, stats })
    }

    pub fn stats(&self) -> &BackendStats {
        &self.stats
    }
}

impl ErrorBackend for HttpBackend {
    fn submit(&self, event: ErrorEvent) {
        self.stats.submitted.fetch_add(1, Ordering::Relaxed);
        match self.sender.try_send(Envelope::Event(Box::new(event))) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                warn!("error backend queue is full, event dropped");
            }
            Err(TrySendError::Disconnected(_)) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                warn!("error backend worker is gone, event dropped");
            }
        }
    }

    fn drain(&self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        let (ack_sender, ack_receiver) = flume::bounded::<()>(1);
        if self
            .sender
            .send_deadline(Envelope::Drain(ack_sender), deadline)
            .is_err()
        {
            return false;
        }
        ack_receiver.recv_deadline(deadline).is_ok()
    }
}

struct DeliveryThread {
    receiver: Receiver<Envelope>,
    stats: Arc<BackendStats>,
    store_url: String,
    auth_header: String,
    request_timeout: Duration,
}

impl DeliveryThread {
    fn run_to_end(self) {
        // the blocking client must be built off any async runtime
        let client = match reqwest::blocking::Client::builder()
            .timeout(self.request_timeout)
            .user_agent(CLIENT_NAME)
            .build()
        {
            Ok(client) => Some(client),
            Err(e) => {
                warn!("failed to build error backend http client: {e}");
                None
            }
        };

        while let Ok(envelope) = self.receiver.recv() {
            match envelope {
                Envelope::Event(event) => match &client {
                    Some(client) => self.deliver(client, &event),
                    None => {
                        self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                    }
                },
                Envelope::Drain(ack) => {
                    let _ = ack.send(());
                }
            }
        }

        debug!("error backend worker stopped");
    }

    fn deliver(&self, client: &reqwest::blocking::Client, event: &ErrorEvent) {
        let r = client
            .post(&self.store_url)
            .header("X-Sentry-Auth", &self.auth_header)
            .json(event)
            .send();
        match r {
            Ok(rsp) if rsp.status().is_success() => {
                self.stats.delivered.fetch_add(1, Ordering::Relaxed);
            }
            Ok(rsp) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(
                    status = rsp.status().as_u16(),
                    event_id = %event.event_id,
                    "error backend rejected event"
                );
            }
            Err(e) => {
                self.stats.dropped.fetch_add(1, Ordering::Relaxed);
                warn!(event_id = %event.event_id, "failed to send event to error backend: {e}");
            }
        }
    }
}
