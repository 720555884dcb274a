//! Dashboard view state
//!
//! One holder owns the current fetch result. It moves
//! idle → loading → success | failure and back to idle on the next input.
//! Every connect gets a sequence-numbered ticket, and only the most recently
//! issued ticket may write its result. A slow, superseded fetch therefore
//! cannot overwrite a newer one.

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{FetchError, FetchOutcome};
use crate::export;
use crate::fetcher::BalanceFetcher;
use crate::protocol::AddressSnapshot;
use crate::qr;
use crate::view::DashboardView;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success(AddressSnapshot),
    Failure(FetchError),
}

/// Proof that a fetch was started; hand it back to [`ViewState::complete`].
#[derive(Debug)]
pub struct FetchTicket {
    seq: u64,
    address: String,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

#[derive(Debug, Default)]
pub struct ViewState {
    input: String,
    state: FetchState,
    issued: u64,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn snapshot(&self) -> Option<&AddressSnapshot> {
        match &self.state {
            FetchState::Success(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Store new input. A finished result (either kind) is cleared; an
    /// in-flight fetch is left to land.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        if matches!(self.state, FetchState::Success(_) | FetchState::Failure(_)) {
            self.state = FetchState::Idle;
        }
    }

    /// Start a fetch for the current input.
    ///
    /// Returns `None` (and records `MissingAddress`) when there is nothing
    /// to fetch. Either way any in-flight ticket is superseded. Otherwise the
    /// previous result is dropped and the state becomes `Loading`.
    pub fn begin_connect(&mut self) -> Option<FetchTicket> {
        self.issued += 1;
        if self.input.is_empty() {
            self.state = FetchState::Failure(FetchError::MissingAddress);
            return None;
        }

        self.state = FetchState::Loading;
        Some(FetchTicket {
            seq: self.issued,
            address: self.input.clone(),
        })
    }

    /// Apply a finished fetch. Returns `false` if the ticket was superseded
    /// and the outcome was discarded.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        outcome: FetchOutcome<AddressSnapshot>,
    ) -> bool {
        if ticket.seq != self.issued {
            return false;
        }

        self.state = match outcome {
            Ok(snapshot) => FetchState::Success(snapshot),
            Err(e) => FetchState::Failure(e),
        };
        true
    }
}

/// The dashboard: view state plus the fetcher that feeds it.
pub struct Dashboard {
    state: Mutex<ViewState>,
    fetcher: BalanceFetcher,
    admin_address: String,
}

impl Dashboard {
    pub fn new(fetcher: BalanceFetcher, admin_address: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(ViewState::new()),
            fetcher,
            admin_address: admin_address.into(),
        }
    }

    pub async fn view(&self) -> DashboardView {
        let state = self.state.lock().await;
        DashboardView::render(&state, &self.admin_address)
    }

    pub async fn set_input(&self, text: impl Into<String>) -> DashboardView {
        let mut state = self.state.lock().await;
        state.set_input(text);
        DashboardView::render(&state, &self.admin_address)
    }

    /// Fetch the current input and apply the result if it is still wanted.
    ///
    /// The lock is released while the explorer is being queried.
    pub async fn connect(&self) -> DashboardView {
        let ticket = {
            let mut state = self.state.lock().await;
            match state.begin_connect() {
                Some(ticket) => ticket,
                None => return DashboardView::render(&state, &self.admin_address),
            }
        };

        let seq = ticket.seq();
        let outcome = self.fetcher.fetch(ticket.address()).await;
        if let Err(e) = &outcome {
            warn!("Fetch #{} failed: {}", seq, e);
        }

        let mut state = self.state.lock().await;
        if state.complete(ticket, outcome) {
            info!("Fetch #{} applied", seq);
        } else {
            debug!("Fetch #{} superseded; result discarded", seq);
        }
        DashboardView::render(&state, &self.admin_address)
    }

    /// CSV of every loaded transaction, or `None` when nothing is loaded.
    pub async fn export_csv(&self) -> Option<String> {
        let state = self.state.lock().await;
        state
            .snapshot()
            .map(|snapshot| export::transactions_csv(&snapshot.transactions))
    }

    /// QR code for the current input, or `None` when the input is empty.
    pub async fn qr_svg(&self) -> Result<Option<String>> {
        let input = self.state.lock().await.input().to_string();
        if input.is_empty() {
            return Ok(None);
        }
        qr::address_qr_svg(&input).map(Some)
    }
}
