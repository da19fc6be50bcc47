//! # till-checkout: Checkout Session Orchestration
//!
//! The thin layer between the POS front end and the pure pricing logic in
//! `till-core`. It owns a checkout session's lifecycle, submits orders
//! through the [`backend::OrderBackend`] seam, and suppresses superseded
//! lookup responses.
//!
//! ## What Lives Where
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  till-checkout (this crate)         till-core                           │
//! │  ──────────────────────────         ─────────                           │
//! │  CheckoutSession lifecycle          Money, TaxRate                      │
//! │  Draft → Previewed → Submitted      Cart reducers + quantity guard     │
//! │  OrderBackend trait seam            Discount engine                    │
//! │  LookupSequencer                    Totals aggregator                  │
//! │  CheckoutError (front-end facing)   CoreError / ValidationError        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is synchronous state management except the single
//! `await` on order submission. There is no shared mutable state: one
//! session belongs to one user's tab.

pub mod backend;
pub mod error;
pub mod lookup;
pub mod session;

pub use backend::{BackendError, OrderBackend, OrderReceipt, OrderSubmission};
pub use error::{CheckoutError, ErrorCode};
pub use lookup::{LookupSequencer, LookupTicket};
pub use session::CheckoutSession;
