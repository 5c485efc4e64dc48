//! Checkout flow
//!
//! One linear flow per submission: guard, snapshot, send, then either
//! clear the cart (success) or leave it untouched (failure). The
//! transport sits behind a trait so the flow is testable without a
//! network.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use shared::Cart;
use shared::models::{Sale, SaleSubmission};

use crate::{ClientError, ClientResult};

/// Transport seam for sale submission
#[async_trait]
pub trait SaleTransport {
    /// Send one sale submission to the backend. Exactly one request; any
    /// retry policy lives with the implementor, not the checkout flow.
    async fn submit_sale(&self, submission: &SaleSubmission) -> ClientResult<Sale>;
}

#[async_trait]
impl<T: SaleTransport + Sync> SaleTransport for &T {
    async fn submit_sale(&self, submission: &SaleSubmission) -> ClientResult<Sale> {
        (**self).submit_sale(submission).await
    }
}

#[async_trait]
impl<T: SaleTransport + Send + Sync> SaleTransport for std::sync::Arc<T> {
    async fn submit_sale(&self, submission: &SaleSubmission) -> ClientResult<Sale> {
        (**self).submit_sale(submission).await
    }
}

/// Which backend-owned views must be refetched after a sale
///
/// Stock levels and sales history change server-side on every recorded
/// sale, so cached copies of both are stale once a submission succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheInvalidation {
    pub products: bool,
    pub sales: bool,
}

impl CacheInvalidation {
    pub fn all() -> Self {
        Self {
            products: true,
            sales: true,
        }
    }
}

/// Result of a successful checkout
#[derive(Debug, Clone)]
pub struct CheckoutReceipt {
    /// The sale as recorded by the backend
    pub sale: Sale,
    pub invalidate: CacheInvalidation,
}

/// Owns the cart for one checkout session and drives submission
#[derive(Debug)]
pub struct CheckoutFlow<T: SaleTransport> {
    cart: Cart,
    transport: T,
    in_flight: AtomicBool,
}

/// Releases the in-flight flag even when the submit future is dropped
/// at its await point (caller-side select/timeout).
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl<T: SaleTransport> CheckoutFlow<T> {
    pub fn new(transport: T) -> Self {
        Self {
            cart: Cart::new(),
            transport,
            in_flight: AtomicBool::new(false),
        }
    }

    /// The cart under checkout
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable cart access for add / set-quantity operations.
    ///
    /// The payload of an outstanding submission was snapshotted before
    /// the request went out, so mutating here never alters what was
    /// sent.
    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Whether a submission is outstanding; callers disable the checkout
    /// control while this is true
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Submit the current cart as one sale.
    ///
    /// Rejects an empty cart and re-entrant submission before any
    /// network traffic. On success the cart is cleared atomically and
    /// the caller receives the invalidation set; on failure the cart is
    /// left intact for a manual retry and the error is surfaced
    /// verbatim. A timeout is an unknown outcome: it is reported as an
    /// error and never silently retried with a fresh receipt number.
    pub async fn submit(&mut self, payment_method: &str) -> ClientResult<CheckoutReceipt> {
        if self.in_flight.load(Ordering::SeqCst) {
            return Err(ClientError::SubmissionInFlight);
        }
        let submission = self.cart.to_submission(payment_method)?;

        self.in_flight.store(true, Ordering::SeqCst);
        let guard = InFlightGuard(&self.in_flight);
        let result = self.transport.submit_sale(&submission).await;
        drop(guard);

        match result {
            Ok(sale) => {
                self.cart.clear();
                Ok(CheckoutReceipt {
                    sale,
                    invalidate: CacheInvalidation::all(),
                })
            }
            Err(err) => Err(err),
        }
    }
}
