// Checkout flow integration tests against an in-memory transport.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use rust_decimal::Decimal;

use pos_client::{CheckoutFlow, ClientError, ClientResult, SaleTransport};
use shared::models::{Product, Sale, SaleSubmission};

/// Transport double: counts calls, captures payloads, answers with a
/// configurable outcome.
struct MockTransport {
    calls: AtomicUsize,
    captured: Mutex<Vec<SaleSubmission>>,
    fail_with: Option<fn() -> ClientError>,
}

impl MockTransport {
    fn succeeding() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            captured: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    fn failing(err: fn() -> ClientError) -> Self {
        Self {
            fail_with: Some(err),
            ..Self::succeeding()
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SaleTransport for MockTransport {
    async fn submit_sale(&self, submission: &SaleSubmission) -> ClientResult<Sale> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.captured.lock().unwrap().push(submission.clone());

        if let Some(err) = self.fail_with {
            return Err(err());
        }

        Ok(Sale {
            id: 1,
            receipt_number: submission.receipt_number.clone(),
            total_amount: submission.total_amount,
            payment_method: Some(submission.payment_method.clone()),
            customer_name: None,
            customer_phone: None,
            created_by: Some(1),
            created_at: None,
            items: Vec::new(),
        })
    }
}

fn product(id: i64, price: Decimal) -> Product {
    Product {
        id,
        name: format!("Product {id}"),
        sku: format!("SKU-{id}"),
        description: None,
        category: None,
        price,
        cost: None,
        stock: 50,
        reorder_level: 10,
        image_url: None,
        created_at: None,
    }
}

#[tokio::test]
async fn test_empty_cart_is_rejected_without_network_call() {
    let transport = MockTransport::succeeding();
    let mut flow = CheckoutFlow::new(&transport);

    let result = flow.submit("cash").await;

    assert!(matches!(result, Err(ClientError::EmptyCart(_))));
    assert_eq!(transport.calls(), 0);
    assert!(!flow.is_in_flight());
}

#[tokio::test]
async fn test_successful_submission_clears_cart_and_invalidates_views() {
    let transport = MockTransport::succeeding();
    let mut flow = CheckoutFlow::new(&transport);
    flow.cart_mut().add_product(product(1, Decimal::new(1000, 2)));
    flow.cart_mut().add_product(product(1, Decimal::new(1000, 2)));
    flow.cart_mut().add_product(product(2, Decimal::new(550, 2)));

    let receipt = flow.submit("cash").await.unwrap();

    assert!(flow.cart().is_empty());
    assert!(!flow.is_in_flight());
    assert!(receipt.invalidate.products);
    assert!(receipt.invalidate.sales);
    assert_eq!(receipt.sale.total_amount, Decimal::new(2550, 2));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_sent_payload_is_a_snapshot_of_the_cart() {
    let transport = MockTransport::succeeding();
    let mut flow = CheckoutFlow::new(&transport);
    flow.cart_mut().add_product(product(1, Decimal::new(1000, 2)));
    flow.cart_mut().add_product(product(1, Decimal::new(1000, 2)));
    flow.cart_mut().add_product(product(2, Decimal::new(550, 2)));

    flow.submit("card").await.unwrap();

    // The cart was cleared on success; the payload keeps the snapshot.
    let captured = transport.captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    let sent = &captured[0];
    assert_eq!(sent.items.len(), 2);
    assert_eq!(sent.total_amount, Decimal::new(2550, 2));
    assert_eq!(sent.items[0].quantity, 2);
    assert_eq!(sent.items[0].unit_price, Decimal::new(1000, 2));
    assert_eq!(sent.payment_method, "card");
    assert!(sent.receipt_number.starts_with("RCP-"));
}

#[tokio::test]
async fn test_failed_submission_preserves_cart() {
    let transport = MockTransport::failing(|| ClientError::Validation {
        status: 400,
        message: "duplicate receipt".to_string(),
    });
    let mut flow = CheckoutFlow::new(&transport);
    flow.cart_mut().add_product(product(1, Decimal::new(1000, 2)));
    flow.cart_mut().add_product(product(2, Decimal::new(550, 2)));

    let result = flow.submit("cash").await;

    assert!(matches!(
        result,
        Err(ClientError::Validation { status: 400, .. })
    ));
    assert_eq!(flow.cart().len(), 2);
    assert_eq!(flow.cart().total(), Decimal::new(1550, 2));
    assert!(!flow.is_in_flight());
}

#[tokio::test]
async fn test_timeout_is_reported_not_retried() {
    let transport = MockTransport::failing(|| ClientError::Timeout);
    let mut flow = CheckoutFlow::new(&transport);
    flow.cart_mut().add_product(product(1, Decimal::new(1000, 2)));

    let result = flow.submit("cash").await;

    // Unknown outcome: exactly one request went out, the cart stays for
    // manual verification, no fresh receipt number is generated.
    assert!(matches!(result, Err(ClientError::Timeout)));
    assert_eq!(transport.calls(), 1);
    assert_eq!(flow.cart().len(), 1);
}

/// Transport double that never completes; used to park a submission at
/// its await point.
struct PendingTransport {
    calls: AtomicUsize,
}

#[async_trait]
impl SaleTransport for PendingTransport {
    async fn submit_sale(&self, _submission: &SaleSubmission) -> ClientResult<Sale> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::future::pending::<()>().await;
        unreachable!("pending transport never resolves")
    }
}

#[tokio::test]
async fn test_dropped_submit_future_releases_in_flight_flag() {
    let transport = PendingTransport {
        calls: AtomicUsize::new(0),
    };
    let mut flow = CheckoutFlow::new(&transport);
    flow.cart_mut().add_product(product(1, Decimal::new(1000, 2)));

    // Caller-side timeout drops the submit future at its await point.
    let outcome =
        tokio::time::timeout(std::time::Duration::from_millis(20), flow.submit("cash")).await;
    assert!(outcome.is_err());

    assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    assert!(!flow.is_in_flight());
    assert_eq!(flow.cart().len(), 1);
}

#[tokio::test]
async fn test_manual_retry_after_failure_sends_fresh_receipt() {
    let failing = MockTransport::failing(|| ClientError::Timeout);
    let succeeding = MockTransport::succeeding();

    let mut flow = CheckoutFlow::new(&failing);
    flow.cart_mut().add_product(product(1, Decimal::new(1000, 2)));
    flow.submit("cash").await.unwrap_err();

    // The operator retries explicitly; to_submission mints a new token.
    let mut retry_flow = CheckoutFlow::new(&succeeding);
    *retry_flow.cart_mut() = flow.cart().clone();
    retry_flow.submit("cash").await.unwrap();

    let first = failing.captured.lock().unwrap()[0].receipt_number.clone();
    let second = succeeding.captured.lock().unwrap()[0].receipt_number.clone();
    assert_ne!(first, second);
}
