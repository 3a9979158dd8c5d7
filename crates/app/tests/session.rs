//! Session behaviour against a mocked store API.

use std::sync::Arc;

use rust_decimal::Decimal;
use testresult::TestResult;

use tienda_app::{
    backend::{BackendError, MockStoreBackend, OrderReceipt, Product},
    domain::checkout::{CheckoutError, CheckoutState},
    identity::PlaceholderIdentity,
    session::StoreSession,
};

fn product(title: &str, price: Decimal, category: &str) -> Product {
    Product {
        title: title.to_string(),
        price,
        description: String::new(),
        category: category.to_string(),
        image_url: None,
        id: None,
    }
}

fn catalog() -> Vec<Product> {
    vec![
        product("Taco", Decimal::new(350, 2), "Mains"),
        product("Soda", Decimal::new(150, 2), "Drinks"),
    ]
}

fn session_with(backend: MockStoreBackend) -> StoreSession {
    StoreSession::new(Arc::new(backend), Arc::new(PlaceholderIdentity))
}

#[tokio::test]
async fn refresh_catalog_populates_products_and_categories() {
    let mut backend = MockStoreBackend::new();
    backend.expect_fetch_products().returning(|_| Ok(catalog()));

    let mut session = session_with(backend);
    session.refresh_catalog(None).await;

    assert_eq!(session.catalog.products().len(), 2);
    assert_eq!(session.catalog.categories(), ["Mains", "Drinks"]);
    assert!(!session.catalog.is_loading());
}

#[tokio::test]
async fn refresh_catalog_passes_the_filter_through() {
    let mut backend = MockStoreBackend::new();
    backend
        .expect_fetch_products()
        .withf(|category| category.as_deref() == Some("Drinks"))
        .returning(|_| Ok(vec![product("Soda", Decimal::new(150, 2), "Drinks")]));

    let mut session = session_with(backend);
    session.refresh_catalog(Some("Drinks".to_string())).await;

    assert_eq!(session.catalog.category(), Some("Drinks"));
    assert_eq!(session.catalog.products().len(), 1);
}

#[tokio::test]
async fn refresh_catalog_failure_degrades_to_an_empty_catalog() {
    let mut backend = MockStoreBackend::new();
    backend
        .expect_fetch_products()
        .times(1)
        .returning(|_| Ok(catalog()));
    backend
        .expect_fetch_products()
        .times(1)
        .returning(|_| Err(BackendError::UnexpectedResponse("status 500".to_string())));

    let mut session = session_with(backend);
    session.refresh_catalog(None).await;
    session.refresh_catalog(None).await;

    assert!(session.catalog.products().is_empty());
    assert!(!session.catalog.is_loading());
}

#[tokio::test]
async fn add_to_cart_merges_repeat_additions() {
    let mut backend = MockStoreBackend::new();
    backend.expect_fetch_products().returning(|_| Ok(catalog()));

    let mut session = session_with(backend);
    session.refresh_catalog(None).await;

    session.add_to_cart("Taco");
    session.add_to_cart("Taco");
    session.add_to_cart("Soda");

    assert_eq!(session.cart.lines().len(), 2);
    assert_eq!(session.cart.line("Taco").map(|line| line.quantity), Some(2));
    assert_eq!(session.cart.totals().subtotal, Decimal::new(850, 2));
}

#[tokio::test]
async fn add_to_cart_requires_a_loaded_product() {
    let mut backend = MockStoreBackend::new();
    backend.expect_fetch_products().returning(|_| Ok(catalog()));

    let mut session = session_with(backend);
    session.refresh_catalog(None).await;

    let line = session.add_to_cart("Burrito");

    assert!(line.is_none());
    assert!(session.cart.is_empty());
}

#[tokio::test]
async fn successful_checkout_clears_the_cart_and_reports_the_order_id() -> TestResult {
    let mut backend = MockStoreBackend::new();
    backend.expect_fetch_products().returning(|_| Ok(catalog()));
    backend
        .expect_create_order()
        .withf(|order| {
            order.items.len() == 2
                && order.subtotal == Decimal::new(850, 2)
                && order.status == "pending"
        })
        .returning(|_| {
            Ok(OrderReceipt {
                order_id: "ord-42".to_string(),
            })
        });

    let mut session = session_with(backend);
    session.refresh_catalog(None).await;
    session.add_to_cart("Taco");
    session.add_to_cart("Taco");
    session.add_to_cart("Soda");

    let state = session.submit_order().await?;

    assert_eq!(
        state,
        &CheckoutState::Success {
            order_id: "ord-42".to_string()
        }
    );
    assert!(session.cart.is_empty());

    Ok(())
}

#[tokio::test]
async fn failed_checkout_preserves_the_cart() -> TestResult {
    let mut backend = MockStoreBackend::new();
    backend.expect_fetch_products().returning(|_| Ok(catalog()));
    backend.expect_create_order().returning(|_| {
        Err(BackendError::UnexpectedResponse(
            "order submission failed with status 502".to_string(),
        ))
    });

    let mut session = session_with(backend);
    session.refresh_catalog(None).await;
    session.add_to_cart("Taco");
    session.add_to_cart("Soda");
    session.set_quantity("Soda", 4);

    let lines_before = session.cart.lines().to_vec();

    let state = session.submit_order().await?;

    assert_eq!(state, &CheckoutState::Failure);
    assert_eq!(session.cart.lines(), lines_before.as_slice());

    Ok(())
}

#[tokio::test]
async fn checkout_with_an_empty_cart_sends_no_request() {
    let mut backend = MockStoreBackend::new();
    backend.expect_create_order().never();

    let mut session = session_with(backend);

    let result = session.submit_order().await;

    assert!(
        matches!(result, Err(CheckoutError::EmptyCart)),
        "expected EmptyCart, got {result:?}"
    );
    assert_eq!(session.checkout.state(), &CheckoutState::Idle);
}

#[tokio::test]
async fn an_expired_notice_returns_the_session_to_idle() -> TestResult {
    let mut backend = MockStoreBackend::new();
    backend.expect_fetch_products().returning(|_| Ok(catalog()));
    backend.expect_create_order().returning(|_| {
        Ok(OrderReceipt {
            order_id: "ord-7".to_string(),
        })
    });

    let mut session = session_with(backend);
    session.refresh_catalog(None).await;
    session.add_to_cart("Taco");
    session.submit_order().await?;

    assert!(session.expire_notice());
    assert_eq!(session.checkout.state(), &CheckoutState::Idle);

    Ok(())
}
