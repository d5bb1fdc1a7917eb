use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use campaign_gen::delivery::{send_with_retry, DeliveryResponse, RetryPolicy};
use campaign_gen::error::GenError;

fn ok_response(status: u16) -> DeliveryResponse {
    DeliveryResponse {
        status,
        body: "ok".to_string(),
        headers: HashMap::new(),
    }
}

fn transport_error(attempt: u32) -> GenError {
    GenError::DeliveryTransport {
        attempts: attempt,
        message: "connection refused".to_string(),
    }
}

#[tokio::test(start_paused = true)]
async fn two_failures_then_success_takes_three_attempts_with_doubling_backoff() {
    let policy = RetryPolicy {
        max_retries: 2,
        backoff: Duration::from_secs(1),
    };
    let started = tokio::time::Instant::now();
    let attempt_times = RefCell::new(Vec::new());

    let response = send_with_retry(&policy, |attempt| {
        attempt_times.borrow_mut().push(started.elapsed());
        let outcome = if attempt <= 2 {
            Err(transport_error(attempt))
        } else {
            Ok(ok_response(200))
        };
        async move { outcome }
    })
    .await
    .expect("third attempt succeeds");

    assert_eq!(response.status, 200);
    // Attempt 1 immediately, then sleeps of backoff and 2*backoff.
    assert_eq!(
        *attempt_times.borrow(),
        vec![
            Duration::from_secs(0),
            Duration::from_secs(1),
            Duration::from_secs(3),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn persistent_failure_stops_after_max_retries_plus_one_attempts() {
    let policy = RetryPolicy {
        max_retries: 2,
        backoff: Duration::from_millis(100),
    };
    let attempts = RefCell::new(0u32);

    let err = send_with_retry(&policy, |attempt| {
        *attempts.borrow_mut() += 1;
        async move { Err(transport_error(attempt)) }
    })
    .await
    .expect_err("budget exhausts");

    assert_eq!(*attempts.borrow(), 3);
    match err {
        GenError::DeliveryTransport { attempts: terminal, .. } => assert_eq!(terminal, 3),
        other => panic!("expected DeliveryTransport, got {other}"),
    }
}

#[tokio::test(start_paused = true)]
async fn large_retry_budgets_saturate_backoff_instead_of_overflowing() {
    // Past attempt 32 the doubling factor leaves u32; the wait saturates
    // rather than panicking or wrapping to a tiny delay.
    let policy = RetryPolicy {
        max_retries: 40,
        backoff: Duration::from_nanos(1),
    };
    let attempts = RefCell::new(0u32);

    let err = send_with_retry(&policy, |attempt| {
        *attempts.borrow_mut() += 1;
        async move { Err(transport_error(attempt)) }
    })
    .await
    .expect_err("budget exhausts");

    assert_eq!(*attempts.borrow(), 41);
    assert!(matches!(err, GenError::DeliveryTransport { .. }));
}

#[tokio::test]
async fn non_2xx_status_is_returned_not_retried() {
    let policy = RetryPolicy::default();
    let attempts = RefCell::new(0u32);

    let response = send_with_retry(&policy, |_attempt| {
        *attempts.borrow_mut() += 1;
        async { Ok(ok_response(503)) }
    })
    .await
    .expect("a received response is a delivered payload");

    assert_eq!(response.status, 503);
    assert_eq!(*attempts.borrow(), 1);
}

#[tokio::test]
async fn first_attempt_success_sleeps_zero_times() {
    let policy = RetryPolicy {
        max_retries: 3,
        backoff: Duration::from_secs(3600),
    };
    // A real hour-long sleep would hang the test; instant success must not
    // reach the backoff at all.
    let response = tokio::time::timeout(
        Duration::from_secs(1),
        send_with_retry(&policy, |_| async { Ok(ok_response(201)) }),
    )
    .await
    .expect("no backoff on immediate success")
    .expect("delivery succeeds");
    assert_eq!(response.status, 201);
}
