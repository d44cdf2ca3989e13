use anyhow::{Result, anyhow};
use pushy_service::{models::retry::RetryConfig, utils::retry_with_backoff};
use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};
use tokio::time::Instant;

/// Test: Successful operations complete without retry
#[tokio::test]
async fn test_successful_operation_no_retry() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 3,
        initial_delay_ms: 100,
        max_delay_ms: 1000,
        backoff_multiplier: 2,
    };

    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&config, |_| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, anyhow::Error>("success")
        }
    })
    .await?;

    assert_eq!(result, "success");
    assert_eq!(
        attempt_count.load(Ordering::SeqCst),
        1,
        "Should only attempt once"
    );

    Ok(())
}

/// Test: Transient failures are retried
#[tokio::test]
async fn test_transient_failures_are_retried() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 5,
        initial_delay_ms: 20,
        max_delay_ms: 100,
        backoff_multiplier: 2,
    };

    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&config, |_| {
        let counter = Arc::clone(&counter);
        async move {
            let attempts = counter.fetch_add(1, Ordering::SeqCst);

            // Fail first 2 attempts, succeed on 3rd
            if attempts < 2 {
                Err(anyhow!("Transient error"))
            } else {
                Ok("success")
            }
        }
    })
    .await?;

    assert_eq!(result, "success");
    assert_eq!(
        attempt_count.load(Ordering::SeqCst),
        3,
        "Should retry 2 times then succeed"
    );

    Ok(())
}

/// Test: Permanent failures exhaust retries and surface the last error
#[tokio::test]
async fn test_permanent_failure_exhausts_retries() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 4,
        initial_delay_ms: 10,
        max_delay_ms: 50,
        backoff_multiplier: 2,
    };

    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&config, |attempt| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<String, _>(anyhow!("failure on attempt {}", attempt))
        }
    })
    .await;

    let err = result.expect_err("Should fail after max attempts");
    assert_eq!(err.to_string(), "failure on attempt 4");
    assert_eq!(
        attempt_count.load(Ordering::SeqCst),
        4,
        "Should attempt exactly max_attempts times"
    );

    Ok(())
}

/// Test: Attempt numbers are passed to the operation starting at 1
#[tokio::test]
async fn test_attempt_numbers_are_sequential() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 3,
        ..Default::default()
    };

    let seen = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let _ = retry_with_backoff(&config, |attempt| {
        let recorder = Arc::clone(&recorder);
        async move {
            recorder.lock().await.push(attempt);
            Err::<(), _>(anyhow!("Fail"))
        }
    })
    .await;

    assert_eq!(*seen.lock().await, vec![1, 2, 3]);

    Ok(())
}

/// Test: Zero max_attempts still runs the operation once
#[tokio::test]
async fn test_zero_max_attempts_runs_once() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 0,
        ..Default::default()
    };

    let attempt_count = Arc::new(AtomicU32::new(0));
    let counter = Arc::clone(&attempt_count);

    let result = retry_with_backoff(&config, |_| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(anyhow!("Fail"))
        }
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempt_count.load(Ordering::SeqCst), 1);

    Ok(())
}

/// Test: Zero delay means attempts run back to back
#[tokio::test]
async fn test_zero_delay_retries_immediately() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 5,
        ..Default::default()
    };

    let start = Instant::now();
    let _ = retry_with_backoff(&config, |_| async { Err::<(), _>(anyhow!("Fail")) }).await;

    assert!(
        start.elapsed().as_millis() < 100,
        "Zero-delay retries should not sleep"
    );

    Ok(())
}

/// Test: Retry delays grow with the backoff multiplier
#[tokio::test]
async fn test_exponential_backoff_timing() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 4,
        initial_delay_ms: 100,
        max_delay_ms: 1000,
        backoff_multiplier: 2,
    };

    let start = Instant::now();
    let attempt_times = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let times = Arc::clone(&attempt_times);

    let _ = retry_with_backoff(&config, |_| {
        let times = Arc::clone(&times);
        async move {
            let elapsed = start.elapsed().as_millis();
            times.lock().await.push(elapsed);
            Err::<String, _>(anyhow!("Fail"))
        }
    })
    .await;

    let times = attempt_times.lock().await;

    assert_eq!(times.len(), 4);

    assert!(times[0] < 50, "First attempt should be immediate");

    for i in 1..times.len() {
        let delay = times[i] - times[i - 1];
        let expected_min =
            (config.initial_delay_ms * config.backoff_multiplier.pow(i as u32 - 1)) * 8 / 10;

        assert!(
            delay >= expected_min as u128,
            "Delay {} should be at least {} (actual: {})",
            i,
            expected_min,
            delay
        );
    }

    Ok(())
}

/// Test: Retry state is independent per operation
#[tokio::test]
async fn test_retry_state_independence() -> Result<()> {
    let config = Arc::new(RetryConfig {
        max_attempts: 5,
        initial_delay_ms: 10,
        max_delay_ms: 50,
        backoff_multiplier: 2,
    });

    // Operation 1: Fails permanently
    let config1 = Arc::clone(&config);
    let handle1 = tokio::spawn(async move {
        retry_with_backoff(&config1, |_| async {
            Err::<String, _>(anyhow!("Always fail"))
        })
        .await
    });

    // Operation 2: Succeeds after 2 failures
    let config2 = Arc::clone(&config);
    let counter2 = Arc::new(AtomicU32::new(0));
    let counter2_clone = Arc::clone(&counter2);
    let handle2 = tokio::spawn(async move {
        retry_with_backoff(&config2, |_| {
            let counter = Arc::clone(&counter2_clone);
            async move {
                let attempts = counter.fetch_add(1, Ordering::SeqCst);
                if attempts < 2 {
                    Err(anyhow!("Fail"))
                } else {
                    Ok("success")
                }
            }
        })
        .await
    });

    let (result1, result2) = tokio::join!(handle1, handle2);

    assert!(result1?.is_err(), "Operation 1 should fail");
    assert!(result2?.is_ok(), "Operation 2 should succeed");
    assert_eq!(
        counter2.load(Ordering::SeqCst),
        3,
        "Operation 2 should make 3 attempts"
    );

    Ok(())
}

/// Test: A max delay below the initial delay does not shrink later delays
#[tokio::test]
async fn test_max_delay_below_initial_keeps_initial_delay() -> Result<()> {
    let config = RetryConfig {
        max_attempts: 3,
        initial_delay_ms: 100,
        max_delay_ms: 0,
        backoff_multiplier: 2,
    };

    let start = Instant::now();
    let attempt_times = Arc::new(tokio::sync::Mutex::new(Vec::new()));
    let times = Arc::clone(&attempt_times);

    let _ = retry_with_backoff(&config, |_| {
        let times = Arc::clone(&times);
        async move {
            times.lock().await.push(start.elapsed().as_millis());
            Err::<(), _>(anyhow!("Fail"))
        }
    })
    .await;

    let times = attempt_times.lock().await;
    assert_eq!(times.len(), 3);
    for i in 1..times.len() {
        let delay = times[i] - times[i - 1];
        assert!(delay >= 80, "Delay {} collapsed to {}ms", i, delay);
    }

    Ok(())
}
