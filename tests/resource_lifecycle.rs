//! Fetch-lifecycle behavior of the resource observers: idle short-circuits,
//! success/error terminal states, the stale-response guard, and refetch.

use std::sync::Arc;
use std::time::Duration;

use quotedeck_core::{resource, FetchState, SeriesParams, SymbolParams};
use quotedeck_tests::{companies_body, scripted_client, series_body, ScriptedTransport};

use tokio::sync::watch;
use tokio::time::timeout;

/// Wait until the resource leaves the loading phase with a terminal state.
async fn settled<T: Clone>(rx: &mut watch::Receiver<FetchState<T>>) -> FetchState<T> {
    let wait = async {
        loop {
            {
                let state = rx.borrow();
                if !state.loading && (state.data.is_some() || state.error.is_some()) {
                    return state.clone();
                }
            }
            rx.changed().await.expect("resource dropped");
        }
    };
    timeout(Duration::from_secs(2), wait)
        .await
        .expect("resource settled in time")
}

#[tokio::test]
async fn missing_params_reset_to_idle_without_a_call() {
    let transport = Arc::new(ScriptedTransport::new());
    let client = scripted_client(Arc::clone(&transport));
    let summaries = resource::summary(&client);

    summaries.set_params(None);
    summaries.set_params(Some(SymbolParams {
        symbol: String::new(),
    }));

    assert!(summaries.snapshot().is_idle());
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn successful_fetch_lands_data_and_clears_error() {
    let transport =
        Arc::new(ScriptedTransport::new().on("/companies", 200, &companies_body()));
    let client = scripted_client(Arc::clone(&transport));
    let companies = resource::companies(&client);
    let mut rx = companies.observe();

    companies.start();

    let state = settled(&mut rx).await;
    assert!(state.error.is_none());
    let list = state.data.expect("companies loaded");
    assert_eq!(list.count, 2);
    assert_eq!(list.companies[0].symbol, "TCS.NS");
}

#[tokio::test]
async fn backend_failure_becomes_resource_error_state() {
    let transport = Arc::new(ScriptedTransport::new().on(
        "/summary/XXX.NS",
        404,
        r#"{"detail": "Stock XXX.NS not found"}"#,
    ));
    let client = scripted_client(Arc::clone(&transport));
    let summaries = resource::summary(&client);
    let mut rx = summaries.observe();

    summaries.set_params(Some(SymbolParams {
        symbol: String::from("XXX.NS"),
    }));

    let state = settled(&mut rx).await;
    assert!(state.data.is_none());
    let message = state.error.expect("error surfaced as state");
    assert!(message.contains("summary"), "resource label in message: {message}");
    assert!(message.contains("Stock XXX.NS not found"), "detail kept: {message}");
}

#[tokio::test]
async fn stale_response_never_overwrites_newer_params() {
    // P1 answers slowly, P2 quickly: the P1 completion must be discarded.
    let transport = Arc::new(
        ScriptedTransport::new()
            .on_delayed(
                "/data/TCS.NS?days=30",
                200,
                &series_body("TCS.NS", &[("2024-01-01", 1.0)]),
                Duration::from_millis(200),
            )
            .on_delayed(
                "/data/INFY.NS?days=30",
                200,
                &series_body("INFY.NS", &[("2024-01-01", 2.0)]),
                Duration::from_millis(20),
            ),
    );
    let client = scripted_client(Arc::clone(&transport));
    let history = resource::series(&client);
    let mut rx = history.observe();

    history.set_params(Some(SeriesParams {
        symbol: String::from("TCS.NS"),
        days: 30,
    }));
    history.set_params(Some(SeriesParams {
        symbol: String::from("INFY.NS"),
        days: 30,
    }));

    let state = settled(&mut rx).await;
    assert_eq!(state.data.expect("series loaded").symbol, "INFY.NS");

    // Let the slow P1 response land; it must not be applied.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(history.snapshot().data.expect("still P2").symbol, "INFY.NS");
}

#[tokio::test]
async fn unchanged_params_do_not_refetch() {
    let transport = Arc::new(ScriptedTransport::new().on(
        "/data/TCS.NS?days=30",
        200,
        &series_body("TCS.NS", &[("2024-01-01", 1.0)]),
    ));
    let client = scripted_client(Arc::clone(&transport));
    let history = resource::series(&client);
    let mut rx = history.observe();

    let params = SeriesParams {
        symbol: String::from("TCS.NS"),
        days: 30,
    };
    history.set_params(Some(params.clone()));
    settled(&mut rx).await;

    history.set_params(Some(params));
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn explicit_refetch_reissues_current_params() {
    let transport =
        Arc::new(ScriptedTransport::new().on("/companies", 200, &companies_body()));
    let client = scripted_client(Arc::clone(&transport));
    let companies = resource::companies(&client);
    let mut rx = companies.observe();

    companies.start();
    settled(&mut rx).await;

    companies.refetch();
    settled(&mut rx).await;

    assert_eq!(transport.requests().len(), 2);
}

#[tokio::test]
async fn racing_param_changes_stay_consistent_with_stored_params() {
    // Two tasks bind different params concurrently. Whichever binding wins,
    // the applied data must match it: a refetch (which re-issues the stored
    // params) may not change the symbol.
    let transport = Arc::new(
        ScriptedTransport::new()
            .on_delayed(
                "/data/TCS.NS?days=30",
                200,
                &series_body("TCS.NS", &[("2024-01-01", 1.0)]),
                Duration::from_millis(20),
            )
            .on_delayed(
                "/data/INFY.NS?days=30",
                200,
                &series_body("INFY.NS", &[("2024-01-01", 2.0)]),
                Duration::from_millis(20),
            ),
    );
    let client = scripted_client(Arc::clone(&transport));
    let history = Arc::new(resource::series(&client));
    let mut rx = history.observe();

    let first = Arc::clone(&history);
    let second = Arc::clone(&history);
    let task1 = tokio::spawn(async move {
        first.set_params(Some(SeriesParams {
            symbol: String::from("TCS.NS"),
            days: 30,
        }));
    });
    let task2 = tokio::spawn(async move {
        second.set_params(Some(SeriesParams {
            symbol: String::from("INFY.NS"),
            days: 30,
        }));
    });
    task1.await.expect("task ran");
    task2.await.expect("task ran");

    let settled_state = settled(&mut rx).await;
    // Let any superseded fetch land; it must not be applied afterwards.
    tokio::time::sleep(Duration::from_millis(100)).await;
    let winner = history
        .snapshot()
        .data
        .expect("one binding applied")
        .symbol;
    assert_eq!(settled_state.data.map(|s| s.symbol), Some(winner.clone()));

    history.refetch();
    let refetched = settled(&mut rx).await;
    assert_eq!(refetched.data.expect("refetch applied").symbol, winner);
}

#[tokio::test]
async fn clearing_params_mid_flight_stays_idle() {
    let transport = Arc::new(ScriptedTransport::new().on_delayed(
        "/summary/TCS.NS",
        200,
        r#"{"symbol": "TCS.NS", "name": "TCS", "current_price": 3500.0,
            "daily_return": 0.5, "high_52w": 4000.0, "low_52w": 3000.0,
            "avg_close": 3400.0, "avg_volume": 100000, "volatility": 1.2,
            "momentum": 2.0, "trend_strength": 0.7}"#,
        Duration::from_millis(100),
    ));
    let client = scripted_client(Arc::clone(&transport));
    let summaries = resource::summary(&client);

    summaries.set_params(Some(SymbolParams {
        symbol: String::from("TCS.NS"),
    }));
    summaries.set_params(None);

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(summaries.snapshot().is_idle());
}
