//! Runs the server on a real socket and talks to it over HTTP.

use serde_json::json;
use tokio::net::TcpListener;

use cashback_server::state::AppState;

/// Binds an ephemeral port, starts the server, and returns its base URL.
async fn spawn_server(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(cashback_server::serve(listener, state));
    format!("http://{addr}")
}

#[tokio::test]
async fn serves_table_and_accepts_cards_over_tcp() {
    let state = AppState::new();
    let base = spawn_server(state.clone()).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/table")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let offers: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(offers.as_array().unwrap().len(), 5);

    let card = json!({
        "card_number": "4111",
        "first_name": "A",
        "last_name": "B",
        "expiration_date": "12/25",
        "card_type": "Visa"
    });
    let resp = client
        .post(format!("{base}/add-bank-card"))
        .json(&card)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let echoed: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(echoed, card);
    assert_eq!(state.cards.len().unwrap(), 1);

    let resp = client
        .get(format!("{base}/add-bank-card"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(resp.text().await.unwrap(), "Method not allowed");

    let resp = client.post(format!("{base}/table")).send().await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    assert_eq!(resp.text().await.unwrap(), "Method is not supported.");
}
