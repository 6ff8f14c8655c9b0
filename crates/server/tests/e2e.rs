use std::net::SocketAddr;

use configs::DatabaseConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

use server::startup::{app, build_state};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = DatabaseConfig { url: "sqlite::memory:".into(), ..DatabaseConfig::default() };
    let state = build_state(&cfg).await?;

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app(state)).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_plan_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let plan = json!({
        "name": "Hokkaido Winter",
        "userId": "traveller-7",
        "preferences": {"hobbies": ["skiing"], "budgetRange": {"min": 0, "max": 2000}},
        "days": [{"day": 1, "items": [
            {"id": "x", "type": "activity", "item": {"name": "Niseko"}, "timeSlot": "morning", "position": {"row": 0, "col": 0}}
        ]}]
    });

    // create
    let res = client.post(format!("{}/api/plans", app.base_url)).json(&plan).send().await?;
    assert_eq!(res.status(), HttpStatusCode::CREATED);
    let created: Value = res.json().await?;
    let id = created["id"].as_i64().unwrap_or_default();

    // list by owner
    let res = client.get(format!("{}/api/plans/user/traveller-7", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let owned: Vec<Value> = res.json().await?;
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0]["days"], plan["days"]);

    // replace
    let mut changed = plan.clone();
    changed["preferences"] = json!({});
    let res = client.put(format!("{}/api/plans/{id}", app.base_url)).json(&changed).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated: Value = res.json().await?;
    assert_eq!(updated["preferences"], json!({}));

    // delete
    let res = client.delete(format!("{}/api/plans/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let res = client.get(format!("{}/api/plans/{id}", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
