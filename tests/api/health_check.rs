//! Routes only the method routed server has: the health check and static files.

use anyhow::Result;
use leadcap::Transport;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::helpers::TestApp;

#[tokio::test]
async fn healthcheck_ok() -> Result<()> {
    let TestApp {
        addr, http_client, ..
    } = TestApp::spawn().await?;

    let res = http_client
        .get(format!("http://{addr}/health-check"))
        .send()
        .await?;

    assert!(res.status() == StatusCode::OK, "Healthcheck FAILED!");

    Ok(())
}

#[tokio::test]
async fn invalid_path_404() -> Result<()> {
    let TestApp {
        addr, http_client, ..
    } = TestApp::spawn().await?;

    let res = http_client
        .get(format!("http://{addr}/invalidpath"))
        .send()
        .await?;

    assert!(
        res.status() == StatusCode::NOT_FOUND,
        "Invalid Path check FAILED!, expected: {}, got: {}",
        404,
        res.status().as_u16()
    );

    Ok(())
}

#[tokio::test]
async fn function_adapter_has_no_health_check() -> Result<()> {
    let TestApp {
        addr, http_client, ..
    } = TestApp::spawn_with(Transport::Function, None).await?;

    let res = http_client
        .get(format!("http://{addr}/health-check"))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn serves_static_files_for_unrouted_paths() -> Result<()> {
    let static_dir = std::env::temp_dir().join(format!("leadcap-static-{}", Uuid::new_v4()));
    std::fs::create_dir_all(&static_dir)?;
    std::fs::write(static_dir.join("index.html"), "<h1>Stay in the loop</h1>")?;

    let TestApp {
        addr, http_client, ..
    } = TestApp::spawn_with(Transport::Server, Some(static_dir.clone())).await?;

    let res = http_client.get(format!("http://{addr}/")).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.text().await?, "<h1>Stay in the loop</h1>");

    // API routes still win over the directory.
    let res = http_client
        .get(format!("http://{addr}/api/interested"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = http_client
        .get(format!("http://{addr}/missing.css"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    std::fs::remove_dir_all(&static_dir)?;

    Ok(())
}
