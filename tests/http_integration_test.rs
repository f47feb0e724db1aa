use anyhow::Result;
use httpmock::prelude::*;
use std::io::Write;
use swapi_planets::utils::validation::Validate;
use swapi_planets::{
    ConfigProvider, HttpFetcher, NormalizedPlanet, PlanetError, PlanetService, TomlConfig,
};
use tempfile::NamedTempFile;

const TATOOINE: &str = include_str!("fixtures/tatooine.json");
const ALDERAAN: &str = include_str!("fixtures/alderaan.json");

#[tokio::test]
async fn test_end_to_end_with_real_http() -> Result<()> {
    let server = MockServer::start();
    let tatooine_mock = server.mock(|when, then| {
        when.method(GET).path("/api/planets/1");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(TATOOINE);
    });
    let alderaan_mock = server.mock(|when, then| {
        when.method(GET).path("/api/planets/2");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(ALDERAAN);
    });

    let service = PlanetService::new(HttpFetcher::new());
    let tatooine = service.get_planet(&server.url("/api/planets/1")).await?;
    let alderaan = service.get_planet(&server.url("/api/planets/2")).await?;

    tatooine_mock.assert_hits(1);
    alderaan_mock.assert_hits(1);
    assert_eq!(
        tatooine,
        NormalizedPlanet {
            name: "Tatooine".to_string(),
            surface_water: "1".to_string(),
            appeared_in: 5,
        }
    );
    assert_eq!(alderaan.surface_water, "40");
    assert_eq!(alderaan.appeared_in, 2);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_with_api_failure() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/planets/1");
        then.status(500);
    });

    let service = PlanetService::new(HttpFetcher::new());
    let result = service.get_planet(&server.url("/api/planets/1")).await;

    // 不重試：只打一次
    api_mock.assert_hits(1);
    match result {
        Err(PlanetError::TransportError { reason, .. }) => assert!(reason.contains("500")),
        other => panic!("expected TransportError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_end_to_end_with_non_json_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/planets/1");
        then.status(200)
            .header("Content-Type", "text/html")
            .body("<html><body>Planet archive offline</body></html>");
    });

    let service = PlanetService::new(HttpFetcher::new());
    let result = service.get_planet(&server.url("/api/planets/1")).await;

    api_mock.assert_hits(1);
    match result {
        Err(PlanetError::DecodeError { url, .. }) => {
            assert_eq!(url, server.url("/api/planets/1"))
        }
        other => panic!("expected DecodeError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_end_to_end_with_non_planet_body() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/people/1");
        then.status(200)
            .json_body(serde_json::json!({"name": "Luke Skywalker", "films": []}));
    });

    let service = PlanetService::new(HttpFetcher::new());
    let result = service.get_planet(&server.url("/api/people/1")).await;

    api_mock.assert();
    match result {
        Err(PlanetError::ShapeError { field, .. }) => assert_eq!(field, "surface_water"),
        other => panic!("expected ShapeError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_end_to_end_with_unreachable_host() {
    // 保留埠 0 無法連線
    let service = PlanetService::new(HttpFetcher::new());
    let result = service.get_planet("http://127.0.0.1:0/api/planets/1").await;

    assert!(matches!(result, Err(PlanetError::TransportError { .. })));
}

#[tokio::test]
async fn test_end_to_end_with_toml_config() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/planets/2")
            .header("user-agent", "planet-probe/2.0");
        then.status(200)
            .header("Content-Type", "application/json")
            .body(ALDERAAN);
    });

    let config_content = format!(
        r#"
[source]
endpoint = "{}"
timeout_seconds = 5
user_agent = "planet-probe/2.0"
"#,
        server.url("/api/planets/2")
    );
    let mut config_file = NamedTempFile::new()?;
    config_file.write_all(config_content.as_bytes())?;

    let config = TomlConfig::from_file(config_file.path())?;
    config.validate()?;

    let service = PlanetService::new(HttpFetcher::from_config(&config)?);
    let planet = service.get_planet(config.api_endpoint()).await?;

    api_mock.assert();
    assert_eq!(planet.name, "Alderaan");
    Ok(())
}
