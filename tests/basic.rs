use anyhow::Result;
use connect_settings::config::{ClientSettings, Region, SettingsFile};
use connect_settings::env::{resolve_credential, Credential, EnvMap};
use connect_settings::executor::{
    build_client, build_request, fetch_settings, report_response, Report,
};
use httpmock::prelude::*;
use pretty_assertions::assert_eq;

fn env(pairs: &[(&str, &str)]) -> EnvMap {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn resolved_token_drives_authorization_header() -> Result<()> {
    let credential = resolve_credential(&env(&[
        ("ACCESS_TOKEN", "abc123"),
        ("COOKIE_STRING", "session-id=xyz"),
    ]))?;
    let settings = ClientSettings::for_region(Region::China);
    let request = build_request(&build_client(&settings)?, &settings, &credential)?;

    assert_eq!(request.url().host_str(), Some("connectapi.garmin.cn"));
    assert_eq!(request.headers()["authorization"], "Bearer abc123");
    assert!(!request.headers().contains_key("cookie"));
    Ok(())
}

#[tokio::test]
async fn fetch_and_report_round_trip() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/userprofile-service/userprofile/user-settings")
                .header("cookie", "session-id=xyz");
            then.status(200)
                .body(r#"{"id":1,"userData":{"measurementSystem":"metric"}}"#);
        })
        .await;

    let layer = SettingsFile {
        base_url: Some(server.base_url()),
        ..SettingsFile::default()
    };
    let settings = ClientSettings::resolve([&layer])?;
    let credential = resolve_credential(&env(&[("COOKIE_STRING", "session-id=xyz")]))?;
    assert_eq!(credential, Credential::CookieHeader("session-id=xyz".to_string()));

    let result = fetch_settings(&settings, &credential).await?;
    let mut out = Vec::new();
    let mut err = Vec::new();
    let report = report_response(&result, &mut out, &mut err)?;

    let out = String::from_utf8(out)?;
    assert_eq!(report, Report::Json);
    assert!(out.contains("\"measurementSystem\": \"metric\""));
    assert!(err.is_empty());
    Ok(())
}
