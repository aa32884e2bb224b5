use audioscribe::infrastructure::storage::AzureConnectionString;

const PORTAL_STRING: &str = "DefaultEndpointsProtocol=https;AccountName=speechacct;\
AccountKey=c2VjcmV0a2V5PT0=;EndpointSuffix=core.windows.net";

#[test]
fn given_portal_connection_string_when_parsing_then_extracts_account_and_key() {
    let parsed: AzureConnectionString = PORTAL_STRING.parse().unwrap();

    assert_eq!(parsed.account_name, "speechacct");
    assert_eq!(parsed.account_key, "c2VjcmV0a2V5PT0=");
    assert_eq!(parsed.protocol, "https");
    assert!(!parsed.use_development_storage);
}

#[test]
fn given_portal_connection_string_when_building_url_then_points_at_account_blob_host() {
    let parsed: AzureConnectionString = PORTAL_STRING.parse().unwrap();

    assert_eq!(
        parsed.blob_service_url(),
        "https://speechacct.blob.core.windows.net"
    );
}

#[test]
fn given_explicit_blob_endpoint_when_building_url_then_endpoint_wins() {
    let parsed: AzureConnectionString =
        "AccountName=a;AccountKey=k;BlobEndpoint=http://localhost:10000/a/;"
            .parse()
            .unwrap();

    assert_eq!(parsed.blob_service_url(), "http://localhost:10000/a");
}

#[test]
fn given_development_storage_shortcut_when_parsing_then_uses_emulator_endpoint() {
    let parsed: AzureConnectionString = "UseDevelopmentStorage=true".parse().unwrap();

    assert!(parsed.use_development_storage);
    assert_eq!(parsed.account_name, "devstoreaccount1");
    assert_eq!(
        parsed.blob_service_url(),
        "http://127.0.0.1:10000/devstoreaccount1"
    );
}

#[test]
fn given_lowercase_keys_when_parsing_then_keys_match_case_insensitively() {
    let parsed: AzureConnectionString = "accountname=a;accountkey=k".parse().unwrap();

    assert_eq!(parsed.account_name, "a");
    assert_eq!(parsed.account_key, "k");
    assert_eq!(parsed.endpoint_suffix, "core.windows.net");
}

#[test]
fn given_missing_account_key_when_parsing_then_returns_error() {
    let result = "AccountName=a;EndpointSuffix=core.windows.net".parse::<AzureConnectionString>();

    assert!(result.is_err());
}

#[test]
fn given_segment_without_equals_when_parsing_then_error_does_not_echo_segment() {
    let result = "AccountName=a;supersecret".parse::<AzureConnectionString>();

    let message = result.unwrap_err().to_string();
    assert!(!message.contains("supersecret"));
}
