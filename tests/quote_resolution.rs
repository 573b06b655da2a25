//! End-to-end quote resolution through the real carrier clients against a
//! mocked HTTP server.

#![allow(clippy::unwrap_used, clippy::panic)]

use shipquote::application::error::QuoteError;
use shipquote::application::services::quote_resolver::{
    ResolverConfig, RouteBranch, ShippingQuoteResolver,
};
use shipquote::domain::value_objects::{CountryCode, Destination, OriginAddress, ParcelSpec};
use shipquote::infrastructure::carriers::traits::PostalCarrier;
use shipquote::infrastructure::carriers::{AusPostClient, InterparcelClient};
use std::sync::Arc;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn origin() -> OriginAddress {
    OriginAddress::new("3180", "Knoxfield", "VIC", CountryCode::new("AU").unwrap())
}

fn resolver_against(server: &MockServer) -> ShippingQuoteResolver {
    let postal = Arc::new(AusPostClient::new(server.uri(), "test-key", 2000).unwrap());
    let freight = Arc::new(InterparcelClient::new(server.uri(), "f", 2000).unwrap());
    ShippingQuoteResolver::new(
        postal,
        freight,
        origin(),
        CountryCode::new("AU").unwrap(),
        ResolverConfig::default().with_per_call_timeout(2000),
    )
}

fn melbourne() -> Destination {
    Destination::new(CountryCode::new("AU").unwrap())
        .with_postcode("3000")
        .with_city("Melbourne")
        .with_region("VIC")
}

fn parcel(weight_kg: f64) -> ParcelSpec {
    ParcelSpec::new(weight_kg, 50.0, 40.0, 30.0).unwrap()
}

fn auspost_services(services: &[(&str, &str, &str)]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = services
        .iter()
        .map(|(code, name, price)| {
            serde_json::json!({
                "code": code,
                "name": name,
                "price": price,
                "max_extra_cover": 5000,
                "options": {"option": []}
            })
        })
        .collect();
    serde_json::json!({"services": {"service": entries}})
}

#[tokio::test]
async fn domestic_quote_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postage/parcel/domestic/service.json"))
        .and(header("AUTH-KEY", "test-key"))
        .and(query_param("from_postcode", "3180"))
        .and(query_param("to_postcode", "3000"))
        .and(query_param("weight", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auspost_services(&[
            ("AUS_PARCEL_REGULAR", "Parcel Post", "12.005"),
            ("AUS_PARCEL_EXPRESS", "Express Post", "13.45"),
            ("AUS_PARCEL_COURIER", "Courier Post", "25.00"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = resolver_against(&server)
        .resolve(&parcel(5.0), &melbourne())
        .await
        .unwrap();

    assert_eq!(outcome.route, RouteBranch::Domestic);
    assert_eq!(outcome.options.len(), 2);
    assert_eq!(outcome.options[0].display_name(), "AusPost Regular");
    // 12.005 rounds up to 1201, never down.
    assert_eq!(outcome.options[0].amount().minor_units(), 1201);
    assert_eq!(outcome.options[1].display_name(), "AusPost Express");
    assert_eq!(outcome.options[1].amount().minor_units(), 1345);
}

#[tokio::test]
async fn domestic_missing_required_service_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postage/parcel/domestic/service.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auspost_services(&[(
            "AUS_PARCEL_REGULAR",
            "Parcel Post",
            "10.60",
        )])))
        .mount(&server)
        .await;

    let result = resolver_against(&server)
        .resolve(&parcel(5.0), &melbourne())
        .await;
    assert!(matches!(result, Err(QuoteError::ShippingUnavailable(_))));
}

#[tokio::test]
async fn domestic_server_error_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postage/parcel/domestic/service.json"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let result = resolver_against(&server)
        .resolve(&parcel(5.0), &melbourne())
        .await;
    assert!(matches!(result, Err(QuoteError::Provider(_))));
}

#[tokio::test]
async fn international_quote_filters_to_allow_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postage/parcel/international/service.json"))
        .and(query_param("country_code", "US"))
        .and(query_param("weight", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(auspost_services(&[
            ("INT_PARCEL_AIR_OWN_PACKAGING", "Economy Air", "18.00"),
            ("INT_PARCEL_STD_OWN_PACKAGING", "Standard", "25.40"),
            ("INT_PARCEL_EXP_OWN_PACKAGING", "Express", "40.005"),
        ])))
        .mount(&server)
        .await;

    let destination = Destination::new(CountryCode::new("US").unwrap());
    let outcome = resolver_against(&server)
        .resolve(&parcel(5.0), &destination)
        .await
        .unwrap();

    assert_eq!(outcome.route, RouteBranch::International);
    let names: Vec<&str> = outcome
        .options
        .iter()
        .map(|option| option.display_name())
        .collect();
    assert_eq!(names, vec!["Standard", "Express"]);
    assert_eq!(outcome.options[1].amount().minor_units(), 4001);
    assert_eq!(outcome.services_omitted, 1);
}

#[tokio::test]
async fn heavy_freight_quotes_are_filtered_and_capped() {
    let server = MockServer::start().await;

    let listings = serde_json::json!({
        "status": 1,
        "errorMessage": "",
        "services": [
            {"id": "hunter-road", "service": "Hunter Express"},
            {"id": "svc-1", "service": "TNT Road"},
            {"id": "svc-2", "service": "Aramex Road"},
            {"id": "svc-3", "service": "Allied Road"},
            {"id": "svc-4", "service": "Couriers Please"},
            {"id": "svc-5", "service": "Toll Road"}
        ],
        "invalidServices": []
    });
    Mock::given(method("GET"))
        .and(path("/quote/availability"))
        .and(query_param("type", "parcel"))
        .and(query_param("coll_postcode", "3180"))
        .and(query_param("del_country", "Australia"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listings))
        .expect(1)
        .mount(&server)
        .await;

    for (id, carrier, name, price) in [
        ("svc-1", "TNT", "Road Express", 82.5),
        ("svc-2", "Aramex", "Road", 74.005),
        ("svc-3", "Allied", "Road", 90.0),
        ("svc-5", "Toll", "Road", 99.95),
    ] {
        Mock::given(method("GET"))
            .and(path("/quote/quote"))
            .and(query_param("service", id))
            .and(header("cookie", "PHPSESSID=f"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": 1,
                "services": [
                    {"id": id, "service": "road", "carrier": carrier, "name": name,
                     "sellPrice": price}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;
    }
    // One service's quote endpoint falls over; it must be omitted, not fatal.
    Mock::given(method("GET"))
        .and(path("/quote/quote"))
        .and(query_param("service", "svc-4"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = resolver_against(&server)
        .resolve(&parcel(25.0), &melbourne())
        .await
        .unwrap();

    assert_eq!(outcome.route, RouteBranch::HeavyFreight);
    assert_eq!(outcome.options.len(), 4);
    let names: Vec<&str> = outcome
        .options
        .iter()
        .map(|option| option.display_name())
        .collect();
    assert_eq!(
        names,
        vec!["TNT - Road Express", "Aramex - Road", "Allied - Road", "Toll - Road"]
    );
    // 74.005 rounds up to 7401.
    assert_eq!(outcome.options[1].amount().minor_units(), 7401);
    assert_eq!(outcome.services_seen, 5);
    assert_eq!(outcome.services_omitted, 1);
}

#[tokio::test]
async fn overweight_parcel_makes_no_network_calls() {
    let server = MockServer::start().await;

    let result = resolver_against(&server)
        .resolve(&parcel(36.0), &melbourne())
        .await;

    assert!(matches!(result, Err(QuoteError::WeightExceeded { .. })));
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn freight_availability_rejection_surfaces_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/quote/availability"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": 0,
            "errorMessage": "No services available for this route",
            "services": [],
            "invalidServices": []
        })))
        .mount(&server)
        .await;

    let result = resolver_against(&server)
        .resolve(&parcel(25.0), &melbourne())
        .await;

    match result {
        Err(error @ QuoteError::Provider(_)) => {
            assert_eq!(error.user_message(), "No services available for this route");
        }
        other => panic!("expected Provider error, got {:?}", other.map(|o| o.route)),
    }
}

#[tokio::test]
async fn country_list_passes_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/postage/country.json"))
        .and(header("AUTH-KEY", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "countries": {
                "country": [
                    {"code": "NZ", "name": "New Zealand"},
                    {"code": "US", "name": "United States of America"}
                ]
            }
        })))
        .mount(&server)
        .await;

    let postal = AusPostClient::new(server.uri(), "test-key", 2000).unwrap();
    let countries = postal.list_countries().await.unwrap();
    assert_eq!(countries.len(), 2);
    assert_eq!(countries[0].code, "NZ");
}
