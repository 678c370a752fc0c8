//! HTTP solver client against a mock solver service.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use serde_json::json;
use std::sync::Arc;
use trade_advisor::application::error::ApplicationError;
use trade_advisor::application::services::{
    AdvisorConfig, Recommendation, TradeAdvisor, ValueThenUnitsStrategy,
};
use trade_advisor::domain::entities::TradeRequest;
use trade_advisor::domain::value_objects::{ResourceCounts, ResourceKind};
use trade_advisor::infrastructure::solver::{
    HttpSolverClient, SolverClient, SolverError, SolverResponse, WireFormat,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer, wire_format: WireFormat) -> HttpSolverClient {
    HttpSolverClient::new(server.uri(), wire_format, 2_000)
        .unwrap()
        .with_recognized_flags(["shell_modifier"])
}

fn advisor(client: HttpSolverClient) -> TradeAdvisor {
    TradeAdvisor::new(
        Arc::new(client),
        Arc::new(ValueThenUnitsStrategy::new()),
        AdvisorConfig::default(),
    )
}

fn rate_table() -> serde_json::Value {
    json!({
        "{\"s\":1,\"t\":0,\"d\":0,\"c\":0}": 10,
        "{\"t\":1}": 10,
        "{\"s\":2}": 15
    })
}

mod best_trade {
    use super::*;

    #[tokio::test]
    async fn ranks_envelope_trade() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/best-trade"))
            .and(body_json(json!({"s": 3, "t": 1, "shell_modifier": true})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "r": rate_table(),
                "t": {"R": [{"t": 1}, {"s": 1}, {"s": 2}], "V": 35}
            })))
            .expect(1)
            .mount(&server)
            .await;

        let recommendation = advisor(client(&server, WireFormat::BestTrade))
            .advise([("s", "3"), ("t", "1"), ("shell_modifier", "true")])
            .await
            .unwrap();

        let result = recommendation.trade().unwrap();
        assert_eq!(result.total_value(), 35);
        let order: Vec<_> = result.allocations().iter().map(|a| a.allocation()).collect();
        assert_eq!(
            order,
            vec![
                ResourceCounts::new(2, 0, 0, 0),
                ResourceCounts::new(0, 1, 0, 0),
                ResourceCounts::new(1, 0, 0, 0),
            ]
        );
    }

    #[tokio::test]
    async fn null_trade_is_infeasible() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/best-trade"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"r": rate_table(), "t": null})),
            )
            .mount(&server)
            .await;

        let recommendation = advisor(client(&server, WireFormat::BestTrade))
            .advise([("s", "1")])
            .await
            .unwrap();
        assert_eq!(recommendation, Recommendation::NoFeasibleTrade);
    }

    #[tokio::test]
    async fn unrated_allocation_is_inconsistency() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/best-trade"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "r": rate_table(),
                "t": {"R": [{"c": 3}], "V": 11}
            })))
            .mount(&server)
            .await;

        let err = advisor(client(&server, WireFormat::BestTrade))
            .advise([("c", "3")])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApplicationError::rate_lookup_inconsistency(ResourceCounts::new(0, 0, 0, 3))
        );
    }
}

mod candidate_list {
    use super::*;

    #[tokio::test]
    async fn fetches_rate_table_and_uses_first_candidate() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/trades"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"R": [{"s": 2}, {"t": 1}], "V": 25},
                {"R": [{"s": 1}, {"s": 1}, {"t": 1}], "V": 30}
            ])))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rate-table"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rate_table()))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server, WireFormat::CandidateList)
            .solve(&TradeRequest::new().with_holding(ResourceKind::Shard, 2))
            .await
            .unwrap();

        let solved = response.solved().unwrap();
        assert_eq!(solved.best().total_value(), 25);
        assert_eq!(solved.candidate_count(), 2);
        assert_eq!(solved.rate_table().len(), 3);
    }

    #[tokio::test]
    async fn empty_list_skips_rate_table() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/trades"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/rate-table"))
            .respond_with(ResponseTemplate::new(200).set_body_json(rate_table()))
            .expect(0)
            .mount(&server)
            .await;

        let response = client(&server, WireFormat::CandidateList)
            .solve(&TradeRequest::new().with_holding(ResourceKind::Demon, 1))
            .await
            .unwrap();
        assert_eq!(response, SolverResponse::Infeasible);
    }
}

mod failures {
    use super::*;

    #[tokio::test]
    async fn unavailable_solver_is_transport_failure() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/best-trade"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let err = advisor(client(&server, WireFormat::BestTrade))
            .advise([("s", "1")])
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::SolverTransportFailure(SolverError::Connection { .. })
        ));
        assert!(err.is_retryable());
    }

    #[tokio::test]
    async fn garbage_body_is_protocol_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/trades"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = client(&server, WireFormat::CandidateList)
            .solve(&TradeRequest::new().with_holding(ResourceKind::Tool, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, SolverError::Protocol { .. }));
    }

    #[tokio::test]
    async fn rejected_request_is_invalid_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/best-trade"))
            .respond_with(ResponseTemplate::new(422).set_body_string("bad hand"))
            .mount(&server)
            .await;

        let err = client(&server, WireFormat::BestTrade)
            .solve(&TradeRequest::new().with_holding(ResourceKind::Tool, 1))
            .await
            .unwrap_err();
        assert!(matches!(err, SolverError::InvalidRequest { .. }));
        assert!(!err.is_retryable());
    }
}
