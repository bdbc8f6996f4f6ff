mod common;

use std::time::Duration;

use color_eyre::eyre::Result;
use courseboard::{
    core::{
        api::{ApiCall, ApiFailure, ApiPayload, Endpoint},
        raw_msg::RawMsg,
    },
    infrastructure::api_service::ApiService,
};
use pretty_assertions::assert_eq;
use tokio::{sync::mpsc, time::timeout};

async fn next_reply(rx: &mut mpsc::UnboundedReceiver<RawMsg>) -> RawMsg {
    timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("reply within timeout")
        .expect("channel open")
}

#[tokio::test]
async fn test_replies_carry_the_request_id() -> Result<()> {
    let base_url = common::spawn_backend().await;
    let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
    let (call_tx, cancel, service) = ApiService::new(&common::api_config(&base_url), raw_tx)?;
    let handle = service.run();

    call_tx.send(ApiCall {
        request: 41,
        endpoint: Endpoint::Courses,
    })?;
    let RawMsg::Api(reply) = next_reply(&mut raw_rx).await else {
        panic!("expected an API reply");
    };
    assert_eq!(reply.request, 41);
    let Ok(ApiPayload::Courses(courses)) = &reply.outcome else {
        panic!("expected courses, got {:?}", reply.outcome);
    };
    assert_eq!(courses.len(), 3);

    call_tx.send(ApiCall {
        request: 42,
        endpoint: Endpoint::CourseDetail {
            course_id: "NOPE".into(),
        },
    })?;
    let RawMsg::Api(reply) = next_reply(&mut raw_rx).await else {
        panic!("expected an API reply");
    };
    assert_eq!(reply.request, 42);
    assert_eq!(reply.outcome, Err(ApiFailure::NotFound));

    cancel.cancel();
    timeout(Duration::from_secs(5), handle).await??;
    Ok(())
}

#[tokio::test]
async fn test_calls_run_concurrently() -> Result<()> {
    let base_url = common::spawn_backend().await;
    let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
    let (call_tx, _cancel, service) = ApiService::new(&common::api_config(&base_url), raw_tx)?;
    service.run();

    for request in 1..=5 {
        call_tx.send(ApiCall {
            request,
            endpoint: Endpoint::Catalog,
        })?;
    }
    let mut seen = Vec::new();
    for _ in 0..5 {
        if let RawMsg::Api(reply) = next_reply(&mut raw_rx).await {
            assert!(reply.outcome.is_ok());
            seen.push(reply.request);
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    Ok(())
}

#[tokio::test]
async fn test_service_stops_when_callers_are_gone() -> Result<()> {
    let (raw_tx, _raw_rx) = mpsc::unbounded_channel();
    let (call_tx, _cancel, service) =
        ApiService::new(&common::api_config("http://127.0.0.1:9"), raw_tx)?;
    let handle = service.run();

    drop(call_tx);
    timeout(Duration::from_secs(5), handle).await??;
    Ok(())
}
