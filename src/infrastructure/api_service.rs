use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::{sync::mpsc, task::JoinHandle};
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        api::{ApiCall, ApiFailure, ApiReply},
        raw_msg::RawMsg,
    },
    infrastructure::{api::CatalogClient, config::ApiConfig},
};

/// Runs backend requests off the update loop.
/// - one task per `ApiCall`, so a slow request never holds up another
/// - every reply goes back as `RawMsg::Api` carrying the call's request id
/// - stops when the cancellation token fires or every sender is dropped
pub struct ApiService {
    client: Arc<CatalogClient>,
    // Incoming channels
    call_rx: mpsc::UnboundedReceiver<ApiCall>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewApiService = (
    mpsc::UnboundedSender<ApiCall>, // call_tx - requests to run
    CancellationToken,              // shutdown signal
    ApiService,
);

impl ApiService {
    pub fn new(config: &ApiConfig, raw_tx: mpsc::UnboundedSender<RawMsg>) -> Result<NewApiService> {
        let client = CatalogClient::new(config)?;
        Ok(Self::with_client(client, raw_tx))
    }

    pub fn with_client(client: CatalogClient, raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewApiService {
        let (call_tx, call_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            call_tx,
            cancel_token.clone(),
            Self {
                client: Arc::new(client),
                call_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the service in a background task
    pub fn run(self) -> JoinHandle<()> {
        tokio::spawn(async move {
            self.run_service().await;
        })
    }

    async fn run_service(mut self) {
        log::info!("ApiService: talking to {}", self.client.base_url());
        loop {
            tokio::select! {
                result = self.call_rx.recv() => {
                    match result {
                        Some(call) => self.dispatch(call),
                        None => {
                            log::info!("ApiService: request channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("ApiService received cancellation signal");
                    break;
                }
            }
        }
    }

    fn dispatch(&self, call: ApiCall) {
        let client = Arc::clone(&self.client);
        let raw_tx = self.raw_tx.clone();
        tokio::spawn(async move {
            let reply = execute(&client, call).await;
            if raw_tx.send(RawMsg::Api(reply)).is_err() {
                log::debug!("ApiService: runtime gone, dropping reply");
            }
        });
    }
}

/// Runs one call and turns the outcome into a reply
pub async fn execute(client: &CatalogClient, call: ApiCall) -> ApiReply {
    let ApiCall { request, endpoint } = call;
    match client.call(&endpoint).await {
        Ok(payload) => {
            log::debug!("ApiService: {} #{request} ok", endpoint.name());
            ApiReply::ok(request, payload)
        }
        Err(e) => {
            log::warn!("ApiService: {} #{request} failed: {e}", endpoint.name());
            ApiReply::err(request, ApiFailure::from(e))
        }
    }
}
