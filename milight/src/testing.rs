//! Transport doubles for unit tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::BytesMut;
use mockall::mock;
use tokio::time::Instant;

use milight_core::constants::{SESSION_ACK, SESSION_ACK_LEN, SESSION_REQUEST, SESSION_TOKEN_OFFSET};
use milight_transport::{Result, Transport};

pub(crate) const TOKEN: [u8; 2] = [0x5A, 0xC3];

mock! {
    pub Link {}

    #[async_trait]
    impl Transport for Link {
        async fn bind(&mut self) -> Result<()>;
        async fn close(&mut self) -> Result<()>;
        fn is_bound(&self) -> bool;
        async fn exchange(&mut self, request: &[u8], marker: &[u8]) -> Result<BytesMut>;
        fn remote_addr(&self) -> String;
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Sent {
    pub at: Instant,
    pub bytes: Vec<u8>,
}

/// Everything handed to the mock transport, in order
#[derive(Debug, Clone, Default)]
pub(crate) struct Wire {
    sent: Arc<Mutex<Vec<Sent>>>,
}

impl Wire {
    fn record(&self, bytes: &[u8]) {
        self.sent.lock().unwrap().push(Sent {
            at: Instant::now(),
            bytes: bytes.to_vec(),
        });
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    pub fn session_requests(&self) -> usize {
        self.sent().iter().filter(|s| is_session_request(&s.bytes)).count()
    }

    pub fn commands(&self) -> Vec<Vec<u8>> {
        self.sent()
            .into_iter()
            .filter(|s| !is_session_request(&s.bytes))
            .map(|s| s.bytes)
            .collect()
    }

    pub fn serials(&self) -> Vec<u8> {
        self.commands().iter().map(|c| c[8]).collect()
    }

    /// The 10-byte frame bodies of all commands
    pub fn frames(&self) -> Vec<Vec<u8>> {
        self.commands().iter().map(|c| c[10..20].to_vec()).collect()
    }
}

pub(crate) fn is_session_request(bytes: &[u8]) -> bool {
    bytes == SESSION_REQUEST
}

pub(crate) fn session_ack(token: [u8; 2]) -> BytesMut {
    let mut ack = BytesMut::from(&SESSION_ACK[..]);
    ack.resize(SESSION_ACK_LEN, 0x00);
    ack[SESSION_TOKEN_OFFSET] = token[0];
    ack[SESSION_TOKEN_OFFSET + 1] = token[1];
    ack
}

/// A bridge that hands out sessions and acknowledges every command
pub(crate) fn acking(request: &[u8], marker: &[u8]) -> Result<BytesMut> {
    if is_session_request(request) {
        Ok(session_ack(TOKEN))
    } else {
        Ok(BytesMut::from(marker))
    }
}

/// Mock transport answering every exchange with `reply`
pub(crate) fn bridge<F>(mut reply: F) -> (MockLink, Wire)
where
    F: FnMut(&[u8], &[u8]) -> Result<BytesMut> + Send + 'static,
{
    let wire = Wire::default();
    let recorder = wire.clone();

    let mut link = MockLink::new();
    link.expect_exchange()
        .returning(move |request: &[u8], marker: &[u8]| {
            recorder.record(request);
            reply(request, marker)
        });
    link.expect_close().returning(|| Ok(()));
    link.expect_is_bound().returning(|| true);
    link.expect_remote_addr()
        .returning(|| "192.168.1.50:5987".to_string());

    (link, wire)
}

/// Mock transport that fails the test if anything is sent
pub(crate) fn silent() -> MockLink {
    let mut link = MockLink::new();
    link.expect_exchange().never();
    link.expect_bind().never();
    link.expect_remote_addr()
        .returning(|| "192.168.1.50:5987".to_string());
    link
}
