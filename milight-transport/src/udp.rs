//! UDP transport for MiLight bridges
//!
//! Bridges listen on UDP port 5987 and answer from the same port. The local
//! socket is bound lazily on first use, to the bridge port by default.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use bytes::BytesMut;
use milight_core::{codec, constants};
use tokio::net::UdpSocket;
use tokio::time::timeout;
use tracing::{debug, trace, warn};

use crate::{error::*, Transport};

/// UDP transport for MiLight bridges
pub struct UdpTransport {
    addr: String,
    port: u16,
    local_port: u16,
    socket: Option<UdpSocket>,
    remote_addr: Option<SocketAddr>,
    read_timeout: Duration,
    max_response: usize,
}

impl UdpTransport {
    /// Create new UDP transport
    ///
    /// The local socket binds the same port as the bridge unless
    /// [`with_local_port`](Self::with_local_port) says otherwise.
    pub fn new(addr: impl Into<String>, port: u16) -> Self {
        Self {
            addr: addr.into(),
            port,
            local_port: port,
            socket: None,
            remote_addr: None,
            read_timeout: constants::DEFAULT_READ_TIMEOUT,
            max_response: constants::MAX_RESPONSE_SIZE,
        }
    }

    /// Set the local port to bind (0 picks an ephemeral port)
    pub fn with_local_port(mut self, port: u16) -> Self {
        self.local_port = port;
        self
    }

    /// Set how long to wait for each reply datagram
    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }

    /// Local address of the bound socket
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.socket.as_ref().and_then(|s| s.local_addr().ok())
    }

    /// Resolve address to SocketAddr
    async fn resolve_addr(&mut self) -> Result<SocketAddr> {
        if let Some(addr) = self.remote_addr {
            return Ok(addr);
        }

        let addr_str = format!("{}:{}", self.addr, self.port);

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host(&addr_str)
            .await
            .map_err(|e| Error::InvalidAddress(format!("{}: {}", addr_str, e)))?
            .collect();

        let addr = addrs
            .iter()
            .find(|a| a.is_ipv4())
            .or_else(|| addrs.first())
            .ok_or_else(|| Error::InvalidAddress(format!("No addresses found for {}", addr_str)))?;

        self.remote_addr = Some(*addr);
        Ok(*addr)
    }

    /// Drop anything already queued so an old reply is never matched
    fn flush(socket: &UdpSocket) {
        let mut scratch = [0u8; 1024];
        loop {
            match socket.try_recv_from(&mut scratch) {
                Ok((n, from)) => {
                    trace!("Flushed {} stale bytes from {}", n, from);
                }
                Err(e) if e.kind() == io::ErrorKind::WouldBlock => break,
                Err(e) => {
                    debug!("Flush stopped: {}", e);
                    break;
                }
            }
        }
    }
}

#[async_trait]
impl Transport for UdpTransport {
    async fn bind(&mut self) -> Result<()> {
        if self.is_bound() {
            return Ok(());
        }

        self.resolve_addr().await?;

        let local = format!("0.0.0.0:{}", self.local_port);

        debug!("Binding UDP socket on {}...", local);

        let socket = UdpSocket::bind(&local).await.map_err(|source| Error::Bind {
            addr: local.clone(),
            source,
        })?;

        debug!("Bound {}", socket.local_addr().map_err(Error::Receive)?);

        self.socket = Some(socket);
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(_socket) = self.socket.take() {
            debug!("Closing socket for {}...", self.remote_addr());
        }

        Ok(())
    }

    fn is_bound(&self) -> bool {
        self.socket.is_some()
    }

    async fn exchange(&mut self, request: &[u8], marker: &[u8]) -> Result<BytesMut> {
        self.bind().await?;
        let remote = self.resolve_addr().await?;
        let read_timeout = self.read_timeout;
        let max_response = self.max_response;
        let socket = self.socket.as_ref().ok_or_else(|| {
            Error::Bind {
                addr: format!("0.0.0.0:{}", self.local_port),
                source: io::Error::from(io::ErrorKind::NotConnected),
            }
        })?;

        Self::flush(socket);

        trace!("Sending {} bytes to {}: {}", request.len(), remote, hex::encode_upper(request));

        socket.send_to(request, remote).await.map_err(Error::Send)?;

        let mut response = BytesMut::with_capacity(64);
        let mut buf = [0u8; 1024];

        loop {
            let (n, from) = timeout(read_timeout, socket.recv_from(&mut buf))
                .await
                .map_err(|_| {
                    debug!("No reply within {:?}", read_timeout);
                    Error::ReadTimeout
                })?
                .map_err(|e| {
                    warn!("Read error: {}", e);
                    Error::Receive(e)
                })?;

            if n == 0 {
                warn!("Received 0 bytes");
                return Err(Error::ConnectionClosed);
            }

            trace!("Received {} bytes from {}: {}", n, from, hex::encode_upper(&buf[..n]));

            response.extend_from_slice(&buf[..n]);

            if codec::find(&response, marker).is_some() {
                return Ok(response);
            }

            if response.len() > max_response {
                return Err(Error::ResponseOverflow { limit: max_response });
            }
        }
    }

    fn remote_addr(&self) -> String {
        self.remote_addr
            .map(|addr| addr.to_string())
            .unwrap_or_else(|| format!("{}:{}", self.addr, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ACK: [u8; 3] = [0x88, 0x00, 0x01];

    async fn bridge() -> (UdpSocket, u16) {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let port = socket.local_addr().unwrap().port();
        (socket, port)
    }

    fn transport(port: u16) -> UdpTransport {
        UdpTransport::new("127.0.0.1", port)
            .with_local_port(0)
            .with_read_timeout(Duration::from_millis(200))
    }

    #[tokio::test]
    async fn test_udp_transport_create() {
        let transport = UdpTransport::new("192.168.1.50", 5987);
        assert!(!transport.is_bound());
        assert_eq!(transport.remote_addr(), "192.168.1.50:5987");
    }

    #[tokio::test]
    async fn test_udp_transport_invalid_address() {
        let mut transport = UdpTransport::new("invalid..address", 5987).with_local_port(0);

        let result = transport.bind().await;
        assert!(matches!(result, Err(Error::InvalidAddress(_))));
        assert!(!transport.is_bound());
    }

    #[tokio::test]
    async fn test_bind_conflict_is_reported() {
        let (_taken, port) = bridge().await;
        let blocker = UdpSocket::bind("0.0.0.0:0").await.unwrap();
        let busy = blocker.local_addr().unwrap().port();

        let mut transport = UdpTransport::new("127.0.0.1", port).with_local_port(busy);
        let result = transport.bind().await;

        assert!(matches!(result, Err(Error::Bind { .. })));
    }

    #[tokio::test]
    async fn test_exchange_accumulates_fragments() {
        let (bridge, port) = bridge().await;
        let mut transport = transport(port);

        let server = tokio::spawn(async move {
            let mut buf = [0u8; 64];
            let (n, from) = bridge.recv_from(&mut buf).await.unwrap();
            assert_eq!(&buf[..n], b"ping");
            bridge.send_to(&[0x55, 0x88], from).await.unwrap();
            bridge.send_to(&[0x00, 0x01, 0x77], from).await.unwrap();
        });

        let response = transport.exchange(b"ping", &ACK).await.unwrap();
        assert_eq!(&response[..], &[0x55, 0x88, 0x00, 0x01, 0x77]);

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_exchange_times_out_without_marker() {
        let (bridge, port) = bridge().await;
        let mut transport = transport(port);

        let server = tokio::spawn(async move {
            let mut buf = [0u8; 64];
            let (_, from) = bridge.recv_from(&mut buf).await.unwrap();
            bridge.send_to(&[0x88, 0x00, 0x02], from).await.unwrap();
        });

        let result = transport.exchange(b"ping", &ACK).await;
        assert!(matches!(result, Err(Error::ReadTimeout)));

        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_exchange_flushes_stale_replies() {
        let (bridge, port) = bridge().await;
        let mut transport = transport(port);
        transport.bind().await.unwrap();
        let client = SocketAddr::from(([127, 0, 0, 1], transport.local_addr().unwrap().port()));

        // A late acknowledgement for some earlier request
        bridge.send_to(&ACK, client).await.unwrap();
        tokio::time::sleep(Duration::from_millis(50)).await;

        let result = transport.exchange(b"ping", &ACK).await;
        assert!(matches!(result, Err(Error::ReadTimeout)));
    }

    #[tokio::test]
    async fn test_close_releases_socket() {
        let (_bridge, port) = bridge().await;
        let mut transport = transport(port);

        transport.bind().await.unwrap();
        assert!(transport.is_bound());

        transport.close().await.unwrap();
        assert!(!transport.is_bound());
    }
}
