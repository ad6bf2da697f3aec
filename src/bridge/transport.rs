//! Persistent duplex connection to the state handler.
//!
//! Framing is newline-delimited JSON over TCP: one [`Event`] per outbound
//! line, one [`StateDelta`] per inbound line. The task reconnects after a
//! fixed interval until the app event channel is closed.
//!
//! [`Event`]: crate::bridge::event::Event

use crate::app::event::AppEvent;
use crate::bridge::dispatcher::Batch;
use crate::bridge::error::TransportError;
use crate::bridge::store::StateDelta;
use crate::config::HandlerConfig;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub fn spawn_transport(
    config: HandlerConfig,
    event_tx: mpsc::UnboundedSender<AppEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let retry = Duration::from_millis(config.reconnect_interval_ms);
        loop {
            match TcpStream::connect((config.host.as_str(), config.port)).await {
                Ok(stream) => {
                    tracing::info!(host = %config.host, port = config.port, "connected to handler");
                    let (link_tx, link_rx) = mpsc::unbounded_channel();
                    if event_tx.send(AppEvent::HandlerConnected { link: link_tx }).is_err() {
                        break;
                    }
                    let (reader, writer) = stream.into_split();
                    let reason = match run_session(reader, writer, link_rx, &event_tx).await {
                        Ok(()) => break,
                        Err(e) => e.to_string(),
                    };
                    tracing::warn!(%reason, "handler session ended");
                    if event_tx
                        .send(AppEvent::HandlerDisconnected { reason })
                        .is_err()
                    {
                        break;
                    }
                }
                Err(e) => {
                    let error = format!("connect to {}:{} failed: {}", config.host, config.port, e);
                    if event_tx.send(AppEvent::HandlerError { error }).is_err() {
                        break;
                    }
                }
            }
            tokio::time::sleep(retry).await;
            if event_tx.is_closed() {
                break;
            }
        }
    })
}

/// Pump batches out and deltas in until either side closes.
///
/// Returns `Ok(())` when the app side is gone (link dropped or app event
/// channel closed), which ends the transport for good.
async fn run_session<R, W>(
    reader: R,
    mut writer: W,
    mut link_rx: mpsc::UnboundedReceiver<Batch>,
    event_tx: &mpsc::UnboundedSender<AppEvent>,
) -> Result<(), TransportError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(reader);
    // Partial lines survive a cancelled read_until, so the buffer lives across iterations
    let mut line = Vec::new();
    loop {
        tokio::select! {
            batch = link_rx.recv() => {
                let Some(batch) = batch else { return Ok(()) };
                write_batch(&mut writer, batch).await?;
            }
            read = reader.read_until(b'\n', &mut line) => {
                if read? == 0 {
                    return Err(TransportError::Closed);
                }
                let frame = std::mem::take(&mut line);
                if frame.iter().all(u8::is_ascii_whitespace) {
                    continue;
                }
                match serde_json::from_slice::<StateDelta>(&frame) {
                    Ok(delta) => {
                        if event_tx.send(AppEvent::StateDelta(delta)).is_err() {
                            return Ok(());
                        }
                    }
                    Err(e) => tracing::warn!(error = %e, "skipping malformed delta frame"),
                }
            }
        }
    }
}

async fn write_batch<W>(writer: &mut W, batch: Batch) -> Result<(), TransportError>
where
    W: AsyncWrite + Unpin,
{
    tracing::debug!(
        trigger = ?batch.trigger,
        options = ?batch.options,
        count = batch.events.len(),
        "sending batch"
    );
    for event in &batch.events {
        tracing::trace!(name = event.name(), payload_keys = event.payload().len(), "event frame");
        let mut frame = serde_json::to_string(event)?;
        frame.push('\n');
        writer.write_all(frame.as_bytes()).await?;
    }
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::event::{handlers, Event, Payload, Trigger, PRACTICE_SLICE};
    use serde_json::json;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    fn batch(names: &[&str]) -> Batch {
        Batch {
            events: names.iter().map(|n| Event::new(*n, Payload::new())).collect(),
            trigger: Trigger::Click,
            options: Payload::new(),
        }
    }

    #[tokio::test]
    async fn test_session_writes_events_as_lines_in_order() {
        let (client, mut server) = tokio::io::duplex(4096);
        let (reader, writer) = tokio::io::split(client);
        let (link_tx, link_rx) = mpsc::unbounded_channel();
        let (event_tx, _event_rx) = mpsc::unbounded_channel();

        link_tx.send(batch(&["a", "b"])).unwrap();
        link_tx.send(batch(&["c"])).unwrap();
        drop(link_tx);

        let result = run_session(reader, writer, link_rx, &event_tx).await;
        assert!(result.is_ok());

        let mut buf = vec![0u8; 4096];
        let n = server.read(&mut buf).await.unwrap();
        let text = String::from_utf8_lossy(&buf[..n]);
        let names: Vec<String> = text
            .lines()
            .map(|l| serde_json::from_str::<Event>(l).unwrap().name().to_string())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_session_forwards_deltas_in_order() {
        let (client, mut server) = tokio::io::duplex(4096);
        let (reader, writer) = tokio::io::split(client);
        let (_link_tx, link_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        server
            .write_all(
                format!(
                    "{{\"sliceName\":\"{0}\",\"changedFields\":{{\"num1\":12}}}}\n\nnot json\n{{\"sliceName\":\"{0}\",\"changedFields\":{{\"num2\":34}}}}\n",
                    PRACTICE_SLICE
                )
                .as_bytes(),
            )
            .await
            .unwrap();
        drop(server);

        let result = run_session(reader, writer, link_rx, &event_tx).await;
        assert!(matches!(result, Err(TransportError::Closed)));

        let mut fields = Vec::new();
        while let Ok(AppEvent::StateDelta(delta)) = event_rx.try_recv() {
            fields.extend(delta.changed_fields.into_iter());
        }
        assert_eq!(
            fields,
            vec![("num1".to_string(), json!(12)), ("num2".to_string(), json!(34))]
        );
    }

    #[tokio::test]
    async fn test_session_skips_non_utf8_lines() {
        let (client, mut server) = tokio::io::duplex(4096);
        let (reader, writer) = tokio::io::split(client);
        let (_link_tx, link_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        server.write_all(b"\xff\xfe\n").await.unwrap();
        server
            .write_all(b"{\"sliceName\":\"s\",\"changedFields\":{\"num1\":5}}\n")
            .await
            .unwrap();
        drop(server);

        let result = run_session(reader, writer, link_rx, &event_tx).await;
        assert!(matches!(result, Err(TransportError::Closed)));

        match event_rx.try_recv() {
            Ok(AppEvent::StateDelta(delta)) => {
                assert_eq!(delta.slice_name, "s");
                assert_eq!(delta.changed_fields["num1"], json!(5));
            }
            other => panic!("expected StateDelta, got {:?}", other),
        }
        assert!(event_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_transport_connects_and_sends() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let config = HandlerConfig {
            host: "127.0.0.1".into(),
            port,
            reconnect_interval_ms: 50,
        };
        let handle = spawn_transport(config, event_tx);

        let (mut socket, _) = listener.accept().await.unwrap();
        let Some(AppEvent::HandlerConnected { link }) = event_rx.recv().await else {
            panic!("expected HandlerConnected");
        };
        link.send(batch(&[handlers::START_NEW_PROBLEM])).unwrap();

        let mut buf = vec![0u8; 1024];
        let n = socket.read(&mut buf).await.unwrap();
        let line = String::from_utf8_lossy(&buf[..n]);
        let event: Event = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(event.name(), handlers::START_NEW_PROBLEM);

        handle.abort();
    }

    #[tokio::test]
    async fn test_transport_reports_connect_failure() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let config = HandlerConfig {
            host: "127.0.0.1".into(),
            port,
            reconnect_interval_ms: 10_000,
        };
        let handle = spawn_transport(config, event_tx);

        match event_rx.recv().await {
            Some(AppEvent::HandlerError { error }) => assert!(error.contains("failed")),
            other => panic!("expected HandlerError, got {:?}", other),
        }
        handle.abort();
    }
}
