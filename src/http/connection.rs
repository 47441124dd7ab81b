use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::error::{Result, ServerError};
use crate::http::parser::{Classification, classify};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;
use crate::resource::ResourceResolver;

/// One accepted client, handled from first byte to close.
pub struct Connection<S> {
    stream: S,
    resolver: Arc<ResourceResolver>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(String),
    Writing(ResponseWriter, bool), // bool = close after write?
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, resolver: Arc<ResourceResolver>) -> Self {
        Self {
            stream,
            resolver,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.state = match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    let request = read_request(&mut self.stream).await?;
                    ConnectionState::Processing(request)
                }

                ConnectionState::Processing(request) => {
                    let (response, close) = self.handle_request(&request).await?;
                    ConnectionState::Writing(ResponseWriter::new(&response), close)
                }

                ConnectionState::Writing(mut writer, close) => {
                    writer.write_to_stream(&mut self.stream).await?;

                    if close {
                        self.stream.shutdown().await.map_err(ServerError::Output)?;
                    }
                    ConnectionState::Closed
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Picks the response for a drained request and whether the connection
    /// is closed explicitly afterwards.
    async fn handle_request(&self, request: &str) -> Result<(Response, bool)> {
        let request = match classify(request) {
            Classification::Http(request) => request,
            Classification::NotHttp => {
                tracing::warn!("Rejecting non-HTTP request");
                return Ok((Response::unsupported_protocol(), true));
            }
        };

        tracing::info!(method = request.method.as_str(), path = %request.path, "Handling HTTP request");

        let response = match self.resolver.resolve(&request.path).await? {
            Some(body) => Response::ok(body),
            None => Response::no_mapping(),
        };

        tracing::info!(
            path = %request.path,
            status = response.status.as_u16(),
            "Completed HTTP request"
        );
        Ok((response, false))
    }
}

/// Drains `reader` to end-of-input, one line at a time.
///
/// Every line is re-terminated with `\n` (a `\r\n` terminator is dropped
/// first) and invalid UTF-8 is replaced. There is no length framing, so this
/// only returns once the peer closes or half-closes its side.
pub async fn read_request<R>(reader: R) -> Result<String>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut request = String::new();
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader
            .read_until(b'\n', &mut line)
            .await
            .map_err(ServerError::Input)?;

        if n == 0 {
            // Client closed its side
            break;
        }

        if line.last() == Some(&b'\n') {
            line.pop();
            if line.last() == Some(&b'\r') {
                line.pop();
            }
        }

        request.push_str(&String::from_utf8_lossy(&line));
        request.push('\n');
    }

    Ok(request)
}
