//! Newline-delimited JSON over a byte stream.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::dispatcher::{parse_error, Dispatcher};
use crate::error::ServerError;

/// Counters reported when the input closes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeStats {
    /// Messages read.
    pub received: usize,
    /// Responses written.
    pub responded: usize,
}

/// Serve requests until `input` reaches end of stream.
///
/// One message per line; blank lines are skipped. Each response is
/// written and flushed before the next line is read. A line that is not
/// UTF-8 gets a parse error like any other undecodable message. The loop
/// stops only when reading or writing the stream itself fails.
pub async fn serve<R, W>(dispatcher: &Dispatcher, input: R, mut output: W) -> Result<ServeStats, ServerError>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut reader = BufReader::new(input);
    let mut buf = Vec::new();
    let mut stats = ServeStats::default();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                stats.received += 1;
                dispatcher.handle_line(line).await
            }
            Err(e) => {
                stats.received += 1;
                Some(parse_error(e))
            }
        };

        let Some(response) = response else {
            continue;
        };

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        output.write_all(&encoded).await?;
        output.flush().await?;
        stats.responded += 1;
        debug!(bytes = encoded.len(), "response written");
    }

    info!(received = stats.received, responded = stats.responded, "input closed");
    Ok(stats)
}

/// Serve on the process stdin/stdout.
pub async fn serve_stdio(dispatcher: &Dispatcher) -> Result<ServeStats, ServerError> {
    serve(dispatcher, tokio::io::stdin(), tokio::io::stdout()).await
}
