//! Worker side of the agent protocol.

use std::path::Path;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use toolhome_core::PathStyle;
use tracing::{debug, warn};

use crate::agents::{locate_blocking, probe_root};
use crate::error::AgentError;
use crate::protocol::{AgentReply, AgentRequest};

/// Serve agent requests from `reader` until EOF, writing replies to `writer`.
///
/// `root_dir` is the directory reported by probes. A malformed request is
/// answered with an `error` reply and the loop keeps going; only I/O
/// failures end it early.
pub async fn serve_agent<R, W>(reader: R, mut writer: W, root_dir: &Path) -> Result<(), AgentError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let replies = match serde_json::from_str::<AgentRequest>(trimmed) {
            Ok(request) => handle(request, root_dir).await,
            Err(e) => {
                warn!(error = %e, "Malformed agent request");
                vec![AgentReply::Error {
                    message: format!("malformed request: {e}"),
                }]
            }
        };

        for reply in &replies {
            write_reply(&mut writer, reply).await?;
        }
    }

    debug!("Agent input closed");
    Ok(())
}

async fn handle(request: AgentRequest, root_dir: &Path) -> Vec<AgentReply> {
    match request {
        AgentRequest::Probe => match probe_root(root_dir).await {
            Some(path) => vec![AgentReply::Root {
                path,
                style: PathStyle::native(),
            }],
            None => vec![AgentReply::Error {
                message: format!("agent root '{}' is not a directory", root_dir.display()),
            }],
        },
        AgentRequest::Locate(job) => {
            debug!(executable = %job.executable_name, "Serving locate request");
            match locate_blocking(job).await {
                Ok((result, progress)) => {
                    let mut replies: Vec<AgentReply> = progress
                        .into_iter()
                        .map(|line| AgentReply::Log { line })
                        .collect();
                    replies.push(match result {
                        Ok(path) => AgentReply::Located { path },
                        Err(not_found) => AgentReply::NotFound(not_found),
                    });
                    replies
                }
                Err(e) => vec![AgentReply::Error {
                    message: format!("locator task failed: {e}"),
                }],
            }
        }
    }
}

async fn write_reply<W: AsyncWrite + Unpin>(
    writer: &mut W,
    reply: &AgentReply,
) -> Result<(), AgentError> {
    let mut line = serde_json::to_vec(reply)?;
    line.push(b'\n');
    writer.write_all(&line).await?;
    writer.flush().await?;
    Ok(())
}
