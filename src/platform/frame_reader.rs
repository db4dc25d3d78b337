use crate::domain::RawFrame;
use crate::domain::events::CompassEvent;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc::Sender;
use tokio::sync::mpsc::error::SendError;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{debug, info, instrument, warn};

/// Reads JSON-lines orientation frames and `activate`/`deactivate` commands, forwarding them as events.
#[instrument(skip_all)]
pub async fn read_frames<R>(reader: R, tx: Sender<CompassEvent>) -> Result<(), SendError<CompassEvent>>
where
    R: AsyncRead + Unpin,
{
    let mut lines = LinesStream::new(BufReader::new(reader).lines());
    while let Some(line) = lines.next().await {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("⚠️ Could not read frame: {}", e);
                break;
            }
        };

        let event = match line.trim() {
            "" => continue,
            "activate" => CompassEvent::Activate,
            "deactivate" => CompassEvent::Deactivate,
            json => match serde_json::from_str::<RawFrame>(json) {
                Ok(frame) => CompassEvent::Orientation(frame),
                Err(e) => {
                    warn!(line = json, "⚠️ Skipping malformed frame: {}", e);
                    continue;
                }
            },
        };

        debug!("🔸 Read event: {:?}", event);
        tx.send(event).await?;
    }

    info!("Frame stream ended");
    Ok(())
}
