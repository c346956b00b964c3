use std::io;

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::{mpsc, watch},
};

/// Reads lines until EOF, dropping every line that arrives while `ready`
/// is still false. Started before the boot sequence so anything typed
/// during the animation is consumed and thrown away.
pub async fn forward_lines<R>(
    reader: R,
    ready: watch::Receiver<bool>,
    tx: mpsc::Sender<String>,
) -> io::Result<usize>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();
    let mut discarded = 0;
    while let Some(line) = lines.next_line().await? {
        if !*ready.borrow() {
            discarded += 1;
            tracing::debug!(line = %line, "discarding input typed during boot");
            continue;
        }
        if tx.send(line).await.is_err() {
            break;
        }
    }
    Ok(discarded)
}
