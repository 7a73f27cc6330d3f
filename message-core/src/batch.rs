use crate::id::{message_id, MessageId};
use anyhow::Result;
use tokio::task::JoinSet;

const CHUNK_SIZE: usize = 64;

/// Computes ids for a batch of encoded messages on the blocking pool.
/// Output order matches input order.
pub async fn message_ids(messages: Vec<Vec<u8>>) -> Result<Vec<MessageId>> {
    let total = messages.len();
    let mut tasks = JoinSet::new();

    let mut remaining = messages.into_iter();
    let mut chunk_index = 0;
    loop {
        let chunk: Vec<Vec<u8>> = remaining.by_ref().take(CHUNK_SIZE).collect();
        if chunk.is_empty() {
            break;
        }
        tasks.spawn_blocking(move || {
            let ids: Vec<MessageId> = chunk.iter().map(|m| message_id(m)).collect();
            (chunk_index, ids)
        });
        chunk_index += 1;
    }

    tracing::debug!(total, chunks = chunk_index, "hashing message batch");

    let mut chunks: Vec<Option<Vec<MessageId>>> = vec![None; chunk_index];
    while let Some(joined) = tasks.join_next().await {
        let (index, ids) = joined?;
        chunks[index] = Some(ids);
    }

    Ok(chunks.into_iter().flatten().flatten().collect())
}
