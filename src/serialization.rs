use anyhow::Result;
use text_raider::ExtractedPage;
use tokio::{fs::File, io::AsyncWriteExt};

pub fn serialize_to_json(page: &ExtractedPage) -> Result<Vec<u8>> {
    let mut buffer = serde_json::to_vec_pretty(page)?;
    buffer.push(b'\n');
    Ok(buffer)
}

pub async fn save_to_file(file_name: &str, bytes: &[u8]) -> Result<()> {
    let mut file = File::create(file_name).await?;
    file.write_all(bytes).await?;
    file.sync_all().await?;
    Ok(())
}
