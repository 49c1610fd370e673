use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    stylesphere::start_server().await
}
