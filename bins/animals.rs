use server::ServiceKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(ServiceKind::Animals).await
}
