use server::ServiceKind;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    server::run(ServiceKind::Cars).await
}
