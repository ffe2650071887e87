#[actix_rt::main]
async fn main() -> anyhow::Result<()> {
    usergraph::runner::with_config(usergraph::system::start).await
}
