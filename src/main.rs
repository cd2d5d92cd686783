use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = chessvoice::cli::Cli::parse();
    chessvoice::run(cli).await
}
