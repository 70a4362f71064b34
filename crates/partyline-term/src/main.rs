mod relay;
mod session;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::relay::RelayClient;
use crate::session::ChatSession;

#[derive(Debug, Parser)]
#[command(name = "partyline", version, about = "Chat with the party bot")]
struct Args {
    /// Base URL of the relay server
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let responder = Box::new(RelayClient::new(&args.server));
    let mut session = ChatSession::new(responder);
    session.run().await
}
