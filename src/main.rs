#[tokio::main]
async fn main() {
    if let Err(e) = cme_portal::run().await {
        eprintln!("cme-portal failed to start: {e}");
        std::process::exit(1);
    }
}
