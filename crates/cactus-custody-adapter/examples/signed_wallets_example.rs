/*
[INPUT]:  CACTUS_API_KEY, CACTUS_API_KEY_ID and CACTUS_PRIVATE_KEY_FILE
[OUTPUT]: Wallet list and chain info fetched with signed requests
[POS]:    Examples - per-request signing scheme
[UPDATE]: When the signed client surface changes
*/

use cactus_custody_adapter::*;

/// Example: list wallets using a key-pair credential
///
/// Every request carries its own nonce, timestamp and ECDSA signature.
#[tokio::main]
async fn main() {
    println!("=== Cactus Custody Signed Request Example ===\n");

    let (Ok(api_key), Ok(key_id), Ok(key_file)) = (
        std::env::var("CACTUS_API_KEY"),
        std::env::var("CACTUS_API_KEY_ID"),
        std::env::var("CACTUS_PRIVATE_KEY_FILE"),
    ) else {
        eprintln!("Set CACTUS_API_KEY, CACTUS_API_KEY_ID and CACTUS_PRIVATE_KEY_FILE");
        return;
    };

    let credential = match KeyPairCredential::from_pem_file(key_id, api_key, &key_file) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load private key: {}", e);
            return;
        }
    };

    let client = match CustodyClient::new(ClientConfig::default(), credential) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created with signed-request authentication\n");

    println!("Listing hot wallets...");
    let query = WalletListQuery {
        filter: Some(WalletFilter::Hot),
        limit: Some(10),
        ..Default::default()
    };
    match client.wallet_list(&query).await {
        Ok(page) => {
            println!("✓ {} wallets (showing {})", page.total, page.list.len());
            for wallet in page.list {
                println!("  {} {} {}", wallet.wallet_code, wallet.coin_name, wallet.total_amount);
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying chain info...");
    match client.chain_info("", "").await {
        Ok(chains) => println!("✓ {} chains supported", chains.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Signed request example complete");
}
