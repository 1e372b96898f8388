/*
[INPUT]:  CACTUS_REFRESH_TOKEN and an EVM chain id
[OUTPUT]: Custodian accounts fetched with a cached bearer token
[POS]:    Examples - refresh-token authentication scheme
[UPDATE]: When the token client surface changes
*/

use cactus_custody_adapter::*;

#[tokio::main]
async fn main() {
    println!("=== Cactus Custody Bearer Token Example ===\n");

    let Ok(refresh_token) = std::env::var("CACTUS_REFRESH_TOKEN") else {
        eprintln!("Set CACTUS_REFRESH_TOKEN");
        return;
    };
    let credential = match RefreshTokenCredential::new(refresh_token) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Invalid refresh token: {}", e);
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

    // The first call exchanges the refresh token, later calls reuse it
    for round in 1..=2 {
        println!("Round {}: querying accounts on chain 1...", round);
        match client.eth_accounts(1, None).await {
            Ok(accounts) => {
                for account in accounts {
                    println!("  {} {} balance={}", account.name, account.address, account.balance);
                }
            }
            Err(e) if e.is_auth_error() => {
                println!("✗ Authentication failed: {}", e);
                return;
            }
            Err(e) => println!("✗ Error: {}", e),
        }
    }

    println!("\n✓ Bearer token example complete");
}
