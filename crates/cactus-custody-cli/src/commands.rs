/*
[INPUT]:  Parsed subcommand and a configured custody client
[OUTPUT]: JSON value describing the command result
[POS]:    Command layer - maps CLI subcommands onto client calls
[UPDATE]: When adding subcommands or changing their output
*/

use std::collections::BTreeMap;

use anyhow::{Context, Result, bail};
use clap::{Subcommand, ValueEnum};
use serde_json::{Value, json};
use tracing::debug;

use cactus_custody_adapter::auth::freshness;
use cactus_custody_adapter::{
    Authenticator, CustodyClient, SignableRequest, WalletFilter, WalletListQuery,
};

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List wallets
    Wallets {
        #[arg(long = "b-id")]
        b_id: Option<String>,
        #[arg(long, value_enum)]
        filter: Option<FilterArg>,
        /// Coin name, repeatable
        #[arg(long = "coin")]
        coins: Vec<String>,
        #[arg(long)]
        offset: Option<u32>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Coins supported by the custody
    CoinInfo {
        #[arg(long, default_value = "")]
        cactus_symbol: String,
        #[arg(long, default_value = "")]
        symbol: String,
    },
    /// Chains supported by the custody
    ChainInfo {
        #[arg(long, default_value = "")]
        chain: String,
        #[arg(long, default_value = "")]
        full_name: String,
    },
    /// Custodian accounts on an EVM chain
    EthAccounts {
        #[arg(long)]
        chain_id: u64,
        #[arg(long)]
        account: Option<String>,
    },
    /// Print a fresh nonce and request timestamp
    Nonce,
    /// Sign a GET request and print what would be sent, without sending it
    Sign {
        #[arg(long)]
        path: String,
        /// Query parameter as key=value, repeatable
        #[arg(long = "query", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterArg {
    Hot,
    Cold,
}

impl From<FilterArg> for WalletFilter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::Hot => WalletFilter::Hot,
            FilterArg::Cold => WalletFilter::Cold,
        }
    }
}

pub fn parse_query_pair(raw: &str) -> std::result::Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected key=value, got '{raw}'")),
    }
}

impl Command {
    /// Commands that never contact the API
    pub fn is_offline(&self) -> bool {
        matches!(self, Command::Nonce | Command::Sign { .. })
    }
}

/// Output of the offline `nonce` command
pub fn nonce_output() -> Result<Value> {
    let nonce = freshness::nonce().context("generate nonce")?;
    Ok(json!({
        "nonce": nonce,
        "date": freshness::gmt_now(),
    }))
}

/// Run a subcommand against the client
pub async fn run(client: &CustodyClient, command: Command) -> Result<Value> {
    debug!(?command, "running command");
    let value = match command {
        Command::Wallets {
            b_id,
            filter,
            coins,
            offset,
            limit,
        } => {
            let query = WalletListQuery {
                b_id,
                filter: filter.map(Into::into),
                coin_names: coins,
                offset,
                limit,
                ..Default::default()
            };
            serde_json::to_value(client.wallet_list(&query).await.context("list wallets")?)?
        }
        Command::CoinInfo {
            cactus_symbol,
            symbol,
        } => serde_json::to_value(
            client
                .coin_info(&cactus_symbol, &symbol)
                .await
                .context("query coin info")?,
        )?,
        Command::ChainInfo { chain, full_name } => serde_json::to_value(
            client
                .chain_info(&chain, &full_name)
                .await
                .context("query chain info")?,
        )?,
        Command::EthAccounts { chain_id, account } => serde_json::to_value(
            client
                .eth_accounts(chain_id, account.as_deref())
                .await
                .context("query eth accounts")?,
        )?,
        Command::Nonce => nonce_output()?,
        Command::Sign { path, query } => sign_output(client, path, query)?,
    };
    Ok(value)
}

fn sign_output(
    client: &CustodyClient,
    path: String,
    query: Vec<(String, String)>,
) -> Result<Value> {
    let Authenticator::Signed(signer) = client.authenticator() else {
        bail!("sign requires a key_pair credential");
    };
    let request = SignableRequest::get(path, query.into_iter().collect::<BTreeMap<_, _>>());
    let prepared = signer.prepare(&request).context("sign request")?;
    Ok(json!({
        "canonical": prepared.canonical,
        "url": prepared.request.url,
        "headers": prepared.request.headers,
    }))
}
