use clap::{Parser, Subcommand};

use crate::{
    commands::{
        contract::ContractCommand, explorer::ExplorerCommand, governance::GovernanceCommand,
        mempool::MempoolCommand, mining::MiningCommand, nft::NftCommand, staking::StakingCommand,
        tx::TxCommand, util::UtilCommand, wallet::WalletCommand,
    },
    config::ConnectionArgs,
};

#[derive(Parser)]
#[command(name = "strat", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print raw JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    /// Log every request to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show chain height, difficulty and other blockchain info
    Info,
    /// Show a block by index or hash
    Block {
        /// Block index (digits only) or block hash
        id: String,
    },
    /// Show the most recent blocks
    Blocks {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Check that the node is up
    Health,
    /// Show the API name and version the node reports
    Version,
    /// Query and send transactions
    Tx {
        #[command(subcommand)]
        command: TxCommand,
    },
    /// Manage wallets and balances
    Wallet {
        #[command(subcommand)]
        command: WalletCommand,
    },
    /// Deploy and call smart contracts
    Contract {
        #[command(subcommand)]
        command: ContractCommand,
    },
    /// Control mining on the node
    Mining {
        #[command(subcommand)]
        command: MiningCommand,
    },
    /// Stake, unstake and claim rewards
    Staking {
        #[command(subcommand)]
        command: StakingCommand,
    },
    /// Mint, inspect and transfer NFTs
    Nft {
        #[command(subcommand)]
        command: NftCommand,
    },
    /// Create, inspect and vote on governance proposals
    Gov {
        #[command(subcommand)]
        command: GovernanceCommand,
    },
    /// Inspect the mempool
    Mempool {
        #[command(subcommand)]
        command: MempoolCommand,
    },
    /// Explorer lookups
    Explorer {
        #[command(subcommand)]
        command: ExplorerCommand,
    },
    /// Offline helpers: address validation and unit conversion
    Util {
        #[command(subcommand)]
        command: UtilCommand,
    },
}
