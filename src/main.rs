//! eth-rpc-probe CLI
//!
//! A form-driven debugger for Ethereum-compatible JSON-RPC endpoints.
//! Issues single calls or runs an interactive console, and renders
//! responses with hex/readable toggling.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use eth_rpc_probe::commands::{
    display_version, execute_call, list_methods, run_console, validate_args, CallArgs,
};
use eth_rpc_probe::inspect::DisplayMode;
use eth_rpc_probe::registry::FormData;
use eth_rpc_probe::rpc::RpcClient;
use eth_rpc_probe::utils::config::{
    DEFAULT_BLOCK_TAG, DEFAULT_ENDPOINT, DEFAULT_GAS_LIMIT, DEFAULT_VALUE,
};

/// eth-rpc-probe - poke Ethereum-compatible JSON-RPC endpoints
#[derive(Parser, Debug)]
#[command(name = "rpc-probe")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Issue a single RPC call
    Call {
        /// RPC method name (e.g. eth_blockNumber)
        method: String,

        /// RPC endpoint URL
        #[arg(short, long, env = "RPC_PROBE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        rpc: String,

        /// Account or sender address
        #[arg(long)]
        address: Option<String>,

        /// Block number or tag (latest, earliest, pending, 0x...)
        #[arg(long, default_value = DEFAULT_BLOCK_TAG)]
        block: String,

        /// Block hash for eth_getBlockByHash
        #[arg(long)]
        block_hash: Option<String>,

        /// Return full transaction objects in block queries
        #[arg(long)]
        full_transactions: bool,

        /// Recipient address
        #[arg(long)]
        to: Option<String>,

        /// Encoded call data for eth_call / eth_estimateGas
        #[arg(long)]
        data: Option<String>,

        /// Storage key for eth_getStorageAt
        #[arg(long)]
        storage_key: Option<String>,

        /// Gas limit
        #[arg(long, default_value = DEFAULT_GAS_LIMIT)]
        gas: String,

        /// Gas price
        #[arg(long)]
        gas_price: Option<String>,

        /// Value in wei
        #[arg(long, default_value = DEFAULT_VALUE)]
        value: String,

        /// Transaction input data
        #[arg(long)]
        input: Option<String>,

        /// Transaction nonce
        #[arg(long)]
        nonce: Option<String>,

        /// Signed raw transaction data
        #[arg(long)]
        raw_tx: Option<String>,

        /// Show small hex quantities as decimal numbers
        #[arg(long)]
        readable: bool,

        /// Print the quick-access list of hex values
        #[arg(long)]
        quick: bool,
    },

    /// Run the interactive console
    Console {
        /// RPC endpoint URL
        #[arg(short, long, env = "RPC_PROBE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
        rpc: String,
    },

    /// List supported RPC methods
    Methods {
        /// Show per-method parameters
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Call {
            method,
            rpc,
            address,
            block,
            block_hash,
            full_transactions,
            to,
            data,
            storage_key,
            gas,
            gas_price,
            value,
            input,
            nonce,
            raw_tx,
            readable,
            quick,
        } => {
            let form = FormData {
                address: address.unwrap_or_default(),
                block_value: block,
                block_hash: block_hash.unwrap_or_default(),
                show_full_transactions: full_transactions,
                recipient_address: to.unwrap_or_default(),
                encoded_call: data.unwrap_or_default(),
                storage_key: storage_key.unwrap_or_default(),
                gas_limit: gas,
                gas_price: gas_price.unwrap_or_default(),
                value,
                input_data: input.unwrap_or_default(),
                nonce: nonce.unwrap_or_default(),
                call_data: raw_tx.unwrap_or_default(),
            };

            let mode = if readable {
                DisplayMode::Readable
            } else {
                DisplayMode::Hex
            };

            let args = CallArgs {
                rpc_url: rpc,
                method,
                form,
                mode,
                quick_access: quick,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute call
            execute_call(args)?;
        }

        Commands::Console { rpc } => {
            let client = RpcClient::new(rpc)?;
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            run_console(client, stdin.lock(), &mut stdout)?;
        }

        Commands::Methods { show } => {
            let mut stdout = std::io::stdout();
            list_methods(show, &mut stdout)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
