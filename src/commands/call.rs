//! One-shot call command implementation.
//!
//! The call command:
//! 1. Looks the method up in the registry
//! 2. Assembles parameters from the form values
//! 3. Issues the JSON-RPC request
//! 4. Renders the response in the selected display mode

use crate::inspect::{find_hex_values, transform_result, DisplayMode};
use crate::registry::{FormData, Method};
use crate::rpc::client::RpcClient;
use crate::rpc::types::RpcResponse;
use crate::utils::config::DEFAULT_ENDPOINT;
use anyhow::{Context, Result};
use log::{debug, error, info};
use std::io::Write;

/// Arguments for the call command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CallArgs {
    /// RPC endpoint URL
    pub rpc_url: String,

    /// Wire name of the method to call
    pub method: String,

    /// Form values feeding parameter assembly
    pub form: FormData,

    /// How hex leaves are rendered
    pub mode: DisplayMode,

    /// Print the quick-access list of discovered hex values
    pub quick_access: bool,
}

impl Default for CallArgs {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_ENDPOINT.to_string(),
            method: String::new(),
            form: FormData::default(),
            mode: DisplayMode::Hex,
            quick_access: false,
        }
    }
}

/// Validate call arguments
///
/// **Public** - called before execute_call for early validation
pub fn validate_args(args: &CallArgs) -> Result<()> {
    if args.rpc_url.is_empty() {
        anyhow::bail!("RPC URL cannot be empty");
    }

    if !args.rpc_url.starts_with("http://") && !args.rpc_url.starts_with("https://") {
        anyhow::bail!("RPC URL must start with http:// or https://");
    }

    if args.method.is_empty() {
        anyhow::bail!("Method name cannot be empty");
    }

    Method::parse(&args.method).context("Run `rpc-probe methods` for the supported list")?;

    Ok(())
}

/// Execute the call command
///
/// **Public** - main entry point called from main.rs
///
/// Transport failures do not abort the command: they are wrapped into an
/// error response and rendered like any other result, matching how every
/// other failure of a single call behaves. Only local problems (bad
/// method, missing fields) return an error.
pub fn execute_call(args: CallArgs) -> Result<()> {
    let method = Method::parse(&args.method)?;
    let params = method
        .build_params(&args.form)
        .context("Failed to assemble parameters")?;

    debug!("Params for {}: {:?}", method.name(), params);

    let client = RpcClient::new(&args.rpc_url).context("Failed to create RPC client")?;
    let response = issue_call(&client, method, params);

    let stdout = std::io::stdout();
    print_response(&response, args.mode, args.quick_access, &mut stdout.lock())
        .context("Failed to write response")?;

    Ok(())
}

/// Issue one call, converting transport failures into an error response
///
/// **Public** - shared with the console command
pub fn issue_call(
    client: &RpcClient,
    method: Method,
    params: Vec<serde_json::Value>,
) -> RpcResponse {
    match client.call(method.name(), params) {
        Ok(response) => {
            info!("{} resolved (error: {})", method.name(), response.is_error());
            response
        }
        Err(err) => {
            error!("Error executing {}: {}", method.name(), err);
            RpcResponse::from_transport_error(&err)
        }
    }
}

/// Render a response: transformed JSON plus the optional quick-access list
///
/// The quick-access list only covers the `result` field; the JSON dump
/// shows the whole envelope, transformed under the active mode.
pub fn print_response(
    response: &RpcResponse,
    mode: DisplayMode,
    quick_access: bool,
    out: &mut impl Write,
) -> Result<()> {
    let display = transform_result(&response.to_value(), mode);
    let json = serde_json::to_string_pretty(&display).context("Failed to serialize response")?;
    writeln!(out, "{}", json)?;

    if quick_access {
        let entries = response
            .result
            .as_ref()
            .map(find_hex_values)
            .unwrap_or_default();

        if !entries.is_empty() {
            writeln!(out)?;
            writeln!(out, "Quick access values:")?;
            for entry in &entries {
                writeln!(out, "  {} = {}", entry.path_label(), entry.display_value(mode))?;
            }
        }
    }

    Ok(())
}
