//! Interactive console command.
//!
//! The terminal rendition of the form-driven debugger: pick a method, fill
//! in its fields, execute, then browse retained results with hex/readable
//! toggling and quick-access copying. Reader and writer are injected so
//! the whole loop is scriptable in tests.

use super::call::{issue_call, print_response};
use crate::registry::{Field, FormData, Method, ALL_METHODS};
use crate::rpc::client::RpcClient;
use crate::session::{DisplayState, Session};
use anyhow::Result;
use log::error;
use std::collections::HashMap;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  methods              list supported RPC methods
  use <method>         select a method
  form                 show the selected method's parameter form
  set <field> <value>  fill in a form field
  call                 execute the selected method
  results              list retained results
  show <id>            render one result
  mode <id> <hex|readable>  switch a result's display mode
  copy <id> <n>        copy the n-th quick-access value
  rm <id>              dismiss a result
  quit                 leave the console";

/// Console state: the selected method, the form, retained results and
/// per-result display state
pub struct Console {
    client: RpcClient,
    session: Session,
    form: FormData,
    selected: Option<Method>,
    display: HashMap<String, DisplayState>,
}

impl Console {
    pub fn new(client: RpcClient) -> Self {
        Self {
            client,
            session: Session::new(),
            form: FormData::default(),
            selected: None,
            display: HashMap::new(),
        }
    }

    /// Handle one input line; returns false when the console should exit
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(command) => command,
            None => return Ok(true),
        };

        match command {
            "help" => writeln!(out, "{}", HELP)?,
            "methods" => {
                for method in ALL_METHODS {
                    writeln!(out, "  {}", method.name())?;
                }
            }
            "use" => self.select_method(parts.next(), out)?,
            "form" => self.show_form(out)?,
            "set" => {
                let key = parts.next();
                let value = parts.collect::<Vec<_>>().join(" ");
                self.set_field(key, &value, out)?;
            }
            "call" => self.execute_selected(out)?,
            "results" => self.list_results(out)?,
            "show" => self.show_result(parts.next(), out)?,
            "mode" => self.set_mode(parts.next(), parts.next(), out)?,
            "copy" => self.copy_value(parts.next(), parts.next(), out)?,
            "rm" => self.remove_result(parts.next(), out)?,
            "quit" | "exit" => return Ok(false),
            other => writeln!(out, "Unknown command: {} (try `help`)", other)?,
        }

        Ok(true)
    }

    fn select_method(&mut self, name: Option<&str>, out: &mut impl Write) -> Result<()> {
        let name = match name {
            Some(name) => name,
            None => {
                writeln!(out, "Usage: use <method>")?;
                return Ok(());
            }
        };

        match Method::parse(name) {
            Ok(method) => {
                self.selected = Some(method);
                if method.fields().is_empty() {
                    writeln!(out, "Selected {} (no parameters)", method.name())?;
                } else {
                    writeln!(out, "Selected {}", method.name())?;
                    self.show_form(out)?;
                }
            }
            Err(err) => writeln!(out, "{}", err)?,
        }

        Ok(())
    }

    fn show_form(&self, out: &mut impl Write) -> Result<()> {
        let method = match self.selected {
            Some(method) => method,
            None => {
                writeln!(out, "No method selected (try `use <method>`)")?;
                return Ok(());
            }
        };

        if method.fields().is_empty() {
            writeln!(out, "{} takes no parameters", method.name())?;
            return Ok(());
        }

        writeln!(out, "Parameters for {}:", method.name())?;
        for field in method.fields() {
            let current = self.form.display(*field);
            let mut line = format!("  {} ({}) = {:?}", field.key(), field.label(), current);
            if let Some(options) = field.options() {
                line.push_str(&format!("  [one of: {}]", options.join(", ")));
            } else if let Some(placeholder) = field.placeholder() {
                line.push_str(&format!("  [e.g. {}]", placeholder));
            }
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }

    fn set_field(&mut self, key: Option<&str>, value: &str, out: &mut impl Write) -> Result<()> {
        let key = match key {
            Some(key) => key,
            None => {
                writeln!(out, "Usage: set <field> <value>")?;
                return Ok(());
            }
        };

        match Field::parse(key).and_then(|field| self.form.set(field, value)) {
            Ok(()) => writeln!(out, "{} = {:?}", key, value)?,
            Err(err) => writeln!(out, "{}", err)?,
        }

        Ok(())
    }

    fn execute_selected(&mut self, out: &mut impl Write) -> Result<()> {
        let method = match self.selected {
            Some(method) => method,
            None => {
                writeln!(out, "No method selected (try `use <method>`)")?;
                return Ok(());
            }
        };

        // Missing required fields keep the console alive, like any other
        // form mistake
        let params = match method.build_params(&self.form) {
            Ok(params) => params,
            Err(err) => {
                writeln!(out, "{}", err)?;
                return Ok(());
            }
        };

        let id = self.session.begin_request(method.name());
        let response = issue_call(&self.client, method, params);
        self.session.complete_request(&id, response);

        writeln!(out, "=> {}", id)?;
        self.show_result(Some(id.as_str()), out)
    }

    fn list_results(&self, out: &mut impl Write) -> Result<()> {
        if self.session.is_empty() {
            writeln!(out, "No results yet")?;
            return Ok(());
        }

        writeln!(out, "Results ({}):", self.session.len())?;
        for slot in self.session.slots() {
            let status = match slot.received_at() {
                Some(at) => format!("done {}", at.format("%H:%M:%S")),
                None => "pending".to_string(),
            };
            writeln!(out, "  {}  [{}]", slot.id, status)?;
        }

        Ok(())
    }

    fn show_result(&mut self, id: Option<&str>, out: &mut impl Write) -> Result<()> {
        let id = match id {
            Some(id) => id,
            None => {
                writeln!(out, "Usage: show <id>")?;
                return Ok(());
            }
        };

        let slot = match self.session.get(id) {
            Some(slot) => slot,
            None => {
                writeln!(out, "No result with id {}", id)?;
                return Ok(());
            }
        };

        let response = match slot.response() {
            Some(response) => response.clone(),
            None => {
                writeln!(out, "{} is still pending", id)?;
                return Ok(());
            }
        };

        let state = self.display.entry(id.to_string()).or_default();
        writeln!(out, "--- {} ({} mode) ---", id, state.mode.label())?;
        print_response(&response, state.mode, true, out)?;

        if let Some(field) = state.copied_field() {
            writeln!(out, "Copied! ({})", field)?;
        }

        Ok(())
    }

    fn set_mode(
        &mut self,
        id: Option<&str>,
        mode: Option<&str>,
        out: &mut impl Write,
    ) -> Result<()> {
        let (id, mode) = match (id, mode) {
            (Some(id), Some(mode)) => (id, mode),
            _ => {
                writeln!(out, "Usage: mode <id> <hex|readable>")?;
                return Ok(());
            }
        };

        if self.session.get(id).is_none() {
            writeln!(out, "No result with id {}", id)?;
            return Ok(());
        }

        match mode.parse() {
            Ok(mode) => {
                self.display.entry(id.to_string()).or_default().set_mode(mode);
                self.show_result(Some(id), out)?;
            }
            Err(err) => writeln!(out, "{}", err)?,
        }

        Ok(())
    }

    fn copy_value(
        &mut self,
        id: Option<&str>,
        index: Option<&str>,
        out: &mut impl Write,
    ) -> Result<()> {
        let (id, index) = match (id, index.and_then(|raw| raw.parse::<usize>().ok())) {
            (Some(id), Some(index)) => (id, index),
            _ => {
                writeln!(out, "Usage: copy <id> <n>")?;
                return Ok(());
            }
        };

        let result = self
            .session
            .get(id)
            .and_then(|slot| slot.response())
            .and_then(|response| response.result.clone());

        let entries = result
            .as_ref()
            .map(crate::inspect::find_hex_values)
            .unwrap_or_default();

        let entry = match entries.get(index) {
            Some(entry) => entry,
            None => {
                writeln!(out, "{} has no quick-access value #{}", id, index)?;
                return Ok(());
            }
        };

        let state = self.display.entry(id.to_string()).or_default();
        let value = entry.display_value(state.mode);

        // A failed write never surfaces as a console error; the
        // acknowledgment just doesn't appear
        match writeln!(out, "{}", value) {
            Ok(()) => {
                state.mark_copied(format!("{}-{}", id, index));
                writeln!(out, "Copied!")?;
            }
            Err(err) => error!("Failed to copy value: {}", err),
        }

        Ok(())
    }

    fn remove_result(&mut self, id: Option<&str>, out: &mut impl Write) -> Result<()> {
        let id = match id {
            Some(id) => id,
            None => {
                writeln!(out, "Usage: rm <id>")?;
                return Ok(());
            }
        };

        if self.session.remove(id) {
            self.display.remove(id);
            writeln!(out, "Removed {}", id)?;
        } else {
            writeln!(out, "No result with id {}", id)?;
        }

        Ok(())
    }
}

/// Run the console loop until EOF or `quit`
///
/// **Public** - main entry point called from main.rs
pub fn run_console(client: RpcClient, mut input: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut console = Console::new(client);

    writeln!(out, "eth-rpc-probe console")?;
    writeln!(out, "Endpoint: {}", console.client.endpoint())?;
    writeln!(out, "Type `help` for commands, `quit` to leave")?;

    loop {
        write!(out, "rpc> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        if !console.handle_line(line.trim(), out)? {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::types::RpcResponse;
    use serde_json::json;

    fn console() -> Console {
        Console::new(RpcClient::new("http://localhost:8545").unwrap())
    }

    /// Push a completed result into the console by hand, skipping the network
    fn seed_result(console: &mut Console, method: &str, result: serde_json::Value) -> String {
        let id = console.session.begin_request(method);
        console.session.complete_request(
            &id,
            RpcResponse {
                result: Some(result),
                ..RpcResponse::default()
            },
        );
        id
    }

    fn run(console: &mut Console, line: &str) -> String {
        let mut out = Vec::new();
        console.handle_line(line, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_methods_listing() {
        let mut console = console();
        let out = run(&mut console, "methods");
        assert!(out.contains("eth_blockNumber"));
        assert!(out.contains("net_version"));
    }

    #[test]
    fn test_use_and_form() {
        let mut console = console();
        let out = run(&mut console, "use eth_getBalance");
        assert!(out.contains("Selected eth_getBalance"));
        assert!(out.contains("address"));
        assert!(out.contains("\"latest\""));
    }

    #[test]
    fn test_use_unknown_method() {
        let mut console = console();
        let out = run(&mut console, "use eth_bogus");
        assert!(out.contains("Unknown method"));
    }

    #[test]
    fn test_set_field_and_validation_message() {
        let mut console = console();
        run(&mut console, "use eth_getBalance");
        let out = run(&mut console, "set address 0xabc");
        assert!(out.contains("address"));

        // Missing required field reported, console keeps going
        run(&mut console, "set address ");
        let out = run(&mut console, "call");
        assert!(out.contains("Address is required"));
    }

    #[test]
    fn test_show_mode_and_copy_flow() {
        let mut console = console();
        let id = seed_result(
            &mut console,
            "eth_getBlockByNumber",
            json!({ "number": "0x10", "miner": "0xabc" }),
        );

        let out = run(&mut console, &format!("show {}", id));
        assert!(out.contains("hex mode"));
        assert!(out.contains("\"0x10\""));

        let out = run(&mut console, &format!("mode {} readable", id));
        assert!(out.contains("readable mode"));
        assert!(out.contains("\"number\": 16"));

        let out = run(&mut console, &format!("copy {} 0", id));
        assert!(out.contains("16"));
        assert!(out.contains("Copied!"));

        // Acknowledgment shows up on the next render
        let out = run(&mut console, &format!("show {}", id));
        assert!(out.contains("Copied!"));
    }

    #[test]
    fn test_copy_out_of_range() {
        let mut console = console();
        let id = seed_result(&mut console, "eth_blockNumber", json!("0x10"));
        let out = run(&mut console, &format!("copy {} 5", id));
        assert!(out.contains("no quick-access value"));
    }

    #[test]
    fn test_rm_discards_result() {
        let mut console = console();
        let id = seed_result(&mut console, "eth_blockNumber", json!("0x10"));
        let out = run(&mut console, &format!("rm {}", id));
        assert!(out.contains("Removed"));
        let out = run(&mut console, "results");
        assert!(out.contains("No results yet"));
    }

    #[test]
    fn test_quit_stops_loop() {
        let mut console = console();
        let mut out = Vec::new();
        assert!(!console.handle_line("quit", &mut out).unwrap());
        assert!(console.handle_line("", &mut out).unwrap());
    }

    #[test]
    fn test_unknown_command() {
        let mut console = console();
        let out = run(&mut console, "frobnicate");
        assert!(out.contains("Unknown command"));
    }
}
