use crate::registry::ALL_METHODS;
use std::io::Write;

/// List the method registry
///
/// With `show_details`, each method's required fields are printed with
/// their labels and example values.
pub fn list_methods(show_details: bool, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "Supported RPC methods ({}):", ALL_METHODS.len())?;

    for method in ALL_METHODS {
        if !show_details {
            writeln!(out, "  {}", method.name())?;
            continue;
        }

        writeln!(out, "  {}", method.name())?;
        if method.fields().is_empty() {
            writeln!(out, "    (no parameters)")?;
        }
        for field in method.fields() {
            let hint = if let Some(options) = field.options() {
                format!("one of: {}", options.join(", "))
            } else if let Some(placeholder) = field.placeholder() {
                format!("e.g. {}", placeholder)
            } else {
                String::new()
            };

            if hint.is_empty() {
                writeln!(out, "    --{:<18} {}", field.key(), field.label())?;
            } else {
                writeln!(out, "    --{:<18} {} ({})", field.key(), field.label(), hint)?;
            }
        }
    }

    if !show_details {
        writeln!(out)?;
        writeln!(out, "Use --show for per-method parameters")?;
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("eth-rpc-probe v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Form-driven debugger for Ethereum-compatible JSON-RPC endpoints.");
}
