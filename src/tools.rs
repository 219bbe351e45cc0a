//! Subprocess boundary for the external text producers.
//!
//! The disassembler and symbol-table tool are collaborators, not part of
//! the analysis core: each is invoked synchronously, its stdout captured as
//! UTF-8 text, and everything downstream is deterministic text processing.
//! A missing executable, a non-zero exit, or non-UTF-8 output is a fatal
//! [`Error::InputTool`] that aborts the run before any partial graph is
//! produced.

use std::path::Path;
use std::process::Command;

use crate::{Error, Result};

/// Runs `{triple}objdump -d OBJ` and returns the disassembly listing.
///
/// `triple` is a toolchain platform prefix such as `aarch64-linux-gnu-`;
/// pass an empty string for the host toolchain.
///
/// # Errors
///
/// Returns [`Error::InputTool`] if the tool cannot be spawned, exits with a
/// non-zero status, or produces output that is not valid UTF-8.
pub fn disassembly(obj: &Path, triple: &str) -> Result<String> {
    run_tool(&format!("{triple}objdump"), &["-d"], obj)
}

/// Runs `{triple}nm -S OBJ` and returns the address/size/type/name rows.
///
/// # Errors
///
/// Returns [`Error::InputTool`] if the tool cannot be spawned, exits with a
/// non-zero status, or produces output that is not valid UTF-8.
pub fn symbol_table(obj: &Path, triple: &str) -> Result<String> {
    run_tool(&format!("{triple}nm"), &["-S"], obj)
}

fn run_tool(tool: &str, args: &[&str], obj: &Path) -> Result<String> {
    log::debug!("running {} {} {}", tool, args.join(" "), obj.display());

    let output = Command::new(tool)
        .args(args)
        .arg(obj)
        .output()
        .map_err(|err| Error::InputTool {
            tool: tool.to_string(),
            message: format!("failed to spawn: {err}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::InputTool {
            tool: tool.to_string(),
            message: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    String::from_utf8(output.stdout).map_err(|err| Error::InputTool {
        tool: tool.to_string(),
        message: format!("output is not valid UTF-8: {err}"),
    })
}
