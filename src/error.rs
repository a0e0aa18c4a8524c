//! Error reporting.
//!
//! Errors are [`anyhow::Error`]; this module only renders them for the user.

pub use anyhow::{Error, Result};

/// Print the cause chain of `error` on stderr. Returns the printed message.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, cause)| msg.push_str(&format!("└> {} - {}\n", index, cause)));
  eprint!("{}", msg);
  msg
}

#[cfg(test)]
mod tests {
  use {super::*, anyhow::Context};

  #[test] fn display_chain() {
    let error = std::fs::read("/nonexistent/complex_region")
      .context("failed to read input")
      .unwrap_err();
    let msg = display(&error);
    assert!(msg.starts_with("Error:\n└> 0 - failed to read input\n└> 1 - "));
    assert_eq!(msg.lines().count(), 3);
  }
}
