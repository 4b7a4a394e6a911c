//! Placeholder substitution for message templates.
//!
//! A template is plain text with zero or more `{}` placeholders. Arguments fill
//! them left to right. Formatting never fails:
//! - placeholders left over once the arguments run out stay in the output as `{}`;
//! - arguments left over once the placeholders run out are dropped.

use std::fmt::Write;

use crate::log::log_arg::LogArg;

/// The two-character marker replaced by the next argument.
pub const PLACEHOLDER: &str = "{}";

/// Splices `args` into `template`.
#[must_use]
pub fn format_message(template: &str, args: &[LogArg]) -> String {
    let mut out = String::with_capacity(template.len() + args.len() * 8);
    let mut rest = template;

    for arg in args {
        let Some(pos) = rest.find(PLACEHOLDER) else {
            break;
        };
        out.push_str(&rest[..pos]);
        // Writing into a String cannot fail.
        let _ = write!(out, "{arg}");
        rest = &rest[pos + PLACEHOLDER.len()..];
    }

    out.push_str(rest);
    out
}
