//! printf-style message templates.
//!
//! Messages are written as `"Info Log : %s"` with positional arguments.
//! Width, precision and the `+`, `-` and `0` flags follow printf. Rendering
//! never fails: a verb without an argument, surplus arguments and a dangling
//! `%` are written into the output in place, so the record still reaches the
//! sink.

use std::fmt::{Display, Write};
use std::iter;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// One directive: `%`, flags, width, precision, verb (empty when missing).
    static ref DIRECTIVE: Regex =
        Regex::new(r"%([+\-# 0]*)(\d*)(?:\.(\d*))?([A-Za-z%]?)").unwrap();
}

/// Flags, width and precision of one directive.
#[derive(Debug, Default, Clone, Copy)]
struct Spec {
    plus: bool,
    left: bool,
    zero: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

impl Spec {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let flags = caps.get(1).map_or("", |m| m.as_str());
        Self {
            plus: flags.contains('+'),
            left: flags.contains('-'),
            zero: flags.contains('0'),
            width: caps.get(2).and_then(|m| m.as_str().parse().ok()),
            // `%.f` means precision 0.
            precision: caps.get(3).map(|m| m.as_str().parse().unwrap_or(0)),
        }
    }

    /// Pad `body` to the width. `-` wins over `0`; zeros go after a sign.
    fn pad(&self, out: &mut String, body: &str) {
        let fill = self
            .width
            .map_or(0, |w| w.saturating_sub(body.chars().count()));

        if fill == 0 {
            out.push_str(body);
        } else if self.left {
            out.push_str(body);
            out.extend(iter::repeat(' ').take(fill));
        } else if self.zero {
            let (sign, digits) = match body.as_bytes().first() {
                Some(b'-') | Some(b'+') => body.split_at(1),
                _ => ("", body),
            };
            out.push_str(sign);
            out.extend(iter::repeat('0').take(fill));
            out.push_str(digits);
        } else {
            out.extend(iter::repeat(' ').take(fill));
            out.push_str(body);
        }
    }
}

/// Render `template`, substituting `args` in order.
pub fn render(template: &str, args: &[&dyn Display]) -> String {
    if args.is_empty() && !template.contains('%') {
        return template.to_string();
    }

    let mut out = String::with_capacity(template.len() + 16);
    let mut last = 0;
    let mut next_arg = 0;

    for caps in DIRECTIVE.captures_iter(template) {
        let Some(directive) = caps.get(0) else {
            continue;
        };
        out.push_str(&template[last..directive.start()]);
        last = directive.end();

        let verb = caps.get(4).map(|m| m.as_str()).unwrap_or("");
        match verb {
            "%" => out.push('%'),
            "" => out.push_str("%!(NOVERB)"),
            verb => match args.get(next_arg) {
                Some(arg) => {
                    next_arg += 1;
                    let spec = Spec::from_captures(&caps);
                    spec.pad(&mut out, &format_verb(verb, *arg, &spec));
                }
                None => {
                    let _ = write!(out, "%!{}(MISSING)", verb);
                }
            },
        }
    }
    out.push_str(&template[last..]);

    if next_arg < args.len() {
        out.push_str("%!(EXTRA ");
        for (i, arg) in args[next_arg..].iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            let _ = write!(out, "{}", arg);
        }
        out.push(')');
    }

    out
}

fn format_verb(verb: &str, arg: &dyn Display, spec: &Spec) -> String {
    match verb {
        "v" | "s" | "t" => with_precision(arg, spec),
        "d" | "i" | "f" | "g" | "e" => {
            let body = with_precision(arg, spec);
            if spec.plus && !body.starts_with('-') && body.parse::<f64>().is_ok() {
                format!("+{}", body)
            } else {
                body
            }
        }
        "q" => format!("{:?}", with_precision(arg, spec)),
        "x" | "X" => {
            let text = arg.to_string();
            let upper = verb == "X";
            match text.parse::<i128>() {
                Ok(n) => {
                    let sign = if n < 0 {
                        "-"
                    } else if spec.plus {
                        "+"
                    } else {
                        ""
                    };
                    if upper {
                        format!("{}{:X}", sign, n.unsigned_abs())
                    } else {
                        format!("{}{:x}", sign, n.unsigned_abs())
                    }
                }
                Err(_) => text
                    .bytes()
                    .map(|byte| {
                        if upper {
                            format!("{:02X}", byte)
                        } else {
                            format!("{:02x}", byte)
                        }
                    })
                    .collect(),
            }
        }
        other => format!("%!{}({})", other, arg),
    }
}

/// Precision is handed to the argument's `Display`: floats round, strings
/// truncate, integers ignore it.
fn with_precision(arg: &dyn Display, spec: &Spec) -> String {
    match spec.precision {
        Some(precision) => format!("{:.*}", precision, arg),
        None => arg.to_string(),
    }
}
