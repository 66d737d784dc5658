//! Device line formatter.
//!
//! Templates use printf-style conversions. Arguments are consumed strictly in
//! order: the 1-based device index first, then the device friendly name.
//!
//! Supported: `%d %i %u %x %X` (integers), `%s %S` with optional `l`/`w`/`h`
//! length modifiers (strings), `%%`, flags `- 0 + space #`, field width and
//! precision. Templates are not validated ahead of time; a malformed template
//! fails when it is rendered.

use thiserror::Error;

/// Template used when none is configured or given on the command line.
pub const DEFAULT_DEVICE_FORMAT: &str = "Audio Device %d: %s";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error(
        "conversion #{position} has no argument; only the device index and friendly name are available"
    )]
    MissingArgument { position: usize },

    #[error("unsupported conversion '%{0}'")]
    UnsupportedConversion(char),

    #[error("template ends with an incomplete conversion")]
    Incomplete,

    #[error("conversion '%{conversion}' (#{position}) expects an integer but receives the device name")]
    TypeMismatch { conversion: char, position: usize },
}

#[derive(Clone, Copy)]
enum Arg<'a> {
    Int(usize),
    Str(&'a str),
}

#[derive(Default)]
struct Spec {
    left_align: bool,
    zero_pad: bool,
    plus: bool,
    space: bool,
    alternate: bool,
    width: Option<usize>,
    precision: Option<usize>,
}

/// Render one device line.
pub fn render(template: &str, index: usize, name: &str) -> Result<String, TemplateError> {
    let args = [Arg::Int(index), Arg::Str(name)];
    let mut next_arg = 0usize;
    let mut out = String::with_capacity(template.len() + name.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        if chars.peek() == Some(&'%') {
            chars.next();
            out.push('%');
            continue;
        }

        let mut spec = Spec::default();
        while let Some(&flag) = chars.peek() {
            match flag {
                '-' => spec.left_align = true,
                '0' => spec.zero_pad = true,
                '+' => spec.plus = true,
                ' ' => spec.space = true,
                '#' => spec.alternate = true,
                _ => break,
            }
            chars.next();
        }
        spec.width = take_number(&mut chars);
        if chars.peek() == Some(&'.') {
            chars.next();
            spec.precision = Some(take_number(&mut chars).unwrap_or(0));
        }
        while matches!(chars.peek(), Some('l' | 'w' | 'h')) {
            chars.next();
        }

        let conversion = chars.next().ok_or(TemplateError::Incomplete)?;
        let is_integer = match conversion {
            'd' | 'i' | 'u' | 'x' | 'X' => true,
            's' | 'S' => false,
            other => return Err(TemplateError::UnsupportedConversion(other)),
        };

        next_arg += 1;
        let arg = *args
            .get(next_arg - 1)
            .ok_or(TemplateError::MissingArgument { position: next_arg })?;

        let (prefix, body) = if is_integer {
            let value = match arg {
                Arg::Int(value) => value,
                Arg::Str(_) => {
                    return Err(TemplateError::TypeMismatch {
                        conversion,
                        position: next_arg,
                    })
                }
            };
            format_integer(value, conversion, &spec)
        } else {
            let text = match arg {
                Arg::Int(value) => value.to_string(),
                Arg::Str(text) => text.to_string(),
            };
            let text = match spec.precision {
                Some(max) => text.chars().take(max).collect(),
                None => text,
            };
            ("", text)
        };

        pad(&mut out, prefix, &body, &spec, is_integer);
    }

    Ok(out)
}

fn take_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
    let mut value: Option<usize> = None;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        value = Some(
            value
                .unwrap_or(0)
                .saturating_mul(10)
                .saturating_add(digit as usize),
        );
    }
    value
}

fn format_integer(value: usize, conversion: char, spec: &Spec) -> (&'static str, String) {
    let mut digits = match conversion {
        'x' => format!("{:x}", value),
        'X' => format!("{:X}", value),
        _ => value.to_string(),
    };
    if let Some(min_digits) = spec.precision {
        if digits.len() < min_digits {
            digits = format!("{}{}", "0".repeat(min_digits - digits.len()), digits);
        }
    }

    let prefix = match conversion {
        'x' if spec.alternate && value != 0 => "0x",
        'X' if spec.alternate && value != 0 => "0X",
        'd' | 'i' if spec.plus => "+",
        'd' | 'i' if spec.space => " ",
        _ => "",
    };
    (prefix, digits)
}

fn pad(out: &mut String, prefix: &str, body: &str, spec: &Spec, is_integer: bool) {
    let len = prefix.chars().count() + body.chars().count();
    let fill = spec.width.unwrap_or(0).saturating_sub(len);
    if spec.left_align {
        out.push_str(prefix);
        out.push_str(body);
        out.extend(std::iter::repeat(' ').take(fill));
    } else if spec.zero_pad && is_integer && spec.precision.is_none() {
        out.push_str(prefix);
        out.extend(std::iter::repeat('0').take(fill));
        out.push_str(body);
    } else {
        out.extend(std::iter::repeat(' ').take(fill));
        out.push_str(prefix);
        out.push_str(body);
    }
}
