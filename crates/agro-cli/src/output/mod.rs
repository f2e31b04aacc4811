use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::ui;

pub mod table;
pub mod text;

/// Render a response: its text view for `table`, serialized JSON otherwise.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(text(value)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a response in the requested format.
///
/// Write failures (a closed pipe, for instance) come back as errors.
pub fn output<T: Serialize>(
    value: &T,
    format: OutputFormat,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    let rendered = render(value, format, text)?;
    emit(&mut io::stdout().lock(), &rendered)
}

#[derive(Debug, Serialize)]
struct Notice<'a> {
    message: &'a str,
}

/// Print an informational message, such as a lookup miss.
pub fn notice(message: &str, format: OutputFormat) -> anyhow::Result<()> {
    output(&Notice { message }, format, |notice| notice.message.to_string())
}

pub(crate) fn table_options() -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        color: prefs.table_color,
    }
}

fn emit<W: Write>(out: &mut W, rendered: &str) -> anyhow::Result<()> {
    writeln!(out, "{rendered}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;
    use serde::Serialize;

    use super::{emit, render};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        code: &'static str,
        power_w: f64,
        operational: bool,
    }

    fn example() -> Example {
        Example {
            code: "UB-001",
            power_w: 750.0,
            operational: true,
        }
    }

    fn text_view(example: &Example) -> String {
        format!("{} consume {:.2} W", example.code, example.power_w)
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&example(), OutputFormat::Json, text_view).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["code"], "UB-001");
        assert_eq!(parsed["power_w"], 750.0);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&example(), OutputFormat::Raw, text_view).expect("raw render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["operational"], true);
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_uses_text_view() {
        let out =
            render(&example(), OutputFormat::Table, text_view).expect("table render should work");
        assert_eq!(out, "UB-001 consume 750.00 W");
    }

    struct ClosedPipe;

    impl io::Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn closed_stdout_is_an_error_not_a_panic() {
        let error = emit(&mut ClosedPipe, "Total: 12 equipos").unwrap_err();
        let io_error = error.downcast_ref::<io::Error>().expect("io error");
        assert_eq!(io_error.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn emit_appends_newline() {
        let mut buffer = Vec::new();
        emit(&mut buffer, "hola").unwrap();
        assert_eq!(buffer, b"hola\n");
    }
}
