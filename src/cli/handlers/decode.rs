use crate::cli::{
    args::DecodeArgs,
    commands::{drive, read_input, write_output},
    config::checked_suspend,
};
use float12::{CodecConfig, Float12Decoder, Uint12Decoder};
use std::fmt::Write;

pub fn handle(args: DecodeArgs, config: &CodecConfig) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref())?;

    let suspend = checked_suspend(args.suspend, "--suspend")?
        .unwrap_or(config.streaming.suspend_byte_count);
    let skip_lines = args
        .skip_lines
        .unwrap_or(config.streaming.skip_line_count);
    let precision = args.precision.or(config.output.precision);

    let rendered = if args.uint12 {
        let mut decoder = Uint12Decoder::new(&input)
            .with_skip_lines(skip_lines)
            .with_suspend_count(suspend);
        let values = drive("uint12 decode", || decoder.step());
        log::info!("decoded {} uint12 values", values.len());
        if args.json {
            serde_json::to_string(&values)?
        } else {
            render_lines(values.iter().map(|v| v.to_string()))
        }
    } else {
        let mut decoder = Float12Decoder::new(&input)
            .with_skip_lines(skip_lines)
            .with_suspend_count(suspend);
        let values = drive("float12 decode", || decoder.step());
        log::info!("decoded {} float12 values", values.len());
        if args.json {
            serde_json::to_string(&values)?
        } else {
            render_lines(values.iter().map(|v| format_float(*v, precision)))
        }
    };

    let mut output = rendered.into_bytes();
    if !output.is_empty() && !output.ends_with(b"\n") {
        output.push(b'\n');
    }
    write_output(args.output.as_ref(), &output)?;
    Ok(())
}

fn format_float(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(places) => format!("{:.*}", places, value),
        None => value.to_string(),
    }
}

fn render_lines(values: impl Iterator<Item = String>) -> String {
    let mut out = String::new();
    for value in values {
        // writing to a String cannot fail
        let _ = writeln!(out, "{}", value);
    }
    out
}
