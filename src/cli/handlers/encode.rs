use crate::cli::{
    args::EncodeArgs,
    commands::{drive, read_input, write_output},
    config::checked_suspend,
};
use float12::{CodecConfig, Float12Encoder, Uint12Encoder, parse_floats, parse_uint12s, wrap_lines};

pub fn handle(args: EncodeArgs, config: &CodecConfig) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref())?;
    let text = String::from_utf8(input).map_err(|_| "Input must be valid UTF-8 text")?;

    let suspend = checked_suspend(args.suspend, "--suspend")?
        .unwrap_or(config.streaming.suspend_element_count);
    let width = args.wrap.unwrap_or(config.output.line_width);

    let encoded = if args.uint12 {
        let values = parse_uint12s(&text)?;
        log::info!("encoding {} uint12 values", values.len());
        let mut encoder = Uint12Encoder::new(&values).with_suspend_count(suspend);
        drive("uint12 encode", || encoder.step())
    } else {
        let values = parse_floats(&text)?;
        log::info!("encoding {} float12 values", values.len());
        let mut encoder = Float12Encoder::new(&values).with_suspend_count(suspend);
        drive("float12 encode", || encoder.step())
    };

    let mut output = wrap_lines(&encoded, width);
    output.push(b'\n');
    write_output(args.output.as_ref(), &output)?;
    Ok(())
}
