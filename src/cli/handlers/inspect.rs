use crate::cli::args::InspectArgs;
use ::float12::{InputError, float12, uint12};
use serde::Serialize;

/// How one number is laid out on the wire.
#[derive(Debug, Serialize)]
struct Inspection {
    input: f64,
    symbols: String,
    bits: u16,
    sign: u8,
    exponent: i32,
    stored_exponent: u16,
    fraction: u16,
    decoded: f64,
}

impl Inspection {
    fn of(input: f64) -> Self {
        let parts = float12::parts_of(input);
        let bits = parts.to_bits();
        let symbols = uint12::encode(bits);
        Inspection {
            input,
            symbols: symbols.iter().map(|&b| b as char).collect(),
            bits,
            sign: parts.negative as u8,
            exponent: parts.exponent,
            stored_exponent: parts.stored_exponent(),
            fraction: parts.fraction,
            decoded: float12::from_bits(bits),
        }
    }
}

pub fn handle(args: InspectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let inspections = args
        .values
        .iter()
        .map(|token| {
            token
                .parse::<f64>()
                .map(Inspection::of)
                .map_err(|_| InputError::InvalidNumber {
                    token: token.clone(),
                    line: 1,
                    expected: "number",
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&inspections)?);
        return Ok(());
    }

    for item in &inspections {
        println!(
            "{}  {}  {:#05x}  sign={} exponent={} (stored {}) fraction={}  => {}",
            item.input,
            item.symbols,
            item.bits,
            item.sign,
            item.exponent,
            item.stored_exponent,
            item.fraction,
            item.decoded
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_known_value() {
        let item = Inspection::of(-8.0);
        assert_eq!(item.symbols, "xg");
        assert_eq!(item.bits, 0xC60);
        assert_eq!(item.sign, 1);
        assert_eq!(item.exponent, 3);
        assert_eq!(item.stored_exponent, 35);
        assert_eq!(item.fraction, 0);
        assert_eq!(item.decoded, -8.0);
    }

    #[test]
    fn test_inspect_lossy_value() {
        let item = Inspection::of(100.0);
        // seven significant bits: exact only when the dropped bit is zero
        assert_eq!(item.decoded, 100.0);
        let item = Inspection::of(101.0);
        assert_eq!(item.decoded, 100.0);
    }
}
