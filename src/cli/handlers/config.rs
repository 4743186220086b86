use crate::cli::args::ConfigArgs;
use float12::CodecConfig;

pub fn handle(args: ConfigArgs, config: &CodecConfig) -> Result<(), Box<dyn std::error::Error>> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
