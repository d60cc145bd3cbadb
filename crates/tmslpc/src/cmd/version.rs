use tmslpc_chip::SUPPORTED_CHIPS;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};

pub fn run(args: VersionArgs) -> CliResult<i32> {
    if !args.extended {
        println!("tmslpc {}", env!("CARGO_PKG_VERSION"));
        return Ok(SUCCESS);
    }

    println!("name: tmslpc");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!(
        "target: {}",
        option_env!("TMSLPC_BUILD_TARGET").unwrap_or("unknown")
    );
    println!(
        "profile: {}",
        option_env!("TMSLPC_BUILD_PROFILE").unwrap_or("unknown")
    );
    println!("chips: {}", SUPPORTED_CHIPS.join(", "));
    println!(
        "features: serde={}, cli=true",
        cfg!(feature = "serde")
    );

    Ok(SUCCESS)
}
