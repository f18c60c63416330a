use std::io::{Cursor, Read};
use std::path::PathBuf;

use crate::cmd::DecodeArgs;
use crate::exit::{io_error, wire_error, CliResult, SUCCESS};
use crate::output::{print_payload, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = read_input(&args.input)?;

    let mut cursor = Cursor::new(wire.as_slice());
    let payload =
        courier_proto::decode(&mut cursor).map_err(|err| wire_error("decode failed", err))?;

    let remaining = wire.len() as u64 - cursor.position();
    if remaining > 0 {
        tracing::warn!(remaining, "trailing bytes after payload");
    }

    print_payload(&payload, format);
    Ok(SUCCESS)
}

pub(crate) fn read_input(input: &Option<PathBuf>) -> CliResult<Vec<u8>> {
    match input {
        Some(path) => std::fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err)),
        None => {
            let mut wire = Vec::new();
            std::io::stdin()
                .read_to_end(&mut wire)
                .map_err(|err| io_error("failed reading stdin", err))?;
            Ok(wire)
        }
    }
}
