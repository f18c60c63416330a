use std::io::Cursor;

use crate::cmd::decode::read_input;
use crate::cmd::InspectArgs;
use crate::exit::{wire_error, CliResult, SUCCESS};
use crate::output::{print_payload, OutputFormat};

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = read_input(&args.input)?;
    let limit = args.count.unwrap_or(usize::MAX);

    let mut cursor = Cursor::new(wire.as_slice());
    let mut decoded = 0usize;

    while decoded < limit && cursor.position() < wire.len() as u64 {
        let payload = courier_proto::decode(&mut cursor)
            .map_err(|err| wire_error(&format!("decode failed at payload {decoded}"), err))?;
        print_payload(&payload, format);
        decoded += 1;
    }

    tracing::debug!(decoded, "inspect finished");
    Ok(SUCCESS)
}
