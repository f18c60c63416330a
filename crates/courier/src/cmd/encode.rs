use std::fs;

use courier_proto::{ErrorText, Message, Payload};

use crate::cmd::EncodeArgs;
use crate::exit::{io_error, wire_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{print_raw, OutputFormat};

pub fn run(args: EncodeArgs, _format: OutputFormat) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;

    let mut wire = Vec::new();
    courier_proto::encode(&mut wire, &payload)
        .map_err(|err| wire_error("encode failed", err))?;

    tracing::debug!(
        bytes = wire.len(),
        tag = payload.tag().as_u8(),
        "payload encoded"
    );

    match &args.output {
        Some(path) => fs::write(path, &wire).map_err(|err| {
            io_error(&format!("failed writing {}", path.display()), err)
        })?,
        None => print_raw(&wire),
    }

    Ok(SUCCESS)
}

fn resolve_payload(args: &EncodeArgs) -> CliResult<Payload> {
    if let Some(text) = &args.text {
        return Ok(Payload::Message(Message::new(
            text.clone(),
            args.to.clone().unwrap_or_default(),
            args.from.clone().unwrap_or_default(),
        )));
    }
    if let Some(error) = &args.error {
        return Ok(Payload::Error(ErrorText::new(error.clone())));
    }
    if args.heartbeat {
        return Ok(Payload::Heartbeat);
    }
    Err(CliError::new(
        USAGE,
        "one of --text, --error or --heartbeat is required",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> EncodeArgs {
        EncodeArgs {
            text: None,
            to: None,
            from: None,
            error: None,
            heartbeat: false,
            output: None,
        }
    }

    #[test]
    fn resolves_message_payload() {
        let payload = resolve_payload(&EncodeArgs {
            text: Some("hi".into()),
            to: Some("a".into()),
            from: Some("b".into()),
            ..args()
        })
        .unwrap();
        assert_eq!(payload, Payload::Message(Message::new("hi", "a", "b")));
    }

    #[test]
    fn message_addressing_defaults_to_empty() {
        let payload = resolve_payload(&EncodeArgs {
            text: Some("hi".into()),
            ..args()
        })
        .unwrap();
        assert_eq!(payload, Payload::Message(Message::new("hi", "", "")));
    }

    #[test]
    fn resolves_error_and_heartbeat_payloads() {
        let error = resolve_payload(&EncodeArgs {
            error: Some("boom".into()),
            ..args()
        })
        .unwrap();
        assert_eq!(error, Payload::Error(ErrorText::new("boom")));

        let beat = resolve_payload(&EncodeArgs {
            heartbeat: true,
            ..args()
        })
        .unwrap();
        assert_eq!(beat, Payload::Heartbeat);
    }

    #[test]
    fn missing_payload_selection_is_a_usage_error() {
        let err = resolve_payload(&args()).unwrap_err();
        assert_eq!(err.code, USAGE);
    }
}
