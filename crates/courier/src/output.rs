use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use courier_proto::{Payload, Tag};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct PayloadOutput<'a> {
    kind: &'a str,
    tag: u8,
    content: String,
    content_size: usize,
}

pub fn print_payload(payload: &Payload, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = PayloadOutput {
                kind: kind_name(payload.tag()),
                tag: payload.tag().as_u8(),
                content: payload.to_string(),
                content_size: payload.to_bytes().len(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["KIND", "TAG", "SIZE", "CONTENT"])
                .add_row(vec![
                    kind_name(payload.tag()).to_string(),
                    payload.tag().as_u8().to_string(),
                    payload.to_bytes().len().to_string(),
                    payload.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "kind={} tag={} size={} content={}",
                kind_name(payload.tag()),
                payload.tag().as_u8(),
                payload.to_bytes().len(),
                payload
            );
        }
        OutputFormat::Raw => {
            print_raw(&payload.to_bytes());
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

pub fn kind_name(tag: Tag) -> &'static str {
    match tag {
        Tag::Message => "MESSAGE",
        Tag::Heartbeat => "HEARTBEAT",
        Tag::Error => "ERROR",
    }
}
