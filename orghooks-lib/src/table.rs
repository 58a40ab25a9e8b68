//! csv tables of organization webhooks. rows are read by position, the
//! header row is only there for people opening the file.

use std::io::{Read, Write};

use chrono::SecondsFormat;

use crate::hooks::{Config, CreatedWebhook, Webhook};

pub const HEADER: [&str; 11] = [
    "Type",
    "ID",
    "Name",
    "Active",
    "Events",
    "Config_ContentType",
    "Config_InsecureSSL",
    "Config_Secret",
    "Config_URL",
    "Updated_At",
    "Created_At",
];

pub const EVENT_SEPARATOR: &str = ";";

/// rows shorter than this cannot fill a [`CreatedWebhook`]
pub const MIN_COLUMNS: usize = 9;

const NAME: usize = 2;
const ACTIVE: usize = 3;
const EVENTS: usize = 4;
const CONTENT_TYPE: usize = 5;
const INSECURE_SSL: usize = 6;
const SECRET: usize = 7;
const URL: usize = 8;

pub fn parse_bool(given: &str) -> Option<bool> {
    match given {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None
    }
}

/// `None` for rows with fewer than [`MIN_COLUMNS`] columns
pub fn decode_row<S>(row: &[S]) -> Option<CreatedWebhook>
where
    S: AsRef<str>
{
    if row.len() < MIN_COLUMNS {
        return None;
    }

    let col = |index: usize| row[index].as_ref();

    Some(CreatedWebhook {
        name: col(NAME).to_owned(),
        active: parse_bool(col(ACTIVE)).unwrap_or(false),
        // an empty column still produces one empty event
        events: col(EVENTS)
            .split(EVENT_SEPARATOR)
            .map(|v| v.to_owned())
            .collect(),
        config: Config {
            content_type: col(CONTENT_TYPE).to_owned(),
            insecure_ssl: col(INSECURE_SSL).to_owned(),
            secret: col(SECRET).to_owned(),
            url: col(URL).to_owned(),
        }
    })
}

pub fn decode_rows<R, S>(rows: &[R]) -> Vec<CreatedWebhook>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    let mut rtn = Vec::with_capacity(rows.len().saturating_sub(1));

    for (index, row) in rows.iter().enumerate().skip(1) {
        match decode_row(row.as_ref()) {
            Some(hook) => rtn.push(hook),
            None => {
                tracing::debug!(
                    "skipping row {} with {} columns",
                    index + 1,
                    row.as_ref().len()
                );
            }
        }
    }

    rtn
}

/// only malformed csv or io failures are errors, short rows are skipped
pub fn read_created<R>(reader: R) -> Result<Vec<CreatedWebhook>, csv::Error>
where
    R: Read
{
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let record = result?;

        rows.push(record.iter()
            .map(|v| v.to_owned())
            .collect::<Vec<String>>());
    }

    Ok(decode_rows(&rows))
}

pub fn report_row(hook: &Webhook) -> [String; 11] {
    [
        hook.hook_type.clone(),
        hook.id.to_string(),
        hook.name.clone(),
        hook.active.to_string(),
        hook.events.join(EVENT_SEPARATOR),
        hook.config.content_type.clone(),
        hook.config.insecure_ssl.clone(),
        hook.config.secret.clone(),
        hook.config.url.clone(),
        hook.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        hook.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    ]
}

/// writes a report that [`read_created`] is able to load back in.
pub fn write_report<W>(writer: W, hooks: &[Webhook]) -> Result<(), csv::Error>
where
    W: Write
{
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(HEADER)?;

    for hook in hooks {
        csv_writer.write_record(report_row(hook))?;
    }

    csv_writer.flush()?;

    Ok(())
}
