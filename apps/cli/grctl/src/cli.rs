//! Command-line surface: the clap command tree and its translation into
//! typed requests.

use crate::error::GrctlError;

use models::{
    CampaignReference, Contact, CreateContactRequest, CustomFieldValue, DeleteContactRequest,
    GetContactRequest, GetContactsRequest, UpdateContactCustomFieldsRequest,
    UpdateContactRequest,
};

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 100;

const CONFIG_DIR_NAME: &str = "grctl";

/// Flags shared by every subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalOptions {
    pub config_dir: PathBuf,
    pub log_file: Option<PathBuf>,
    pub verbosity: u8,
}

/// One parsed subcommand, ready to hand to the client.
#[derive(Debug, Clone, PartialEq)]
pub enum Invocation {
    Create(CreateContactRequest),
    List(GetContactsRequest),
    Get(GetContactRequest),
    Update(UpdateContactRequest),
    CustomFields(UpdateContactCustomFieldsRequest),
    Delete(DeleteContactRequest),
}

pub fn command() -> Command {
    Command::new("grctl")
        .about("Manage GetResponse contacts from the command line")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config_dir")
                .help("Directory holding getresponse.json")
                .long("config-dir")
                .global(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("log_file")
                .help("Also write logs to this file")
                .long("log-file")
                .global(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .help("More output per occurrence (-v info, -vv debug, -vvv trace)")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count),
        )
        .subcommand(
            Command::new("create")
                .about("Add a contact to a campaign")
                .arg(Arg::new("email").long("email").required(true))
                .arg(Arg::new("campaign").long("campaign").required(true))
                .arg(Arg::new("name").long("name"))
                .arg(
                    Arg::new("day_of_cycle")
                        .long("day-of-cycle")
                        .value_parser(value_parser!(i32)),
                )
                .arg(Arg::new("ip_address").long("ip-address"))
                .arg(custom_field_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List contacts")
                .arg(
                    Arg::new("query")
                        .help("Filter as field=value")
                        .long("query")
                        .action(ArgAction::Append),
                )
                .arg(
                    Arg::new("sort")
                        .help("Sort as field=asc|desc")
                        .long("sort")
                        .action(ArgAction::Append),
                )
                .arg(fields_arg())
                .arg(
                    Arg::new("page")
                        .long("page")
                        .value_parser(value_parser!(u32))
                        .default_value("1"),
                )
                .arg(
                    Arg::new("per_page")
                        .long("per-page")
                        .value_parser(value_parser!(u32))
                        .default_value("100"),
                )
                .arg(Arg::new("additional_flags").long("additional-flags")),
        )
        .subcommand(
            Command::new("get")
                .about("Fetch one contact")
                .arg(id_arg())
                .arg(fields_arg()),
        )
        .subcommand(
            Command::new("update")
                .about("Update the given fields of a contact")
                .arg(id_arg())
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("email").long("email"))
                .arg(Arg::new("note").long("note"))
                .arg(Arg::new("campaign").long("campaign"))
                .arg(
                    Arg::new("day_of_cycle")
                        .long("day-of-cycle")
                        .value_parser(value_parser!(i32)),
                )
                .arg(custom_field_arg()),
        )
        .subcommand(
            Command::new("custom-fields")
                .about("Upsert custom field values of a contact")
                .arg(id_arg())
                .arg(
                    Arg::new("values")
                        .help("Values as customFieldId=value; repeat an id for multi-select")
                        .required(true)
                        .num_args(1..)
                        .action(ArgAction::Append),
                ),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a contact")
                .arg(id_arg())
                .arg(Arg::new("message_id").long("message-id"))
                .arg(Arg::new("ip_address").long("ip-address")),
        )
}

fn id_arg() -> Arg {
    Arg::new("id").help("Contact id").required(true)
}

fn fields_arg() -> Arg {
    Arg::new("fields")
        .help("Comma-separated fields to return")
        .long("fields")
        .value_delimiter(',')
        .action(ArgAction::Append)
}

fn custom_field_arg() -> Arg {
    Arg::new("field")
        .help("Custom field as customFieldId=value")
        .long("field")
        .action(ArgAction::Append)
}

/// Translate parsed arguments into options and a typed request.
pub fn parse(matches: &ArgMatches) -> Result<(GlobalOptions, Invocation), GrctlError> {
    let Some((name, sub)) = matches.subcommand() else {
        return Err(GrctlError::cli("No command given"));
    };

    // Global flags are propagated into the subcommand's matches.
    let options = GlobalOptions {
        config_dir: match sub.get_one::<PathBuf>("config_dir") {
            Some(dir) => dir.clone(),
            None => default_config_dir()?,
        },
        log_file: sub.get_one::<PathBuf>("log_file").cloned(),
        verbosity: sub.get_count("verbose"),
    };

    let invocation = match name {
        "create" => Invocation::Create(CreateContactRequest {
            name: string_arg(sub, "name"),
            day_of_cycle: sub.get_one::<i32>("day_of_cycle").copied(),
            ip_address: string_arg(sub, "ip_address"),
            custom_field_values: parse_custom_fields(strings_arg(sub, "field"))?,
            ..CreateContactRequest::new(required(sub, "email")?, required(sub, "campaign")?)
        }),
        "list" => Invocation::List(GetContactsRequest {
            query: parse_pairs(strings_arg(sub, "query"))?,
            sort: parse_pairs(strings_arg(sub, "sort"))?,
            fields: strings_arg(sub, "fields"),
            page: sub.get_one::<u32>("page").copied().unwrap_or(DEFAULT_PAGE),
            per_page: sub
                .get_one::<u32>("per_page")
                .copied()
                .unwrap_or(DEFAULT_PER_PAGE),
            additional_flags: string_arg(sub, "additional_flags"),
        }),
        "get" => Invocation::Get(GetContactRequest {
            id: required(sub, "id")?,
            fields: strings_arg(sub, "fields"),
        }),
        "update" => Invocation::Update(UpdateContactRequest {
            id: required(sub, "id")?,
            new_data: Contact {
                name: string_arg(sub, "name"),
                email: string_arg(sub, "email"),
                note: string_arg(sub, "note"),
                campaign: string_arg(sub, "campaign").map(CampaignReference::new),
                day_of_cycle: sub.get_one::<i32>("day_of_cycle").copied(),
                custom_field_values: parse_custom_fields(strings_arg(sub, "field"))?,
                ..Contact::default()
            },
        }),
        "custom-fields" => Invocation::CustomFields(UpdateContactCustomFieldsRequest {
            id: required(sub, "id")?,
            custom_field_values: parse_custom_fields(strings_arg(sub, "values"))?,
        }),
        "delete" => Invocation::Delete(DeleteContactRequest {
            id: required(sub, "id")?,
            message_id: string_arg(sub, "message_id").unwrap_or_default(),
            ip_address: string_arg(sub, "ip_address").unwrap_or_default(),
        }),
        other => return Err(GrctlError::cli(format!("Unknown command: {other}"))),
    };

    Ok((options, invocation))
}

/// Parse `key=value` arguments into a map. A repeated key keeps the last value.
#[track_caller]
pub fn parse_pairs<I, S>(values: I) -> Result<BTreeMap<String, String>, GrctlError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut pairs = BTreeMap::new();
    for raw in values {
        let (key, value) = split_pair(raw.as_ref())?;
        pairs.insert(key.to_string(), value.to_string());
    }
    Ok(pairs)
}

/// Parse `customFieldId=value` arguments, grouping repeated ids in first-seen order.
#[track_caller]
pub fn parse_custom_fields<I, S>(values: I) -> Result<Vec<CustomFieldValue>, GrctlError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut fields: Vec<CustomFieldValue> = Vec::new();
    for raw in values {
        let (id, value) = split_pair(raw.as_ref())?;
        match fields.iter_mut().find(|f| f.custom_field_id == id) {
            Some(existing) => existing.value.push(value.to_string()),
            None => fields.push(CustomFieldValue::new(id, [value])),
        }
    }
    Ok(fields)
}

#[track_caller]
fn split_pair(raw: &str) -> Result<(&str, &str), GrctlError> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
        _ => Err(GrctlError::cli(format!("Expected key=value, got '{raw}'"))),
    }
}

fn default_config_dir() -> Result<PathBuf, GrctlError> {
    match dirs::config_dir() {
        Some(dir) => Ok(dir.join(CONFIG_DIR_NAME)),
        None => Err(GrctlError::cli(
            "No user config directory on this platform; pass --config-dir",
        )),
    }
}

fn string_arg(matches: &ArgMatches, id: &str) -> Option<String> {
    matches.get_one::<String>(id).cloned()
}

fn strings_arg(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

#[track_caller]
fn required(matches: &ArgMatches, id: &str) -> Result<String, GrctlError> {
    match string_arg(matches, id) {
        Some(value) => Ok(value),
        None => Err(GrctlError::cli(format!("Missing argument: {id}"))),
    }
}
