// Unit tests for argument parsing into typed requests

use crate::cli::{DEFAULT_PER_PAGE, Invocation, command, parse, parse_custom_fields, parse_pairs};
use crate::error::GrctlError;

use models::CustomFieldValue;

use std::path::PathBuf;

fn invoke(args: &[&str]) -> Invocation {
    let mut argv = vec!["grctl", "--config-dir", "/tmp/grctl-test"];
    argv.extend_from_slice(args);
    let matches = command().try_get_matches_from(argv).unwrap();
    parse(&matches).unwrap().1
}

/// **VALUE**: Verifies the clap tree is internally consistent.
///
/// **WHY THIS MATTERS**: clap only reports duplicate ids or bad defaults at runtime.
///
/// **BUG THIS CATCHES**: Would catch a misconfigured argument before a user hits it.
#[test]
fn given_command_tree_when_debug_asserted_then_consistent() {
    command().debug_assert();
}

/// **VALUE**: Verifies `list` builds filter and sort maps from `key=value` flags.
///
/// **WHY THIS MATTERS**: This is how users narrow a campaign's contacts.
///
/// **BUG THIS CATCHES**: Would catch repeated flags overwriting each other.
#[test]
fn given_list_flags_when_parsed_then_maps_fields_and_paging_set() {
    // GIVEN/WHEN: Two filters, a sort and a field list
    let invocation = invoke(&[
        "list",
        "--query",
        "campaignId=123",
        "--query",
        "name=John Doe",
        "--sort",
        "createdOn=desc",
        "--fields",
        "name,email",
        "--page",
        "3",
    ]);

    // THEN: Everything lands in the request
    let Invocation::List(request) = invocation else {
        panic!("expected list, got {invocation:?}");
    };
    assert_eq!(request.query["campaignId"], "123");
    assert_eq!(request.query["name"], "John Doe");
    assert_eq!(request.sort["createdOn"], "desc");
    assert_eq!(request.fields, ["name", "email"]);
    assert_eq!(request.page, 3);
    assert_eq!(request.per_page, DEFAULT_PER_PAGE);
}

/// **VALUE**: Verifies global flags work after the subcommand too.
///
/// **WHY THIS MATTERS**: `grctl get abc -vv` is the natural way to type it.
///
/// **BUG THIS CATCHES**: Would catch globals only read from the top level.
#[test]
fn given_global_flags_after_subcommand_when_parsed_then_options_set() {
    let matches = command()
        .try_get_matches_from([
            "grctl",
            "get",
            "abc",
            "-vv",
            "--config-dir",
            "/etc/grctl",
            "--log-file",
            "/tmp/grctl.log",
        ])
        .unwrap();

    let (options, invocation) = parse(&matches).unwrap();

    assert_eq!(options.verbosity, 2);
    assert_eq!(options.config_dir, PathBuf::from("/etc/grctl"));
    assert_eq!(options.log_file, Some(PathBuf::from("/tmp/grctl.log")));
    assert!(matches!(invocation, Invocation::Get(ref r) if r.id == "abc"));
}

/// **VALUE**: Verifies `update` only sets fields that were given.
///
/// **WHY THIS MATTERS**: The update body is sent as-is; unset fields must stay unset.
///
/// **BUG THIS CATCHES**: Would catch empty strings being sent for absent flags.
#[test]
fn given_update_with_name_only_when_parsed_then_other_fields_none() {
    let Invocation::Update(request) = invoke(&["update", "abc", "--name", "Renamed"]) else {
        panic!("expected update");
    };

    assert_eq!(request.id, "abc");
    assert_eq!(request.new_data.name.as_deref(), Some("Renamed"));
    assert!(request.new_data.email.is_none());
    assert!(request.new_data.campaign.is_none());
    assert!(request.new_data.custom_field_values.is_empty());
}

/// **VALUE**: Verifies repeated custom field ids become one multi-value entry.
///
/// **WHY THIS MATTERS**: Multi-select fields take several values under one id.
///
/// **BUG THIS CATCHES**: Would catch duplicate entries for the same field id.
#[test]
fn given_repeated_field_id_when_parsed_then_values_grouped_in_order() {
    let fields = parse_custom_fields(["color=red", "size=L", "color=blue"]).unwrap();

    assert_eq!(
        fields,
        vec![
            CustomFieldValue::new("color", ["red", "blue"]),
            CustomFieldValue::new("size", ["L"]),
        ]
    );
}

/// **VALUE**: Verifies values may contain `=` and may be empty.
///
/// **WHY THIS MATTERS**: URLs and base64 tokens contain `=`.
///
/// **BUG THIS CATCHES**: Would catch splitting on every `=`.
#[test]
fn given_value_with_equals_when_parsed_then_split_on_first_only() {
    let pairs = parse_pairs(["origin=https://a.b/?x=1", "note="]).unwrap();

    assert_eq!(pairs["origin"], "https://a.b/?x=1");
    assert_eq!(pairs["note"], "");
}

/// **VALUE**: Verifies malformed pairs are rejected with a CLI error.
///
/// **WHY THIS MATTERS**: A typo must not silently drop a filter.
///
/// **BUG THIS CATCHES**: Would catch `campaignId` (no `=`) being ignored.
#[test]
fn given_malformed_pair_when_parsed_then_cli_error() {
    for raw in ["campaignId", "=123"] {
        let err = parse_pairs([raw]).unwrap_err();
        assert!(matches!(err, GrctlError::Cli { .. }), "{raw}: {err:?}");
        assert!(err.to_string().contains(raw));
    }
}

/// **VALUE**: Verifies `delete` without optional flags sends empty values.
///
/// **WHY THIS MATTERS**: The remote accepts empty `messageId`/`ipAddress`.
///
/// **BUG THIS CATCHES**: Would catch a parse failure when the flags are omitted.
#[test]
fn given_delete_without_options_when_parsed_then_empty_strings() {
    let Invocation::Delete(request) = invoke(&["delete", "abc"]) else {
        panic!("expected delete");
    };

    assert_eq!(request.id, "abc");
    assert_eq!(request.message_id, "");
    assert_eq!(request.ip_address, "");
}

/// **VALUE**: Verifies `create` requires both email and campaign.
///
/// **WHY THIS MATTERS**: The remote rejects creates missing either.
///
/// **BUG THIS CATCHES**: Would catch `required(true)` being dropped.
#[test]
fn given_create_without_campaign_when_parsed_then_clap_error() {
    let result = command().try_get_matches_from(["grctl", "create", "--email", "a@b.c"]);

    assert!(result.is_err());
}
