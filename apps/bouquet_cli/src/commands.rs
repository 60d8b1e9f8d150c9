//! Line commands typed at the prompt, mapped onto session input events.

use anyhow::{anyhow, bail, Context, Result};
use shared::{
    domain::{GroupAttribute, GroupId},
    protocol::BouquetInput,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Input(BouquetInput),
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  start                      enter the flower selector
  add                        add another flower group
  remove <group>             remove a group
  qty <group> <quantity>     set a group's quantity
  set <group> <field> <val>  field is type, color or stem
  wrap <text>                choose the wrapping
  describe <text>            describe your vision
  proceed                    view the bouquet summary
  back                       return to the start page
  show                       list current groups
  help | quit";

const SET_USAGE: &str = "usage: set <group> <field> <value>";

/// Parses one prompt line; blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<CliCommand>> {
    let line = line.trim();
    let Some((verb, rest)) = split_word(line) else {
        return Ok(None);
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "start" => CliCommand::Input(BouquetInput::Start),
        "add" => CliCommand::Input(BouquetInput::GroupAdded),
        "remove" | "rm" => CliCommand::Input(BouquetInput::GroupRemoved {
            group_id: parse_group_id(rest)?,
        }),
        "qty" | "quantity" => {
            let (group, raw) =
                split_word(rest).ok_or_else(|| anyhow!("usage: qty <group> <quantity>"))?;
            CliCommand::Input(BouquetInput::QuantityChanged {
                group_id: parse_group_id(group)?,
                raw: raw.to_string(),
            })
        }
        "set" => {
            let (group, rest) = split_word(rest).ok_or_else(|| anyhow!(SET_USAGE))?;
            let (field, value) = split_word(rest).ok_or_else(|| anyhow!(SET_USAGE))?;
            CliCommand::Input(BouquetInput::AttributeChanged {
                group_id: parse_group_id(group)?,
                attribute: GroupAttribute::parse(field, value)?,
            })
        }
        "wrap" | "wrapping" => CliCommand::Input(BouquetInput::WrappingChanged {
            wrapping: rest.to_string(),
        }),
        "describe" | "description" => CliCommand::Input(BouquetInput::DescriptionChanged {
            description: rest.to_string(),
        }),
        "proceed" | "summary" | "view" => CliCommand::Input(BouquetInput::ProceedToSummary),
        "back" | "restart" => CliCommand::Input(BouquetInput::ReturnToStart),
        "show" | "ls" => CliCommand::Show,
        "help" | "?" => CliCommand::Help,
        "quit" | "exit" => CliCommand::Quit,
        other => bail!("unknown command `{other}` (try `help`)"),
    };
    Ok(Some(command))
}

fn split_word(text: &str) -> Option<(&str, &str)> {
    let text = text.trim_start();
    if text.is_empty() {
        return None;
    }
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => Some((word, rest.trim_start())),
        None => Some((text, "")),
    }
}

fn parse_group_id(raw: &str) -> Result<GroupId> {
    let raw = raw.trim();
    let number = raw.strip_prefix("group-").unwrap_or(raw);
    number
        .parse::<i64>()
        .map(GroupId)
        .with_context(|| format!("`{raw}` is not a group number"))
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
