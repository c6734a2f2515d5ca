// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

use crate::config::{BACKEND_ENV, DATA_DIR_ENV};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(clap::crate_version!())
        .about("Income/expense ledger with per-currency running totals")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .env(DATA_DIR_ENV)
                .help("Directory holding the ledger store"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .global(true)
                .env(BACKEND_ENV)
                .value_parser(["json", "sqlite"])
                .help("Storage backend [default: json]"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging on stderr"),
        )
        .subcommand(Command::new("init").about("Create the store and print its location"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand_required(true)
                .subcommand(
                    Command::new("add")
                        .about("Record an income or expense")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_parser(["income", "expense"])
                                .help("Transaction type [default: expense]"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .help("Category from the list for the chosen type"),
                        )
                        .arg(Arg::new("amount").long("amount").short('a').help("Positive amount"))
                        .arg(
                            Arg::new("currency")
                                .long("currency")
                                .help("TWD|JPY|USD|CNY [default: TWD]"),
                        )
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD [default: today]"))
                        .arg(Arg::new("description").long("description").short('d'))
                        .arg(
                            Arg::new("interactive")
                                .long("interactive")
                                .short('i')
                                .action(ArgAction::SetTrue)
                                .help("Prompt for fields not given as flags"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction after confirmation")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .short('y')
                                .action(ArgAction::SetTrue)
                                .help("Skip the confirmation prompt"),
                        ),
                ),
        )
        .subcommand(
            Command::new("summary")
                .about("Income, expense and net in TWD, plus per-currency balances")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Print pretty JSON"),
                ),
        )
        .subcommand(
            Command::new("categories")
                .about("Show the categories offered for each type")
                .arg(
                    Arg::new("type")
                        .long("type")
                        .short('t')
                        .value_parser(["income", "expense"]),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn global_flags_reach_subcommands() {
        let m = build_cli().get_matches_from(["tallybook", "tx", "list", "--data-dir", "/tmp/x"]);
        assert_eq!(
            m.get_one::<String>("data-dir").map(String::as_str),
            Some("/tmp/x")
        );
    }
}
