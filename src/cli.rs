// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, crate_version};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Restrict to one calendar month")
}

pub fn build_cli() -> Command {
    Command::new("billfold")
        .version(crate_version!())
        .about("Cash and credit ledger with balances, liquidity, and spending reports")
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Create the data store and seed the registries"))
        .subcommand(
            Command::new("account")
                .about("Account registry")
                .subcommand(json_flags(Command::new("list").about("List accounts"))),
        )
        .subcommand(
            Command::new("category")
                .about("Category registry")
                .subcommand(json_flags(Command::new("list").about("List categories"))),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .value_parser(["income", "expense", "transfer"]),
                        )
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(Arg::new("from").long("from").value_name("ACCOUNT_ID"))
                        .arg(Arg::new("to").long("to").value_name("ACCOUNT_ID"))
                        .arg(Arg::new("category").long("category").value_name("CATEGORY_ID"))
                        .arg(
                            Arg::new("method")
                                .long("method")
                                .value_name("TAG")
                                .help("Payment method tag; resolves --from when omitted"),
                        )
                        .arg(Arg::new("note").long("note")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(month_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").long("id").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Balances and spending reports")
                .subcommand(json_flags(
                    Command::new("balances").about("Per-account balances and liquidity"),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-account")
                        .about("Expense totals per source account")
                        .arg(month_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category")
                        .about("Expense totals per category")
                        .arg(month_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("by-month").about("Expense totals for the last six months"),
                )),
        )
        .subcommand(
            Command::new("import").about("Import records").subcommand(
                Command::new("transactions")
                    .about("Append CSV records to the log")
                    .arg(Arg::new("path").long("path").required(true)),
            ),
        )
        .subcommand(
            Command::new("export").about("Export records").subcommand(
                Command::new("transactions")
                    .about("Write the log as CSV")
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Report dangling references"))
}
