// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub const OBJECT_BICYCLE_TYPE: &str = "bicycle_type";
pub const OBJECT_BICYCLE_TYPE_ALIAS: &str = "bt";
pub const OBJECT_CATEGORY: &str = "category";
pub const OBJECT_CATEGORY_ALIAS: &str = "c";

fn file_arg() -> Arg {
    Arg::new("file")
        .short('f')
        .long("file")
        .value_name("FILE")
        .help("data file")
}

fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('b')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("show more output")
}

fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .help("name")
}

fn id_arg() -> Arg {
    Arg::new("id")
        .short('i')
        .long("id")
        .value_name("ID")
        .value_parser(value_parser!(i64).range(0..))
        .help("ID of an object")
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("print as a JSON array")
}

fn object(name: &'static str, alias: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .visible_alias(alias)
        .about(about)
        .arg(verbose_arg())
        .arg(file_arg())
}

pub fn build_cli() -> Command {
    Command::new("biclog")
        .about("Keeps track of your bike rides")
        .version(clap::crate_version!())
        .subcommand(
            Command::new("init")
                .visible_alias("I")
                .about("Init a new data file specified by the user")
                .arg(verbose_arg())
                .arg(file_arg()),
        )
        .subcommand(
            Command::new("add")
                .visible_alias("A")
                .about("Add an object (bicycle type, trip category)")
                .subcommand(
                    object(
                        OBJECT_BICYCLE_TYPE,
                        OBJECT_BICYCLE_TYPE_ALIAS,
                        "Add new bicycle type",
                    )
                    .arg(name_arg()),
                )
                .subcommand(
                    object(OBJECT_CATEGORY, OBJECT_CATEGORY_ALIAS, "Add new trip category")
                        .arg(name_arg()),
                ),
        )
        .subcommand(
            Command::new("list")
                .visible_alias("L")
                .about("List objects (bicycle types, trip categories)")
                .subcommand(
                    object(
                        OBJECT_BICYCLE_TYPE,
                        OBJECT_BICYCLE_TYPE_ALIAS,
                        "List available bicycle types",
                    )
                    .arg(json_arg()),
                )
                .subcommand(
                    object(
                        OBJECT_CATEGORY,
                        OBJECT_CATEGORY_ALIAS,
                        "List available trip categories",
                    )
                    .arg(json_arg()),
                ),
        )
        .subcommand(
            Command::new("edit")
                .visible_alias("E")
                .about("Edit an object (bicycle type, trip category)")
                .subcommand(
                    object(
                        OBJECT_BICYCLE_TYPE,
                        OBJECT_BICYCLE_TYPE_ALIAS,
                        "Edit bicycle type with given id",
                    )
                    .arg(id_arg())
                    .arg(name_arg()),
                )
                .subcommand(
                    object(
                        OBJECT_CATEGORY,
                        OBJECT_CATEGORY_ALIAS,
                        "Edit trip category with given id",
                    )
                    .arg(id_arg())
                    .arg(name_arg()),
                ),
        )
        .subcommand(
            Command::new("delete")
                .visible_alias("D")
                .about("Delete an object (bicycle type, trip category)")
                .subcommand(
                    object(
                        OBJECT_BICYCLE_TYPE,
                        OBJECT_BICYCLE_TYPE_ALIAS,
                        "Delete bicycle type with given id",
                    )
                    .arg(id_arg()),
                )
                .subcommand(
                    object(
                        OBJECT_CATEGORY,
                        OBJECT_CATEGORY_ALIAS,
                        "Delete trip category with given id",
                    )
                    .arg(id_arg()),
                ),
        )
}
