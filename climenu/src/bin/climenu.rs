/*
 *   Copyright (c) 2023-2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Demo of the menus. Run it with `cargo run -- --help` to see the options.

use clap::{Args, Parser, ValueEnum};
use climenu::{ButtonMenu, CheckboxMenu, Outcome, TracingConfig, prompt_text,
              try_initialize_logging_global};

#[derive(Debug, Parser)]
#[command(bin_name = "climenu")]
#[command(about = "🍽️ Try out the interactive menus")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/_derive/#overview>
pub struct CLIArg {
    #[arg(
        long,
        value_enum,
        default_value_t = DemoMenu::All,
        help = "Which menu to show"
    )]
    pub menu: DemoMenu,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_name = "path",
        default_value = "climenu_log.txt",
        help = "Log file to use with `--enable-logging`"
    )]
    pub log_file: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoMenu {
    #[clap(help = "Choose one action")]
    Button,
    #[clap(help = "Check some fruit")]
    Checkbox,
    #[clap(help = "Type some text")]
    Text,
    #[clap(help = "All of the above, one after another")]
    All,
}

fn main() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();

    let enable_logging = cli_arg.global_options.enable_logging;
    if enable_logging {
        try_initialize_logging_global(TracingConfig::new_file(
            cli_arg.global_options.log_file.as_str(),
        ))?;
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    }

    let result = run_demo(cli_arg.menu);

    if enable_logging {
        // % is Display, ? is Debug.
        tracing::debug!(message = "Stop logging...", result = ?result);
    }

    result
}

/// Runs the selected menus in order. A cancelled menu ends the demo quietly.
fn run_demo(which: DemoMenu) -> miette::Result<()> {
    let show = |it: DemoMenu| which == DemoMenu::All || which == it;

    if show(DemoMenu::Button) {
        let mut menu = ButtonMenu::new("Welcome", "Choose an action");
        menu.add_entry("Create entry", "create");
        menu.add_entry("Edit entry", "edit");

        let Outcome::Chosen(action) = menu.run()? else {
            return Ok(());
        };
        println!("action > {action}");
    }

    if show(DemoMenu::Checkbox) {
        let mut checkbox = CheckboxMenu::new("Let's try some checkboxes", "Select options");
        checkbox.add_entry("Apples", "apples");
        checkbox.add_entry("Oranges", "oranges");
        checkbox.add_entry("Bananas", "bananas");

        let Outcome::Chosen(selection) = checkbox.run()? else {
            return Ok(());
        };
        println!("selected > {:?}", selection.as_slice());
    }

    if show(DemoMenu::Text) {
        let response = prompt_text("Say something interesting", "hi")?;
        println!("text > {response:?}");
    }

    Ok(())
}
