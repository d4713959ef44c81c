// SPDX-FileCopyrightText: 2026 GSI Helmholtzzentrum f. Schwerionenforschung GmbH, Darmstadt, Germany
// SPDX-License-Identifier: LGPL-3.0-or-later

use anyhow::{bail, Result};
use clap::Parser;

mod expand;
mod format;
mod slurm;

use expand::{expand_nodelist, expand_task_counts};

#[derive(Parser, Debug)]
#[command(name = "mkhostlist")]
#[command(about = "Convert Slurm's node list to various launcher formats. The node and task\nlists are read from the environment, the formatted list is printed on stdout.")]
#[command(version)]
struct Args {
    /// Output format to produce
    #[arg(short, long)]
    formatter: Option<String>,

    /// List all supported output formats and exit
    #[arg(short, long)]
    list_formatters: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list_formatters {
        println!("All supported formatters:");
        for name in format::names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let Some(name) = args.formatter else {
        bail!("no output format selected, pass --formatter (see --list-formatters)");
    };
    let Some(formatter) = format::lookup(&name) else {
        bail!(
            "unrecognised formatter '{}' (names are case sensitive), supported: {}",
            name,
            format::names().join(", ")
        );
    };

    let (nodelist, tasklist) = match (slurm::job_nodelist(), slurm::job_tasklist()) {
        (Some(nodelist), Some(tasklist)) => (nodelist, tasklist),
        _ => bail!(
            "unable to get the node or task list from Slurm, \
             are you running inside a multi-core HPC job?"
        ),
    };

    let nodes = expand_nodelist(&nodelist)?;
    let tasks = expand_task_counts(&tasklist)?;

    for line in formatter(&nodes, &tasks) {
        println!("{}", line);
    }

    Ok(())
}
