use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use super::generate::Settings;
use crate::sfdx;

/// Asks for every option that was not already set.
pub fn fill_missing(settings: &mut Settings) -> Result<()> {
    let mut input = std::io::stdin().lock();

    if settings.alias.is_none() {
        settings.alias = sfdx::default_username(&settings.sfdx_program, &settings.working_dir)
            .context("failed to look up the default username")?;
    }
    if settings.alias.is_none() {
        let answer = ask(&mut input, "Please enter the alias you want to use.")?;
        settings.alias = Some(answer).filter(|a| !a.is_empty());
    }

    if !settings.options.include_foldered_types {
        settings.options.include_foldered_types = confirm(
            &mut input,
            "Do you want to include Report, Dashboard, Document, Email Template? (It may take a long time)",
        )?;
    }

    if !settings.options.include_managed_package_components {
        settings.options.include_managed_package_components = confirm(
            &mut input,
            "Do you want to include the package? (It may take a long time)",
        )?;
    }

    Ok(())
}

fn ask(input: &mut impl BufRead, question: &str) -> Result<String> {
    eprint!("{question} ");
    std::io::stderr().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn confirm(input: &mut impl BufRead, question: &str) -> Result<bool> {
    let answer = ask(input, &format!("{question} [y/N]"))?;
    Ok(parse_confirm(&answer))
}

fn parse_confirm(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
