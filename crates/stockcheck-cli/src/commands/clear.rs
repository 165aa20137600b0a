//! The `stockcheck clear` command.

use std::io;

use anyhow::Result;

use super::{parse_yes_no, prompt_line, Settings};

pub fn execute(settings: &Settings, yes: bool) -> Result<()> {
    let store = &settings.store;
    if !store.exists() {
        println!("No diagnosis history to delete.");
        return Ok(());
    }

    eprintln!("Warning: this permanently deletes every saved diagnosis.");

    if !yes {
        let prompt = format!("Delete {}? [y/N]: ", store.path().display());
        let reply = prompt_line(&mut io::stdin().lock(), &mut io::stderr(), &prompt)?;
        let confirmed = reply.as_deref().and_then(parse_yes_no).unwrap_or(false);
        if !confirmed {
            println!("Aborted, nothing deleted.");
            return Ok(());
        }
    }

    if store.delete_all()? {
        println!("Deleted diagnosis history: {}", store.path().display());
    } else {
        println!("No diagnosis history to delete.");
    }

    Ok(())
}
