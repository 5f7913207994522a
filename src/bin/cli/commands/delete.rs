use anyhow::Result;

use tango_lib::app::App;

use super::{prompt, resolve_notebook};

pub fn run(app: &mut App, notebook: &str, yes: bool) -> Result<()> {
    let id = resolve_notebook(app, notebook)?;
    let name = app
        .notebooks()
        .iter()
        .find(|n| n.id == id)
        .map(|n| n.name.clone())
        .unwrap_or_default();

    if !yes {
        let answer = prompt(&format!(
            "Delete notebook '{}' and all of its learning records? [y/N] ",
            name
        ))?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    app.delete_notebook(id)?;
    println!("Deleted '{}'.", name);
    Ok(())
}
