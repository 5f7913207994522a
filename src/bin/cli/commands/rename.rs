use anyhow::Result;

use tango_lib::app::App;

use super::resolve_notebook;

pub fn run(app: &mut App, notebook: &str, name: &str) -> Result<()> {
    let id = resolve_notebook(app, notebook)?;
    app.rename_notebook(id, name)?;

    let renamed = app.notebooks().iter().find(|n| n.id == id);
    if let Some(nb) = renamed {
        println!("Renamed to '{}'.", nb.name);
    }
    Ok(())
}
