use anyhow::Result;

use super::connect;
use crate::config::ResolveOptions;
use crate::menu::run_menu;

pub async fn run(options: &ResolveOptions) -> Result<()> {
    let (client, config) = connect(options)?;
    run_menu(&client, config.notes_dir).await
}
