use anyhow::Result;

use super::connect;
use crate::config::ResolveOptions;
use crate::session::InteractiveSession;

pub async fn run(options: &ResolveOptions) -> Result<()> {
    let (client, _) = connect(options)?;
    let mut session = InteractiveSession::new(&client);
    session.run().await
}
