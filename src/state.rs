use anyhow::Context;
use sea_orm::DatabaseConnection;
use tera::Tera;

/// Shared application state, injected into each request through the router.
#[derive(Clone, Debug)]
pub struct AppState {
    pub templates: Tera,
    pub db: DatabaseConnection,
}

impl AppState {
    pub fn new(db: DatabaseConnection) -> anyhow::Result<AppState> {
        let templates = Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*"))
            .context("failed to load templates")?;
        Ok(AppState { templates, db })
    }
}
