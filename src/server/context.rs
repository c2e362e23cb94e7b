use std::collections::HashMap;
use std::sync::Arc;

use minijinja::{context, Environment, Value};
use rusqlite::Connection;

use crate::config::Config;
use crate::server::error::ServerError;

const ENV: &str = if cfg!(debug_assertions) { "debug" } else { "prod" };

/// Immutable state shared by every request: the template environment,
/// the embedded static files, and the resolved configuration.
#[derive(Clone)]
pub struct GlobalContext<'a> {
    pub env: Arc<Environment<'a>>,
    pub statics: Arc<HashMap<String, Vec<u8>>>,
    pub config: Config,
}

impl<'a> GlobalContext<'a> {
    pub fn new(
        env: Arc<Environment<'a>>,
        statics: Arc<HashMap<String, Vec<u8>>>,
        config: Config,
    ) -> GlobalContext<'a> {
        GlobalContext { env, statics, config }
    }
}

/// Per-request state: the shared globals plus this request's own
/// database connection.
pub struct Context<'a> {
    pub global: Arc<GlobalContext<'a>>,
    pub db: Connection,
}

impl<'a> Context<'a> {
    pub fn new(global: &Arc<GlobalContext<'a>>, db: Connection) -> Context<'a> {
        Context { global: Arc::clone(global), db }
    }

    pub fn render(&self, path: &str, local_values: Value) -> Result<Vec<u8>, ServerError> {
        let tmpl = self.global.env.get_template(path)?;
        let global_values = context! { env => ENV };
        let merged = context! { ..local_values, ..global_values };
        Ok(tmpl.render(merged)?.into_bytes())
    }
}
