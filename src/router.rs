mod about;
mod compose;
mod contact;
mod healthcheck;
mod index;
mod posts;
mod serve_static;

use std::sync::Arc;

use hyper::{Method, StatusCode};
use tracing::{debug, error, warn};

use crate::server::context::{Context, GlobalContext};
use crate::server::request::Request;
use crate::server::response::{self, ResponseResult};
use crate::sqlite::get_conn;

pub const GET: &Method = &Method::GET;
pub const POST: &Method = &Method::POST;

pub async fn router(req: Request, g_ctx: Arc<GlobalContext<'_>>) -> ResponseResult {
    let method = req.method();
    let path = req.uri().path();

    debug!("Received {} request at {}", method, path);

    let db = get_conn(&g_ctx.config.database_path())?;
    let ctx = Context::new(&g_ctx, db);

    // Serve static files separately
    if path.starts_with("/static/") {
        return serve_static::get(req, ctx);
    }

    // Remove the query parameter for routing purposes
    let without_query = match path.split_once('?') {
        None => path,
        Some(x) => x.0,
    };

    // Split into subroutes
    let subroutes: Vec<&str> = without_query.split('/').collect();

    match (method, &subroutes[1..]) {
        (GET, [""]) => index::get(req, ctx),
        (GET, ["about"]) => about::get(req, ctx),
        (GET, ["contact"]) => contact::get(req, ctx),

        (GET, ["compose"]) => compose::get(req, ctx),
        (POST, ["compose"]) => compose::post(req, ctx).await,

        (GET, ["posts", _title]) => posts::get(req, ctx),

        (GET, ["healthcheck"]) => healthcheck::get(req, ctx),
        _ => response::not_found(req, ctx),
    }
}

pub async fn serve(req: Request, g_ctx: Arc<GlobalContext<'_>>) -> ResponseResult {
    let result = router(req, g_ctx).await;
    if let Err(error) = result {
        if error.status_code == StatusCode::INTERNAL_SERVER_ERROR {
            error!("{}", error);
            response::send_status(error.status_code)
        } else {
            warn!("{}", error);
            response::send_status_and_message(error)
        }
    } else {
        result
    }
}
