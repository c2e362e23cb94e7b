use minijinja::context;
use tracing::{error, warn};

use crate::queries::find_post_by_title_prefix;
use crate::server::context::Context;
use crate::server::error;
use crate::server::request::Request;
use crate::server::response::{self, ResponseResult};

/// Posts are looked up by a case-insensitive starts-with match on the
/// path segment, so "Hello World" is reachable at /posts/hello.
pub fn get(req: Request, ctx: Context<'_>) -> ResponseResult {
    let title_param = req
        .uri()
        .path()
        .split('/')
        .nth(2)
        .ok_or(error::bad_request("Missing title"))?;
    let decoded = urlencoding::decode(title_param).unwrap_or_else(|_| title_param.into());
    let prefix = decoded.to_lowercase();

    match find_post_by_title_prefix(&ctx.db, &prefix) {
        Ok(Some(post)) => {
            let body = ctx.render("post.html", context! { post })?;
            Ok(response::send(body))
        }
        Ok(None) => {
            warn!("Post not found for {}", prefix);
            response::redirect("/")
        }
        Err(err) => {
            error!("Post lookup for {} failed: {}", prefix, err);
            response::redirect("/")
        }
    }
}
