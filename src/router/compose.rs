use minijinja::context;
use serde::Deserialize;
use tracing::debug;

use crate::queries::{insert_post, NewPost};
use crate::sanitize::scrub;
use crate::server::context::Context;
use crate::server::request::Request;
use crate::server::response::{self, ResponseResult};

#[derive(Debug, Deserialize)]
struct ComposeForm {
    #[serde(rename = "postTitle")]
    post_title: String,
    #[serde(rename = "postBody")]
    post_body: String,
}

pub fn get(_req: Request, ctx: Context<'_>) -> ResponseResult {
    let body = ctx.render("compose.html", context! {})?;
    Ok(response::send(body))
}

pub async fn post(req: Request, ctx: Context<'_>) -> ResponseResult {
    let req = req.get_body().await?;
    let form: ComposeForm = req.get_form_data()?;

    let post = NewPost {
        title: scrub(&form.post_title),
        content: scrub(&form.post_body),
    };
    let post_id = insert_post(&ctx.db, &post)?;
    debug!("Created post {} titled {}", post_id, post.title);

    // The write is acknowledged before the client is sent home.
    response::redirect("/")
}
