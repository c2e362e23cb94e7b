use minijinja::context;

use crate::queries::list_posts;
use crate::server::context::Context;
use crate::server::request::Request;
use crate::server::response::{self, ResponseResult};

const HOME_INTRO: &str = "Lacus vel facilisis volutpat est velit egestas dui id ornare. Semper auctor neque vitae tempus quam. Sit amet cursus sit amet dictum sit amet justo. Viverra tellus in hac habitasse. Imperdiet proin fermentum leo vel orci porta. Donec ultrices tincidunt arcu non sodales neque sodales ut. Mattis molestie a iaculis at erat pellentesque adipiscing. Magnis dis parturient montes nascetur ridiculus mus mauris vitae ultricies. Adipiscing elit ut aliquam purus sit amet luctus venenatis lectus. Ultrices vitae auctor eu augue ut lectus arcu bibendum at. Odio euismod lacinia at quis risus sed vulputate odio ut. Cursus mattis molestie a iaculis at erat pellentesque adipiscing.";

pub fn get(_req: Request, ctx: Context<'_>) -> ResponseResult {
    let posts = list_posts(&ctx.db)?;

    let body = ctx.render("home.html", context! { intro => HOME_INTRO, posts })?;
    Ok(response::send(body))
}
