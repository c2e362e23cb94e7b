use minijinja::context;

use crate::server::context::Context;
use crate::server::request::Request;
use crate::server::response::{self, ResponseResult};

const ABOUT_CONTENT: &str = "Hac habitasse platea dictumst vestibulum rhoncus est pellentesque. Dictumst vestibulum rhoncus est pellentesque elit ullamcorper. Non diam phasellus vestibulum lorem sed. Platea dictumst quisque sagittis purus sit. Egestas sed sed risus pretium quam vulputate dignissim suspendisse. Mauris in aliquam sem fringilla. Semper risus in hendrerit gravida rutrum quisque non tellus orci. Amet massa vitae tortor condimentum lacinia quis vel eros. Enim ut tellus elementum sagittis vitae. Mauris ultrices eros in cursus turpis massa tincidunt dui.";

pub fn get(_req: Request, ctx: Context<'_>) -> ResponseResult {
    let body = ctx.render("about.html", context! { about_content => ABOUT_CONTENT })?;
    Ok(response::send(body))
}
