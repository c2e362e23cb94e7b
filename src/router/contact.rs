use minijinja::context;

use crate::server::context::Context;
use crate::server::request::Request;
use crate::server::response::{self, ResponseResult};

const CONTACT_CONTENT: &str = "Scelerisque eleifend donec pretium vulputate sapien. Rhoncus urna neque viverra justo nec ultrices. Arcu dui vivamus arcu felis bibendum. Consectetur adipiscing elit duis tristique. Risus viverra adipiscing at in tellus integer feugiat. Sapien nec sagittis aliquam malesuada bibendum arcu vitae. Consequat interdum varius sit amet mattis. Iaculis nunc sed augue lacus. Interdum posuere lorem ipsum dolor sit amet consectetur adipiscing elit. Pulvinar elementum integer enim neque. Ultrices gravida dictum fusce ut placerat orci nulla. Mauris in aliquam sem fringilla ut morbi tincidunt. Tortor posuere ac ut consequat semper viverra nam libero.";

pub fn get(_req: Request, ctx: Context<'_>) -> ResponseResult {
    let body = ctx.render("contact.html", context! { contact_content => CONTACT_CONTENT })?;
    Ok(response::send(body))
}
