use hyper::header::{HeaderValue, CONTENT_TYPE};

use crate::server::context::Context;
use crate::server::request::Request;
use crate::server::response::{self, ResponseResult};

pub fn get(req: Request, ctx: Context<'_>) -> ResponseResult {
    let name = req.uri().path().trim_start_matches("/static/");

    let Some(body) = ctx.global.statics.get(name) else {
        return response::not_found(req, ctx);
    };

    let content_type = match name.rsplit_once('.').map(|(_, ext)| ext) {
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    };

    let mut res = response::send(body.clone());
    res.headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    Ok(res)
}
